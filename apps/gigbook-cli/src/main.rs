//! # Gigbook Shell Entry Point
//!
//! ```text
//! $ GIGBOOK_SURCHARGE=12.00 gigbook
//! catalog
//! add idles-bristol
//! qty idles-bristol 2
//! contact Ada Lovelace|ada@example.com|4111111111111111
//! checkout
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match gigbook_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gigbook: {}", err);
            ExitCode::FAILURE
        }
    }
}
