//! # gigbook-cli: Booking Shell
//!
//! Drives `gigbook-core` from a line-oriented shell: one command per line on
//! stdin, one JSON response per line on stdout, logs on stderr.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Read configuration from the environment
//! 3. Load and validate the catalog
//! 4. Create the booking session
//! 5. Serve commands until EOF or `quit`
//!
//! ## Module Layout
//! - [`config`] - `GIGBOOK_*` environment configuration, catalog loading
//! - [`session`] - `BookingSession`, the per-user basket and checkout form
//! - [`commands`] - one handler per user action
//! - [`shell`] - line parsing and dispatch
//! - [`error`] - `ApiError`, what the shell prints on failure

pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod shell;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::ApiError;
use session::BookingSession;

/// Runs the shell against stdin/stdout.
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let catalog = config.load_catalog()?;
    info!(
        offerings = catalog.len(),
        source = ?config.catalog_source,
        surcharge = %config.surcharge.fee,
        surcharge_threshold = config.surcharge.threshold,
        "catalog loaded"
    );

    let mut session = BookingSession::new(catalog, config.surcharge);

    let stdin = io::stdin();
    shell::run_shell(&mut session, stdin.lock(), io::stdout().lock())
        .map_err(|e| ApiError::internal(format!("I/O error: {}", e)))?;

    info!("session closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gigbook_cli=trace` - Show trace for this crate only
/// - Default: INFO, DEBUG for gigbook crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gigbook_cli=debug,gigbook_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
