//! # Shell Commands
//!
//! Every command the shell can run, one handler per user action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── basket.rs   ◄─── Catalog listing, basket manipulation
//! ├── order.rs    ◄─── Contact form and checkout
//! └── login.rs    ◄─── Login form validation
//! ```
//!
//! ## How Commands Work
//! Each handler borrows only what it needs (the session, or nothing for
//! login), logs the call at debug level and returns
//! `Result<Response, ApiError>`. The shell serializes either side to JSON.

pub mod basket;
pub mod login;
pub mod order;

use serde::Serialize;

use crate::session::BasketResponse;

/// A basket mutation result: what happened plus the basket afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketChange<O> {
    pub outcome: O,
    pub basket: BasketResponse,
}
