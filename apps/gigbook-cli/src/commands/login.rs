//! # Login Commands
//!
//! The login form is independent of the booking session. A rejected login
//! means the form is not submitted; an accepted one is handed on unchanged.

use gigbook_core::{validate_login, Credentials};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub submitted: bool,
    pub username: String,
}

/// Validates the login form.
pub fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    debug!(username = %credentials.username, "login command");

    validate_login(credentials).map_err(|rejection| {
        warn!(username = %credentials.username, %rejection, "login submission blocked");
        ApiError::from(rejection)
    })?;

    Ok(LoginResponse {
        submitted: true,
        username: credentials.username.trim().to_string(),
    })
}
