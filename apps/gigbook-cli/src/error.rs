//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command Function -> Result<T, ApiError>                                │
//! │         │                                                               │
//! │         ├── BasketWarning  ──► QUANTITY_LIMIT                           │
//! │         ├── OrderRejection ──► VALIDATION_ERROR                         │
//! │         ├── LoginRejection ──► LOGIN_REJECTED                           │
//! │         ├── ConfigError    ──► CONFIG_ERROR                             │
//! │         └── bad command    ──► VALIDATION_ERROR                         │
//! │                                                                         │
//! │  Printed as: {"ok":false,"error":{"code":"...","message":"..."}}        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use gigbook_core::{BasketWarning, LoginRejection, OrderRejection};
use serde::Serialize;

use crate::config::ConfigError;

/// Error returned from a shell command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Quantity change refused
    QuantityLimit,

    /// Login credentials refused
    LoginRejected,

    /// Startup configuration problem
    ConfigError,

    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<BasketWarning> for ApiError {
    fn from(warning: BasketWarning) -> Self {
        ApiError::new(ErrorCode::QuantityLimit, warning.to_string())
    }
}

impl From<OrderRejection> for ApiError {
    fn from(rejection: OrderRejection) -> Self {
        ApiError::validation(rejection.to_string())
    }
}

impl From<LoginRejection> for ApiError {
    fn from(rejection: LoginRejection) -> Self {
        ApiError::new(ErrorCode::LoginRejected, rejection.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::from(BasketWarning::QuantityLimit { limit: 6 });
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "QUANTITY_LIMIT");
        assert_eq!(json["message"], "maximum quantity is 6");
    }

    #[test]
    fn test_rejection_codes() {
        assert_eq!(
            ApiError::from(OrderRejection::EmptyBasket).code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            ApiError::from(LoginRejection::EmptyFields).code,
            ErrorCode::LoginRejected
        );
        assert_eq!(
            ApiError::validation("bad").to_string(),
            "[ValidationError] bad"
        );
    }
}
