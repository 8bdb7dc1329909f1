//! # Error Types
//!
//! Domain-specific error types for gigbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gigbook-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog construction failures                  │
//! │  ├── ValidationError  - Field-level input validation failures          │
//! │  ├── BasketWarning    - Rejected quantity changes                      │
//! │  ├── OrderRejection   - Checkout form failures                         │
//! │  └── LoginRejection   - Login form failures                            │
//! │                                                                         │
//! │  gigbook-cli errors (app)                                              │
//! │  └── ApiError         - What the shell prints (serialized)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every rejection is an enum variant with a human-readable message
//! 3. Nothing in this crate panics on user input

use thiserror::Error;

use crate::types::ContactField;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog construction errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two offerings share the same identifier.
    #[error("Duplicate offering id in catalog: {0}")]
    DuplicateOffering(String),

    /// The catalog document is not a JSON array of offerings.
    #[error("Invalid catalog JSON: {0}")]
    InvalidCatalogJson(#[from] serde_json::Error),

    /// An offering failed field validation.
    #[error("Invalid offering {id}: {source}")]
    InvalidOffering {
        id: String,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., an unparseable amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Basket Warning
// =============================================================================

/// A quantity change the basket refused. The stored quantity is untouched.
///
/// ## User Workflow
/// ```text
/// Quantity input: 6
///      │
///      ▼
/// update_quantity("t1", 6)
///      │
///      ▼
/// BasketWarning::QuantityLimit { limit: 6 }
///      │
///      ▼
/// UI shows: "maximum quantity is 6", input reverts
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasketWarning {
    /// The user hit the quantity boundary.
    #[error("maximum quantity is {limit}")]
    QuantityLimit { limit: u32 },

    /// The requested quantity is past the boundary altogether.
    #[error("quantity {requested} is out of range, choose between {min} and {max}")]
    QuantityOutOfRange { requested: u32, min: u32, max: u32 },
}

// =============================================================================
// Order Rejection
// =============================================================================

/// Why a checkout submission was refused. Checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderRejection {
    #[error("basket is empty")]
    EmptyBasket,

    #[error("full name, email address and credit card number are required")]
    MissingFields,

    #[error("{field} contains invalid characters")]
    InvalidCharacters { field: ContactField },

    #[error("invalid credit card length: must be {expected} digits, got {actual}")]
    InvalidCardLength { expected: usize, actual: usize },
}

// =============================================================================
// Login Rejection
// =============================================================================

/// Why a login submission was refused. Checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginRejection {
    #[error("username or password is empty")]
    EmptyFields,

    #[error("username must be at most {max} characters")]
    UsernameTooLong { max: usize },

    #[error("username may only contain letters, full stops (.) and the at sign (@), no spaces")]
    InvalidUsernameCharacters,

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("password must contain both letters and digits")]
    PasswordNeedsLettersAndDigits,

    #[error("username or password contains illegal keywords")]
    IllegalKeywords,
}

// =============================================================================
// Result Type Alias
// =============================================================================

pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
