//! # Validation Module
//!
//! Character-class predicates and the keyword denylist shared by the order
//! and login validators, plus field checks for catalog offerings.
//!
//! ## No Regex Engine
//! Every rule here is a per-character predicate or a fixed-list substring
//! scan. Each accepted character set is visible in one `matches!`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field               Allowed characters                                 │
//! │  ─────────────────   ─────────────────────────────────────────────      │
//! │  full name           A-Z a-z space ' . -                                │
//! │  email               A-Z a-z 0-9 . @                                    │
//! │  credit card         0-9                                                │
//! │  username            A-Z a-z . @                                        │
//! │  password            anything not on the denylist                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::TicketOffering;
use crate::MAX_PRICE_PENCE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Character Classes
// =============================================================================

#[inline]
pub fn is_name_char(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | ' ' | '\'' | '.' | '-')
}

#[inline]
pub fn is_email_char(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '@')
}

#[inline]
pub fn is_card_char(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_username_char(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | '.' | '@')
}

/// Returns true if every char of `value` satisfies `allowed`.
///
/// ## Example
/// ```rust
/// use gigbook_core::validation::{all_chars, is_card_char};
///
/// assert!(all_chars("4111111111111111", is_card_char));
/// assert!(!all_chars("4111-1111", is_card_char));
/// ```
pub fn all_chars(value: &str, allowed: impl Fn(char) -> bool) -> bool {
    value.chars().all(allowed)
}

// =============================================================================
// Keyword Denylist
// =============================================================================

/// Substrings that may not appear anywhere in a username or password.
pub const FORBIDDEN_KEYWORDS: &[&str] = &[
    "<script>",
    "&lt;script&gt;",
    // Literal text: a bare "eval" (as in "evaluate") is allowed on purpose.
    "eval()",
    " ",
    "SELECT",
    "INSERT",
    "UPDATE",
    "DELETE",
    "MERGE",
    "DROP",
    "ALTER",
    "CREATE",
    "TRUNCATE",
];

/// Checks `value` against [`FORBIDDEN_KEYWORDS`].
///
/// The value is compared in both its lowercase and its uppercase form, so a
/// keyword matches whatever case the user typed it in. Lowercase keywords
/// (`<script>`) hit the lowercase form, uppercase keywords (`DROP`) hit the
/// uppercase form.
///
/// ## Example
/// ```rust
/// use gigbook_core::validation::contains_forbidden_keyword;
///
/// assert!(contains_forbidden_keyword("x'; dRoP table users"));
/// assert!(contains_forbidden_keyword("<SCRIPT>alert(1)"));
/// assert!(!contains_forbidden_keyword("hunter42"));
/// ```
pub fn contains_forbidden_keyword(value: &str) -> bool {
    let lowercase = value.to_lowercase();
    let uppercase = value.to_uppercase();

    FORBIDDEN_KEYWORDS
        .iter()
        .any(|keyword| lowercase.contains(keyword) || uppercase.contains(keyword))
}

// =============================================================================
// Offering Validators
// =============================================================================

/// Validates a catalog offering's fields.
///
/// ## Rules
/// - `id`, `artist` and `venue.location` must not be blank
/// - price must be between 0 and [`MAX_PRICE_PENCE`] (free events are allowed)
pub fn validate_offering(offering: &TicketOffering) -> ValidationResult<()> {
    require_non_blank("id", &offering.id)?;
    require_non_blank("artist", &offering.artist)?;
    require_non_blank("venue location", &offering.venue.location)?;
    validate_price_cents(offering.price_cents)
}

/// Validates a price in pence.
///
/// ```rust
/// use gigbook_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(2550).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// assert!(validate_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_price_cents(pence: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_PENCE).contains(&pence) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_PENCE,
        });
    }

    Ok(())
}

fn require_non_blank(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
