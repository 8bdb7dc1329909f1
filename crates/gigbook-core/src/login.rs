//! # Login Validation
//!
//! Format and denylist checks for the login form. Nothing here looks up an
//! account; a credential pair that passes is merely well-formed.
//!
//! ## Rule Order
//! ```text
//! trim both fields
//!   1. either empty                     → EmptyFields
//!   2. username > 25 chars              → UsernameTooLong
//!   3. username outside [A-Za-z.@]      → InvalidUsernameCharacters
//!   4. password < 8 chars               → PasswordTooShort
//!   5. password lacks letter or digit   → PasswordNeedsLettersAndDigits
//!   6. denylist hit in either field     → IllegalKeywords
//! ```
//!
//! Passwords have no charset of their own. A space inside a password is
//! refused only because `" "` is on the denylist.

use crate::error::LoginRejection;
use crate::types::Credentials;
use crate::validation::{all_chars, contains_forbidden_keyword, is_username_char};
use crate::{MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH};

/// Validates a username/password pair.
///
/// ## Example
/// ```rust
/// use gigbook_core::{validate_login, Credentials, LoginRejection};
///
/// assert!(validate_login(&Credentials::new("ada@home", "abcdefg1")).is_ok());
/// assert_eq!(
///     validate_login(&Credentials::new("ada@home", "abcdef1")),
///     Err(LoginRejection::PasswordTooShort { min: 8 })
/// );
/// ```
pub fn validate_login(credentials: &Credentials) -> Result<(), LoginRejection> {
    let username = credentials.username.trim();
    let password = credentials.password.trim();

    if username.is_empty() || password.is_empty() {
        return Err(LoginRejection::EmptyFields);
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(LoginRejection::UsernameTooLong {
            max: MAX_USERNAME_LENGTH,
        });
    }

    if !all_chars(username, is_username_char) {
        return Err(LoginRejection::InvalidUsernameCharacters);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(LoginRejection::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(LoginRejection::PasswordNeedsLettersAndDigits);
    }

    if contains_forbidden_keyword(username) || contains_forbidden_keyword(password) {
        return Err(LoginRejection::IllegalKeywords);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn check(username: &str, password: &str) -> Result<(), LoginRejection> {
        validate_login(&Credentials::new(username, password))
    }

    #[test]
    fn test_valid_login() {
        assert_eq!(check("ada.lovelace@home", "abcdefg12"), Ok(()));
        assert_eq!(check("  ada  ", "  abcdefg12  "), Ok(()));
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(check("", "abcdefg12"), Err(LoginRejection::EmptyFields));
        assert_eq!(check("ada", "   "), Err(LoginRejection::EmptyFields));
    }

    #[test]
    fn test_username_length() {
        assert_eq!(check(&"a".repeat(25), "abcdefg12"), Ok(()));
        assert_eq!(
            check(&"a".repeat(26), "abcdefg12"),
            Err(LoginRejection::UsernameTooLong { max: 25 })
        );
    }

    #[test]
    fn test_username_charset() {
        for username in ["ada1", "ada lovelace", "ada_l", "ada-l"] {
            assert_eq!(
                check(username, "abcdefg12"),
                Err(LoginRejection::InvalidUsernameCharacters),
                "{username}"
            );
        }
    }

    #[test]
    fn test_password_length() {
        assert_eq!(
            check("ada", "abcdef1"),
            Err(LoginRejection::PasswordTooShort { min: 8 })
        );
        assert_eq!(check("ada", "abcdefg12"), Ok(()));
    }

    #[test]
    fn test_password_of_exactly_min_length_accepted() {
        assert_eq!(check("ada", "abcdefg1"), Ok(()));
        // Surrounding whitespace is trimmed before counting.
        assert_eq!(
            check("ada", " abcdef1 "),
            Err(LoginRejection::PasswordTooShort { min: 8 })
        );
    }

    #[test]
    fn test_password_mix() {
        assert_eq!(
            check("ada", "abcdefghij"),
            Err(LoginRejection::PasswordNeedsLettersAndDigits)
        );
        assert_eq!(
            check("ada", "1234567890"),
            Err(LoginRejection::PasswordNeedsLettersAndDigits)
        );
    }

    #[test]
    fn test_drop_table_any_case() {
        for password in ["xDROP TABLE1", "xdrop table1", "xDrOp TaBlE1"] {
            assert_eq!(
                check("ada", password),
                Err(LoginRejection::IllegalKeywords),
                "{password}"
            );
        }
        // Keyword without a space in a charset-valid username.
        assert_eq!(check("dropTable", "abcdefg12"), Err(LoginRejection::IllegalKeywords));
    }

    #[test]
    fn test_space_in_password_hits_denylist() {
        assert_eq!(check("ada", "abcd efg12"), Err(LoginRejection::IllegalKeywords));
    }

    #[test]
    fn test_space_in_username_hits_charset_first() {
        assert_eq!(
            check("ada l", "abcdefg12"),
            Err(LoginRejection::InvalidUsernameCharacters)
        );
    }

    #[test]
    fn test_script_and_eval_in_password() {
        assert_eq!(check("ada", "<script>1a"), Err(LoginRejection::IllegalKeywords));
        assert_eq!(check("ada", "eval()abc1"), Err(LoginRejection::IllegalKeywords));
        assert_eq!(check("ada", "Select123"), Err(LoginRejection::IllegalKeywords));
    }
}
