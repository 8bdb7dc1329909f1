//! # Domain Types
//!
//! Core domain types used throughout Gigbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ TicketOffering  │   │  BasketEntry    │   │  ContactInfo    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  offering       │   │  full_name      │       │
//! │  │  artist         │   │  quantity 1..=5 │   │  email          │       │
//! │  │  venue          │   └─────────────────┘   │  card number    │       │
//! │  │  concert_date   │                         └─────────────────┘       │
//! │  │  price_cents    │   ┌─────────────────┐                             │
//! │  └─────────────────┘   │  Credentials    │                             │
//! │                        │  username       │                             │
//! │                        │  password       │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ContactInfo` and `Credentials` are transient: they are validated and
//! echoed back, never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Venue
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Venue {
    /// Where the concert takes place, e.g. "Manchester Arena".
    pub location: String,

    /// Number of people the venue holds (display only).
    pub capacity: u32,
}

// =============================================================================
// Ticket Offering
// =============================================================================

/// A bookable ticket product. Sourced from the catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TicketOffering {
    /// Unique identifier within the catalog.
    pub id: String,

    pub artist: String,

    pub venue: Venue,

    /// Concert date, `YYYY-MM-DD` on the wire.
    #[ts(as = "String")]
    pub concert_date: NaiveDate,

    /// Price of a single ticket in pence.
    pub price_cents: i64,
}

impl TicketOffering {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_pence(self.price_cents)
    }
}

// =============================================================================
// Basket Entry
// =============================================================================

/// One line of the basket.
///
/// Holds a snapshot of the offering so the basket can be rendered without
/// going back to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BasketEntry {
    pub offering: TicketOffering,

    /// Always within `MIN_ITEM_QUANTITY..=MAX_ITEM_QUANTITY` while stored.
    pub quantity: u32,
}

impl BasketEntry {
    pub(crate) fn new(offering: TicketOffering) -> Self {
        BasketEntry {
            offering,
            quantity: crate::MIN_ITEM_QUANTITY,
        }
    }

    #[inline]
    pub fn offering_id(&self) -> &str {
        &self.offering.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.offering.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Contact Info
// =============================================================================

/// Buyer details from the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    /// Format-validated only, never transmitted anywhere.
    pub credit_card_number: String,
}

impl ContactInfo {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        credit_card_number: impl Into<String>,
    ) -> Self {
        ContactInfo {
            full_name: full_name.into(),
            email: email.into(),
            credit_card_number: credit_card_number.into(),
        }
    }

    /// Returns a copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        ContactInfo::new(
            self.full_name.trim(),
            self.email.trim(),
            self.credit_card_number.trim(),
        )
    }

    pub fn is_blank(&self) -> bool {
        self.full_name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.credit_card_number.trim().is_empty()
    }
}

/// Names a checkout form field in rejection messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FullName,
    Email,
    CreditCardNumber,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContactField::FullName => "full name",
            ContactField::Email => "email address",
            ContactField::CreditCardNumber => "credit card number",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Credentials
// =============================================================================

/// Username/password pair from the login form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(price_cents: i64) -> TicketOffering {
        TicketOffering {
            id: "t1".to_string(),
            artist: "The Beths".to_string(),
            venue: Venue {
                location: "Leeds Brudenell".to_string(),
                capacity: 400,
            },
            concert_date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            price_cents,
        }
    }

    #[test]
    fn test_offering_json_shape() {
        let json = serde_json::to_value(offering(2550)).unwrap();
        assert_eq!(json["concert_date"], "2026-11-02");
        assert_eq!(json["venue"]["capacity"], 400);
        assert_eq!(json["price_cents"], 2550);
    }

    #[test]
    fn test_entry_line_total() {
        let mut entry = BasketEntry::new(offering(1000));
        assert_eq!(entry.quantity, 1);
        entry.quantity = 3;
        assert_eq!(entry.line_total().pence(), 3000);
    }

    #[test]
    fn test_contact_trimmed() {
        let contact = ContactInfo::new("  Ada Lovelace ", "ada@example.com\n", " 1234 ");
        let trimmed = contact.trimmed();
        assert_eq!(trimmed.full_name, "Ada Lovelace");
        assert_eq!(trimmed.email, "ada@example.com");
        assert_eq!(trimmed.credit_card_number, "1234");
        assert!(ContactInfo::new(" ", "", "\t").is_blank());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("ada", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("ada"));
        assert!(!debug.contains("secret123"));
    }
}
