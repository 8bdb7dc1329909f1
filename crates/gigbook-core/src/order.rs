//! # Order Validation & Pricing
//!
//! Checks a checkout submission and prices the basket.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Submit pressed                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_order(basket, contact)                                       │
//! │       ├── basket empty?            → EmptyBasket                        │
//! │       ├── blank field?             → MissingFields                      │
//! │       ├── bad characters?          → InvalidCharacters { field }        │
//! │       ├── card not 16 digits?      → InvalidCardLength                  │
//! │       └── OK (trimmed contact)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_order_total(basket, policy)                                   │
//! │       subtotal + (fee if quantity >= threshold) = total                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderSummary ──► shown to the user, basket reset                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::basket::Basket;
use crate::error::OrderRejection;
use crate::money::Money;
use crate::types::{ContactField, ContactInfo};
use crate::validation::{all_chars, is_card_char, is_email_char, is_name_char};
use crate::{CREDIT_CARD_LENGTH, DEFAULT_SURCHARGE_PENCE, DEFAULT_SURCHARGE_THRESHOLD};

// =============================================================================
// Validation
// =============================================================================

/// Validates a checkout submission.
///
/// The first failing rule wins; see [`OrderRejection`] for the order.
/// On success returns the contact with surrounding whitespace trimmed.
pub fn validate_order(basket: &Basket, contact: &ContactInfo) -> Result<ContactInfo, OrderRejection> {
    if basket.is_empty() {
        return Err(OrderRejection::EmptyBasket);
    }

    let contact = contact.trimmed();

    if contact.full_name.is_empty()
        || contact.email.is_empty()
        || contact.credit_card_number.is_empty()
    {
        return Err(OrderRejection::MissingFields);
    }

    let charset_checks: [(ContactField, &str, fn(char) -> bool); 3] = [
        (ContactField::FullName, contact.full_name.as_str(), is_name_char),
        (ContactField::Email, contact.email.as_str(), is_email_char),
        (ContactField::CreditCardNumber, contact.credit_card_number.as_str(), is_card_char),
    ];
    for (field, value, allowed) in charset_checks {
        if !all_chars(value, allowed) {
            return Err(OrderRejection::InvalidCharacters { field });
        }
    }

    // Card is ASCII digits by now, so byte length is the digit count.
    let card_length = contact.credit_card_number.len();
    if card_length != CREDIT_CARD_LENGTH {
        return Err(OrderRejection::InvalidCardLength {
            expected: CREDIT_CARD_LENGTH,
            actual: card_length,
        });
    }

    Ok(contact)
}

// =============================================================================
// Pricing
// =============================================================================

/// Fixed fee added once the ticket count reaches a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargePolicy {
    pub fee: Money,
    /// Minimum total quantity that triggers the fee.
    pub threshold: u32,
}

impl SurchargePolicy {
    pub fn surcharge_for(&self, total_quantity: u32) -> Money {
        if total_quantity >= self.threshold {
            self.fee
        } else {
            Money::zero()
        }
    }
}

/// £12.00 once four or more tickets are ordered.
impl Default for SurchargePolicy {
    fn default() -> Self {
        SurchargePolicy {
            fee: Money::from_pence(DEFAULT_SURCHARGE_PENCE),
            threshold: DEFAULT_SURCHARGE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderTotal {
    pub subtotal: Money,
    pub surcharge: Money,
    pub total: Money,
}

/// Prices the basket. No rounding happens here; amounts are exact pence.
///
/// ## Example
/// ```rust
/// use gigbook_core::{compute_order_total, Basket, SurchargePolicy};
///
/// let totals = compute_order_total(&Basket::new(), &SurchargePolicy::default());
/// assert!(totals.total.is_zero());
/// ```
pub fn compute_order_total(basket: &Basket, policy: &SurchargePolicy) -> OrderTotal {
    let subtotal = basket.total_price();
    let surcharge = policy.surcharge_for(basket.total_quantity());

    OrderTotal {
        subtotal,
        surcharge,
        total: subtotal + surcharge,
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Confirmation of an accepted order, shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    /// Confirmation reference (UUID v4).
    pub reference: String,
    pub contact: ContactInfo,
    pub ticket_count: u32,
    pub totals: OrderTotal,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl OrderSummary {
    /// Builds the summary for an already validated contact.
    pub fn new(contact: ContactInfo, basket: &Basket, policy: &SurchargePolicy) -> Self {
        OrderSummary {
            reference: Uuid::new_v4().to_string(),
            contact,
            ticket_count: basket.total_quantity(),
            totals: compute_order_total(basket, policy),
            placed_at: Utc::now(),
        }
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order requested by")?;
        writeln!(f, "  Full name: {}", self.contact.full_name)?;
        writeln!(f, "  Email: {}", self.contact.email)?;
        writeln!(f, "  Credit card number: {}", self.contact.credit_card_number)?;
        writeln!(f)?;
        writeln!(f, "Cost of order: {}", self.totals.subtotal)?;
        writeln!(f, "Additional charge: {}", self.totals.surcharge)?;
        write!(f, "Combined total: {}", self.totals.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::BasketManager;
    use crate::catalog::tests::test_catalog;

    const CARD: &str = "4111111111111111";

    fn basket_with(quantities: &[(&str, u32)]) -> Basket {
        let mut m = BasketManager::new(test_catalog());
        for (id, qty) in quantities {
            m.add(id);
            m.update_quantity(id, *qty).unwrap();
        }
        m.basket().clone()
    }

    fn valid_contact() -> ContactInfo {
        ContactInfo::new("Ada Lovelace", "ada@example.com", CARD)
    }

    #[test]
    fn test_empty_basket_rejected_first() {
        let basket = Basket::new();
        assert_eq!(
            validate_order(&basket, &valid_contact()),
            Err(OrderRejection::EmptyBasket)
        );
        assert_eq!(
            validate_order(&basket, &ContactInfo::default()),
            Err(OrderRejection::EmptyBasket)
        );
    }

    #[test]
    fn test_blank_fields_rejected() {
        let basket = basket_with(&[("t1", 1)]);
        let contact = ContactInfo::new("Ada", "   ", CARD);
        assert_eq!(
            validate_order(&basket, &contact),
            Err(OrderRejection::MissingFields)
        );
    }

    #[test]
    fn test_missing_fields_beats_invalid_characters() {
        let basket = basket_with(&[("t1", 1)]);
        let contact = ContactInfo::new("R2D2", "", "abc");
        assert_eq!(
            validate_order(&basket, &contact),
            Err(OrderRejection::MissingFields)
        );
    }

    #[test]
    fn test_invalid_characters_reports_first_field() {
        let basket = basket_with(&[("t1", 1)]);

        let contact = ContactInfo::new("Ada_L", "ada@example.com", CARD);
        assert_eq!(
            validate_order(&basket, &contact),
            Err(OrderRejection::InvalidCharacters {
                field: ContactField::FullName
            })
        );

        let contact = ContactInfo::new("Ada", "ada+gigs@example.com", "1234-5678");
        assert_eq!(
            validate_order(&basket, &contact),
            Err(OrderRejection::InvalidCharacters {
                field: ContactField::Email
            })
        );

        let contact = ContactInfo::new("Ada", "ada@example.com", "4111 1111 1111 1111");
        assert_eq!(
            validate_order(&basket, &contact),
            Err(OrderRejection::InvalidCharacters {
                field: ContactField::CreditCardNumber
            })
        );
    }

    #[test]
    fn test_card_length_must_be_sixteen() {
        let basket = basket_with(&[("t1", 1)]);

        for (card, actual) in [("411111111111111", 15), ("41111111111111111", 17)] {
            let contact = ContactInfo::new("Ada", "ada@example.com", card);
            assert_eq!(
                validate_order(&basket, &contact),
                Err(OrderRejection::InvalidCardLength {
                    expected: 16,
                    actual
                })
            );
        }
    }

    #[test]
    fn test_valid_order_returns_trimmed_contact() {
        let basket = basket_with(&[("t1", 1)]);
        let contact = ContactInfo::new(" Ada O'Brien-Smith ", " ada.ob@example.com ", " 4111111111111111 ");

        let validated = validate_order(&basket, &contact).unwrap();
        assert_eq!(validated.full_name, "Ada O'Brien-Smith");
        assert_eq!(validated.email, "ada.ob@example.com");
        assert_eq!(validated.credit_card_number, CARD);
    }

    #[test]
    fn test_no_surcharge_below_threshold() {
        let basket = basket_with(&[("t1", 2), ("t2", 1)]);
        let totals = compute_order_total(&basket, &SurchargePolicy::default());

        assert_eq!(totals.subtotal.pence(), 2550);
        assert!(totals.surcharge.is_zero());
        assert_eq!(totals.total.pence(), 2550);
    }

    #[test]
    fn test_surcharge_at_threshold() {
        let basket = basket_with(&[("t1", 2), ("t2", 2)]);
        let totals = compute_order_total(&basket, &SurchargePolicy::default());

        assert_eq!(totals.subtotal.pence(), 3100);
        assert_eq!(totals.surcharge.pence(), 1200);
        assert_eq!(totals.total.pence(), 4300);
    }

    #[test]
    fn test_custom_surcharge_policy() {
        let policy = SurchargePolicy {
            fee: Money::from_pence(250),
            threshold: 2,
        };
        let basket = basket_with(&[("t2", 2)]);
        assert_eq!(compute_order_total(&basket, &policy).total.pence(), 1350);
    }

    #[test]
    fn test_summary_display() {
        let basket = basket_with(&[("t1", 2), ("t2", 2)]);
        let summary = OrderSummary::new(valid_contact(), &basket, &SurchargePolicy::default());

        assert_eq!(summary.ticket_count, 4);
        assert!(Uuid::parse_str(&summary.reference).is_ok());

        let text = summary.to_string();
        assert!(text.contains("Full name: Ada Lovelace"));
        assert!(text.contains("Cost of order: £31.00"));
        assert!(text.contains("Additional charge: £12.00"));
        assert!(text.ends_with("Combined total: £43.00"));
    }
}
