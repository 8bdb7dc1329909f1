//! # Money Module
//!
//! Provides the `Money` type for ticket prices and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │    £5.55 × 3 rendered to 2dp can drift by a penny                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    555 pence × 3 = 1665 pence = £16.65, always                         │
//! │    Rounding to 2dp only ever happens in Display                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gigbook_core::money::Money;
//!
//! let price = Money::from_pence(1099); // £10.99
//!
//! let doubled = price * 2;
//! let total = price + Money::from_pence(500);
//!
//! assert_eq!(doubled.to_string(), "£21.98");
//! assert_eq!(total.to_string(), "£15.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in pence (the smallest unit of GBP).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic never needs a sign check, prices are
///   validated non-negative at the catalog boundary
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// TicketOffering.price_cents ──► BasketEntry.line_total ──► Basket.total_price
///                                                                │
///                              SurchargePolicy.fee ──────────────┤
///                                                                ▼
///                                                         OrderTotal.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use gigbook_core::money::Money;
    ///
    /// let price = Money::from_pence(2550); // £25.50
    /// assert_eq!(price.pence(), 2550);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Creates a Money value from pounds and pence.
    #[inline]
    pub const fn from_pounds_pence(pounds: i64, pence: i64) -> Self {
        if pounds < 0 {
            Money(pounds * 100 - pence)
        } else {
            Money(pounds * 100 + pence)
        }
    }

    /// Parses a decimal amount such as `"12"`, `"12.5"` or `"12.50"`.
    ///
    /// At most two fractional digits are accepted and no sign is allowed.
    /// No floating point is involved at any step.
    ///
    /// ## Example
    /// ```rust
    /// use gigbook_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("12.5").unwrap().pence(), 1250);
    /// assert!(Money::parse_decimal("12.505").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Money, ValidationError> {
        let input = input.trim();
        let invalid = || ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("'{}' is not a decimal amount like 12.50", input),
        };

        let (whole, fraction) = match input.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some((whole, fraction)) => (whole, fraction),
            None => (input, ""),
        };

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || fraction.len() > 2 || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let pounds: i64 = whole.parse().map_err(|_| invalid())?;
        let pence: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        pounds
            .checked_mul(100)
            .and_then(|p| p.checked_add(pence))
            .map(Money)
            .ok_or_else(invalid)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole pounds portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a ticket quantity.
    ///
    /// ## Example
    /// ```rust
    /// use gigbook_core::money::Money;
    ///
    /// let unit_price = Money::from_pence(555);
    /// assert_eq!(unit_price.multiply_quantity(3).pence(), 1665);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as pounds with exactly two decimal places, e.g. `£25.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
