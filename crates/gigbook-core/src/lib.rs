//! # gigbook-core: Pure Business Logic for Gigbook
//!
//! Catalog, basket, checkout and login rules for the concert ticket booking
//! widget, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gigbook Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Presentation (booking page, login page, shell)        │   │
//! │  │    Catalog table ──► Basket table ──► Checkout form ──► Alert   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ gigbook-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐           │   │
//! │  │   │ catalog │  │ basket  │  │  order  │  │  login  │           │   │
//! │  │   │ lookup  │  │ manager │  │ checks  │  │ checks  │           │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └─────────┘           │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TicketOffering, BasketEntry, ContactInfo, ...)
//! - [`money`] - Money type with integer pence (no floating point!)
//! - [`catalog`] - Read-only offering lookup
//! - [`basket`] - Basket value and its session controller
//! - [`order`] - Checkout validation, surcharge and totals
//! - [`login`] - Login form validation
//! - [`validation`] - Character classes and the keyword denylist
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use gigbook_core::{
//!     compute_order_total, validate_order, BasketManager, Catalog, ContactInfo, SurchargePolicy,
//! };
//!
//! let catalog = Catalog::from_json(r#"[
//!   { "id": "t1", "artist": "Idles", "venue": { "location": "Bristol", "capacity": 1600 },
//!     "concert_date": "2026-11-14", "price_cents": 1000 },
//!   { "id": "t2", "artist": "Wet Leg", "venue": { "location": "Leeds", "capacity": 900 },
//!     "concert_date": "2026-12-01", "price_cents": 550 }
//! ]"#).unwrap();
//!
//! let mut session = BasketManager::new(catalog);
//! session.add("t1");
//! session.add("t2");
//! session.update_quantity("t1", 3).unwrap();
//!
//! let contact = ContactInfo::new("Ada Lovelace", "ada@example.com", "4111111111111111");
//! assert!(validate_order(session.basket(), &contact).is_ok());
//!
//! // 4 tickets: £35.50 + £12.00 surcharge
//! let totals = compute_order_total(session.basket(), &SurchargePolicy::default());
//! assert_eq!(totals.total.to_string(), "£47.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalog;
pub mod error;
pub mod login;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{AddOutcome, Basket, BasketManager, QuantityUpdate};
pub use catalog::Catalog;
pub use error::{BasketWarning, CoreError, LoginRejection, OrderRejection, ValidationError};
pub use login::validate_login;
pub use money::Money;
pub use order::{compute_order_total, validate_order, OrderSummary, OrderTotal, SurchargePolicy};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity a basket entry can hold.
pub const MIN_ITEM_QUANTITY: u32 = 1;

/// Largest quantity a basket entry can hold.
pub const MAX_ITEM_QUANTITY: u32 = 5;

/// The quantity the UI lets a user reach before warning.
///
/// Choosing it is refused with "maximum quantity is 6" rather than being
/// clamped, so the stored quantity never reaches it.
pub const QUANTITY_LIMIT: u32 = 6;

/// Highest ticket price or booking fee accepted, in pence (£1,000,000).
///
/// Keeps every basket total far inside `i64`, whatever the catalog says.
pub const MAX_PRICE_PENCE: i64 = 100_000_000;

/// Booking fee in pence added to large orders.
pub const DEFAULT_SURCHARGE_PENCE: i64 = 1200;

/// Total ticket count at which the booking fee applies.
pub const DEFAULT_SURCHARGE_THRESHOLD: u32 = 4;

/// Exact number of digits in a card number.
pub const CREDIT_CARD_LENGTH: usize = 16;

pub const MAX_USERNAME_LENGTH: usize = 25;

pub const MIN_PASSWORD_LENGTH: usize = 8;
