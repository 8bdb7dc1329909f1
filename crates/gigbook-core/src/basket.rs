//! # Basket
//!
//! The user's in-progress ticket selection and the controller that owns it.
//!
//! ## Basket Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Operations                                    │
//! │                                                                         │
//! │  User Action           BasketManager            Basket Change           │
//! │  ───────────           ─────────────            ─────────────           │
//! │                                                                         │
//! │  Click "Book" ───────► add(id) ───────────────► push(entry, qty=1)      │
//! │                                                  (no-op if present)     │
//! │                                                                         │
//! │  Change quantity ────► update_quantity(id, n)                           │
//! │                          n = 0    ────────────► remove(id)              │
//! │                          n = 1..5 ────────────► entry.quantity = n      │
//! │                          n = 6    ────────────► unchanged + warning     │
//! │                                                                         │
//! │  Click "Remove" ─────► remove(id) ────────────► basket = without(id)    │
//! │                                                                         │
//! │  Order placed ───────► reset() ───────────────► empty                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Entries are unique by offering id
//! - Every stored quantity is within `1..=5`

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::BasketWarning;
use crate::money::Money;
use crate::types::BasketEntry;
use crate::{MAX_ITEM_QUANTITY, MIN_ITEM_QUANTITY, QUANTITY_LIMIT};

// =============================================================================
// Basket
// =============================================================================

/// Ordered basket entries, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Basket {
    entries: Vec<BasketEntry>,
}

impl Basket {
    pub fn new() -> Self {
        Basket::default()
    }

    pub fn entries(&self) -> &[BasketEntry] {
        &self.entries
    }

    pub fn get(&self, offering_id: &str) -> Option<&BasketEntry> {
        self.entries.iter().find(|e| e.offering_id() == offering_id)
    }

    pub fn contains(&self, offering_id: &str) -> bool {
        self.get(offering_id).is_some()
    }

    /// Returns a fresh basket holding every entry except `offering_id`.
    ///
    /// The receiver is left untouched, so earlier snapshots stay valid.
    pub fn without(&self, offering_id: &str) -> Basket {
        Basket {
            entries: self
                .entries
                .iter()
                .filter(|e| e.offering_id() != offering_id)
                .cloned()
                .collect(),
        }
    }

    /// Number of distinct offerings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all ticket quantities.
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Sum of unit price × quantity over all entries, in exact pence.
    pub fn total_price(&self) -> Money {
        self.entries.iter().map(BasketEntry::line_total).sum()
    }

    fn get_mut(&mut self, offering_id: &str) -> Option<&mut BasketEntry> {
        self.entries.iter_mut().find(|e| e.offering_id() == offering_id)
    }
}

// =============================================================================
// Operation Outcomes
// =============================================================================

/// What `BasketManager::add` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    /// Already in the basket, nothing changed.
    AlreadyInBasket,
    /// Not in the catalog, nothing changed.
    UnknownOffering,
}

/// What an accepted `BasketManager::update_quantity` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUpdate {
    Updated,
    Removed,
    /// No entry with that id, nothing changed.
    NotInBasket,
}

// =============================================================================
// Basket Manager
// =============================================================================

/// Session-scoped controller owning the catalog and the basket.
///
/// ## Example
/// ```rust
/// use gigbook_core::{AddOutcome, BasketManager, Catalog};
///
/// let catalog = Catalog::from_json(r#"[{
///     "id": "t1", "artist": "Idles",
///     "venue": { "location": "Bristol", "capacity": 1600 },
///     "concert_date": "2026-11-14", "price_cents": 1000
/// }]"#).unwrap();
///
/// let mut manager = BasketManager::new(catalog);
/// assert_eq!(manager.add("t1"), AddOutcome::Added);
/// assert_eq!(manager.add("t1"), AddOutcome::AlreadyInBasket);
///
/// manager.update_quantity("t1", 3).unwrap();
/// assert_eq!(manager.total_price().to_string(), "£30.00");
///
/// assert!(manager.update_quantity("t1", 6).is_err());
/// assert_eq!(manager.total_quantity(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BasketManager {
    catalog: Catalog,
    basket: Basket,
}

impl BasketManager {
    /// Starts a session with an empty basket.
    pub fn new(catalog: Catalog) -> Self {
        BasketManager {
            catalog,
            basket: Basket::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current basket snapshot.
    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// Adds one ticket for `offering_id` unless it is unknown or already
    /// present.
    pub fn add(&mut self, offering_id: &str) -> AddOutcome {
        if self.basket.contains(offering_id) {
            return AddOutcome::AlreadyInBasket;
        }

        match self.catalog.get(offering_id) {
            Some(offering) => {
                self.basket.entries.push(BasketEntry::new(offering.clone()));
                AddOutcome::Added
            }
            None => AddOutcome::UnknownOffering,
        }
    }

    /// Sets the quantity for `offering_id`.
    ///
    /// ## Behavior
    /// - `0`: removes the entry
    /// - `1..=5`: overwrites the quantity
    /// - `6`: rejected with `BasketWarning::QuantityLimit`
    /// - above 6: rejected with `BasketWarning::QuantityOutOfRange`
    ///
    /// A rejected change leaves the stored quantity as it was.
    pub fn update_quantity(
        &mut self,
        offering_id: &str,
        new_quantity: u32,
    ) -> Result<QuantityUpdate, BasketWarning> {
        if new_quantity == 0 {
            return Ok(if self.remove(offering_id) {
                QuantityUpdate::Removed
            } else {
                QuantityUpdate::NotInBasket
            });
        }

        if new_quantity == QUANTITY_LIMIT {
            return Err(BasketWarning::QuantityLimit {
                limit: QUANTITY_LIMIT,
            });
        }

        if new_quantity > MAX_ITEM_QUANTITY {
            return Err(BasketWarning::QuantityOutOfRange {
                requested: new_quantity,
                min: MIN_ITEM_QUANTITY,
                max: MAX_ITEM_QUANTITY,
            });
        }

        match self.basket.get_mut(offering_id) {
            Some(entry) => {
                entry.quantity = new_quantity;
                Ok(QuantityUpdate::Updated)
            }
            None => Ok(QuantityUpdate::NotInBasket),
        }
    }

    /// Replaces the basket with one that excludes `offering_id`.
    ///
    /// Returns whether an entry was dropped.
    pub fn remove(&mut self, offering_id: &str) -> bool {
        if !self.basket.contains(offering_id) {
            return false;
        }

        self.basket = self.basket.without(offering_id);
        true
    }

    pub fn total_quantity(&self) -> u32 {
        self.basket.total_quantity()
    }

    pub fn total_price(&self) -> Money {
        self.basket.total_price()
    }

    /// Empties the basket.
    pub fn reset(&mut self) {
        self.basket = Basket::new();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
