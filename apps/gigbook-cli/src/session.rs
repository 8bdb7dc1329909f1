//! # Booking Session
//!
//! Owns everything one user touches: the basket (through `BasketManager`)
//! and the half-filled checkout form.
//!
//! ## Ownership
//! The shell handles one command at a time and owns the session by value,
//! so there is no `Arc<Mutex<_>>` here. Commands borrow it mutably for the
//! duration of a single call.
//!
//! ## Submission
//! ```text
//! submit_order()
//!   ├── validate_order(basket, contact) ── Err ──► basket and form untouched
//!   └── Ok(trimmed contact)
//!         ├── OrderSummary::new(..)
//!         ├── basket.reset()
//!         └── contact cleared
//! ```

use gigbook_core::{
    compute_order_total, validate_order, BasketEntry, BasketManager, Catalog, ContactInfo, Money,
    OrderRejection, OrderSummary, OrderTotal, SurchargePolicy,
};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct BookingSession {
    manager: BasketManager,
    contact: ContactInfo,
    surcharge: SurchargePolicy,
}

impl BookingSession {
    pub fn new(catalog: Catalog, surcharge: SurchargePolicy) -> Self {
        BookingSession {
            manager: BasketManager::new(catalog),
            contact: ContactInfo::default(),
            surcharge,
        }
    }

    pub fn basket(&self) -> &BasketManager {
        &self.manager
    }

    pub fn basket_mut(&mut self) -> &mut BasketManager {
        &mut self.manager
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = contact;
    }

    pub fn surcharge(&self) -> &SurchargePolicy {
        &self.surcharge
    }

    /// Validates the current form and basket and, on success, places the
    /// order: the summary is returned and the session starts over.
    pub fn submit_order(&mut self) -> Result<OrderSummary, OrderRejection> {
        let contact = validate_order(self.manager.basket(), &self.contact)?;
        let summary = OrderSummary::new(contact, self.manager.basket(), &self.surcharge);

        self.manager.reset();
        self.contact = ContactInfo::default();

        Ok(summary)
    }

    /// Empties the basket and the form without placing an order.
    pub fn reset(&mut self) {
        self.manager.reset();
        self.contact = ContactInfo::default();
    }
}

/// Basket totals summary for responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketTotals {
    pub entry_count: usize,
    pub total_quantity: u32,
    #[serde(flatten)]
    pub order: OrderTotal,
}

impl From<&BookingSession> for BasketTotals {
    fn from(session: &BookingSession) -> Self {
        let basket = session.basket().basket();
        BasketTotals {
            entry_count: basket.len(),
            total_quantity: basket.total_quantity(),
            order: compute_order_total(basket, session.surcharge()),
        }
    }
}

/// One basket row as the front end renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketLine {
    #[serde(flatten)]
    pub entry: BasketEntry,
    /// Unit price times quantity.
    pub line_total: Money,
}

impl From<&BasketEntry> for BasketLine {
    fn from(entry: &BasketEntry) -> Self {
        BasketLine {
            entry: entry.clone(),
            line_total: entry.line_total(),
        }
    }
}

/// Basket response including entries and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketResponse {
    pub entries: Vec<BasketLine>,
    pub totals: BasketTotals,
}

impl From<&BookingSession> for BasketResponse {
    fn from(session: &BookingSession) -> Self {
        BasketResponse {
            entries: session
                .basket()
                .basket()
                .entries()
                .iter()
                .map(BasketLine::from)
                .collect(),
            totals: BasketTotals::from(session),
        }
    }
}
