//! # Basket Commands
//!
//! ## Basket Lifecycle
//! ```text
//! ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐
//! │  Empty   │────►│ In Basket│────►│ Checkout │────►│  Placed  │
//! │  Basket  │     │          │     │   Form   │     │  Order   │
//! └──────────┘     └──────────┘     └──────────┘     └──────────┘
//!                       │                                  │
//!                  add_to_basket                           │
//!                  update_basket_quantity                  │
//!                  remove_from_basket                      │
//!                       │                                  │
//!                       ▼                                  ▼
//!                  reset_basket ──────────────────► (back to empty)
//! ```

use gigbook_core::{AddOutcome, QuantityUpdate, TicketOffering};
use serde::Serialize;
use tracing::{debug, warn};

use super::BasketChange;
use crate::error::ApiError;
use crate::session::{BasketResponse, BookingSession};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub offerings: Vec<TicketOffering>,
}

/// Lists every offering in catalog order.
pub fn list_catalog(session: &BookingSession) -> CatalogResponse {
    debug!("list_catalog command");
    CatalogResponse {
        offerings: session.basket().catalog().offerings().to_vec(),
    }
}

/// Current basket contents and totals.
pub fn get_basket(session: &BookingSession) -> BasketResponse {
    debug!("get_basket command");
    BasketResponse::from(session)
}

/// Books one ticket for an offering.
///
/// ## Behavior
/// - Unknown offering: nothing changes, outcome `unknown_offering`
/// - Already in basket: nothing changes, outcome `already_in_basket`
/// - Otherwise: added with quantity 1
pub fn add_to_basket(session: &mut BookingSession, offering_id: &str) -> BasketChange<AddOutcome> {
    debug!(offering_id = %offering_id, "add_to_basket command");

    let outcome = session.basket_mut().add(offering_id);
    if outcome == AddOutcome::UnknownOffering {
        debug!(offering_id = %offering_id, "offering not in catalog, ignoring");
    }

    BasketChange {
        outcome,
        basket: BasketResponse::from(&*session),
    }
}

/// Changes the quantity of a basket entry.
///
/// ## Behavior
/// - Quantity 0: removes the entry
/// - Quantity 6 or more: refused, the entry keeps its quantity
pub fn update_basket_quantity(
    session: &mut BookingSession,
    offering_id: &str,
    quantity: u32,
) -> Result<BasketChange<QuantityUpdate>, ApiError> {
    debug!(offering_id = %offering_id, quantity = %quantity, "update_basket_quantity command");

    let outcome = session
        .basket_mut()
        .update_quantity(offering_id, quantity)
        .map_err(|warning| {
            warn!(offering_id = %offering_id, quantity = %quantity, %warning, "quantity change refused");
            ApiError::from(warning)
        })?;

    Ok(BasketChange {
        outcome,
        basket: BasketResponse::from(&*session),
    })
}

/// Removes an entry from the basket. Absent ids are a no-op.
pub fn remove_from_basket(
    session: &mut BookingSession,
    offering_id: &str,
) -> BasketChange<QuantityUpdate> {
    debug!(offering_id = %offering_id, "remove_from_basket command");

    let outcome = if session.basket_mut().remove(offering_id) {
        QuantityUpdate::Removed
    } else {
        QuantityUpdate::NotInBasket
    };

    BasketChange {
        outcome,
        basket: BasketResponse::from(&*session),
    }
}

/// Empties the basket and the checkout form.
pub fn reset_basket(session: &mut BookingSession) -> BasketResponse {
    debug!("reset_basket command");
    session.reset();
    BasketResponse::from(&*session)
}
