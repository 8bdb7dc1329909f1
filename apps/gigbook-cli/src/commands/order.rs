//! # Order Commands
//!
//! Contact form entry and checkout.

use gigbook_core::{ContactInfo, OrderSummary};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::session::BookingSession;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub summary: OrderSummary,
    /// Human-readable confirmation text.
    pub confirmation: String,
}

/// Stores the checkout form fields as typed. Validation waits for checkout.
pub fn set_contact(session: &mut BookingSession, contact: ContactInfo) -> ContactInfo {
    debug!(full_name = %contact.full_name, email = %contact.email, "set_contact command");
    session.set_contact(contact);
    session.contact().clone()
}

/// Submits the order.
///
/// On success the basket and form are cleared. On rejection nothing changes
/// so the user can correct the form.
pub fn checkout(session: &mut BookingSession) -> Result<CheckoutResponse, ApiError> {
    debug!("checkout command");

    let summary = session.submit_order().map_err(|rejection| {
        warn!(%rejection, "order rejected");
        ApiError::from(rejection)
    })?;

    info!(
        reference = %summary.reference,
        tickets = summary.ticket_count,
        total = %summary.totals.total,
        "order placed"
    );

    Ok(CheckoutResponse {
        confirmation: summary.to_string(),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::basket::add_to_basket;
    use crate::error::ErrorCode;
    use crate::session::tests::test_session;

    #[test]
    fn test_checkout_empty_basket() {
        let mut session = test_session();
        set_contact(
            &mut session,
            ContactInfo::new("Ada", "ada@example.com", "4111111111111111"),
        );

        let err = checkout(&mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "basket is empty");
    }

    #[test]
    fn test_checkout_success() {
        let mut session = test_session();
        add_to_basket(&mut session, "beths-manchester");
        set_contact(
            &mut session,
            ContactInfo::new("Ada", "ada@example.com", "4111111111111111"),
        );

        let response = checkout(&mut session).unwrap();
        assert_eq!(response.summary.totals.total.pence(), 2550);
        assert!(response.confirmation.contains("Combined total: £25.50"));
        assert!(session.contact().is_blank());
    }
}
