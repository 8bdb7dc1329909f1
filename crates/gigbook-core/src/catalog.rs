//! # Catalog
//!
//! The read-only list of ticket offerings a session can book from.
//!
//! The catalog is supplied from outside (a JSON document, a seed list) and
//! checked once on construction. After that it only answers lookups.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::types::TicketOffering;
use crate::validation::validate_offering;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    offerings: Vec<TicketOffering>,
}

impl Catalog {
    /// Builds a catalog, preserving the supplied order.
    ///
    /// ## Errors
    /// - `CoreError::InvalidOffering` if any offering fails field validation
    /// - `CoreError::DuplicateOffering` if two offerings share an id
    pub fn new(offerings: Vec<TicketOffering>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(offerings.len());

        for offering in &offerings {
            validate_offering(offering).map_err(|source| CoreError::InvalidOffering {
                id: offering.id.clone(),
                source,
            })?;

            if !seen.insert(offering.id.as_str()) {
                return Err(CoreError::DuplicateOffering(offering.id.clone()));
            }
        }

        Ok(Catalog { offerings })
    }

    /// Parses a JSON array of offerings.
    ///
    /// ## Example
    /// ```rust
    /// use gigbook_core::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"[{
    ///     "id": "t1",
    ///     "artist": "Idles",
    ///     "venue": { "location": "O2 Academy Bristol", "capacity": 1600 },
    ///     "concert_date": "2026-11-14",
    ///     "price_cents": 3250
    /// }]"#).unwrap();
    ///
    /// assert_eq!(catalog.get("t1").unwrap().artist, "Idles");
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let offerings: Vec<TicketOffering> = serde_json::from_str(json)?;
        Catalog::new(offerings)
    }

    /// Looks up an offering by id.
    pub fn get(&self, id: &str) -> Option<&TicketOffering> {
        self.offerings.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All offerings in catalog order.
    pub fn offerings(&self) -> &[TicketOffering] {
        &self.offerings
    }

    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::Venue;
    use chrono::NaiveDate;

    pub(crate) fn test_offering(id: &str, price_cents: i64) -> TicketOffering {
        TicketOffering {
            id: id.to_string(),
            artist: format!("Artist {}", id),
            venue: Venue {
                location: format!("Venue {}", id),
                capacity: 1000,
            },
            concert_date: NaiveDate::from_ymd_opt(2026, 11, 20).unwrap(),
            price_cents,
        }
    }

    pub(crate) fn test_catalog() -> Catalog {
        Catalog::new(vec![
            test_offering("t1", 1000),
            test_offering("t2", 550),
            test_offering("t3", 4500),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_preserves_order() {
        let catalog = test_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.offerings()[1].id, "t2");
        assert_eq!(catalog.get("t3").unwrap().price_cents, 4500);
        assert!(catalog.get("missing").is_none());
        assert!(!catalog.contains("missing"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![test_offering("t1", 100), test_offering("t1", 200)]);
        assert!(matches!(result, Err(CoreError::DuplicateOffering(id)) if id == "t1"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Catalog::new(vec![test_offering("t1", -5)]);
        assert!(matches!(result, Err(CoreError::InvalidOffering { .. })));
    }

    #[test]
    fn test_oversized_price_rejected() {
        for price in [crate::MAX_PRICE_PENCE + 1, i64::MAX / 2 + 1, i64::MAX] {
            let result = Catalog::new(vec![test_offering("t1", price)]);
            assert!(
                matches!(result, Err(CoreError::InvalidOffering { ref id, .. }) if id == "t1"),
                "{price}"
            );
        }
        assert!(Catalog::new(vec![test_offering("t1", crate::MAX_PRICE_PENCE)]).is_ok());
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        assert!(matches!(
            Catalog::from_json("{\"not\": \"an array\"}"),
            Err(CoreError::InvalidCatalogJson(_))
        ));
        assert!(Catalog::from_json("[]").unwrap().is_empty());
    }
}
