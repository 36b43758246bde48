//! # Catalog Module
//!
//! The fixed, immutable item catalog.
//!
//! ## Design
//! The catalog is a small set of items known at build time, so it is a const
//! array rather than a database table or a runtime registry. Lookup is a
//! linear scan; with three entries that beats any map.
//!
//! "Not found" is represented as `None`, never as an error. Deciding what a
//! missing item means (invalid order, 404, ...) is the caller's business.

use crate::money::Money;
use serde::Serialize;

// =============================================================================
// Catalog Item
// =============================================================================

/// One purchasable item: stable id, display name, unit price.
///
/// ## Invariants
/// - Ids are unique across [`CATALOG`]
/// - Prices are non-negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Stable integer identifier (>= 1).
    pub id: u32,

    /// Display name shown on responses and receipts.
    pub name: &'static str,

    /// Unit price in cents.
    pub unit_price: Money,
}

/// The full catalog, in id order.
pub const CATALOG: &[CatalogItem] = &[
    CatalogItem {
        id: 1,
        name: "T-shirt",
        unit_price: Money::from_cents(1299),
    },
    CatalogItem {
        id: 2,
        name: "Jeans",
        unit_price: Money::from_cents(2500),
    },
    CatalogItem {
        id: 3,
        name: "Dress",
        unit_price: Money::from_cents(2065),
    },
];

/// Looks up a catalog item by id.
///
/// ```rust
/// use basket_core::catalog;
///
/// assert_eq!(catalog::lookup(2).unwrap().name, "Jeans");
/// assert!(catalog::lookup(99).is_none());
/// ```
pub fn lookup(item_id: u32) -> Option<&'static CatalogItem> {
    CATALOG.iter().find(|item| item.id == item_id)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_items() {
        let shirt = lookup(1).unwrap();
        assert_eq!(shirt.name, "T-shirt");
        assert_eq!(shirt.unit_price.cents(), 1299);

        assert_eq!(lookup(2).unwrap().unit_price.cents(), 2500);
        assert_eq!(lookup(3).unwrap().unit_price.cents(), 2065);
    }

    #[test]
    fn test_lookup_unknown_item_is_none() {
        assert!(lookup(0).is_none());
        assert!(lookup(4).is_none());
        assert!(lookup(u32::MAX).is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
