//! # Cart Module
//!
//! The cart and its mutation operations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Cart Mutation Engine                            │
//! │                                                                     │
//! │  Caller Request          Validation           Cart Change           │
//! │  ──────────────          ──────────           ───────────           │
//! │                                                                     │
//! │  add(order) ───────────► validate_order ────► merge or append       │
//! │                                                                     │
//! │  remove(order) ────────► validate_order ────► decrement, floor 0    │
//! │                               │                                     │
//! │                               └── line missing? ItemNotInCart       │
//! │                                                                     │
//! │  clear() ──────────────► (no validation) ───► items = []            │
//! │                                                                     │
//! │  Validation ALWAYS runs before the first mutation.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per item id (adding the same item merges quantities)
//! - Insertion order is preserved for every observation
//! - Quantities never go negative; over-removal floors at zero
//! - Zero-quantity lines are KEPT in the cart, not pruned. They take part in
//!   the promotion's stable sort, so pruning them would change tie-breaks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::types::OrderRequest;
use crate::validation::validate_order;

// =============================================================================
// Line Item
// =============================================================================

/// One entry in the cart.
///
/// ## Design Notes
/// Name and unit price are frozen copies of the catalog entry taken when the
/// item is first added. The pricing engine reads them from the line, so it
/// never has to re-resolve an id that could, in some future catalog, have
/// gone away mid-session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog item id.
    pub item_id: u32,

    /// Display name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price: Money,

    /// Units of this item in the cart. Never negative; may be zero after
    /// over-removal.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a new line from a catalog entry and a starting quantity.
    pub fn from_catalog(item: &CatalogItem, quantity: i64) -> Self {
        LineItem {
            item_id: item.id,
            name: item.name.to_string(),
            unit_price: item.unit_price,
            quantity,
        }
    }

    /// The undiscounted total for this line (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The single active cart.
///
/// ## Lifecycle
/// Created empty at service start, mutated by [`Cart::add`] / [`Cart::remove`],
/// reset by [`Cart::clear`]. Closing an order reads it but never changes it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in first-added order.
    items: Vec<LineItem>,

    /// When the cart was created or last cleared.
    pub opened_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            opened_at: Utc::now(),
        }
    }

    /// Adds units of an item to the cart.
    ///
    /// ## Behavior
    /// - Invalid order (absent, non-positive quantity, unknown id):
    ///   [`CartError::InvalidOrder`], cart untouched
    /// - Item already in cart: its quantity grows by the requested amount
    /// - Otherwise: a new line is appended, preserving insertion order
    pub fn add(&mut self, order: Option<&OrderRequest>) -> CartResult<()> {
        let valid = validate_order(order)?;

        if let Some(line) = self.items.iter_mut().find(|l| l.item_id == valid.item.id) {
            // Saturates rather than wraps; a line quantity never goes negative.
            line.quantity = line.quantity.saturating_add(valid.quantity);
            return Ok(());
        }

        self.items.push(LineItem::from_catalog(valid.item, valid.quantity));
        Ok(())
    }

    /// Removes units of an item from the cart.
    ///
    /// ## Behavior
    /// - Invalid order: [`CartError::InvalidOrder`], cart untouched
    /// - Valid item but no line for it: [`CartError::ItemNotInCart`]
    /// - Line quantity >= requested: quantity decreases by the request
    /// - Line quantity < requested: quantity floors at 0, no error. The
    ///   policy is "remove at most what's there".
    ///
    /// The line stays in the cart even at quantity 0.
    pub fn remove(&mut self, order: Option<&OrderRequest>) -> CartResult<()> {
        let valid = validate_order(order)?;

        let line = self
            .items
            .iter_mut()
            .find(|l| l.item_id == valid.item.id)
            .ok_or(CartError::ItemNotInCart {
                item_id: valid.item.id,
            })?;

        line.quantity = (line.quantity - valid.quantity).max(0);
        Ok(())
    }

    /// Empties the cart. Always succeeds, no validation needed.
    pub fn clear(&mut self) {
        self.items = Vec::new();
        self.opened_at = Utc::now();
    }

    /// The lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// A caller-owned copy of the lines, in insertion order.
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Number of distinct lines (zero-quantity lines included).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// The undiscounted cart total.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Checks if the cart has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
