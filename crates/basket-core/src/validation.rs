//! # Validation Module
//!
//! Order validation against the catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Transport (axum)                                          │
//! │  ├── JSON shape checks (deserialization)                            │
//! │  └── Missing body detection                                         │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── quantity must be positive and within the order cap             │
//! │  └── item id must exist in the catalog                              │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Cart mutation (already guaranteed to succeed for add)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This check runs before ANY mutation, in both the add and remove flows.

use crate::catalog;
use crate::error::{CartError, CartResult};
use crate::types::{OrderRequest, ValidOrder};
use crate::MAX_ORDER_QUANTITY;

/// Validates an order request.
///
/// ## Rules
/// - The request must be present (`None` models an absent body)
/// - `quantity` must be > 0 and at most [`MAX_ORDER_QUANTITY`]
/// - `item_id` must resolve against the catalog
///
/// ## Returns
/// A [`ValidOrder`] carrying the resolved catalog item, or
/// [`CartError::InvalidOrder`]. All failure reasons surface as the same
/// error kind; the caller cannot act differently on them.
pub fn validate_order(order: Option<&OrderRequest>) -> CartResult<ValidOrder> {
    let order = order.ok_or(CartError::InvalidOrder)?;

    if order.quantity <= 0 || order.quantity > MAX_ORDER_QUANTITY {
        return Err(CartError::InvalidOrder);
    }

    let item = catalog::lookup(order.item_id).ok_or(CartError::InvalidOrder)?;

    Ok(ValidOrder {
        item,
        quantity: order.quantity,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
