//! # Domain Types
//!
//! Request-side types shared by the validator, the cart, and the transport.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Order Flow                                  │
//! │                                                                     │
//! │  JSON body ──► OrderRequest ──► validate_order ──► ValidOrder       │
//! │                 (untrusted)                         (proof type)    │
//! │                                                          │          │
//! │                                                          ▼          │
//! │                                                   Cart mutation     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ValidOrder` can only be produced by [`crate::validation::validate_order`],
//! so a cart mutation that takes one has the validation guarantee in its
//! signature instead of in a comment.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

// =============================================================================
// Order Request
// =============================================================================

/// An incoming add/remove request. Transient: consumed once by validation
/// and the mutation engine, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Catalog item id the order refers to.
    pub item_id: u32,

    /// Number of units to add or remove. Must be positive to validate.
    pub quantity: i64,
}

// =============================================================================
// Validated Order
// =============================================================================

/// An order that passed validation: the item is resolved against the catalog
/// and the quantity is known positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidOrder {
    /// The resolved catalog entry.
    pub item: &'static CatalogItem,

    /// Requested quantity, guaranteed > 0.
    pub quantity: i64,
}
