//! # basket-core: Pure Business Logic for Basket
//!
//! This crate is the **heart** of Basket. It contains the cart mutation and
//! pricing engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Basket Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                   HTTP Client                                 │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │ JSON                                │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                   apps/api (axum routes)                      │  │
//! │  │    add_item, remove_item, empty_cart, close_order             │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │              ★ basket-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────────┐ ┌───────┐  │  │
//! │  │  │  money  │ │ catalog │ │validation│ │   cart   │ │pricing│  │  │
//! │  │  │  Money  │ │ lookup  │ │  rules   │ │ LineItem │ │ promo │  │  │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └──────────┘ └───────┘  │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO NETWORK • PURE FUNCTIONS                         │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Fixed, immutable item catalog
//! - [`types`] - Order request/validated-order types
//! - [`validation`] - Order validation against the catalog
//! - [`cart`] - The cart and its mutation operations
//! - [`pricing`] - Promotion pricing and order close-out
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::cart::Cart;
//! use basket_core::pricing::close_order;
//! use basket_core::types::OrderRequest;
//!
//! let mut cart = Cart::new();
//! cart.add(Some(&OrderRequest { item_id: 1, quantity: 3 })).unwrap();
//!
//! // Buy 3, cheapest one free: 3 × $12.99 - $12.99 = $25.98
//! let order = close_order(&cart);
//! assert_eq!(order.total_price.cents(), 2598);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use basket_core::Money` instead of
// `use basket_core::money::Money`

pub use cart::{Cart, LineItem};
pub use catalog::CatalogItem;
pub use error::CartError;
pub use money::Money;
pub use pricing::ClosedOrder;
pub use types::{OrderRequest, ValidOrder};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of units a customer must buy to earn one free unit.
///
/// ## Business Reason
/// The "buy 3, cheapest one free" promotion: every full group of 3 units in
/// the cart grants one free unit, allocated against the cheapest stock.
pub const PROMOTION_GROUP_SIZE: i64 = 3;

/// Maximum quantity a single order may carry.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10) and
/// keeps cart totals far away from integer-overflow territory. Orders above
/// the cap fail validation like any other invalid quantity.
pub const MAX_ORDER_QUANTITY: i64 = 999;
