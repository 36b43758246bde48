//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  basket-core errors (this file)                                     │
//! │  └── CartError      - Order validation and cart mutation failures   │
//! │                                                                     │
//! │  API errors (apps/api)                                              │
//! │  └── ApiError       - What HTTP clients see (serialized, status)    │
//! │                                                                     │
//! │  Flow: CartError ──► ApiError ──► HTTP 400                          │
//! │        anything else ──► HTTP 500 (programming defect, not domain)  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart domain errors. Both variants are recoverable by the caller; anything
/// else that goes wrong in the engine is a defect, not a domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    /// The order request cannot be acted on at all.
    ///
    /// ## When This Occurs
    /// - The request body is absent
    /// - The quantity is zero or negative
    /// - The item id does not exist in the catalog
    ///
    /// Raised by validation before any mutation; add and remove surface it
    /// identically.
    #[error("order contains invalid data: the item may not exist with this id or quantity")]
    InvalidOrder,

    /// Remove was requested for a real catalog item that was never added.
    ///
    /// Distinct from [`CartError::InvalidOrder`]: validation has already
    /// passed, the cart just has no line for this item. Only remove raises it.
    #[error("item {item_id} is not in the cart, so it cannot be removed")]
    ItemNotInCart { item_id: u32 },
}

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
