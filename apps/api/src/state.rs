//! # Cart State
//!
//! Manages the single shared cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Route handlers may run concurrently
//! 2. Only one handler may touch the cart at a time
//! 3. The engine assumes serialized access to the one active cart
//!
//! ## Why Not RwLock?
//! Cart operations are quick and most of them write. A RwLock would add
//! complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use basket_core::Cart;

/// Shared cart state handed to every route handler.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates state holding a new empty cart.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let order = state.with_cart(|cart| close_order(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_cart_mut(|cart| cart.add(Some(&order)))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}
