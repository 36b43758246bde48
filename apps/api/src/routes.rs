//! # Cart Routes
//!
//! HTTP handlers for cart manipulation.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart Endpoints                                │
//! │                                                                     │
//! │  Method  Path                 Engine Operation                      │
//! │  ──────  ─────────────────    ────────────────                      │
//! │  GET     /cart                (read-only view)                      │
//! │  POST    /cart/add_item       Cart::add                             │
//! │  DELETE  /cart/remove_item    Cart::remove                          │
//! │  DELETE  /cart/empty_cart     Cart::clear                           │
//! │  GET     /cart/close_order    pricing::close_order                  │
//! │                                                                     │
//! │  NOTE: close_order does NOT empty the cart. A client that wants a   │
//! │        fresh cart calls empty_cart explicitly.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::State;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::debug;

use basket_core::pricing::{self, ClosedOrder};
use basket_core::{Cart, LineItem, Money, OrderRequest};

use crate::error::ApiError;
use crate::state::CartState;

// =============================================================================
// Response DTOs
// =============================================================================

/// Confirmation returned by the mutating endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub message: String,
}

impl OrderResponse {
    fn new(message: &str) -> Self {
        OrderResponse {
            message: message.to_string(),
        }
    }
}

/// Cart totals summary for the read-only cart view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
}

/// Cart view including items and running totals. The subtotal here is
/// undiscounted; the promotion only applies at close_order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.snapshot(),
            totals: CartTotals {
                item_count: cart.item_count(),
                total_quantity: cart.total_quantity(),
                subtotal: cart.subtotal(),
            },
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Builds the application router. Separate from `main` so tests can drive
/// the exact same routes.
pub fn router(state: CartState) -> Router {
    Router::new()
        .route("/cart", get(get_cart))
        .route("/cart/add_item", post(add_item))
        .route("/cart/remove_item", delete(remove_item))
        .route("/cart/empty_cart", delete(empty_cart))
        .route("/cart/close_order", get(close_order))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Returns the current cart contents.
pub async fn get_cart(State(state): State<CartState>) -> Json<CartResponse> {
    debug!("get_cart");
    Json(state.with_cart(|cart| CartResponse::from(cart)))
}

/// Adds items to the cart.
///
/// ## Behavior
/// - Item already in cart: quantity increases
/// - Item not in cart: appended as a new line
/// - Invalid order data: 400 with `INVALID_ORDER`
pub async fn add_item(
    State(state): State<CartState>,
    Json(order): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    debug!(item_id = order.item_id, quantity = order.quantity, "add_item");

    state.with_cart_mut(|cart| cart.add(Some(&order)))?;
    Ok(Json(OrderResponse::new("Order placed. Item(s) added to cart.")))
}

/// Removes items from the cart.
///
/// ## Behavior
/// - Removes at most what's there; the quantity floors at zero
/// - Invalid order data: 400 with `INVALID_ORDER`
/// - Valid item never added: 400 with `ITEM_NOT_IN_CART`
pub async fn remove_item(
    State(state): State<CartState>,
    Json(order): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    debug!(item_id = order.item_id, quantity = order.quantity, "remove_item");

    state.with_cart_mut(|cart| cart.remove(Some(&order)))?;
    Ok(Json(OrderResponse::new(
        "Order placed. Item(s) removed from shopping cart.",
    )))
}

/// Empties the cart. No failure modes.
pub async fn empty_cart(State(state): State<CartState>) -> Json<OrderResponse> {
    debug!("empty_cart");

    state.with_cart_mut(Cart::clear);
    Json(OrderResponse::new("Cart is now empty."))
}

/// Closes the order: returns the cart snapshot and the promotion-adjusted
/// total. The cart is left as-is.
pub async fn close_order(State(state): State<CartState>) -> Json<ClosedOrder> {
    debug!("close_order");

    Json(state.with_cart(|cart| pricing::close_order(cart)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn order(item_id: u32, quantity: i64) -> Json<OrderRequest> {
        Json(OrderRequest { item_id, quantity })
    }

    async fn add(state: &CartState, item_id: u32, quantity: i64) {
        add_item(State(state.clone()), order(item_id, quantity))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_item_confirms() {
        let state = CartState::new();

        let response = add_item(State(state), order(1, 1)).await.unwrap();
        assert_eq!(response.message, "Order placed. Item(s) added to cart.");
    }

    #[tokio::test]
    async fn test_add_item_rejects_unknown_item() {
        let state = CartState::new();

        let err = add_item(State(state), order(5, 2)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOrder);
    }

    #[tokio::test]
    async fn test_add_item_rejects_non_positive_quantity() {
        let state = CartState::new();

        let err = add_item(State(state), order(1, 0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOrder);
    }

    #[tokio::test]
    async fn test_remove_item_from_empty_cart() {
        let state = CartState::new();

        let err = remove_item(State(state), order(1, 3)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ItemNotInCart);
    }

    #[tokio::test]
    async fn test_remove_item_floors_at_zero() {
        let state = CartState::new();
        add(&state, 1, 1).await;

        // Over-removal succeeds and leaves an idle zero-quantity line.
        let response = remove_item(State(state.clone()), order(1, 5))
            .await
            .unwrap();
        assert_eq!(
            response.message,
            "Order placed. Item(s) removed from shopping cart."
        );

        let view = get_cart(State(state)).await;
        assert_eq!(view.totals.item_count, 1);
        assert_eq!(view.totals.total_quantity, 0);
    }

    #[tokio::test]
    async fn test_get_cart_merges_and_totals() {
        let state = CartState::new();
        add(&state, 1, 3).await;
        add(&state, 1, 1).await;
        add(&state, 2, 2).await;

        let view = get_cart(State(state)).await;
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].quantity, 4);
        assert_eq!(view.totals.total_quantity, 6);
        assert_eq!(view.totals.subtotal.cents(), 4 * 1299 + 2 * 2500);
    }

    #[tokio::test]
    async fn test_empty_cart_then_close_order_totals_zero() {
        let state = CartState::new();
        add(&state, 1, 3).await;

        let response = empty_cart(State(state.clone())).await;
        assert_eq!(response.message, "Cart is now empty.");

        let closed = close_order(State(state)).await;
        assert!(closed.ordered_items.is_empty());
        assert!(closed.total_price.is_zero());
    }

    #[tokio::test]
    async fn test_close_order_applies_promotion() {
        let state = CartState::new();
        add(&state, 1, 1).await;
        add(&state, 2, 2).await;
        add(&state, 3, 3).await;

        let closed = close_order(State(state)).await;
        assert_eq!(closed.total_price.cents(), 9130); // $91.30
    }

    #[tokio::test]
    async fn test_close_order_leaves_cart_intact() {
        let state = CartState::new();
        add(&state, 1, 3).await;

        let first = close_order(State(state.clone())).await;
        let second = close_order(State(state.clone())).await;
        assert_eq!(first.total_price, second.total_price);

        // Still 3 T-shirts in the cart after two closes.
        let view = get_cart(State(state)).await;
        assert_eq!(view.totals.total_quantity, 3);
    }

    #[test]
    fn test_closed_order_wire_format() {
        // Field names the original clients rely on.
        let state = CartState::new();
        let closed = state.with_cart(|cart| pricing::close_order(cart));
        let json = serde_json::to_value(&closed).unwrap();

        assert!(json.get("orderedItems").is_some());
        assert!(json.get("totalPrice").is_some());
    }
}
