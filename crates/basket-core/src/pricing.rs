//! # Pricing Module
//!
//! Promotion pricing and order close-out.
//!
//! ## The Promotion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  BUY 3, CHEAPEST ONE FREE                                           │
//! │                                                                     │
//! │  Cart: 1× T-shirt $12.99, 2× Jeans $25.00, 3× Dress $20.65          │
//! │                                                                     │
//! │  total units = 6  →  free units = 6 / 3 = 2                         │
//! │                                                                     │
//! │  Sort lines by unit price (stable):                                 │
//! │    T-shirt $12.99 ×1 ── 1 free unit taken here ($12.99)             │
//! │    Dress   $20.65 ×3 ── 1 free unit taken here ($20.65)             │
//! │    Jeans   $25.00 ×2                                                │
//! │                                                                     │
//! │  total = $124.94 - $33.64 = $91.30                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Free units are allocated against the cheapest stock first, walking the
//! price-sorted lines until the allocation is spent. The sort is stable, so
//! lines with equal prices keep their cart order; zero-quantity lines take
//! part in the sort but contribute nothing and consume nothing.
//!
//! Closing an order is a read: it sorts a copy of the lines and leaves the
//! cart exactly as it was, so closing twice in a row returns the same total.

use serde::Serialize;

use crate::cart::{Cart, LineItem};
use crate::money::Money;
use crate::PROMOTION_GROUP_SIZE;

// =============================================================================
// Closed Order
// =============================================================================

/// The result of closing the current order: what was bought and what it
/// costs after the promotion. Transient, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedOrder {
    /// Snapshot of the cart lines in insertion order.
    pub ordered_items: Vec<LineItem>,

    /// Final price with the promotion applied. Never negative.
    pub total_price: Money,
}

/// Closes the current order.
///
/// Reads the cart, computes the discounted total, and returns both. The cart
/// itself is NOT cleared or reordered; emptying it afterwards is a separate,
/// explicit operation.
pub fn close_order(cart: &Cart) -> ClosedOrder {
    ClosedOrder {
        ordered_items: cart.snapshot(),
        total_price: discounted_total(cart.items()),
    }
}

/// Computes the promotion-adjusted total for a set of cart lines.
fn discounted_total(lines: &[LineItem]) -> Money {
    let total_units: i64 = lines.iter().map(|l| l.quantity).sum();

    let base_total = lines
        .iter()
        .fold(Money::zero(), |acc, l| acc + l.line_total());

    if total_units < PROMOTION_GROUP_SIZE {
        return base_total;
    }

    // Sorted copy; ties keep cart order, the live cart is left alone.
    let mut by_price: Vec<&LineItem> = lines.iter().collect();
    by_price.sort_by_key(|l| l.unit_price);

    let mut free_units = total_units / PROMOTION_GROUP_SIZE;
    let mut discount = Money::zero();

    for line in by_price {
        if line.quantity >= free_units {
            discount += line.unit_price * free_units;
            break;
        }
        // Line fully consumed (a zero-quantity line consumes nothing).
        discount += line.unit_price * line.quantity;
        free_units -= line.quantity;
    }

    base_total - discount
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderRequest;

    fn cart_of(orders: &[(u32, i64)]) -> Cart {
        let mut cart = Cart::new();
        for &(item_id, quantity) in orders {
            cart.add(Some(&OrderRequest { item_id, quantity })).unwrap();
        }
        cart
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let cart = Cart::new();
        let order = close_order(&cart);

        assert!(order.ordered_items.is_empty());
        assert!(order.total_price.is_zero());
    }

    #[test]
    fn test_under_three_units_no_discount() {
        // 1× T-shirt + 1× Jeans = 2 units, base total applies.
        let cart = cart_of(&[(1, 1), (2, 1)]);
        let order = close_order(&cart);

        assert_eq!(order.total_price.cents(), 1299 + 2500);
    }

    #[test]
    fn test_three_tshirts() {
        // 3 × $12.99, one free: $25.98.
        let cart = cart_of(&[(1, 3)]);
        assert_eq!(close_order(&cart).total_price.cents(), 2598);
    }

    #[test]
    fn test_two_tshirts_two_jeans() {
        // 4 units, one free T-shirt: $75.98 - $12.99 = $62.99.
        let cart = cart_of(&[(1, 2), (2, 2)]);
        assert_eq!(close_order(&cart).total_price.cents(), 6299);
    }

    #[test]
    fn test_mixed_cart_discount_spans_lines() {
        // 1× T-shirt + 2× Jeans + 3× Dress = 6 units, 2 free. The single
        // T-shirt is exhausted, the second free unit comes off a Dress:
        // $124.94 - ($12.99 + $20.65) = $91.30.
        let cart = cart_of(&[(1, 1), (2, 2), (3, 3)]);
        assert_eq!(close_order(&cart).total_price.cents(), 9130);
    }

    #[test]
    fn test_larger_mixed_cart() {
        // 3× T-shirt + 2× Jeans + 4× Dress = 9 units, 3 free, all taken
        // from T-shirts: $171.57 - $38.97 = $132.60.
        let cart = cart_of(&[(1, 3), (2, 2), (3, 4)]);
        assert_eq!(close_order(&cart).total_price.cents(), 13260);
    }

    #[test]
    fn test_zero_quantity_line_is_walked_over() {
        // T-shirt line sits at quantity 0 after over-removal. It is still
        // the cheapest line, but contributes no free units; the discount
        // falls through to the Jeans.
        let mut cart = cart_of(&[(1, 1)]);
        cart.remove(Some(&OrderRequest {
            item_id: 1,
            quantity: 5,
        }))
        .unwrap();
        cart.add(Some(&OrderRequest {
            item_id: 2,
            quantity: 3,
        }))
        .unwrap();

        // 3 units, 1 free Jeans: $75.00 - $25.00 = $50.00.
        assert_eq!(close_order(&cart).total_price.cents(), 5000);
    }

    #[test]
    fn test_zero_quantity_cart_after_clearing_by_removal() {
        // All quantities at zero: 0 units, no discount path, total zero,
        // but the idle line still shows up in the snapshot.
        let mut cart = cart_of(&[(1, 2)]);
        cart.remove(Some(&OrderRequest {
            item_id: 1,
            quantity: 2,
        }))
        .unwrap();

        let order = close_order(&cart);
        assert!(order.total_price.is_zero());
        assert_eq!(order.ordered_items.len(), 1);
        assert_eq!(order.ordered_items[0].quantity, 0);
    }

    #[test]
    fn test_total_is_non_negative_at_quantity_extremes() {
        // Quantities large enough to overflow i64 cents never enter the
        // cart, and the largest quantities that do still price cleanly.
        let mut cart = Cart::new();
        assert!(cart
            .add(Some(&OrderRequest {
                item_id: 1,
                quantity: 7_200_000_000_000_000,
            }))
            .is_err());

        cart.add(Some(&OrderRequest {
            item_id: 2,
            quantity: crate::MAX_ORDER_QUANTITY,
        }))
        .unwrap();

        let order = close_order(&cart);
        assert!(order.total_price.cents() >= 0);
        // 999 units of Jeans, 333 free: (999 - 333) × $25.00.
        assert_eq!(order.total_price.cents(), 666 * 2500);
    }

    #[test]
    fn test_close_order_is_non_destructive() {
        let cart = cart_of(&[(1, 3), (2, 2), (3, 4)]);

        let first = close_order(&cart);
        let second = close_order(&cart);

        assert_eq!(first.total_price, second.total_price);
        assert_eq!(first.ordered_items, second.ordered_items);
        // Insertion order survives both closes.
        let ids: Vec<u32> = cart.items().iter().map(|l| l.item_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_snapshot_keeps_insertion_order_not_price_order() {
        // Jeans added first even though T-shirt is cheaper.
        let cart = cart_of(&[(2, 1), (1, 1), (3, 1)]);
        let order = close_order(&cart);

        let ids: Vec<u32> = order.ordered_items.iter().map(|l| l.item_id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
