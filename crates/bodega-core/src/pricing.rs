//! # Pricing Engine
//!
//! Pure computation over Cart + Catalog + CouponTable: subtotals,
//! per-category subtotals, the most expensive line, and the checkout
//! breakdown.
//!
//! ## Checkout Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      checkout()                             │
//! │                                                             │
//! │  subtotal = Σ line totals                                   │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  discount = coupon lookup → Flat amount | Percent of        │
//! │             subtotal (unknown code ⇒ 0)                     │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  after_discount = subtotal − discount   (NOT clamped at 0)  │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  tax = after_discount × 18%   (even on a negative base)     │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  total = after_discount + tax                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is a pure function: no I/O, no clocks, no mutation of
//! the inputs. Clearing the cart after checkout is the caller's job.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartEntry};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CouponTable, TaxRate};
use crate::GST_RATE_BPS;

// =============================================================================
// Checkout Breakdown
// =============================================================================

/// One line of the checkout breakdown, in cart order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub name: String,
    pub quantity: i64,
    pub line_total: Money,
}

/// The computed subtotal/discount/tax/total for a single checkout event.
///
/// Created once per checkout, handed to the invoice renderer, and
/// discarded. It has no further lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutBreakdown {
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub total: Money,
    pub lines: Vec<InvoiceLine>,
}

// =============================================================================
// Pricing Functions
// =============================================================================

/// Sum of line totals over all entries. Empty cart ⇒ 0.
pub fn subtotal(cart: &Cart) -> Money {
    cart.entries()
        .iter()
        .fold(Money::zero(), |acc, e| acc + e.line_total())
}

/// Per-category sums of line totals.
///
/// Categories absent from the cart are absent from the result (no
/// zero-fill). A BTreeMap keeps the console rendering deterministic.
pub fn category_totals(cart: &Cart) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for entry in cart.entries() {
        let slot = totals.entry(entry.category.clone()).or_default();
        *slot += entry.line_total();
    }
    totals
}

/// The entry with the maximal line total, `None` on an empty cart.
///
/// Tie-break: one-pass keep-if-strictly-greater, so the earliest-added of
/// any tied entries wins.
pub fn most_expensive_entry(cart: &Cart) -> Option<&CartEntry> {
    let mut best: Option<&CartEntry> = None;
    for entry in cart.entries() {
        match best {
            Some(current) if entry.line_total() > current.line_total() => best = Some(entry),
            None => best = Some(entry),
            _ => {}
        }
    }
    best
}

/// Computes the checkout breakdown for the cart with an optional coupon.
///
/// ## Behavior
/// - An empty cart is refused entirely (`CoreError::EmptyCart`); no
///   breakdown is produced
/// - An unknown coupon code yields a zero discount, not an error
/// - `discount > subtotal` is allowed and drives the taxed total negative
/// - The cart is NOT cleared here; the caller clears it unconditionally
///   after a successful checkout
pub fn checkout(cart: &Cart, coupons: &CouponTable, code: &str) -> CoreResult<CheckoutBreakdown> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let subtotal = subtotal(cart);
    let discount = coupons
        .lookup(code)
        .map(|d| d.amount_off(subtotal))
        .unwrap_or_default();

    let after_discount = subtotal - discount;
    let tax = after_discount.calculate_tax(TaxRate::from_bps(GST_RATE_BPS));
    let total = after_discount + tax;

    let lines = cart
        .entries()
        .iter()
        .map(|e| InvoiceLine {
            name: e.name.clone(),
            quantity: e.quantity,
            line_total: e.line_total(),
        })
        .collect();

    Ok(CheckoutBreakdown {
        subtotal,
        discount,
        tax,
        total,
        lines,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Discount, Product};

    fn product(id: u32, name: &str, category: &str, price: &str) -> Product {
        Product::new(id, name, category, Money::parse(price).unwrap()).unwrap()
    }

    fn pen_cart() -> Cart {
        // Catalog: Product(id=1, "Pen", "Stationery", 10.0); cart = Pen × 3
        let mut cart = Cart::new();
        cart.add_entry(&product(1, "Pen", "Stationery", "10.0"), 3)
            .unwrap();
        cart
    }

    fn coupon_table() -> CouponTable {
        let mut table = CouponTable::new();
        table.insert("SAVE5", Discount::from_value(Money::parse("5").unwrap()));
        table.insert("FLAT2", Discount::from_value(Money::parse("0.5").unwrap()));
        table
    }

    #[test]
    fn test_subtotal_empty_cart_is_zero() {
        assert_eq!(subtotal(&Cart::new()), Money::zero());
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let mut cart = Cart::new();
        cart.add_entry(&product(1, "Pen", "Stationery", "10.0"), 3)
            .unwrap();
        cart.add_entry(&product(2, "Milk", "Dairy", "25.0"), 2)
            .unwrap();

        assert_eq!(subtotal(&cart).minor(), 3000 + 5000);
    }

    #[test]
    fn test_category_totals_sum_to_subtotal() {
        let mut cart = Cart::new();
        cart.add_entry(&product(1, "Pen", "Stationery", "10.0"), 3)
            .unwrap();
        cart.add_entry(&product(2, "Notebook", "Stationery", "40.0"), 1)
            .unwrap();
        cart.add_entry(&product(3, "Milk", "Dairy", "25.0"), 2)
            .unwrap();

        let totals = category_totals(&cart);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Stationery"].minor(), 7000);
        assert_eq!(totals["Dairy"].minor(), 5000);

        let sum = totals.values().fold(Money::zero(), |acc, m| acc + *m);
        assert_eq!(sum, subtotal(&cart));
    }

    #[test]
    fn test_category_totals_no_zero_fill() {
        let totals = category_totals(&pen_cart());
        assert_eq!(totals.len(), 1);
        assert!(totals.contains_key("Stationery"));
    }

    #[test]
    fn test_most_expensive_entry() {
        let mut cart = Cart::new();
        cart.add_entry(&product(1, "Pen", "Stationery", "10.0"), 1)
            .unwrap();
        cart.add_entry(&product(2, "Milk", "Dairy", "25.0"), 2)
            .unwrap();

        let max = most_expensive_entry(&cart).unwrap();
        assert_eq!(max.name, "Milk");
        assert_eq!(max.line_total().minor(), 5000);
    }

    #[test]
    fn test_most_expensive_tie_goes_to_earliest() {
        let mut cart = Cart::new();
        // Both lines total 30.00; the first added must win.
        cart.add_entry(&product(1, "Pen", "Stationery", "10.0"), 3)
            .unwrap();
        cart.add_entry(&product(2, "Glue", "Stationery", "15.0"), 2)
            .unwrap();

        let max = most_expensive_entry(&cart).unwrap();
        assert_eq!(max.name, "Pen");
    }

    #[test]
    fn test_most_expensive_empty_cart_is_none() {
        assert!(most_expensive_entry(&Cart::new()).is_none());
    }

    #[test]
    fn test_checkout_refuses_empty_cart() {
        let result = checkout(&Cart::new(), &coupon_table(), "SAVE5");
        assert!(matches!(result, Err(CoreError::EmptyCart)));
    }

    #[test]
    fn test_checkout_percentage_coupon() {
        // SAVE5 → 5 > 1 ⇒ percentage: subtotal 30.00, discount 1.50,
        // after 28.50, tax 5.13, total 33.63
        let breakdown = checkout(&pen_cart(), &coupon_table(), "SAVE5").unwrap();

        assert_eq!(breakdown.subtotal.minor(), 3000);
        assert_eq!(breakdown.discount.minor(), 150);
        assert_eq!(breakdown.tax.minor(), 513);
        assert_eq!(breakdown.total.minor(), 3363);
    }

    #[test]
    fn test_checkout_flat_coupon() {
        // FLAT2 → 0.5 ≤ 1 ⇒ absolute: discount 0.50, after 29.50,
        // tax 5.31, total 34.81
        let breakdown = checkout(&pen_cart(), &coupon_table(), "FLAT2").unwrap();

        assert_eq!(breakdown.subtotal.minor(), 3000);
        assert_eq!(breakdown.discount.minor(), 50);
        assert_eq!(breakdown.tax.minor(), 531);
        assert_eq!(breakdown.total.minor(), 3481);
    }

    #[test]
    fn test_checkout_unknown_coupon_means_no_discount() {
        let breakdown = checkout(&pen_cart(), &coupon_table(), "NONE").unwrap();

        assert_eq!(breakdown.discount, Money::zero());
        assert_eq!(breakdown.subtotal.minor(), 3000);
        assert_eq!(breakdown.tax.minor(), 540);
        assert_eq!(breakdown.total.minor(), 3540);
    }

    #[test]
    fn test_checkout_discount_can_exceed_subtotal() {
        // Subtotal 0.50, flat coupon 1.00: after −0.50, tax −0.09,
        // total −0.59. Reproduced, not clamped.
        let mut cart = Cart::new();
        cart.add_entry(&product(1, "Eraser", "Stationery", "0.5"), 1)
            .unwrap();

        let mut table = CouponTable::new();
        table.insert("BIG", Discount::from_value(Money::parse("1").unwrap()));

        let breakdown = checkout(&cart, &table, "BIG").unwrap();
        assert_eq!(breakdown.subtotal.minor(), 50);
        assert_eq!(breakdown.discount.minor(), 100);
        assert_eq!(breakdown.tax.minor(), -9);
        assert_eq!(breakdown.total.minor(), -59);
        assert!(breakdown.total.is_negative());
    }

    #[test]
    fn test_checkout_lines_follow_cart_order() {
        let mut cart = Cart::new();
        let pen = product(1, "Pen", "Stationery", "10.0");
        cart.add_entry(&pen, 3).unwrap();
        cart.add_entry(&product(2, "Milk", "Dairy", "25.0"), 1)
            .unwrap();
        // Duplicate entry for the same product stays a separate line.
        cart.add_entry(&pen, 1).unwrap();

        let breakdown = checkout(&cart, &CouponTable::new(), "NONE").unwrap();
        let names: Vec<&str> = breakdown.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Pen", "Milk", "Pen"]);
        assert_eq!(breakdown.lines[0].line_total.minor(), 3000);
        assert_eq!(breakdown.lines[2].line_total.minor(), 1000);
    }
}
