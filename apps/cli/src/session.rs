//! # Session
//!
//! The per-run context object: catalog, coupon table, cart, and config,
//! constructed once at startup and passed `&mut` through the menu loop.
//!
//! There are no process-wide singletons; this struct IS the application
//! state, and the system is single-threaded by contract, so no locking is
//! needed anywhere.

use tracing::debug;

use bodega_core::pricing;
use bodega_core::{Cart, Catalog, CheckoutBreakdown, CoreError, CoreResult, CouponTable};

use crate::config::AppConfig;

/// Application state for one interactive session.
#[derive(Debug)]
pub struct Session {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub coupons: CouponTable,
    pub cart: Cart,
}

impl Session {
    /// Creates a session over freshly loaded lookup tables and an empty
    /// cart.
    pub fn new(config: AppConfig, catalog: Catalog, coupons: CouponTable) -> Self {
        Session {
            config,
            catalog,
            coupons,
            cart: Cart::new(),
        }
    }

    /// Resolves a product id against the catalog and appends a cart entry.
    ///
    /// ## Errors
    /// - `CoreError::ProductNotFound` for an id absent from the catalog
    /// - `CoreError::Validation` for `quantity ≤ 0`
    ///
    /// Both are soft: the menu reports them and continues.
    pub fn add_to_cart(&mut self, product_id: u32, quantity: i64) -> CoreResult<()> {
        debug!(product_id, quantity, "add_to_cart");

        let product = self
            .catalog
            .get(product_id)
            .ok_or(CoreError::ProductNotFound(product_id))?;
        self.cart.add_entry(product, quantity)?;

        Ok(())
    }

    /// Computes the checkout breakdown for the current cart.
    ///
    /// Does NOT clear the cart; the menu clears it unconditionally after
    /// a successful checkout, once the invoice has been handed off.
    pub fn checkout(&self, coupon_code: &str) -> CoreResult<CheckoutBreakdown> {
        debug!(coupon_code, entries = self.cart.entry_count(), "checkout");
        pricing::checkout(&self.cart, &self.coupons, coupon_code)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bodega_core::{Discount, Money, Product};

    fn test_session() -> Session {
        let mut catalog = Catalog::new();
        catalog
            .insert(Product::new(1, "Pen", "Stationery", Money::from_minor(1000)).unwrap())
            .unwrap();

        let mut coupons = CouponTable::new();
        coupons.insert("SAVE5", Discount::Percent(500));

        Session::new(AppConfig::default(), catalog, coupons)
    }

    #[test]
    fn test_add_to_cart_success_grows_cart_by_one() {
        let mut session = test_session();

        session.add_to_cart(1, 3).unwrap();
        assert_eq!(session.cart.entry_count(), 1);
        assert_eq!(session.cart.entries()[0].line_total().minor(), 3000);
    }

    #[test]
    fn test_add_to_cart_unknown_id_leaves_cart_unchanged() {
        let mut session = test_session();

        let err = session.add_to_cart(42, 1).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(42)));
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_add_to_cart_bad_quantity_leaves_cart_unchanged() {
        let mut session = test_session();

        assert!(session.add_to_cart(1, 0).is_err());
        assert!(session.add_to_cart(1, -2).is_err());
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_checkout_uses_coupon_table() {
        let mut session = test_session();
        session.add_to_cart(1, 3).unwrap();

        let breakdown = session.checkout("SAVE5").unwrap();
        assert_eq!(breakdown.total.minor(), 3363);

        // Session checkout never clears; that is the menu's job.
        assert_eq!(session.cart.entry_count(), 1);
    }
}
