//! # Cart
//!
//! The user's in-progress selection of products and quantities.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Cart State Changes                        │
//! │                                                             │
//! │  Menu Action              Operation         State Change    │
//! │  ───────────              ─────────         ────────────    │
//! │  Add to Cart ───────────► add_entry() ────► entries.push    │
//! │  View Cart ─────────────► (read only)                       │
//! │  Checkout ──────────────► pricing::checkout (read only)     │
//! │  (after checkout) ──────► clear() ────────► entries.clear   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `quantity > 0` for every entry (rejected at add time)
//! - Every entry's product id existed in the catalog at add time; the
//!   catalog is immutable, so no later revalidation is needed
//! - Re-adding a product appends a SECOND entry; entries are never
//!   merged; duplicate entries for the same product are legal and their
//!   line totals simply sum at pricing time
//! - Entries are never removed individually, only via whole-cart clear

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;

/// An entry in the shopping cart.
///
/// ## Design Notes
/// Holds a snapshot of the product fields it needs (`name`, `category`,
/// `unit_price`) rather than a borrow into the catalog. The catalog is
/// immutable after load, so the snapshot can never go stale, and the
/// cart stays free of lifetime plumbing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEntry {
    /// Id of the catalog product this entry was created from.
    pub product_id: u32,

    /// Product name at time of adding.
    pub name: String,

    /// Product category at time of adding.
    pub category: String,

    /// Unit price at time of adding.
    pub unit_price: Money,

    /// Quantity (always > 0).
    pub quantity: i64,
}

impl CartEntry {
    /// Creates a cart entry snapshotting the given product.
    fn from_product(product: &Product, quantity: i64) -> Self {
        CartEntry {
            product_id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            unit_price: product.unit_price,
            quantity,
        }
    }

    /// The line total: unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart: an ordered sequence of entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
        }
    }

    /// Appends a new entry for the given product.
    ///
    /// ## Behavior
    /// - `quantity ≤ 0` is rejected and the cart is left unchanged
    /// - No merging: adding the same product twice produces two entries
    ///
    /// The caller resolves the product id against the catalog first, so an
    /// unknown id never reaches this function.
    pub fn add_entry(&mut self, product: &Product, quantity: i64) -> Result<(), ValidationError> {
        validate_quantity(quantity)?;
        self.entries.push(CartEntry::from_product(product, quantity));
        Ok(())
    }

    /// Removes all entries unconditionally.
    ///
    /// Called exactly once, immediately after a successful checkout.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    #[inline]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of entries (not summed quantities).
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
