//! # Domain Types
//!
//! Core domain types used throughout Bodega.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Domain Types                           │
//! │                                                             │
//! │  ┌───────────────┐  ┌───────────────┐  ┌────────────────┐   │
//! │  │   Product     │  │   Catalog     │  │  CouponTable   │   │
//! │  │  ───────────  │  │  ───────────  │  │  ────────────  │   │
//! │  │  id (u32)     │  │  id → Product │  │  code →        │   │
//! │  │  name         │  │  sorted views │  │    Discount    │   │
//! │  │  category     │  └───────────────┘  └────────────────┘   │
//! │  │  unit_price   │                                          │
//! │  └───────────────┘  ┌───────────────┐  ┌────────────────┐   │
//! │                     │   TaxRate     │  │   Discount     │   │
//! │                     │  ───────────  │  │  ────────────  │   │
//! │                     │  bps (u32)    │  │  Flat(Money)   │   │
//! │                     │  1800 = 18%   │  │  Percent(bps)  │   │
//! │                     └───────────────┘  └────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both lookup tables are immutable after load: the loaders populate them
//! once at startup and the rest of the system only reads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_price, validate_product_id};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (GST as applied at checkout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a whole-percent value (for display only).
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0 / 100
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Created at catalog load, immutable afterwards, owned by the [`Catalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier from the catalog file (> 0).
    pub id: u32,

    /// Display name shown in listings and on the invoice.
    pub name: String,

    /// Category used for cart breakdowns and sorting.
    pub category: String,

    /// Unit price (≥ 0).
    pub unit_price: Money,
}

impl Product {
    /// Builds a validated product. Rejects `id == 0` and negative prices.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Money,
    ) -> Result<Self, ValidationError> {
        validate_product_id(id)?;
        validate_price(unit_price)?;

        Ok(Product {
            id,
            name: name.into(),
            category: category.into(),
            unit_price,
        })
    }
}

// =============================================================================
// Sort Mode
// =============================================================================

/// Catalog view orderings offered by the sort menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Ascending by unit price, ties unordered.
    PriceAscending,
    /// Descending by unit price, ties unordered.
    PriceDescending,
    /// Ascending lexicographic by category, ties unordered.
    Category,
}

// =============================================================================
// Catalog
// =============================================================================

/// The full set of purchasable products, keyed by id.
///
/// Populated once by the catalog loader; immutable afterwards. Because of
/// that, cart entries validated against the catalog at add time never need
/// revalidation.
#[derive(Debug, Default)]
pub struct Catalog {
    products: HashMap<u32, Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: HashMap::new(),
        }
    }

    /// Inserts a product at load time. Duplicate ids are rejected so the
    /// uniqueness invariant holds for the life of the process.
    pub fn insert(&mut self, product: Product) -> Result<(), ValidationError> {
        if self.products.contains_key(&product.id) {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: product.id.to_string(),
            });
        }
        self.products.insert(product.id, product);
        Ok(())
    }

    /// Looks up a product by id.
    #[inline]
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks whether the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns a snapshot of all products in ascending id order.
    ///
    /// Used for the plain product listing so the text UI is stable run to
    /// run (the backing map has no useful order of its own).
    pub fn listing(&self) -> Vec<Product> {
        let mut view: Vec<Product> = self.products.values().cloned().collect();
        view.sort_by_key(|p| p.id);
        view
    }

    /// Returns a sorted snapshot copy of the catalog.
    ///
    /// The catalog itself is never mutated; every call sorts a fresh copy.
    /// Sorts are stable, so equal keys keep their pre-sort relative order
    /// (which is unspecified; ties are unordered by contract).
    pub fn sorted_view(&self, mode: SortMode) -> Vec<Product> {
        let mut view: Vec<Product> = self.products.values().cloned().collect();
        match mode {
            SortMode::PriceAscending => view.sort_by_key(|p| p.unit_price),
            SortMode::PriceDescending => view.sort_by(|a, b| b.unit_price.cmp(&a.unit_price)),
            SortMode::Category => view.sort_by(|a, b| a.category.cmp(&b.category)),
        }
        view
    }
}

// =============================================================================
// Discount
// =============================================================================

/// The classified form of a coupon value.
///
/// ## The Disambiguation Rule
/// A raw coupon value `v` from the coupon file is interpreted as an
/// absolute currency amount when `v ≤ 1` and as a percentage otherwise:
///
/// ```text
/// 0.5  → Flat(0.50)        (50 minor units off)
/// 1    → Flat(1.00)
/// 5    → Percent(500 bps)  (5% of the subtotal)
/// 12.5 → Percent(1250 bps)
/// ```
///
/// The rule is fragile, but it is what existing coupon data encodes, so
/// it is preserved exactly. Classification happens once at load time, which
/// is equivalent to classifying at checkout because the table is
/// immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discount {
    /// Absolute amount off the subtotal.
    Flat(Money),
    /// Percentage of the subtotal, in basis points.
    Percent(u32),
}

impl Discount {
    /// Classifies a raw coupon value.
    ///
    /// A value in minor units `m` satisfies `v ≤ 1` exactly when
    /// `m ≤ 100`; above that, `m` doubles as the basis-point count
    /// (`v × 100`), which is why no second conversion is needed.
    pub fn from_value(value: Money) -> Self {
        if value.minor() <= 100 {
            Discount::Flat(value)
        } else {
            Discount::Percent(value.minor() as u32)
        }
    }

    /// Computes the discount amount for a given subtotal.
    pub fn amount_off(&self, subtotal: Money) -> Money {
        match *self {
            Discount::Flat(amount) => amount,
            Discount::Percent(bps) => subtotal.percentage(bps),
        }
    }
}

// =============================================================================
// Coupon Table
// =============================================================================

/// Mapping from coupon code to its classified discount.
///
/// Populated once by the coupon loader; immutable afterwards. An unknown
/// code simply yields no discount at checkout; it is not an error.
#[derive(Debug, Default)]
pub struct CouponTable {
    coupons: HashMap<String, Discount>,
}

impl CouponTable {
    /// Creates an empty coupon table.
    pub fn new() -> Self {
        CouponTable {
            coupons: HashMap::new(),
        }
    }

    /// Inserts a coupon rule at load time. The last occurrence of a
    /// repeated code wins, matching plain map semantics of the data file.
    pub fn insert(&mut self, code: impl Into<String>, discount: Discount) {
        self.coupons.insert(code.into(), discount);
    }

    /// Looks up a coupon code.
    #[inline]
    pub fn lookup(&self, code: &str) -> Option<&Discount> {
        self.coupons.get(code)
    }

    /// Number of coupon rules loaded.
    #[inline]
    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    /// Checks whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str, category: &str, price_minor: i64) -> Product {
        Product::new(id, name, category, Money::from_minor(price_minor)).unwrap()
    }

    #[test]
    fn test_tax_rate() {
        let gst = TaxRate::from_bps(1800);
        assert_eq!(gst.bps(), 1800);
        assert_eq!(gst.percent(), 18);
    }

    #[test]
    fn test_product_validation() {
        assert!(Product::new(0, "Pen", "Stationery", Money::from_minor(100)).is_err());
        assert!(Product::new(1, "Pen", "Stationery", Money::from_minor(-1)).is_err());
        assert!(Product::new(1, "Pen", "Stationery", Money::zero()).is_ok());
    }

    #[test]
    fn test_catalog_rejects_duplicate_id() {
        let mut catalog = Catalog::new();
        catalog.insert(product(1, "Pen", "Stationery", 1000)).unwrap();

        let err = catalog
            .insert(product(1, "Pencil", "Stationery", 500))
            .unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_listing_is_id_ordered() {
        let mut catalog = Catalog::new();
        catalog.insert(product(3, "Pen", "Stationery", 1000)).unwrap();
        catalog.insert(product(1, "Milk", "Dairy", 2500)).unwrap();
        catalog.insert(product(2, "Chips", "Snacks", 1500)).unwrap();

        let ids: Vec<u32> = catalog.listing().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_views() {
        let mut catalog = Catalog::new();
        catalog.insert(product(1, "Pen", "Stationery", 1000)).unwrap();
        catalog.insert(product(2, "Milk", "Dairy", 2500)).unwrap();
        catalog.insert(product(3, "Chips", "Snacks", 1500)).unwrap();

        let asc = catalog.sorted_view(SortMode::PriceAscending);
        let prices: Vec<i64> = asc.iter().map(|p| p.unit_price.minor()).collect();
        assert_eq!(prices, vec![1000, 1500, 2500]);

        let desc = catalog.sorted_view(SortMode::PriceDescending);
        let prices: Vec<i64> = desc.iter().map(|p| p.unit_price.minor()).collect();
        assert_eq!(prices, vec![2500, 1500, 1000]);

        let by_cat = catalog.sorted_view(SortMode::Category);
        let cats: Vec<&str> = by_cat.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(cats, vec!["Dairy", "Snacks", "Stationery"]);

        // Sorting views never mutates the catalog itself.
        let ids: Vec<u32> = catalog.listing().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_discount_classification() {
        // v ≤ 1 ⇒ absolute amount
        assert_eq!(
            Discount::from_value(Money::parse("0.5").unwrap()),
            Discount::Flat(Money::from_minor(50))
        );
        assert_eq!(
            Discount::from_value(Money::parse("1").unwrap()),
            Discount::Flat(Money::from_minor(100))
        );
        // v > 1 ⇒ percentage
        assert_eq!(
            Discount::from_value(Money::parse("5").unwrap()),
            Discount::Percent(500)
        );
        assert_eq!(
            Discount::from_value(Money::parse("12.5").unwrap()),
            Discount::Percent(1250)
        );
    }

    #[test]
    fn test_discount_amount_off() {
        let subtotal = Money::from_minor(3000);

        let flat = Discount::Flat(Money::from_minor(50));
        assert_eq!(flat.amount_off(subtotal).minor(), 50);

        let pct = Discount::Percent(500);
        assert_eq!(pct.amount_off(subtotal).minor(), 150);
    }

    #[test]
    fn test_coupon_table_lookup() {
        let mut table = CouponTable::new();
        table.insert("SAVE5", Discount::Percent(500));

        assert_eq!(table.lookup("SAVE5"), Some(&Discount::Percent(500)));
        assert_eq!(table.lookup("NONE"), None);
        assert_eq!(table.len(), 1);
    }
}
