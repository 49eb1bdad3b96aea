//! # bodega-core: Pure Business Logic for Bodega
//!
//! This crate is the **heart** of Bodega. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Bodega Architecture                      │
//! │                                                             │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │                apps/cli (bodega-cli)                  │  │
//! │  │   menu loop ─► loaders ─► session ─► invoice writer   │  │
//! │  └──────────────────────────┬────────────────────────────┘  │
//! │                             │                               │
//! │  ┌──────────────────────────▼────────────────────────────┐  │
//! │  │           ★ bodega-core (THIS CRATE) ★                │  │
//! │  │                                                       │  │
//! │  │  ┌────────┐ ┌────────┐ ┌────────┐ ┌─────────────────┐ │  │
//! │  │  │ types  │ │ money  │ │  cart  │ │    pricing      │ │  │
//! │  │  │Catalog │ │ Money  │ │  Cart  │ │ subtotal, GST,  │ │  │
//! │  │  │Coupons │ │TaxRate │ │ Entry  │ │ checkout        │ │  │
//! │  │  └────────┘ └────────┘ └────────┘ └─────────────────┘ │  │
//! │  │                                                       │  │
//! │  │  NO I/O • NO CONSOLE • NO CLOCKS • PURE FUNCTIONS     │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Catalog, CouponTable, Discount)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart and its invariants
//! - [`pricing`] - The pricing engine: subtotals, discount, GST, checkout
//! - [`error`] - Domain error types
//! - [`validation`] - Existence/positivity checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Console, file system, and clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Money` instead of
// `use bodega_core::money::Money`

pub use cart::{Cart, CartEntry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{CheckoutBreakdown, InvoiceLine};
pub use types::{Catalog, CouponTable, Discount, Product, SortMode, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// GST rate applied at checkout, in basis points (1800 = 18%).
///
/// ## Why a constant?
/// The rate is part of the checkout contract, not configuration: it is
/// applied to the post-discount base (even a negative one) on every
/// checkout.
pub const GST_RATE_BPS: u32 = 1800;
