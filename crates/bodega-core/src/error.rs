//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Error Types                           │
//! │                                                             │
//! │  bodega-core errors (this file)                             │
//! │  ├── CoreError        - General domain errors               │
//! │  └── ValidationError  - Input validation failures           │
//! │                                                             │
//! │  bodega-cli errors (separate crate)                         │
//! │  └── AppError         - Load/render/I/O failures            │
//! │                                                             │
//! │  Flow: ValidationError → CoreError → AppError → console     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They are soft: the interactive loop reports them and continues.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not present in the catalog.
    ///
    /// ## When This Occurs
    /// - The user typed an id that was never loaded from the catalog file
    /// - The catalog file simply doesn't contain the product
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Checkout was requested on an empty cart.
    ///
    /// Checkout is refused entirely in this case; no breakdown is produced
    /// and the cart is left untouched.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input or loaded data doesn't meet
/// requirements. Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., unparsable amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product id in the catalog file).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
