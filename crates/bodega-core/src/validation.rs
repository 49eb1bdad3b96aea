//! # Validation Module
//!
//! Input validation utilities for Bodega.
//!
//! Validation here is deliberately thin: existence and positivity checks
//! only. Anything richer (length limits, character sets) is out of scope
//! for this system.
//!
//! ## Usage
//! ```rust
//! use bodega_core::validation::{validate_product_id, validate_quantity};
//!
//! // Validate user input before a cart operation
//! validate_product_id(3).unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0); there is no upper bound
///
/// ## Example
/// ```rust
/// use bodega_core::validation::validate_quantity;
///
/// assert!(validate_quantity(5).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a product id.
///
/// ## Rules
/// - Must be positive (> 0); ids come from the catalog file
pub fn validate_product_id(id: u32) -> ValidationResult<()> {
    if id == 0 {
        return Err(ValidationError::MustBePositive {
            field: "product id".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price at catalog load.
///
/// ## Rules
/// - Must be non-negative (≥ 0); zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
