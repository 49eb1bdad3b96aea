//! # Configuration
//!
//! Application configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BODEGA_*`)
//! 2. Defaults (this file)
//!
//! The config is read-only after construction and passed by reference
//! through the interactive loop. No globals, no hot reloading.
//!
//! Note the GST rate is deliberately NOT here: it is a checkout-contract
//! constant (`bodega_core::GST_RATE_BPS`), not a deployment knob.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog file: `id,name,category,price` records, one per line.
    pub products_path: PathBuf,

    /// Coupon file: `code,value` records, one per line.
    pub coupons_path: PathBuf,

    /// Directory invoice files are written into.
    pub invoice_dir: PathBuf,

    /// Currency symbol prefixed to every rendered amount.
    pub currency_symbol: String,
}

impl AppConfig {
    /// Loads configuration from environment variables with fallback to
    /// defaults.
    ///
    /// | Variable            | Default        |
    /// |---------------------|----------------|
    /// | `BODEGA_PRODUCTS`   | `products.csv` |
    /// | `BODEGA_COUPONS`    | `coupons.csv`  |
    /// | `BODEGA_INVOICE_DIR`| `.`            |
    /// | `BODEGA_CURRENCY`   | `₹`            |
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();

        AppConfig {
            products_path: env::var("BODEGA_PRODUCTS")
                .map(PathBuf::from)
                .unwrap_or(defaults.products_path),

            coupons_path: env::var("BODEGA_COUPONS")
                .map(PathBuf::from)
                .unwrap_or(defaults.coupons_path),

            invoice_dir: env::var("BODEGA_INVOICE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.invoice_dir),

            currency_symbol: env::var("BODEGA_CURRENCY").unwrap_or(defaults.currency_symbol),
        }
    }
}

impl Default for AppConfig {
    /// Returns default configuration: both data files and the invoices
    /// live in the working directory.
    fn default() -> Self {
        AppConfig {
            products_path: PathBuf::from("products.csv"),
            coupons_path: PathBuf::from("coupons.csv"),
            invoice_dir: PathBuf::from("."),
            currency_symbol: "₹".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.products_path, PathBuf::from("products.csv"));
        assert_eq!(config.coupons_path, PathBuf::from("coupons.csv"));
        assert_eq!(config.invoice_dir, PathBuf::from("."));
        assert_eq!(config.currency_symbol, "₹");
    }
}
