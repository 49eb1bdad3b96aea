//! # App Error Type
//!
//! Unified error type for the CLI layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Error Flow in Bodega                        │
//! │                                                             │
//! │  Startup                                                    │
//! │  ───────                                                    │
//! │  Load { .. } / Malformed { .. }  ──► fatal: logged,         │
//! │                                      process exits non-zero │
//! │                                                             │
//! │  Menu loop                                                  │
//! │  ─────────                                                  │
//! │  CoreError (unknown product, empty cart, bad quantity)      │
//! │        ──► soft: user-facing message, loop continues        │
//! │                                                             │
//! │  Io on stdout/invoice write                                 │
//! │        ──► invoice write is soft; stdout failure aborts     │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use bodega_core::CoreError;
use thiserror::Error;

/// Errors surfaced by the CLI layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required input file could not be opened or read.
    ///
    /// Fatal at startup: the catalog is required for any further action.
    #[error("failed to read {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An input file line did not parse as a record.
    ///
    /// Also fatal at startup; names the file and 1-based line number.
    #[error("{file}:{line}: {reason}")]
    Malformed {
        file: String,
        line: usize,
        reason: String,
    },

    /// Domain error bubbled up from bodega-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// I/O failure on the console or the invoice file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_error_names_file_and_line() {
        let err = AppError::Malformed {
            file: "products.csv".to_string(),
            line: 3,
            reason: "expected 4 fields, got 2".to_string(),
        };
        assert_eq!(err.to_string(), "products.csv:3: expected 4 fields, got 2");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err = AppError::from(CoreError::ProductNotFound(9));
        assert_eq!(err.to_string(), "Product not found: 9");
    }
}
