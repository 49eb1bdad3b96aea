//! # Flat-File Loaders
//!
//! Parses the catalog and coupon files into the core lookup tables.
//!
//! ## Record Formats
//! Line-oriented, comma-separated, no header, no quoting (embedded commas
//! are unsupported by the format):
//!
//! ```text
//! products.csv          coupons.csv
//! ────────────          ───────────
//! 1,Pen,Stationery,10   SAVE5,5
//! 2,Milk,Dairy,25.5     FLAT2,0.5
//! ```
//!
//! Blank lines are skipped. Any malformed line is a fatal load error that
//! names the file and 1-based line number. The catalog is required for
//! every further action, so there is no partial recovery.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use bodega_core::{Catalog, CouponTable, Discount, Money, Product};

use crate::error::{AppError, AppResult};

/// Loads the product catalog from a file.
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    let file = open(path)?;
    let catalog = parse_catalog(BufReader::new(file), &path.display().to_string())?;
    info!(path = %path.display(), products = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Loads the coupon table from a file.
pub fn load_coupons(path: &Path) -> AppResult<CouponTable> {
    let file = open(path)?;
    let coupons = parse_coupons(BufReader::new(file), &path.display().to_string())?;
    info!(path = %path.display(), coupons = coupons.len(), "coupon table loaded");
    Ok(coupons)
}

fn open(path: &Path) -> AppResult<File> {
    File::open(path).map_err(|source| AppError::Load {
        path: path.display().to_string(),
        source,
    })
}

/// Parses `id,name,category,price` records from any reader.
///
/// Split out from [`load_catalog`] so tests can feed in-memory input.
pub fn parse_catalog<R: BufRead>(reader: R, origin: &str) -> AppResult<Catalog> {
    let mut catalog = Catalog::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| AppError::Load {
            path: origin.to_string(),
            source,
        })?;
        let line_no = index + 1;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        let malformed = |reason: String| AppError::Malformed {
            file: origin.to_string(),
            line: line_no,
            reason,
        };

        let fields: Vec<&str> = record.split(',').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(malformed(format!("expected 4 fields, got {}", fields.len())));
        }

        let id: u32 = fields[0]
            .parse()
            .map_err(|_| malformed(format!("bad product id '{}'", fields[0])))?;
        let price = Money::parse(fields[3])
            .map_err(|e| malformed(format!("bad price '{}': {}", fields[3], e)))?;

        let product = Product::new(id, fields[1], fields[2], price)
            .map_err(|e| malformed(e.to_string()))?;
        catalog
            .insert(product)
            .map_err(|e| malformed(e.to_string()))?;
    }

    Ok(catalog)
}

/// Parses `code,value` records from any reader, classifying each value
/// into a flat or percentage discount as it goes.
pub fn parse_coupons<R: BufRead>(reader: R, origin: &str) -> AppResult<CouponTable> {
    let mut coupons = CouponTable::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| AppError::Load {
            path: origin.to_string(),
            source,
        })?;
        let line_no = index + 1;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        let malformed = |reason: String| AppError::Malformed {
            file: origin.to_string(),
            line: line_no,
            reason,
        };

        let fields: Vec<&str> = record.split(',').map(str::trim).collect();
        if fields.len() != 2 {
            return Err(malformed(format!("expected 2 fields, got {}", fields.len())));
        }
        if fields[0].is_empty() {
            return Err(malformed("coupon code is required".to_string()));
        }

        let value = Money::parse(fields[1])
            .map_err(|e| malformed(format!("bad coupon value '{}': {}", fields[1], e)))?;
        coupons.insert(fields[0], Discount::from_value(value));
    }

    Ok(coupons)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_catalog() {
        let input = "1,Pen,Stationery,10.0\n2,Milk,Dairy,25.5\n\n3,Chips,Snacks,15\n";
        let catalog = parse_catalog(Cursor::new(input), "products.csv").unwrap();

        assert_eq!(catalog.len(), 3);
        let pen = catalog.get(1).unwrap();
        assert_eq!(pen.name, "Pen");
        assert_eq!(pen.category, "Stationery");
        assert_eq!(pen.unit_price.minor(), 1000);
        assert_eq!(catalog.get(2).unwrap().unit_price.minor(), 2550);
    }

    #[test]
    fn test_parse_catalog_rejects_wrong_field_count() {
        let err = parse_catalog(Cursor::new("1,Pen,Stationery\n"), "products.csv").unwrap_err();
        assert_eq!(err.to_string(), "products.csv:1: expected 4 fields, got 3");
    }

    #[test]
    fn test_parse_catalog_rejects_bad_price() {
        let input = "1,Pen,Stationery,10.0\n2,Milk,Dairy,cheap\n";
        let err = parse_catalog(Cursor::new(input), "products.csv").unwrap_err();
        assert!(matches!(err, AppError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_parse_catalog_rejects_duplicate_id() {
        let input = "1,Pen,Stationery,10.0\n1,Pencil,Stationery,5.0\n";
        let err = parse_catalog(Cursor::new(input), "products.csv").unwrap_err();
        assert!(matches!(err, AppError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_parse_catalog_rejects_zero_id() {
        let err = parse_catalog(Cursor::new("0,Pen,Stationery,10.0\n"), "products.csv").unwrap_err();
        assert!(matches!(err, AppError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_parse_coupons_classifies_values() {
        let input = "SAVE5,5\nFLAT2,0.5\n";
        let coupons = parse_coupons(Cursor::new(input), "coupons.csv").unwrap();

        assert_eq!(coupons.lookup("SAVE5"), Some(&Discount::Percent(500)));
        assert_eq!(
            coupons.lookup("FLAT2"),
            Some(&Discount::Flat(Money::from_minor(50)))
        );
    }

    #[test]
    fn test_parse_coupons_rejects_bad_value() {
        let err = parse_coupons(Cursor::new("SAVE5,lots\n"), "coupons.csv").unwrap_err();
        assert!(matches!(err, AppError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let err = load_catalog(Path::new("definitely-missing-products.csv")).unwrap_err();
        assert!(matches!(err, AppError::Load { .. }));
    }
}
