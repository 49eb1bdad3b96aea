//! # Invoice Renderer
//!
//! Serializes a checkout breakdown to a text file, one new file per
//! checkout.
//!
//! ## Artifact Shape
//! ```text
//! ------ INVOICE ------
//! Pen x3 = ₹30.00
//! Subtotal: ₹30.00
//! Discount: ₹1.50
//! GST (18%): ₹5.13
//! Total: ₹33.63
//! ---------------------
//! ```
//!
//! The filename is derived from the checkout timestamp
//! (`invoice_<unix-millis>.txt`), so every checkout leaves a distinct
//! artifact. This is the only persistence in the system.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use bodega_core::{CheckoutBreakdown, TaxRate, GST_RATE_BPS};

use crate::error::AppResult;

const HEADER: &str = "------ INVOICE ------";
const FOOTER: &str = "---------------------";

/// Renders the breakdown to the invoice text format.
///
/// Pure string building; writing is [`write_invoice`]'s job so tests can
/// assert on content without touching the filesystem.
pub fn render(breakdown: &CheckoutBreakdown, currency: &str) -> String {
    let mut out = String::new();

    out.push_str(HEADER);
    out.push('\n');

    for line in &breakdown.lines {
        out.push_str(&format!(
            "{} x{} = {}{}\n",
            line.name, line.quantity, currency, line.line_total
        ));
    }

    out.push_str(&format!("Subtotal: {}{}\n", currency, breakdown.subtotal));
    out.push_str(&format!("Discount: {}{}\n", currency, breakdown.discount));
    out.push_str(&format!(
        "GST ({}%): {}{}\n",
        TaxRate::from_bps(GST_RATE_BPS).percent(),
        currency,
        breakdown.tax
    ));
    out.push_str(&format!("Total: {}{}\n", currency, breakdown.total));

    out.push_str(FOOTER);
    out.push('\n');

    out
}

/// Writes the rendered invoice into `dir` and returns the file path.
pub fn write_invoice(
    dir: &Path,
    breakdown: &CheckoutBreakdown,
    currency: &str,
) -> AppResult<PathBuf> {
    let filename = format!("invoice_{}.txt", Utc::now().timestamp_millis());
    let path = dir.join(filename);

    fs::write(&path, render(breakdown, currency))?;
    info!(path = %path.display(), total = %breakdown.total, "invoice written");

    Ok(path)
}

// =============================================================================
// Unit Tests
// =============================================================================
