//! # Menu Loop
//!
//! The interactive surface: a numbered menu dispatching to cart and
//! pricing operations. This module is pure glue; every computation lives
//! in `bodega-core`.
//!
//! ## Dispatch Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  1. View Products ──► catalog listing (id order)            │
//! │  2. Add to Cart ────► prompt id/qty ─► session.add_to_cart  │
//! │  3. View Cart ──────► lines + subtotal + category totals    │
//! │                       + most-expensive callout              │
//! │  4. Checkout ───────► prompt coupon ─► breakdown ─► invoice │
//! │                       file ─► clear cart                    │
//! │  5. Exit ───────────► Y/N confirmation                      │
//! │  6. Sort Products ──► submenu (price asc/desc, category)    │
//! │  other ─────────────► "Invalid choice", menu redisplays     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop is generic over `BufRead`/`Write` so tests drive it with
//! in-memory buffers. EOF on the input ends the loop cleanly.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use bodega_core::pricing;
use bodega_core::{Product, SortMode};

use crate::error::AppResult;
use crate::invoice;
use crate::session::Session;

const MENU: &str = "\n1. View Products\n2. Add to Cart\n3. View Cart\n4. Checkout\n5. Exit\n6. Sort Products";
const SORT_MENU: &str = "Sort Products by:\n1. Price Low to High\n2. Price High to Low\n3. Category";

/// Runs the interactive loop until the user confirms exit or the input
/// reaches EOF.
pub fn run_loop<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &mut Session,
) -> AppResult<()> {
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = read_line(input)? else {
            break;
        };
        debug!(choice = %choice, "menu dispatch");

        match choice.as_str() {
            "1" => view_products(out, session)?,
            "2" => add_to_cart(input, out, session)?,
            "3" => view_cart(out, session)?,
            "4" => checkout(input, out, session)?,
            "5" => {
                if confirm_exit(input, out)? {
                    writeln!(out, "Exiting...")?;
                    break;
                }
            }
            "6" => sort_products(input, out, session)?,
            other => {
                warn!(choice = %other, "invalid menu choice");
                writeln!(out, "Invalid choice")?;
            }
        }
    }

    Ok(())
}

// =============================================================================
// Menu Actions
// =============================================================================

fn view_products<W: Write>(out: &mut W, session: &Session) -> AppResult<()> {
    print_products(out, &session.catalog.listing(), &session.config.currency_symbol)
}

fn add_to_cart<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &mut Session,
) -> AppResult<()> {
    let Some(id_raw) = prompt(input, out, "Enter Product ID: ")? else {
        return Ok(());
    };
    let Some(qty_raw) = prompt(input, out, "Enter Quantity: ")? else {
        return Ok(());
    };

    // Both prompts run before validation; a bad id still consumes the
    // quantity prompt.
    let parsed = id_raw.parse::<u32>().ok().zip(qty_raw.parse::<i64>().ok());
    match parsed {
        Some((product_id, quantity)) => match session.add_to_cart(product_id, quantity) {
            Ok(()) => writeln!(out, "Added to cart")?,
            Err(err) => {
                warn!(%err, "add to cart rejected");
                writeln!(out, "Invalid product or quantity")?;
            }
        },
        None => {
            warn!(id = %id_raw, quantity = %qty_raw, "unparsable add-to-cart input");
            writeln!(out, "Invalid product or quantity")?;
        }
    }

    Ok(())
}

fn view_cart<W: Write>(out: &mut W, session: &Session) -> AppResult<()> {
    if session.cart.is_empty() {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }

    let symbol = &session.config.currency_symbol;

    for entry in session.cart.entries() {
        writeln!(
            out,
            "{} x{} = {}{}",
            entry.name,
            entry.quantity,
            symbol,
            entry.line_total()
        )?;
    }
    writeln!(out, "Subtotal: {}{}", symbol, pricing::subtotal(&session.cart))?;

    writeln!(out, "Category-wise Totals:")?;
    for (category, total) in pricing::category_totals(&session.cart) {
        writeln!(out, "{}: {}{}", category, symbol, total)?;
    }

    // Cart is non-empty here, so the callout always renders.
    if let Some(max) = pricing::most_expensive_entry(&session.cart) {
        writeln!(
            out,
            "Most expensive item: {} x{} = {}{}",
            max.name,
            max.quantity,
            symbol,
            max.line_total()
        )?;
    }

    Ok(())
}

fn checkout<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &mut Session,
) -> AppResult<()> {
    if session.cart.is_empty() {
        writeln!(out, "Cart is empty. Add products first.")?;
        return Ok(());
    }

    let Some(code) = prompt(input, out, "Enter coupon code (or NONE): ")? else {
        return Ok(());
    };

    let breakdown = match session.checkout(&code) {
        Ok(breakdown) => breakdown,
        Err(err) => {
            warn!(%err, "checkout refused");
            writeln!(out, "{}", err)?;
            return Ok(());
        }
    };

    if let Ok(payload) = serde_json::to_string(&breakdown) {
        debug!(%payload, "checkout breakdown");
    }

    match invoice::write_invoice(
        &session.config.invoice_dir,
        &breakdown,
        &session.config.currency_symbol,
    ) {
        Ok(path) => writeln!(out, "Invoice generated: {}", path.display())?,
        Err(err) => {
            warn!(%err, "invoice write failed");
            writeln!(out, "Failed to write invoice: {}", err)?;
        }
    }

    // A breakdown was produced, so the checkout succeeded: the cart is
    // cleared unconditionally, whatever became of the invoice file.
    session.cart.clear();

    Ok(())
}

fn confirm_exit<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> AppResult<bool> {
    let Some(answer) = prompt(input, out, "Are you sure you want to exit? (Y/N): ")? else {
        return Ok(true);
    };
    Ok(answer.eq_ignore_ascii_case("y"))
}

fn sort_products<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &Session,
) -> AppResult<()> {
    writeln!(out, "{}", SORT_MENU)?;
    let Some(choice) = read_line(input)? else {
        return Ok(());
    };

    let view = match choice.as_str() {
        "1" => session.catalog.sorted_view(SortMode::PriceAscending),
        "2" => session.catalog.sorted_view(SortMode::PriceDescending),
        "3" => session.catalog.sorted_view(SortMode::Category),
        other => {
            // An invalid sub-choice still lists the catalog, just unsorted.
            warn!(choice = %other, "invalid sort choice");
            writeln!(out, "Invalid choice")?;
            session.catalog.listing()
        }
    };

    print_products(out, &view, &session.config.currency_symbol)
}

// =============================================================================
// Console Helpers
// =============================================================================

fn print_products<W: Write>(out: &mut W, products: &[Product], symbol: &str) -> AppResult<()> {
    for product in products {
        writeln!(
            out,
            "{} | {} | {} | {}{}",
            product.id, product.name, product.category, symbol, product.unit_price
        )?;
    }
    Ok(())
}

/// Reads one line; `None` means EOF.
fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Writes a prompt (no trailing newline) and reads the answer.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> AppResult<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    read_line(input)
}

// =============================================================================
// Unit Tests
// =============================================================================
