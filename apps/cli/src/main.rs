//! # Bodega Application Entry Point
//!
//! Thin binary wrapper: the actual setup is in lib.rs for testability.
//! Fatal startup errors (missing catalog/coupon files, malformed records)
//! are reported and turn into a non-zero exit code; everything else is a
//! soft, in-loop condition handled by the menu.

use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    match bodega_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // run() installs the subscriber before anything can fail.
            error!(error = %err, "fatal");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
