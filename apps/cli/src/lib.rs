//! # Bodega CLI Library
//!
//! Core library for the Bodega terminal application.
//! This is the entry point that wires up logging, configuration, the
//! flat-file loaders, and the menu loop.
//!
//! ## Module Organization
//! ```text
//! bodega_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── AppConfig from env vars + defaults
//! ├── loader.rs       ◄─── Catalog/coupon flat-file parsing
//! ├── session.rs      ◄─── Session context (catalog/coupons/cart)
//! ├── menu.rs         ◄─── Interactive loop & console rendering
//! ├── invoice.rs      ◄─── Invoice rendering & file writing
//! └── error.rs        ◄─── AppError
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load configuration from `BODEGA_*` env vars
//! 3. Load catalog and coupon files (missing/malformed ⇒ fatal)
//! 4. Build the Session context (empty cart)
//! 5. Run the menu loop over stdin/stdout until confirmed exit or EOF

pub mod config;
pub mod error;
pub mod invoice;
pub mod loader;
pub mod menu;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::AppResult;
use session::Session;

/// Runs the application: load everything, then hand control to the menu
/// loop. Returns an error only for fatal startup failures or a broken
/// console stream.
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = AppConfig::from_env();
    info!(?config, "starting bodega");

    let catalog = loader::load_catalog(&config.products_path)?;
    let coupons = loader::load_coupons(&config.coupons_path)?;

    let mut session = Session::new(config, catalog, coupons);

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run_loop(&mut stdin.lock(), &mut stdout.lock(), &mut session)
}

/// Initializes tracing with an env-filter.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,bodega=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
