//! Quote plugin server.
//!
//! This binary serves random quotes from a fixed dataset over HTTP and
//! advertises itself to a hosting chat agent through a plugin descriptor and
//! an OpenAPI document. Internally it wires together three building blocks:
//!
//! - `QuoteStore` — the semicolon-delimited dataset, parsed once at startup
//!   into an ordered in-memory sequence and shared read-only with handlers.
//! - `routes` — the axum router: the random-quote endpoint, the descriptor
//!   and schema documents, and static asset hosting.
//! - `config` — deployment settings read once from a TOML file (hostname,
//!   port, file paths); version and description come from the crate metadata.
//!
//! Startup is fail-fast: a missing config, a missing dataset, or a malformed
//! dataset row stops the process before the listener binds. After startup no
//! state mutates, so requests share the store behind an `Arc` with no locks.
//!
//! Usage example (CLI):
//! ```bash
//! quote_server --config plugin.toml --bind 0.0.0.0 --port 8080
//! ```
#![warn(missing_docs)]
mod args;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use log::info;

use quote_server::config::AppConfig;
use quote_server::error::ServerError;
use quote_server::routes::{self, AppState};
use quote_store::QuoteStore;

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_logger();
    let args = Args::parse();

    let config = AppConfig::load(&args.config)?;
    info!("Loaded config from {}", args.config.display());

    let store = QuoteStore::load(&config.app.quotes_file)?;
    info!(
        "Loaded {} quotes from {}",
        store.len(),
        config.app.quotes_file
    );

    let port = args.port.unwrap_or(config.app.port);
    let addr = SocketAddr::new(args.bind, port);

    let state = Arc::new(AppState { store, config });
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Quote server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
