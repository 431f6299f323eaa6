//! Error types for server startup.
//!
//! The `ServerError` enum unifies the fatal startup failure cases: config
//! loading, dataset loading, and socket binding. Request-time failures never
//! surface here; "no matching quote" is a normal response and everything else
//! is handled by the HTTP layer.
use std::io;

use thiserror::Error;

use quote_store::StoreError;

/// Unified error type for the server binary.
#[derive(Error, Debug)]
pub enum ServerError {
    /// I/O error while reading config files or binding the listener.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while loading the quote dataset.
    #[error("Quote store error: {0}")]
    Store(#[from] StoreError),

    /// Failure while decoding the TOML config file.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),
}
