//!
//! HTTP layer of the quote plugin service.
//!
//! This crate aggregates:
//! - `config` — TOML application configuration loaded once at startup.
//! - `error` — unified startup error type `ServerError`.
//! - `manifest` — plugin descriptor templating and OpenAPI generation.
//! - `routes` — the axum router and request handlers.
//!
//! The binary entry point in `main.rs` glues these together: parse CLI, load
//! config, load the quote store, serve.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod manifest;
pub mod routes;

pub use config::AppConfig;
pub use error::ServerError;
