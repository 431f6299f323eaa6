//!
//! In-memory quote dataset shared by the plugin server.
//!
//! This crate aggregates:
//! - `error` — unified error type `StoreError` used across the workspace.
//! - `result` — handy `Result<T, StoreError>` alias.
//! - `record` — the `QuoteRecord` triple and dataset line parsing.
//! - `store` — the `QuoteStore` sequence and the random-quote query.
//!
//! The dataset is a flat semicolon-delimited text file, one record per line,
//! no header row. There is no escaping scheme: a field that itself contains
//! `;` corrupts the row and is rejected by the field-count check. This is a
//! known limitation of the dataset format, not something the parser repairs.
#![warn(missing_docs)]
pub mod error;
pub mod record;
pub mod result;
pub mod store;

pub use error::StoreError;
pub use record::QuoteRecord;
pub use result::Result;
pub use store::{QuoteSelection, QuoteStore};
