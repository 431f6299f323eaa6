//! Error types for dataset loading.
//!
//! The `StoreError` enum unifies the failure cases seen while reading and
//! parsing the quote dataset, allowing callers to propagate a single error
//! type with `?`.
use std::io;

use thiserror::Error;

/// Unified error type for the quote store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error while opening or reading the dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A dataset row did not split into exactly three fields.
    ///
    /// Carries the 1-based line number and the field count that was observed.
    /// Any malformed row is fatal: the loader never installs a partial store.
    #[error("malformed dataset row at line {line}: expected 3 fields, found {found}")]
    MalformedRow {
        /// 1-based line number of the offending row.
        line: usize,
        /// Number of semicolon-separated fields found on that row.
        found: usize,
    },
}
