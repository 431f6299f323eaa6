//! The in-memory quote store and its random-quote query.
//!
//! A `QuoteStore` is built exactly once, at process startup, from the dataset
//! file. After that it is read-only: handlers share it behind an `Arc` and a
//! query is a plain linear scan plus a uniform random choice. The dataset is
//! small enough that no index or cache is warranted.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::seq::IndexedRandom;

use crate::record::{QuoteRecord, RecordParser};
use crate::result::Result;

/// Outcome of a random-quote query.
///
/// "No match" is a normal outcome, not an error, so it gets its own variant
/// instead of a record with nulled-out fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteSelection {
    /// A record was selected from the candidate set.
    Found(QuoteRecord),
    /// The candidate set was empty (no record matched the author filter).
    NotFound,
}

/// Ordered, immutable sequence of quote records.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    records: Vec<QuoteRecord>,
}

impl QuoteStore {
    /// Load the store from a semicolon-delimited dataset file.
    ///
    /// Fails if the file cannot be read or if any row does not have exactly
    /// three fields. On failure nothing is installed; the caller is expected
    /// to treat this as a fatal startup error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let records = QuoteRecord::parse_from_reader(BufReader::new(file))?;
        Ok(Self { records })
    }

    /// Build a store from already-parsed records. Used by tests.
    pub fn from_records(records: Vec<QuoteRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in file order.
    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    /// Select one record uniformly at random.
    ///
    /// With `author`, only records whose author equals the filter
    /// case-insensitively (exact equality, not substring) are candidates.
    /// Returns `QuoteSelection::NotFound` when the candidate set is empty.
    pub fn random_quote(&self, author: Option<&str>) -> QuoteSelection {
        let candidates: Vec<&QuoteRecord> = match author {
            Some(author) => {
                let wanted = author.to_lowercase();
                self.records
                    .iter()
                    .filter(|r| r.author.to_lowercase() == wanted)
                    .collect()
            }
            None => self.records.iter().collect(),
        };

        match candidates.choose(&mut rand::rng()) {
            Some(record) => QuoteSelection::Found((*record).clone()),
            None => QuoteSelection::NotFound,
        }
    }
}
