//! Quote records and dataset line parsing.
//!
//! Each dataset line is in format "QUOTE;AUTHOR;GENRE". Parsing preserves file
//! order and fails on the first row that does not have exactly three fields.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::result::Result;

/// Number of semicolon-separated fields per dataset row.
const FIELDS_PER_ROW: usize = 3;

/// Trait providing file parsing for quote records.
pub trait RecordParser {
    /// Parses quote records from a buffered reader.
    ///
    /// Every line is split on `;` into exactly three fields: quote text,
    /// author, genre. Returns an error naming the offending line if any row,
    /// blank lines included, has a different field count.
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<QuoteRecord>>;
}

/// One quote from the dataset: a (quote, author, genre) triple.
///
/// Records have no identity beyond structural equality; the dataset may
/// contain duplicates and the store keeps them all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// The quote text itself.
    pub quote: String,
    /// Author the quote is attributed to.
    pub author: String,
    /// Genre label from the dataset (unused by the query path).
    pub genre: String,
}

impl RecordParser for QuoteRecord {
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Self>> {
        let mut records = Vec::new();

        for (idx, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(StoreError::Io)?;
            let fields: Vec<&str> = line.split(';').collect();
            if fields.len() != FIELDS_PER_ROW {
                return Err(StoreError::MalformedRow {
                    line: idx + 1,
                    found: fields.len(),
                });
            }

            records.push(QuoteRecord {
                quote: fields[0].to_string(),
                author: fields[1].to_string(),
                genre: fields[2].to_string(),
            });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_in_file_order() {
        let data = "Be water.;Bruce Lee;wisdom\nCarpe diem.;Horace;wisdom\n";
        let records = QuoteRecord::parse_from_reader(Cursor::new(data)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].quote, "Be water.");
        assert_eq!(records[0].author, "Bruce Lee");
        assert_eq!(records[0].genre, "wisdom");
        assert_eq!(records[1].author, "Horace");
    }

    #[test]
    fn keeps_duplicate_rows() {
        let data = "Same.;Twin;genre\nSame.;Twin;genre\n";
        let records = QuoteRecord::parse_from_reader(Cursor::new(data)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn rejects_row_with_too_few_fields() {
        let data = "Only quote and author;Somebody\n";
        let err = QuoteRecord::parse_from_reader(Cursor::new(data)).unwrap_err();
        match err {
            StoreError::MalformedRow { line, found } => {
                assert_eq!(line, 1);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_interior_line_is_fatal_not_skipped() {
        // A blank line is a malformed row (one empty field), not a row to drop.
        let data = "Be water.;Bruce Lee;wisdom\n\nCarpe diem.;Horace;wisdom\n";
        let err = QuoteRecord::parse_from_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRow { line: 2, found: 1 }));
    }

    #[test]
    fn rejects_row_with_embedded_delimiter() {
        // No escaping scheme: a `;` inside the quote text bumps the field count.
        let data = "Ask; and it shall be given.;Anonymous;wisdom\n";
        let err = QuoteRecord::parse_from_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRow { found: 4, .. }));
    }

    #[test]
    fn reports_line_number_of_bad_row() {
        let data = "Fine.;A;x\nAlso fine.;B;y\nbroken row\n";
        let err = QuoteRecord::parse_from_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRow { line: 3, found: 1 }));
    }
}
