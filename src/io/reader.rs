//! Streaming Mint CSV reader with iterator interface
//!
//! Provides a streaming iterator over Mint transaction rows from a CSV file.
//! Delegates format concerns to the csv_format module.
//!
//! # Design
//!
//! Mint exports carry a header row, but the column set is fixed, so fields
//! are bound by position rather than by header name: the reader discards the
//! first row and converts every subsequent row through
//! [`csv_format::convert_mint_record`]. Rows are processed one at a time
//! without loading the whole file into memory.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator,
//!   with the one-based line number attached
//!
//! # Iterator Interface
//!
//! ```no_run
//! use mint2ynab::io::reader::MintReader;
//! use std::path::Path;
//!
//! let reader = MintReader::new(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(tx) => println!("{}: {}", tx.date, tx.description),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::convert_mint_record;
use crate::types::{ConvertError, MintTransaction};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Streaming Mint CSV reader
///
/// Provides an iterator interface over Mint transaction rows with constant
/// memory usage per row.
#[derive(Debug)]
pub struct MintReader {
    reader: csv::Reader<File>,
    // One-based line of the most recently read row; the header is line 1.
    line: u64,
}

impl MintReader {
    /// Create a new MintReader from a file path
    ///
    /// Opens the CSV file, discards the header row, and prepares for
    /// streaming iteration. The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (wrong counts are rejected per row,
    ///   with a line number, instead of aborting the whole read)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Returns
    ///
    /// * `Ok(MintReader)` if the file opened successfully
    /// * `Err(ConvertError::FileNotFound)` if the path does not exist
    /// * `Err(ConvertError::Io)` for any other open failure
    pub fn new(path: &Path) -> Result<Self, ConvertError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ConvertError::file_not_found(path)
            } else {
                ConvertError::Io {
                    message: format!("Failed to open file '{}': {}", path.display(), e),
                }
            }
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        // Discard the header row. An empty file has no header to discard
        // and simply yields no records.
        let mut header = StringRecord::new();
        reader.read_record(&mut header)?;

        Ok(Self { reader, line: 1 })
    }
}

impl Iterator for MintReader {
    type Item = Result<MintTransaction, ConvertError>;

    /// Get the next transaction row from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(MintTransaction))` - Successfully parsed row
    /// * `Some(Err(ConvertError))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(false) => None,
            Ok(true) => {
                self.line += 1;
                Some(
                    convert_mint_record(&record)
                        .map_err(|e| ConvertError::row_parse(self.line, e)),
                )
            }
            Err(e) => {
                self.line += 1;
                Some(Err(ConvertError::row_parse(
                    self.line,
                    format!("CSV parse error: {}", e),
                )))
            }
        }
    }
}
