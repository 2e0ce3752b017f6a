//! End-to-end conversion pipeline
//!
//! This module orchestrates the complete conversion, delegating:
//! - Mapping and exclusion parsing to `io::mapping_file`
//! - CSV input to `io::reader::MintReader` (iterator interface)
//! - Row transformation to `core::Converter`
//! - CSV output to `io::csv_format::write_ynab_csv`
//!
//! # Error Handling
//!
//! Fatal errors (missing files, mapping syntax errors, write failures) are
//! returned immediately. Malformed transaction rows are logged to stderr,
//! counted, and skipped; processing continues with the next row.
//!
//! # Missing-Mapping Gate
//!
//! Before any output is written, every category in the input must be either
//! mapped or excluded. Otherwise the pipeline stops with
//! [`ConvertError::MissingMappings`] listing the offenders, so one run of the
//! tool tells the user everything the mapping table still needs.

use crate::core::{CategoryMap, Converter};
use crate::io::csv_format::write_ynab_csv;
use crate::io::mapping_file::{load_excluded_categories, load_mappings};
use crate::io::reader::MintReader;
use crate::types::{ConvertError, MintTransaction};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Counters describing what a conversion run did
///
/// Reported to stderr on success so the user can sanity-check the run
/// without opening the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Valid transaction rows parsed from the input
    pub rows_read: usize,

    /// Records written to the output file
    pub written: usize,

    /// Rows dropped because their category is excluded
    pub excluded: usize,

    /// Malformed rows skipped during parsing
    pub malformed: usize,
}

/// Convert a Mint export, writing YNAB CSV to the given writer
///
/// This is the whole pipeline minus output-file creation, kept separate so
/// tests can convert into an in-memory buffer.
///
/// # Arguments
///
/// * `transactions` - Path to the Mint CSV export
/// * `mappings` - Path to the category mapping file
/// * `excludes` - Optional path to the exclusion list
/// * `output` - Writer receiving the YNAB CSV
///
/// # Errors
///
/// Returns an error if any input file is missing or unreadable, the mapping
/// file has a syntax error, the input contains categories that are neither
/// mapped nor excluded, or the output cannot be written.
pub fn convert_to_writer(
    transactions: &Path,
    mappings: &Path,
    excludes: Option<&Path>,
    output: &mut dyn Write,
) -> Result<ConvertSummary, ConvertError> {
    let categories = CategoryMap::new(load_mappings(mappings)?, load_excluded_categories(excludes)?);

    // Buffer the input rows: the missing-mapping gate needs to see every
    // category before any output is written.
    let mut rows: Vec<MintTransaction> = Vec::new();
    let mut malformed = 0;
    for result in MintReader::new(transactions)? {
        match result {
            Ok(tx) => rows.push(tx),
            Err(e) => {
                eprintln!("Skipping row: {}", e);
                malformed += 1;
            }
        }
    }

    let missing = categories.missing_mappings(rows.iter().map(|tx| tx.category.as_str()));
    if !missing.is_empty() {
        return Err(ConvertError::MissingMappings {
            categories: missing,
        });
    }

    let converter = Converter::new(categories);
    let (records, excluded) = converter.convert_all(&rows);

    write_ynab_csv(&records, output).map_err(|message| ConvertError::Io { message })?;

    Ok(ConvertSummary {
        rows_read: rows.len(),
        written: records.len(),
        excluded,
        malformed,
    })
}

/// Convert a Mint export into a new YNAB CSV file
///
/// Creates (or truncates) the output file and runs the pipeline. A zero-row
/// input still produces a header-only output file.
pub fn run(
    transactions: &Path,
    mappings: &Path,
    excludes: Option<&Path>,
    out: &Path,
) -> Result<ConvertSummary, ConvertError> {
    let file = File::create(out).map_err(|e| ConvertError::Io {
        message: format!("Failed to create output file '{}': {}", out.display(), e),
    })?;
    let mut writer = BufWriter::new(file);

    let summary = convert_to_writer(transactions, mappings, excludes, &mut writer)?;
    writer.flush()?;

    Ok(summary)
}
