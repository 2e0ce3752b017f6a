//! CSV format handling for Mint input rows and YNAB output
//!
//! This module centralizes all CSV format concerns, providing:
//! - The fixed Mint and YNAB column layouts
//! - Conversion from raw CSV records to domain types
//! - YNAB output serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{MintTransaction, YnabRecord};
use csv::StringRecord;
use std::io::Write;

/// Number of columns in a Mint export row
///
/// Order: date, description, original_description, amount,
/// transaction_type, category, account, label, notes.
pub const MINT_FIELD_COUNT: usize = 9;

/// YNAB import header, written literally as the first output row
pub const YNAB_HEADER: [&str; 6] = ["Date", "Payee", "Category", "Memo", "Outflow", "Inflow"];

/// Convert a raw CSV record to a MintTransaction
///
/// Fields are bound by position per the fixed Mint schema (serde positional
/// deserialization, no headers). A row with the wrong field count is
/// rejected so a shifted column cannot silently land in the wrong output
/// field.
///
/// # Arguments
///
/// * `record` - A raw CSV record (already trimmed by the reader)
///
/// # Returns
///
/// Result containing either:
/// - Ok(MintTransaction) - Successfully converted row
/// - Err(String) - Error message describing the conversion failure
pub fn convert_mint_record(record: &StringRecord) -> Result<MintTransaction, String> {
    if record.len() != MINT_FIELD_COUNT {
        return Err(format!(
            "expected {} fields, got {}",
            MINT_FIELD_COUNT,
            record.len()
        ));
    }

    record
        .deserialize(None)
        .map_err(|e| format!("Failed to deserialize row: {}", e))
}

/// Write YNAB records to CSV format
///
/// Writes the literal YNAB header followed by one row per record, in input
/// order. A zero-record slice produces a header-only file.
///
/// # Arguments
///
/// * `records` - Slice of YNAB records to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_ynab_csv(records: &[YnabRecord], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    // Write header
    writer
        .write_record(YNAB_HEADER)
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    // Write each record
    for record in records {
        writer
            .write_record([
                record.date.as_str(),
                record.payee.as_str(),
                record.category.as_str(),
                record.memo.as_str(),
                record.outflow.as_str(),
                record.inflow.as_str(),
            ])
            .map_err(|e| format!("Failed to write YNAB record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
