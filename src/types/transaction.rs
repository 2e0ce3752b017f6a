//! Transaction record types for the Mint-to-YNAB converter
//!
//! This module defines the source (Mint) and destination (YNAB) row shapes
//! used throughout the conversion pipeline. Amounts are carried as opaque
//! strings: the converter routes them to the outflow or inflow column but
//! never parses or validates them.

use serde::Deserialize;

/// A single transaction row from a Mint CSV export
///
/// Fields are bound by position, matching the fixed Mint column order:
/// date, description, original_description, amount, transaction_type,
/// category, account, label, notes. The file's own header row is skipped
/// by the reader rather than used for field binding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MintTransaction {
    /// Transaction date, passed through unparsed
    pub date: String,

    /// Cleaned-up merchant/payee description (becomes the YNAB payee)
    pub description: String,

    /// Raw description as reported by the bank (not carried to output)
    pub original_description: String,

    /// Transaction amount, passed through unparsed
    pub amount: String,

    /// Either `debit` or `credit` (compared case-insensitively)
    pub transaction_type: String,

    /// Mint category label; the key used for mapping and exclusion
    pub category: String,

    /// Source account name (not carried to output)
    pub account: String,

    /// User-applied labels (not carried to output)
    pub label: String,

    /// Free-form notes (not carried to output)
    pub notes: String,
}

impl MintTransaction {
    /// Whether this transaction is a debit (money leaving the account)
    ///
    /// The comparison is case-insensitive: `debit`, `DEBIT`, and `Debit`
    /// all count. Anything else (typically `credit`) is treated as an
    /// inflow by the converter.
    pub fn is_debit(&self) -> bool {
        self.transaction_type.eq_ignore_ascii_case("debit")
    }
}

/// A single output row in YNAB's import format
///
/// Exactly one of `outflow`/`inflow` carries the amount; the other is the
/// empty string. `memo` preserves the original Mint category so the source
/// label survives the remapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YnabRecord {
    /// Transaction date, copied from the Mint row
    pub date: String,

    /// Payee, copied from the Mint description
    pub payee: String,

    /// Remapped YNAB category, or empty when the Mint category is unmapped
    pub category: String,

    /// The original Mint category, kept for traceability
    pub memo: String,

    /// Amount for debit transactions, empty otherwise
    pub outflow: String,

    /// Amount for non-debit transactions, empty otherwise
    pub inflow: String,
}
