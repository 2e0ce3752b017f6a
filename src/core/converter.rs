//! Row conversion from Mint transactions to YNAB records
//!
//! The converter is the filter-and-transform stage of the pipeline. It holds
//! the [`CategoryMap`] and applies the fixed column transform:
//!
//! - `Date` from the Mint date
//! - `Payee` from the Mint description
//! - `Category` from the mapping lookup (empty when unmapped)
//! - `Memo` from the original Mint category
//! - the amount routed to `Outflow` for debits, `Inflow` otherwise
//!
//! Rows whose category is excluded are dropped, even when a mapping exists
//! for them.

use crate::core::CategoryMap;
use crate::types::{MintTransaction, YnabRecord};

/// Converts Mint transactions to YNAB records using a category map
#[derive(Debug, Clone, Default)]
pub struct Converter {
    categories: CategoryMap,
}

impl Converter {
    /// Create a converter over the given category rules
    pub fn new(categories: CategoryMap) -> Self {
        Self { categories }
    }

    /// Access the underlying category rules
    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    /// Convert a single Mint transaction to a YNAB record
    ///
    /// Applies the column transform unconditionally; exclusion filtering is
    /// the caller's concern (see [`Converter::convert_all`]). The amount is
    /// passed through as-is and routed by the case-insensitive debit check.
    pub fn convert_row(&self, tx: &MintTransaction) -> YnabRecord {
        let (outflow, inflow) = if tx.is_debit() {
            (tx.amount.clone(), String::new())
        } else {
            (String::new(), tx.amount.clone())
        };

        YnabRecord {
            date: tx.date.clone(),
            payee: tx.description.clone(),
            category: self.categories.resolve(&tx.category).to_string(),
            memo: tx.category.clone(),
            outflow,
            inflow,
        }
    }

    /// Convert all non-excluded transactions, preserving input order
    ///
    /// Returns the converted records together with the count of rows that
    /// were dropped by the exclusion list.
    pub fn convert_all(&self, transactions: &[MintTransaction]) -> (Vec<YnabRecord>, usize) {
        let mut records = Vec::with_capacity(transactions.len());
        let mut excluded = 0;

        for tx in transactions {
            if self.categories.is_excluded(&tx.category) {
                excluded += 1;
                continue;
            }
            records.push(self.convert_row(tx));
        }

        (records, excluded)
    }
}
