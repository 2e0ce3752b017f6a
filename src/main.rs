//! Mint-to-YNAB Converter CLI
//!
//! Command-line interface for converting Mint transaction exports to YNAB's
//! import format.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv mappings.txt
//! cargo run -- transactions.csv mappings.txt --excludes skip.txt
//! cargo run -- transactions.csv mappings.txt --out converted.csv
//! ```
//!
//! The program reads the Mint export and the category mapping file, drops
//! rows whose category is excluded, remaps the remaining categories, and
//! writes the result as a YNAB import CSV (default `ynab.csv`).
//!
//! Before converting, every category in the input must be either mapped or
//! excluded. Otherwise the unresolved categories are listed and the program
//! exits without writing output.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing files, mapping syntax error, unresolved categories,
//!   write failure, etc.)

use mint2ynab::cli;
use mint2ynab::pipeline;
use mint2ynab::types::ConvertError;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    match pipeline::run(
        &args.transactions,
        &args.mappings,
        args.excludes.as_deref(),
        &args.out,
    ) {
        Ok(summary) => {
            eprintln!(
                "Wrote {} record(s) to '{}' ({} row(s) read, {} excluded, {} malformed)",
                summary.written,
                args.out.display(),
                summary.rows_read,
                summary.excluded,
                summary.malformed
            );
        }
        Err(ConvertError::MissingMappings { categories }) => {
            // Report the full list so one run surfaces everything the
            // mapping table still needs.
            eprintln!(
                "Please exclude or add mappings for the following {} before continuing:",
                if categories.len() > 1 {
                    "categories"
                } else {
                    "category"
                }
            );
            for category in categories {
                eprintln!(" - {}", category);
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
