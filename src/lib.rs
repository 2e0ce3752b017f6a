//! Mint-to-YNAB Converter Library
//! # Overview
//!
//! This library converts Mint transaction CSV exports to YNAB's import
//! format, remapping category labels through a user-supplied lookup table
//! and dropping excluded categories.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (MintTransaction, YnabRecord, ConvertError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::category_map`] - Category remapping and exclusion rules
//!   - [`core::converter`] - Row filter-and-transform
//! - [`io`] - Input parsing and CSV output:
//!   - [`io::mapping_file`] - Mapping table and exclusion list parsers
//!   - [`io::reader`] - Streaming Mint CSV reader
//!   - [`io::csv_format`] - Fixed-schema CSV format handling
//! - [`pipeline`] - End-to-end orchestration (files in, YNAB CSV out)
//!
//! # Pipeline
//!
//! A conversion is a single pass with four stages:
//!
//! 1. Load the mapping table (`source -> destination` pairs)
//! 2. Load the optional exclusion list (one category per line)
//! 3. Parse Mint rows from the fixed-schema CSV export
//! 4. Filter out excluded categories, transform the remaining rows, and
//!    write them with the literal YNAB header
//!
//! Before stage 4, every category seen in the input must be either mapped
//! or excluded; otherwise the run stops and reports the missing ones.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{CategoryMap, Converter};
pub use io::{load_excluded_categories, load_mappings, write_ynab_csv, MintReader};
pub use pipeline::{run, ConvertSummary};
pub use types::{ConvertError, MintTransaction, YnabRecord};
