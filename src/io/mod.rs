//! I/O module
//!
//! Handles parsing of the three input files and CSV output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, output serialization)
//! - `reader` - Streaming Mint CSV reader with iterator interface
//! - `mapping_file` - Category mapping and exclusion list parsers

pub mod csv_format;
pub mod mapping_file;
pub mod reader;

pub use csv_format::{convert_mint_record, write_ynab_csv};
pub use mapping_file::{load_excluded_categories, load_mappings};
pub use reader::MintReader;
