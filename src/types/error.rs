//! Error types for the Mint-to-YNAB converter
//!
//! This module defines all error types that can occur during conversion.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc. These are
//!   fatal and abort the run.
//! - **Mapping File Errors**: Syntax errors in the category mapping file.
//!   These are fatal: a broken mapping table would silently misfile rows.
//! - **Row Errors**: Malformed CSV rows in the transaction export. These are
//!   recoverable: the row is reported to stderr and skipped.
//! - **Missing Mappings**: Categories present in the input but neither
//!   mapped nor excluded. Fatal at the CLI level so the user can complete
//!   the table before converting.

use thiserror::Error;

/// Main error type for the converter
///
/// Each variant carries enough context to point the user at the offending
/// file and line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// File not found at the specified path
    ///
    /// Fatal: prevents the run from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    ///
    /// Fatal (permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV-level parse error in the transaction export
    ///
    /// Recoverable: the malformed row is skipped and processing continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    RowParse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A mapping file line does not have the `source -> destination` shape
    ///
    /// Fatal: an unreadable mapping table must be fixed, not worked around.
    #[error("Mapping syntax error at line {line}: expected 'source -> destination', got '{content}'")]
    MappingSyntax {
        /// One-based line number in the mapping file
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// Input categories that are neither mapped nor excluded
    ///
    /// Fatal at the CLI level: the run stops before any output is written
    /// so the user can extend the mapping table or the exclusion list.
    #[error("Missing category mappings: {}", categories.join(", "))]
    MissingMappings {
        /// The unmapped categories, sorted and deduplicated
        categories: Vec<String>,
    },
}

// Conversion from io::Error to ConvertError
impl From<std::io::Error> for ConvertError {
    fn from(error: std::io::Error) -> Self {
        ConvertError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ConvertError
impl From<csv::Error> for ConvertError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        ConvertError::RowParse {
            line,
            message: error.to_string(),
        }
    }
}

impl ConvertError {
    /// Create a FileNotFound error for the given path
    pub fn file_not_found(path: &std::path::Path) -> Self {
        ConvertError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a RowParse error with a known line number
    pub fn row_parse(line: u64, message: impl Into<String>) -> Self {
        ConvertError::RowParse {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create a MappingSyntax error
    pub fn mapping_syntax(line: usize, content: &str) -> Self {
        ConvertError::MappingSyntax {
            line,
            content: content.to_string(),
        }
    }
}
