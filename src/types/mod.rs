//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Source (Mint) and destination (YNAB) row types
//! - `error`: Error types for the converter

pub mod error;
pub mod transaction;

pub use error::ConvertError;
pub use transaction::{MintTransaction, YnabRecord};
