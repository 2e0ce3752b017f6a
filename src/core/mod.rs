//! Core business logic module
//!
//! This module contains the conversion rules and the row transform:
//! - `category_map` - Category remapping, exclusion, and missing-mapping checks
//! - `converter` - Mint row to YNAB record transformation

pub mod category_map;
pub mod converter;

pub use category_map::CategoryMap;
pub use converter::Converter;
