//! Category lookup table with exclusion support
//!
//! This module owns the remapping rules: which Mint categories map to which
//! YNAB categories, and which Mint categories are dropped from the output
//! entirely. Exclusion wins over mapping: an excluded category's rows are
//! dropped even when a mapping for it exists.

use std::collections::{BTreeSet, HashMap, HashSet};

/// Category remapping rules for the conversion
///
/// Combines the user's mapping table with the optional exclusion set.
/// Lookups never fail: an unmapped category resolves to the empty string,
/// matching YNAB's "leave the category blank" import behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    mappings: HashMap<String, String>,
    excluded: HashSet<String>,
}

impl CategoryMap {
    /// Create a CategoryMap from a parsed mapping table and exclusion set
    pub fn new(mappings: HashMap<String, String>, excluded: HashSet<String>) -> Self {
        Self { mappings, excluded }
    }

    /// Resolve a Mint category to its YNAB category
    ///
    /// Returns the empty string when the category is absent from the
    /// mapping table.
    pub fn resolve(&self, category: &str) -> &str {
        self.mappings.get(category).map_or("", String::as_str)
    }

    /// Whether rows with this category should be dropped from the output
    pub fn is_excluded(&self, category: &str) -> bool {
        self.excluded.contains(category)
    }

    /// Collect input categories that are neither mapped nor excluded
    ///
    /// Used as a pre-flight gate by the CLI: conversion only proceeds once
    /// every category in the input is accounted for. The result is sorted
    /// and deduplicated for stable reporting.
    pub fn missing_mappings<'a, I>(&self, categories: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let missing: BTreeSet<&str> = categories
            .into_iter()
            .filter(|category| {
                !self.mappings.contains_key(*category) && !self.excluded.contains(*category)
            })
            .collect();

        missing.into_iter().map(str::to_string).collect()
    }

    /// Number of mapping entries
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether the mapping table is empty
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_map() -> CategoryMap {
        let mappings = HashMap::from([
            ("Coffee Shops".to_string(), "Dining Out".to_string()),
            ("Paycheck".to_string(), "Income".to_string()),
        ]);
        let excluded = HashSet::from(["Credit Card Payment".to_string()]);
        CategoryMap::new(mappings, excluded)
    }

    #[rstest]
    #[case::mapped("Coffee Shops", "Dining Out")]
    #[case::mapped_other("Paycheck", "Income")]
    #[case::unmapped("Pets", "")]
    #[case::excluded_but_unmapped("Credit Card Payment", "")]
    #[case::empty_category("", "")]
    fn test_resolve(#[case] category: &str, #[case] expected: &str) {
        assert_eq!(sample_map().resolve(category), expected);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        // Category labels are exact strings; "coffee shops" is a different
        // label than "Coffee Shops".
        assert_eq!(sample_map().resolve("coffee shops"), "");
    }

    #[rstest]
    #[case::excluded("Credit Card Payment", true)]
    #[case::mapped_not_excluded("Coffee Shops", false)]
    #[case::unknown("Pets", false)]
    fn test_is_excluded(#[case] category: &str, #[case] expected: bool) {
        assert_eq!(sample_map().is_excluded(category), expected);
    }

    #[test]
    fn test_exclusion_wins_over_mapping() {
        let mappings = HashMap::from([("Transfer".to_string(), "Ignore".to_string())]);
        let excluded = HashSet::from(["Transfer".to_string()]);
        let map = CategoryMap::new(mappings, excluded);

        assert!(map.is_excluded("Transfer"));
    }

    #[test]
    fn test_missing_mappings_sorted_and_deduplicated() {
        let map = sample_map();
        let categories = ["Pets", "Coffee Shops", "Gas", "Pets", "Credit Card Payment"];

        let missing = map.missing_mappings(categories);
        assert_eq!(missing, vec!["Gas".to_string(), "Pets".to_string()]);
    }

    #[test]
    fn test_missing_mappings_empty_when_all_covered() {
        let map = sample_map();
        let categories = ["Coffee Shops", "Paycheck", "Credit Card Payment"];

        assert!(map.missing_mappings(categories).is_empty());
    }

    #[test]
    fn test_empty_map_reports_everything_missing() {
        let map = CategoryMap::default();
        assert!(map.is_empty());

        let missing = map.missing_mappings(["Gas", "Pets"]);
        assert_eq!(missing, vec!["Gas".to_string(), "Pets".to_string()]);
    }
}
