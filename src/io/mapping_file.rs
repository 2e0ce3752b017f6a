//! Parsers for the category mapping and exclusion list files
//!
//! The mapping file is a plain text table, one `source -> destination` pair
//! per line:
//!
//! ```text
//! Coffee Shops -> Dining Out
//! Paycheck -> Income
//! ```
//!
//! The exclusion file is one category name per line. Both formats trim
//! whitespace and ignore blank lines.

use crate::types::ConvertError;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

fn read_text_file(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ConvertError::file_not_found(path)
        } else {
            ConvertError::Io {
                message: format!("Failed to read file '{}': {}", path.display(), e),
            }
        }
    })
}

/// Load source-to-destination category mappings from a text file
///
/// Each non-blank line must contain exactly one `->` separator. Both sides
/// are trimmed. Lines whose source side trims to empty are skipped; a later
/// pair for the same source overrides an earlier one.
///
/// # Returns
///
/// * `Ok(HashMap)` - The parsed mapping table (possibly empty)
/// * `Err(ConvertError::FileNotFound)` - The mapping file does not exist
/// * `Err(ConvertError::MappingSyntax)` - A line does not have exactly one
///   `->` separator, reported with its one-based line number
pub fn load_mappings(path: &Path) -> Result<HashMap<String, String>, ConvertError> {
    let content = read_text_file(path)?;
    parse_mappings(&content)
}

/// Parse mapping file content (pure, for testing)
pub fn parse_mappings(content: &str) -> Result<HashMap<String, String>, ConvertError> {
    let mut mappings = HashMap::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split("->");
        let (source, destination) = match (parts.next(), parts.next(), parts.next()) {
            (Some(source), Some(destination), None) => (source.trim(), destination.trim()),
            _ => return Err(ConvertError::mapping_syntax(index + 1, trimmed)),
        };

        if source.is_empty() {
            continue;
        }
        mappings.insert(source.to_string(), destination.to_string());
    }

    Ok(mappings)
}

/// Load the set of source categories to exclude from conversion
///
/// `None` means no exclusion file was given and yields an empty set.
/// Lines are trimmed; blank lines are ignored.
///
/// # Returns
///
/// * `Ok(HashSet)` - The exclusion set (possibly empty)
/// * `Err(ConvertError::FileNotFound)` - An exclusion file was named but
///   does not exist
pub fn load_excluded_categories(path: Option<&Path>) -> Result<HashSet<String>, ConvertError> {
    let Some(path) = path else {
        return Ok(HashSet::new());
    };

    let content = read_text_file(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_parse_mappings_basic() {
        let mappings = parse_mappings("Coffee Shops -> Dining Out\nPaycheck -> Income\n").unwrap();

        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings["Coffee Shops"], "Dining Out");
        assert_eq!(mappings["Paycheck"], "Income");
    }

    #[test]
    fn test_parse_mappings_empty_content() {
        assert!(parse_mappings("").unwrap().is_empty());
    }

    #[rstest]
    #[case::no_spaces("Coffee Shops->Dining Out", "Coffee Shops", "Dining Out")]
    #[case::extra_spaces("  Coffee Shops   ->   Dining Out  ", "Coffee Shops", "Dining Out")]
    #[case::empty_destination("Transfer ->", "Transfer", "")]
    fn test_parse_mappings_trimming(
        #[case] line: &str,
        #[case] source: &str,
        #[case] destination: &str,
    ) {
        let mappings = parse_mappings(line).unwrap();
        assert_eq!(mappings[source], destination);
    }

    #[test]
    fn test_parse_mappings_skips_blank_lines_and_empty_sources() {
        let content = "\n  \nCoffee Shops -> Dining Out\n-> Orphaned Destination\n";
        let mappings = parse_mappings(content).unwrap();

        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings["Coffee Shops"], "Dining Out");
    }

    #[test]
    fn test_parse_mappings_later_pair_overrides_earlier() {
        let content = "Coffee Shops -> Dining Out\nCoffee Shops -> Fun Money\n";
        let mappings = parse_mappings(content).unwrap();

        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings["Coffee Shops"], "Fun Money");
    }

    #[rstest]
    #[case::no_separator("Groceries\n", 1, "Groceries")]
    #[case::two_separators("a -> b -> c\n", 1, "a -> b -> c")]
    #[case::later_line("Coffee Shops -> Dining Out\nbroken line\n", 2, "broken line")]
    fn test_parse_mappings_syntax_errors(
        #[case] content: &str,
        #[case] line: usize,
        #[case] offending: &str,
    ) {
        let result = parse_mappings(content);
        assert_eq!(
            result.unwrap_err(),
            ConvertError::mapping_syntax(line, offending)
        );
    }

    #[test]
    fn test_load_mappings_from_file() {
        let file = create_temp_file("Coffee Shops -> Dining Out\n");
        let mappings = load_mappings(file.path()).unwrap();

        assert_eq!(mappings["Coffee Shops"], "Dining Out");
    }

    #[test]
    fn test_load_mappings_missing_file() {
        let result = load_mappings(Path::new("nonexistent.txt"));
        assert!(matches!(result, Err(ConvertError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_excluded_categories_none() {
        assert!(load_excluded_categories(None).unwrap().is_empty());
    }

    #[test]
    fn test_load_excluded_categories_from_file() {
        let file = create_temp_file("Credit Card Payment\n\n  Transfer  \n");
        let excluded = load_excluded_categories(Some(file.path())).unwrap();

        assert_eq!(excluded.len(), 2);
        assert!(excluded.contains("Credit Card Payment"));
        assert!(excluded.contains("Transfer"));
    }

    #[test]
    fn test_load_excluded_categories_missing_file() {
        let result = load_excluded_categories(Some(Path::new("nonexistent.txt")));
        assert!(matches!(result, Err(ConvertError::FileNotFound { .. })));
    }
}
