//! Category Catalog
//!
//! Static table of word categories. The table is read once at startup from an
//! optional JSON file and never changes afterwards. A missing or broken file is
//! not an error for the player: [`Catalog::load`] logs a warning and falls back
//! to the small built-in table.
//!
//! # File format
//!
//! ```json
//! {
//!   "categories": [
//!     { "name": "AWS Compute", "words": ["EC2", "LAMBDA"] }
//!   ]
//! }
//! ```
//!
//! Category order in the file is the order shown on the selection screen.

use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Fallback table used when no external data is available
const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    ("AWS Compute", &["EC2", "LAMBDA", "FARGATE", "LIGHTSAIL", "BEANSTALK"]),
    ("AWS Storage", &["S3", "EBS", "EFS", "GLACIER", "SNOWBALL"]),
    ("AWS Database", &["RDS", "DYNAMODB", "AURORA", "REDSHIFT", "NEPTUNE"]),
];

/// Returns true if `c` can appear in a word (and therefore be guessed)
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

/// A named group of candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    words: Vec<String>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    words: Vec<String>,
}

/// Read-only, ordered collection of categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// The built-in default table
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|(name, words)| Category {
                name: name.to_string(),
                words: words.iter().map(|w| w.to_string()).collect(),
            })
            .collect();

        Catalog { categories }
    }

    /// Loads category data from `path`, falling back to [`Catalog::builtin`]
    ///
    /// Never fails. Any problem with the file is logged as a warning.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match Self::from_file(path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} categories from {}",
                    catalog.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                log::warn!(
                    "Using built-in categories ({}): {}",
                    path.display(),
                    e
                );
                Self::builtin()
            }
        }
    }

    /// Reads and validates a category file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Parses and validates category data in the JSON file format
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_entries(file.categories)
    }

    fn from_entries(entries: Vec<CategoryEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(entries.len());

        for entry in entries {
            let name = entry.name.trim().to_string();
            if name.is_empty() || entry.words.is_empty() {
                return Err(CatalogError::EmptyCategory(name));
            }
            if !seen.insert(name.clone()) {
                return Err(CatalogError::DuplicateCategory(name));
            }

            let mut words = Vec::with_capacity(entry.words.len());
            for raw in entry.words {
                let word = raw.trim().to_ascii_uppercase();
                if word.is_empty() || !word.chars().all(is_word_char) {
                    return Err(CatalogError::InvalidWord {
                        category: name,
                        word: raw,
                    });
                }
                words.push(word);
            }

            categories.push(Category { name, words });
        }

        Ok(Catalog { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: &str = include_str!("../assets/categories.json");

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["AWS Compute", "AWS Storage", "AWS Database"]
        );
        assert!(catalog.get("AWS Database").unwrap().contains("RDS"));
    }

    #[test]
    fn test_every_word_uses_word_alphabet() {
        for catalog in [Catalog::builtin(), Catalog::from_json_str(SHIPPED).unwrap()] {
            for category in catalog.categories() {
                for word in category.words() {
                    assert!(!word.is_empty());
                    assert!(word.chars().all(is_word_char), "bad word {}", word);
                }
            }
        }
    }

    #[test]
    fn test_shipped_catalog_keeps_order() {
        let catalog = Catalog::from_json_str(SHIPPED).unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.categories()[0].name(), "AWS Compute");
        assert_eq!(catalog.categories()[7].name(), "AWS Management");
        assert_eq!(catalog.get("AWS ML & AI").unwrap().words().len(), 10);
    }

    #[test]
    fn test_words_are_normalized() {
        let catalog = Catalog::from_json_str(
            r#"{"categories": [{"name": "Mixed", "words": [" lambda ", "s3"]}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.categories()[0].words(), &["LAMBDA", "S3"]);
    }

    #[test]
    fn test_malformed_data_is_rejected() {
        assert!(matches!(
            Catalog::from_json_str("{ not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            Catalog::from_json_str(r#"{"categories": []}"#),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            Catalog::from_json_str(r#"{"categories": [{"name": "A", "words": []}]}"#),
            Err(CatalogError::EmptyCategory(_))
        ));
        assert!(matches!(
            Catalog::from_json_str(r#"{"categories": [{"name": "A", "words": ["EC-2"]}]}"#),
            Err(CatalogError::InvalidWord { .. })
        ));
        assert!(matches!(
            Catalog::from_json_str(
                r#"{"categories": [{"name": "A", "words": ["X"]}, {"name": "A", "words": ["Y"]}]}"#
            ),
            Err(CatalogError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let catalog = Catalog::load("does/not/exist/categories.json");
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn test_malformed_file_falls_back_to_builtin() {
        let path = std::env::temp_dir().join(format!(
            "cloud_hangman_bad_catalog_{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"categories": [{"name": "Broken", "words": [""]}]}"#).unwrap();

        let catalog = Catalog::load(&path);
        assert_eq!(catalog, Catalog::builtin());

        fs::remove_file(&path).unwrap();
    }
}
