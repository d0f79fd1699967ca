//! Evidence categories and the table that holds them
//!
//! The [`EvidenceTable`] is loaded once, validated, and then shared read-only
//! (behind an `Arc`) by every classifier and session in the process.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::ConfigError;

/// Default table shipped with the crate
const BUILTIN_TABLE: &str = include_str!("../data/evidence.json");

/// A single kind of evidence a player can bring up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceCategory {
    /// Unique identifier (e.g. "satellite")
    pub id: String,
    /// Lowercase substrings that trigger this category
    pub keywords: Vec<String>,
    /// Base persuasiveness score
    pub weight: u32,
    /// Human-readable label
    pub description: String,
    /// Canned responses, drawn at random
    pub rebuttals: Vec<String>,
}

impl EvidenceCategory {
    /// Whether any keyword occurs in already-lowercased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

#[derive(Debug, Deserialize)]
struct TableFile {
    categories: Vec<EvidenceCategory>,
}

/// Ordered, validated set of evidence categories
///
/// Declaration order is significant: it decides ties between categories of
/// equal weight.
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceTable {
    categories: Vec<EvidenceCategory>,
}

impl EvidenceTable {
    /// Build a table, normalizing keywords and rejecting invalid entries
    pub fn new(categories: Vec<EvidenceCategory>) -> Result<Self, ConfigError> {
        if categories.is_empty() {
            return Err(ConfigError::EmptyTable);
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(categories.len());

        for mut category in categories {
            if !seen.insert(category.id.clone()) {
                return Err(ConfigError::DuplicateCategory(category.id));
            }
            if category.weight == 0 {
                return Err(ConfigError::ZeroWeight(category.id));
            }
            if category.keywords.is_empty() {
                return Err(ConfigError::NoKeywords(category.id));
            }
            if category.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::EmptyKeyword(category.id));
            }
            if category.rebuttals.is_empty() {
                return Err(ConfigError::NoRebuttals(category.id));
            }

            for keyword in &mut category.keywords {
                *keyword = keyword.to_lowercase();
            }
            normalized.push(category);
        }

        Ok(Self {
            categories: normalized,
        })
    }

    /// The default five-category table
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json_str(BUILTIN_TABLE)
    }

    /// Parse a table from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: TableFile = serde_json::from_str(json)?;
        Self::new(file.categories).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected evidence table");
        })
    }

    /// Load a table from a JSON file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading evidence table");
        Self::from_json_str(&json)
    }

    /// Look up a category by id
    pub fn get(&self, id: &str) -> Option<&EvidenceCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Categories in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &EvidenceCategory> {
        self.categories.iter()
    }

    /// Category ids in declaration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, weight: u32) -> EvidenceCategory {
        EvidenceCategory {
            id: id.to_string(),
            keywords: vec![id.to_string()],
            weight,
            description: format!("{id} evidence"),
            rebuttals: vec!["No.".to_string()],
        }
    }

    #[test]
    fn test_builtin_table() {
        let table = EvidenceTable::builtin().unwrap();
        let ids: Vec<&str> = table.ids().collect();
        assert_eq!(
            ids,
            vec!["satellite", "gravity", "curvature", "time_zones", "circumnavigation"]
        );
        assert_eq!(table.get("curvature").unwrap().weight, 25);
        assert_eq!(table.get("satellite").unwrap().weight, 15);
        assert!(table.iter().all(|c| c.rebuttals.len() == 3));
    }

    #[test]
    fn test_keywords_are_lowercased() {
        let mut cat = category("nasa", 10);
        cat.keywords = vec!["NASA".to_string(), "Apollo".to_string()];
        let table = EvidenceTable::new(vec![cat]).unwrap();
        assert_eq!(table.get("nasa").unwrap().keywords, vec!["nasa", "apollo"]);
    }

    #[test]
    fn test_rejects_invalid_tables() {
        assert!(matches!(
            EvidenceTable::new(vec![]),
            Err(ConfigError::EmptyTable)
        ));
        assert!(matches!(
            EvidenceTable::new(vec![category("a", 1), category("a", 2)]),
            Err(ConfigError::DuplicateCategory(id)) if id == "a"
        ));
        assert!(matches!(
            EvidenceTable::new(vec![category("a", 0)]),
            Err(ConfigError::ZeroWeight(_))
        ));

        let mut no_rebuttals = category("b", 5);
        no_rebuttals.rebuttals.clear();
        assert!(matches!(
            EvidenceTable::new(vec![no_rebuttals]),
            Err(ConfigError::NoRebuttals(_))
        ));

        let mut blank = category("c", 5);
        blank.keywords.push("  ".to_string());
        assert!(matches!(
            EvidenceTable::new(vec![blank]),
            Err(ConfigError::EmptyKeyword(_))
        ));

        let mut silent = category("d", 5);
        silent.keywords.clear();
        assert!(matches!(
            EvidenceTable::new(vec![silent]),
            Err(ConfigError::NoKeywords(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            EvidenceTable::from_json_str("{\"categories\": [{\"id\": 3}]}"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            EvidenceTable::from_path("/nonexistent/evidence.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
