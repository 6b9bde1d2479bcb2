//! Topic categories
//!
//! Every topic belongs to exactly one of seven fixed categories:
//! - `View`: stored queries (CREATE VIEW, querying and dropping views)
//! - `Constraint`: primary keys, foreign keys and other table constraints
//! - `Index`: index creation and usage
//! - `Dml`: statements that change data or tables (INSERT, DROP)
//! - `Query`: SELECT and its clauses (WHERE, ORDER BY, GROUP BY)
//! - `Join`: the join variants
//! - `Aggregate`: COUNT, SUM, AVG, MIN, MAX

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed set of topic categories.
///
/// The declaration order is the display order used for category listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    View,
    Constraint,
    Index,
    Dml,
    Query,
    Join,
    Aggregate,
}

impl Category {
    /// Get the string representation of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::View => "view",
            Category::Constraint => "constraint",
            Category::Index => "index",
            Category::Dml => "dml",
            Category::Query => "query",
            Category::Join => "join",
            Category::Aggregate => "aggregate",
        }
    }

    /// Human-readable label, as used in section headings
    pub fn label(&self) -> &'static str {
        match self {
            Category::View => "Views",
            Category::Constraint => "Keys and Constraints",
            Category::Index => "Indexes",
            Category::Dml => "Data Manipulation",
            Category::Query => "Queries",
            Category::Join => "Joins",
            Category::Aggregate => "Aggregate Functions",
        }
    }

    /// Get all categories
    pub fn all() -> &'static [Category] {
        &[
            Category::View,
            Category::Constraint,
            Category::Index,
            Category::Dml,
            Category::Query,
            Category::Join,
            Category::Aggregate,
        ]
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace('&', "and")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "view" | "views" => Ok(Category::View),
            "constraint" | "constraints" | "key" | "keys" | "keys and constraints" => {
                Ok(Category::Constraint)
            }
            "index" | "indexes" | "indices" => Ok(Category::Index),
            "dml" | "data manipulation" | "modifying data" => Ok(Category::Dml),
            "query" | "queries" | "querying data" => Ok(Category::Query),
            "join" | "joins" => Ok(Category::Join),
            "aggregate" | "aggregates" | "aggregate functions" => Ok(Category::Aggregate),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::all() {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(*category, parsed);
        }
    }

    #[test]
    fn test_category_labels_parse() {
        for category in Category::all() {
            let parsed: Category = category.label().parse().unwrap();
            assert_eq!(*category, parsed);
        }
    }

    #[test]
    fn test_category_aliases() {
        assert_eq!(Category::from_str("Joins").unwrap(), Category::Join);
        assert_eq!(Category::from_str("  KEYS & constraints ").unwrap(), Category::Constraint);
        assert_eq!(Category::from_str("indices").unwrap(), Category::Index);
        assert_eq!(Category::from_str("DML").unwrap(), Category::Dml);
    }

    #[test]
    fn test_unknown_category() {
        let err = Category::from_str("triggers").unwrap_err();
        assert!(matches!(err, Error::InvalidCategory(ref name) if name == "triggers"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Dml).unwrap();
        assert_eq!(json, "\"dml\"");
    }
}
