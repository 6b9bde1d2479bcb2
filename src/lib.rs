//! # Sqlref - SQL Reference Catalog
//!
//! A read-only, searchable catalog of SQL study topics.
//!
//! Sqlref provides:
//! - Strongly-typed topic entries (views, keys, indexes, DML, queries, joins, aggregates)
//! - A Markdown content loader that flattens study guides into entries
//! - Merging of near-duplicate guides into one canonical entry per topic
//! - Lookup by id, listing by category and ranked free-text search
//! - A CLI and a small HTTP service over the same query interface

pub mod category;
pub mod topic;
pub mod content;
pub mod catalog;
pub mod server;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use category::Category;
pub use topic::{CommonQuestion, TopicEntry};
pub use catalog::{Catalog, CategoryCount, MatchKind, SearchHit};
pub use content::Document;

/// Result type alias for Sqlref operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Sqlref operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Topic not found: {0}")]
    NotFound(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Parse error in {source_name} at line {line}: {message}")]
    Parse {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("Duplicate topic id: {0}")]
    DuplicateId(String),

    #[error("Topic has no example query: {0}")]
    MissingExample(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "not_found",
            Error::InvalidCategory(_) => "invalid_category",
            Error::Parse { .. } => "parse",
            Error::DuplicateId(_) => "duplicate_id",
            Error::MissingExample(_) => "missing_example",
            Error::Io(_) => "io",
        }
    }
}
