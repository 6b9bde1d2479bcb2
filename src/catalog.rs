//! Reference catalog - read-only lookup over topic entries
//!
//! Provides the query operations:
//! - Exact lookup by id
//! - Listing by category in authoring order
//! - Case-insensitive search over titles and memory tricks
//! - Study questions, optionally per category

use std::collections::HashMap;
use serde::Serialize;
use crate::{Error, Result};
use crate::category::Category;
use crate::content::{bundled, merge_documents, Document};
use crate::topic::{CommonQuestion, TopicEntry};

/// How a search hit matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Title equals the query, ignoring case
    ExactTitle,
    /// Title contains the query
    Title,
    /// Only the memory trick contains the query
    MemoryTrick,
}

/// Search result with its match kind
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
    pub entry: &'a TopicEntry,
    pub matched: MatchKind,
}

/// Number of entries filed under one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Immutable catalog of topic entries.
///
/// Built once and only read afterwards, so a shared reference (or an `Arc`)
/// can be handed to any number of readers.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<TopicEntry>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from entries in authoring order
    pub fn new(entries: Vec<TopicEntry>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_id.insert(entry.id.clone(), idx).is_some() {
                return Err(Error::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries, by_id })
    }

    /// Parse and merge documents (first document wins) into a catalog
    pub fn from_documents(documents: &[Document]) -> Result<Self> {
        let entries = merge_documents(documents)?;
        tracing::debug!("Loaded {} topics from {} documents", entries.len(), documents.len());
        Self::new(entries)
    }

    /// Catalog of the guides compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_documents(&bundled::documents())
    }

    /// All entries in authoring order
    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup by id
    pub fn get_by_id(&self, id: &str) -> Result<&TopicEntry> {
        self.by_id
            .get(id)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Entries of a category, in authoring order
    pub fn list_by_category(&self, category: Category) -> Vec<&TopicEntry> {
        self.entries.iter().filter(|e| e.category == category).collect()
    }

    /// Entries of a category given by name; fails with `InvalidCategory`
    /// when the name is not one of the fixed categories
    pub fn list_by_category_name(&self, name: &str) -> Result<Vec<&TopicEntry>> {
        let category: Category = name.parse()?;
        Ok(self.list_by_category(category))
    }

    /// Case-insensitive substring search over titles and memory tricks.
    ///
    /// Exact title matches come first, then every other match in authoring
    /// order. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        // Whitespace inside the query is matched as given; only a blank query is rejected
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let mut exact = Vec::new();
        let mut partial = Vec::new();

        for entry in &self.entries {
            let title = entry.title.to_lowercase();
            if title == needle {
                exact.push(SearchHit { entry, matched: MatchKind::ExactTitle });
            } else if title.contains(&needle) {
                partial.push(SearchHit { entry, matched: MatchKind::Title });
            } else if entry
                .memory_trick
                .as_ref()
                .is_some_and(|trick| trick.to_lowercase().contains(&needle))
            {
                partial.push(SearchHit { entry, matched: MatchKind::MemoryTrick });
            }
        }

        exact.extend(partial);
        exact
    }

    /// Per-category counts in category order, zero counts included
    pub fn categories(&self) -> Vec<CategoryCount> {
        Category::all()
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: self.entries.iter().filter(|e| e.category == category).count(),
            })
            .collect()
    }

    /// Entries that carry a study question, optionally limited to one category
    pub fn questions(&self, category: Option<Category>) -> Vec<(&TopicEntry, &CommonQuestion)> {
        self.entries
            .iter()
            .filter(|e| category.is_none_or(|c| e.category == c))
            .filter_map(|e| e.common_question.as_ref().map(|q| (e, q)))
            .collect()
    }
}
