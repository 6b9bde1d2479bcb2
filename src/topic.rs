//! Topic entries - one per SQL concept in the guide

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// A sample exam question paired with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonQuestion {
    pub question: String,
    pub answer: String,
}

impl CommonQuestion {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// One SQL concept described in the guide.
///
/// Entries are built once when the catalog is loaded and never change
/// afterwards. The example query is display text only and is never parsed
/// or executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    /// Stable identifier, unique within the catalog (e.g. `creating-a-view`)
    pub id: String,
    /// Human-readable name
    pub title: String,
    pub category: Category,
    /// Literal SQL shown as illustration
    pub example_query: String,
    /// Prose bullets in authoring order
    pub explanation: Vec<String>,
    pub memory_trick: Option<String>,
    pub common_question: Option<CommonQuestion>,
}

impl TopicEntry {
    /// Create a new entry with the required fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        example_query: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            example_query: example_query.into(),
            explanation: Vec::new(),
            memory_trick: None,
            common_question: None,
        }
    }

    /// Append an explanation bullet
    pub fn with_explanation(mut self, bullet: impl Into<String>) -> Self {
        self.explanation.push(bullet.into());
        self
    }

    /// Set the memory trick
    pub fn with_memory_trick(mut self, trick: impl Into<String>) -> Self {
        self.memory_trick = Some(trick.into());
        self
    }

    /// Set the common question and its answer
    pub fn with_question(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.common_question = Some(CommonQuestion::new(question, answer));
        self
    }

    /// Get a short description for display
    pub fn short_description(&self) -> String {
        format!("[{}] {} ({})", self.category, self.title, self.id)
    }
}

/// Derive a stable id from a title: lowercase ASCII alphanumerics, every
/// other run of characters collapsed into a single `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Creating a View"), "creating-a-view");
        assert_eq!(slugify("INNER JOIN"), "inner-join");
        assert_eq!(slugify("  COUNT(*) & friends!  "), "count-friends");
        assert_eq!(slugify("FULL OUTER JOIN"), "full-outer-join");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_entry_builder() {
        let entry = TopicEntry::new("inner-join", "INNER JOIN", Category::Join, "SELECT 1;")
            .with_explanation("Returns matching rows only")
            .with_memory_trick("Inner = intersection")
            .with_question("What does INNER JOIN return?", "Only matching rows");

        assert_eq!(entry.explanation.len(), 1);
        assert_eq!(entry.memory_trick.as_deref(), Some("Inner = intersection"));
        assert_eq!(
            entry.common_question.as_ref().map(|q| q.answer.as_str()),
            Some("Only matching rows")
        );
        assert_eq!(entry.short_description(), "[join] INNER JOIN (inner-join)");
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let entry = TopicEntry::new("select", "SELECT", Category::Query, "SELECT * FROM t;");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json["memory_trick"].is_null());
        assert!(json["common_question"].is_null());
    }
}
