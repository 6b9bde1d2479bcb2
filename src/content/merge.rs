//! Merging near-duplicate guides into one canonical entry per topic
//!
//! The first document that defines an id owns its title, category, example
//! and explanation. Later documents only fill optional fields that are
//! still absent. Ids first seen in a later document are appended after the
//! existing ones, so authoring order is preserved.

use super::markdown::DraftTopic;
use super::Document;
use crate::topic::TopicEntry;
use crate::{Error, Result};
use std::collections::HashMap;

/// Parse and merge documents in priority order
pub fn merge_documents(documents: &[Document]) -> Result<Vec<TopicEntry>> {
    let mut parsed = Vec::with_capacity(documents.len());
    for doc in documents {
        parsed.push(doc.parse()?);
    }
    merge_drafts(parsed)
}

/// Merge already-parsed drafts, one `Vec` per document in priority order
pub fn merge_drafts(documents: Vec<Vec<DraftTopic>>) -> Result<Vec<TopicEntry>> {
    let mut merged: Vec<DraftTopic> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for drafts in documents {
        for draft in drafts {
            match positions.get(&draft.id) {
                Some(&pos) => fill_absent(&mut merged[pos], draft),
                None => {
                    positions.insert(draft.id.clone(), merged.len());
                    merged.push(draft);
                }
            }
        }
    }

    merged.into_iter().map(into_entry).collect()
}

fn fill_absent(target: &mut DraftTopic, other: DraftTopic) {
    if target.category != other.category {
        tracing::warn!(
            "Topic '{}' is filed under {} and {}; keeping {}",
            target.id,
            target.category,
            other.category,
            target.category
        );
    }

    if target.example_query.is_none() && other.example_query.is_some() {
        tracing::debug!("Topic '{}': example query taken from a later document", target.id);
        target.example_query = other.example_query;
    }
    if target.memory_trick.is_none() && other.memory_trick.is_some() {
        tracing::debug!("Topic '{}': memory trick taken from a later document", target.id);
        target.memory_trick = other.memory_trick;
    }
    if target.common_question.is_none() && other.common_question.is_some() {
        tracing::debug!("Topic '{}': common question taken from a later document", target.id);
        target.common_question = other.common_question;
    }
}

fn into_entry(draft: DraftTopic) -> Result<TopicEntry> {
    let Some(example_query) = draft.example_query else {
        return Err(Error::MissingExample(draft.id));
    };

    Ok(TopicEntry {
        id: draft.id,
        title: draft.title,
        category: draft.category,
        example_query,
        explanation: draft.explanation,
        memory_trick: draft.memory_trick,
        common_question: draft.common_question,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMARY: &str = "\
## Keys and Constraints

### FOREIGN KEY

```sql
CONSTRAINT fk_orders_customer FOREIGN KEY (customer_id) REFERENCES customers(id)
```

- Points at a primary key in another table

## Joins

### INNER JOIN

```sql
SELECT * FROM orders INNER JOIN customers ON orders.customer_id = customers.id;
```
";

    const SECONDARY: &str = "\
## Keys and Constraints

### FOREIGN KEY

```sql
CONSTRAINT fk_customer FOREIGN KEY (customer_id) REFERENCES customers(id)
```

**Memory trick:** Foreign key = a reference to a foreign table.

## Joins

### INNER JOIN

- Only rows that match on both sides

### LEFT JOIN

```sql
SELECT * FROM customers LEFT JOIN orders ON orders.customer_id = customers.id;
```
";

    #[test]
    fn test_first_document_wins_and_gaps_are_filled() {
        let docs = vec![Document::new("primary.md", PRIMARY), Document::new("secondary.md", SECONDARY)];
        let entries = merge_documents(&docs).unwrap();

        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["foreign-key", "inner-join", "left-join"]);

        let fk = &entries[0];
        assert!(fk.example_query.contains("fk_orders_customer"));
        assert_eq!(fk.explanation.len(), 1);
        assert_eq!(fk.memory_trick.as_deref(), Some("Foreign key = a reference to a foreign table."));

        // The secondary explanation does not replace the primary one
        assert!(entries[1].explanation.is_empty());
    }

    #[test]
    fn test_example_filled_from_later_document() {
        let docs = vec![Document::new("secondary.md", SECONDARY), Document::new("primary.md", PRIMARY)];
        let entries = merge_documents(&docs).unwrap();

        let inner = entries.iter().find(|e| e.id == "inner-join").unwrap();
        assert!(inner.example_query.contains("INNER JOIN"));
        assert_eq!(inner.explanation, vec!["Only rows that match on both sides".to_string()]);
    }

    #[test]
    fn test_missing_example_after_merge() {
        let docs = vec![Document::new("secondary.md", SECONDARY)];
        let err = merge_documents(&docs).unwrap_err();
        assert!(matches!(err, Error::MissingExample(ref id) if id == "inner-join"));
    }

    #[test]
    fn test_parse_error_propagates() {
        let docs = vec![Document::new("bad.md", "### Orphan topic\n")];
        let err = merge_documents(&docs).unwrap_err();
        assert!(matches!(err, Error::Parse { ref source_name, .. } if source_name == "bad.md"));
    }
}
