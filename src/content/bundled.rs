//! Built-in study guides, compiled into the binary

use super::Document;

/// Primary guide; authoritative when both guides define a topic
pub const SQL_NOTES: &str = include_str!("../../content/sql-notes.md");

/// Secondary guide; fills memory tricks and questions the notes lack
pub const SQL_EXAM_PREP: &str = include_str!("../../content/sql-exam-prep.md");

/// The bundled documents in merge priority order
pub fn documents() -> Vec<Document> {
    vec![
        Document::new("sql-notes.md", SQL_NOTES),
        Document::new("sql-exam-prep.md", SQL_EXAM_PREP),
    ]
}
