//! Content Layer - Markdown study guides flattened into topic entries
//!
//! Loading happens once, at startup:
//! - each document is parsed into draft topics (`markdown`)
//! - drafts from all documents are merged into one entry per id (`merge`)
//! - the built-in guides ship inside the binary (`bundled`)

pub mod bundled;
pub mod markdown;
pub mod merge;

pub use markdown::{parse_document, DraftTopic, MarkdownParser};
pub use merge::merge_documents;

use crate::Result;
use std::path::Path;

/// One Markdown source document
#[derive(Debug, Clone)]
pub struct Document {
    /// Name used in error messages (file name or bundled name)
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a document from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), text))
    }

    /// Parse this document into draft topics
    pub fn parse(&self) -> Result<Vec<DraftTopic>> {
        parse_document(&self.name, &self.text)
    }
}
