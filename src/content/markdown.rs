//! Markdown guide parser
//!
//! Flattens a study guide into draft topics:
//! - `# Title` is the document title and is skipped
//! - `## Section` selects the category of the topics below it
//! - `### Topic` starts a topic; `<!-- id: slug -->` right below overrides its id
//! - fenced code blocks become the example query
//! - bullets and plain prose lines become explanation items
//! - `**Memory trick:**`, `**Common question:**` and `**Answer:**` fill the optional fields

use crate::category::Category;
use crate::topic::{slugify, CommonQuestion};
use crate::{Error, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static HEADING: OnceLock<Regex> = OnceLock::new();
static LABEL: OnceLock<Regex> = OnceLock::new();
static ID_COMMENT: OnceLock<Regex> = OnceLock::new();

fn heading_re() -> &'static Regex {
    HEADING.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+?)\s*#*\s*$").expect("static heading pattern"))
}

fn label_re() -> &'static Regex {
    LABEL.get_or_init(|| {
        Regex::new(r"^\*\*\s*([A-Za-z][A-Za-z ]*?)\s*:?\s*\*\*\s*:?\s*(.*)$").expect("static label pattern")
    })
}

fn id_comment_re() -> &'static Regex {
    ID_COMMENT.get_or_init(|| {
        Regex::new(r"^<!--\s*id\s*:\s*(\S+)\s*-->$").expect("static id comment pattern")
    })
}

/// A topic as it appears in one document, before merging.
///
/// The example query is still optional here: a secondary document may omit
/// it and rely on the primary one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTopic {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub example_query: Option<String>,
    pub explanation: Vec<String>,
    pub memory_trick: Option<String>,
    pub common_question: Option<CommonQuestion>,
    /// Line of the topic heading (1-indexed)
    pub line: usize,
}

/// Optional labelled fields recognised inside a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    MemoryTrick,
    Question,
    Answer,
}

impl Label {
    fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "memory trick" | "memory tip" | "tip" | "mnemonic" => Some(Label::MemoryTrick),
            "common question" | "question" | "exam question" => Some(Label::Question),
            "answer" | "common answer" => Some(Label::Answer),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Label::MemoryTrick => "memory trick",
            Label::Question => "common question",
            Label::Answer => "answer",
        }
    }
}

/// Field that the most recent bullet wrote to; indented lines below it
/// continue that field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Explanation,
    Field(Label),
}

/// Topic being assembled while its lines are read
struct OpenTopic {
    draft: DraftTopic,
    code_blocks: Vec<String>,
    question: Option<(String, usize)>,
    answer: Option<(String, usize)>,
}

impl OpenTopic {
    fn new(id: String, title: String, category: Category, line: usize) -> Self {
        Self {
            draft: DraftTopic {
                id,
                title,
                category,
                example_query: None,
                explanation: Vec::new(),
                memory_trick: None,
                common_question: None,
                line,
            },
            code_blocks: Vec::new(),
            question: None,
            answer: None,
        }
    }
}

/// An open code fence: starting line and the lines collected so far
struct Fence<'t> {
    line: usize,
    lines: Vec<&'t str>,
}

/// Line-oriented parser for one Markdown document
pub struct MarkdownParser<'a> {
    source_name: &'a str,
    category: Option<Category>,
    current: Option<OpenTopic>,
    drafts: Vec<DraftTopic>,
    seen: HashSet<String>,
    continuation: Option<Target>,
    expect_id_comment: bool,
}

impl<'a> MarkdownParser<'a> {
    pub fn new(source_name: &'a str) -> Self {
        Self {
            source_name,
            category: None,
            current: None,
            drafts: Vec::new(),
            seen: HashSet::new(),
            continuation: None,
            expect_id_comment: false,
        }
    }

    /// Parse a whole document into drafts, in authoring order
    pub fn parse(mut self, text: &str) -> Result<Vec<DraftTopic>> {
        let mut fence: Option<Fence<'_>> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = raw.trim();

            if fence.is_some() {
                if trimmed.starts_with("```") {
                    if let Some(closed) = fence.take() {
                        self.close_fence(closed);
                    }
                } else if let Some(open) = fence.as_mut() {
                    open.lines.push(raw.trim_end());
                }
                continue;
            }

            if trimmed.starts_with("```") {
                fence = Some(Fence { line: line_no, lines: Vec::new() });
                self.expect_id_comment = false;
                self.continuation = None;
                continue;
            }

            if trimmed.is_empty() {
                self.continuation = None;
                continue;
            }

            if let Some(caps) = heading_re().captures(trimmed) {
                let level = caps[1].len();
                let text = caps[2].to_string();
                self.heading(level, text, line_no)?;
                continue;
            }

            if let Some(caps) = id_comment_re().captures(trimmed) {
                self.id_comment(&caps[1], line_no)?;
                continue;
            }
            self.expect_id_comment = false;

            if trimmed.starts_with("<!--") {
                continue;
            }

            if let Some(item) = bullet_content(trimmed) {
                self.continuation = self.prose(item, line_no)?;
                continue;
            }

            if let Some(target) = self.continuation.filter(|_| raw.starts_with(char::is_whitespace)) {
                self.continue_field(target, trimmed);
                continue;
            }

            self.continuation = None;
            self.prose(trimmed, line_no)?;
        }

        if let Some(open) = fence {
            return Err(self.error(open.line, "unterminated code fence"));
        }

        self.finish_topic()?;
        tracing::debug!("Parsed {} topics from {}", self.drafts.len(), self.source_name);
        Ok(self.drafts)
    }

    fn heading(&mut self, level: usize, text: String, line: usize) -> Result<()> {
        self.continuation = None;
        self.expect_id_comment = false;

        match level {
            1 => {
                self.finish_topic()?;
            }
            2 => {
                self.finish_topic()?;
                let category = text
                    .parse::<Category>()
                    .map_err(|_| self.error(line, format!("unknown category section '{}'", text)))?;
                self.category = Some(category);
            }
            3 => {
                self.finish_topic()?;
                let category = self
                    .category
                    .ok_or_else(|| self.error(line, format!("topic '{}' is outside any category section", text)))?;
                let id = slugify(&text);
                if id.is_empty() {
                    return Err(self.error(line, format!("cannot derive an id from heading '{}'", text)));
                }
                self.current = Some(OpenTopic::new(id, text, category, line));
                self.expect_id_comment = true;
            }
            _ => {
                // Sub-headings inside a topic read as explanation
                if let Some(topic) = self.current.as_mut() {
                    topic.draft.explanation.push(text);
                }
            }
        }
        Ok(())
    }

    fn id_comment(&mut self, id: &str, line: usize) -> Result<()> {
        if !self.expect_id_comment {
            return Err(self.error(line, "id comment must directly follow a topic heading"));
        }
        if slugify(id) != id {
            return Err(self.error(line, format!("id '{}' is not a lowercase slug", id)));
        }
        if let Some(topic) = self.current.as_mut() {
            topic.draft.id = id.to_string();
        }
        self.expect_id_comment = false;
        Ok(())
    }

    /// Record one prose item; returns the field it was written to
    fn prose(&mut self, text: &str, line: usize) -> Result<Option<Target>> {
        let Some(topic) = self.current.as_mut() else {
            // Introductory text outside of any topic
            return Ok(None);
        };

        if let Some(caps) = label_re().captures(text) {
            if let Some(label) = Label::parse(&caps[1]) {
                let value = caps[2].trim().to_string();
                return self.labelled(label, value, line);
            }
        }

        topic.draft.explanation.push(text.to_string());
        Ok(Some(Target::Explanation))
    }

    fn labelled(&mut self, label: Label, value: String, line: usize) -> Result<Option<Target>> {
        if value.is_empty() {
            tracing::warn!(
                "{}:{}: empty {} treated as absent",
                self.source_name,
                line,
                label.name()
            );
            return Ok(None);
        }

        let duplicate = match self.current.as_mut() {
            Some(topic) => {
                let slot_taken = match label {
                    Label::MemoryTrick => topic.draft.memory_trick.is_some(),
                    Label::Question => topic.question.is_some(),
                    Label::Answer => topic.answer.is_some(),
                };
                if !slot_taken {
                    match label {
                        Label::MemoryTrick => topic.draft.memory_trick = Some(value),
                        Label::Question => topic.question = Some((value, line)),
                        Label::Answer => topic.answer = Some((value, line)),
                    }
                }
                slot_taken
            }
            None => false,
        };

        if duplicate {
            return Err(self.error(line, format!("{} given twice in one topic", label.name())));
        }
        Ok(Some(Target::Field(label)))
    }

    fn continue_field(&mut self, target: Target, text: &str) {
        let Some(topic) = self.current.as_mut() else {
            return;
        };

        let field = match target {
            Target::Explanation => topic.draft.explanation.last_mut(),
            Target::Field(Label::MemoryTrick) => topic.draft.memory_trick.as_mut(),
            Target::Field(Label::Question) => topic.question.as_mut().map(|(q, _)| q),
            Target::Field(Label::Answer) => topic.answer.as_mut().map(|(a, _)| a),
        };
        if let Some(field) = field {
            field.push(' ');
            field.push_str(text);
        }
    }

    fn close_fence(&mut self, fence: Fence<'_>) {
        let Some(topic) = self.current.as_mut() else {
            tracing::debug!("{}:{}: code block outside a topic skipped", self.source_name, fence.line);
            return;
        };

        let mut lines = fence.lines;
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        while lines.first().is_some_and(|l| l.trim().is_empty()) {
            lines.remove(0);
        }

        if lines.is_empty() {
            tracing::warn!("{}:{}: empty code block ignored", self.source_name, fence.line);
            return;
        }
        topic.code_blocks.push(lines.join("\n"));
    }

    fn finish_topic(&mut self) -> Result<()> {
        let Some(open) = self.current.take() else {
            return Ok(());
        };
        let mut draft = open.draft;

        draft.common_question = match (open.question, open.answer) {
            (Some((question, _)), Some((answer, _))) => Some(CommonQuestion::new(question, answer)),
            (Some((_, line)), None) => {
                return Err(self.error(line, format!("question in '{}' has no answer", draft.title)));
            }
            (None, Some((_, line))) => {
                return Err(self.error(line, format!("answer in '{}' has no question", draft.title)));
            }
            (None, None) => None,
        };

        if !open.code_blocks.is_empty() {
            draft.example_query = Some(open.code_blocks.join("\n\n"));
        }

        if !self.seen.insert(draft.id.clone()) {
            return Err(Error::DuplicateId(draft.id));
        }
        self.drafts.push(draft);
        Ok(())
    }

    fn error(&self, line: usize, message: impl Into<String>) -> Error {
        Error::Parse {
            source_name: self.source_name.to_string(),
            line,
            message: message.into(),
        }
    }
}

/// Text of a `-`, `*` or `+` bullet, if the line is one
fn bullet_content(line: &str) -> Option<&str> {
    ["- ", "* ", "+ "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Parse one document's text into draft topics
pub fn parse_document(source_name: &str, text: &str) -> Result<Vec<DraftTopic>> {
    MarkdownParser::new(source_name).parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUIDE: &str = r##"# SQL Notes

Some introduction that belongs to no topic.

## Views

### Creating a View

```sql
CREATE VIEW active_users AS
SELECT id, name FROM users WHERE active = 1;
```

- A view is a saved query
- It stores no data of its own,
  only the query text

**Memory trick:** A view is a window, not a room.

**Common question:** Does a view store data?
**Answer:** No, it re-runs its query.

## Joins

### INNER JOIN
<!-- id: inner-join -->

```sql
SELECT * FROM a INNER JOIN b ON a.id = b.a_id;
```

Returns only matching rows.
"##;

    #[test]
    fn test_parse_guide() {
        let drafts = parse_document("guide.md", GUIDE).unwrap();
        assert_eq!(drafts.len(), 2);

        let view = &drafts[0];
        assert_eq!(view.id, "creating-a-view");
        assert_eq!(view.category, Category::View);
        assert_eq!(
            view.example_query.as_deref(),
            Some("CREATE VIEW active_users AS\nSELECT id, name FROM users WHERE active = 1;")
        );
        assert_eq!(view.explanation, vec![
            "A view is a saved query".to_string(),
            "It stores no data of its own, only the query text".to_string(),
        ]);
        assert_eq!(view.memory_trick.as_deref(), Some("A view is a window, not a room."));
        let question = view.common_question.as_ref().unwrap();
        assert_eq!(question.question, "Does a view store data?");
        assert_eq!(question.answer, "No, it re-runs its query.");

        let join = &drafts[1];
        assert_eq!(join.id, "inner-join");
        assert_eq!(join.category, Category::Join);
        assert_eq!(join.explanation, vec!["Returns only matching rows.".to_string()]);
        assert!(join.memory_trick.is_none());
        assert!(join.common_question.is_none());
    }

    #[test]
    fn test_indented_line_continues_labelled_bullet() {
        let text = "\
## Views

### Creating a View

- First point
- **Memory trick:** A view is
  a window
- **Common question:** Does a view
  store rows?
- **Answer:** No, only
  its query
";
        let drafts = parse_document("doc.md", text).unwrap();
        let view = &drafts[0];
        assert_eq!(view.explanation, vec!["First point".to_string()]);
        assert_eq!(view.memory_trick.as_deref(), Some("A view is a window"));
        let question = view.common_question.as_ref().unwrap();
        assert_eq!(question.question, "Does a view store rows?");
        assert_eq!(question.answer, "No, only its query");
    }

    #[test]
    fn test_continued_trick_without_explanation() {
        let text = "## Indexes\n\n### CREATE INDEX\n\n- **Tip:** Index =\n  book index\n";
        let drafts = parse_document("doc.md", text).unwrap();
        assert!(drafts[0].explanation.is_empty());
        assert_eq!(drafts[0].memory_trick.as_deref(), Some("Index = book index"));
    }

    #[test]
    fn test_missing_example_stays_absent() {
        let text = "## Joins\n\n### LEFT JOIN\n\n- Keeps all left rows\n";
        let drafts = parse_document("doc.md", text).unwrap();
        assert_eq!(drafts[0].example_query, None);
    }

    #[test]
    fn test_multiple_code_blocks_joined() {
        let text = "## Queries\n\n### SELECT\n\n```sql\nSELECT 1;\n```\n\n```\nSELECT 2;\n```\n";
        let drafts = parse_document("doc.md", text).unwrap();
        assert_eq!(drafts[0].example_query.as_deref(), Some("SELECT 1;\n\nSELECT 2;"));
    }

    #[test]
    fn test_label_variants() {
        let text = "## Indexes\n\n### CREATE INDEX\n\n- **Tip**: Index = book index\n";
        let drafts = parse_document("doc.md", text).unwrap();
        assert_eq!(drafts[0].memory_trick.as_deref(), Some("Index = book index"));
        assert!(drafts[0].explanation.is_empty());
    }

    #[test]
    fn test_empty_label_is_absent() {
        let text = "## Indexes\n\n### CREATE INDEX\n\n**Memory trick:**\n";
        let drafts = parse_document("doc.md", text).unwrap();
        assert_eq!(drafts[0].memory_trick, None);
    }

    #[test]
    fn test_unknown_category_section() {
        let err = parse_document("doc.md", "## Triggers\n\n### CREATE TRIGGER\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_topic_outside_section() {
        let err = parse_document("doc.md", "# Title\n\n### SELECT\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn test_unterminated_fence() {
        let err = parse_document("doc.md", "## Queries\n\n### SELECT\n\n```sql\nSELECT 1;\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 5, .. }));
    }

    #[test]
    fn test_question_without_answer() {
        let text = "## Queries\n\n### WHERE\n\n**Common question:** What filters rows?\n\n## Joins\n";
        let err = parse_document("doc.md", text).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 5, .. }));
    }

    #[test]
    fn test_duplicate_id_in_document() {
        let text = "## Queries\n\n### SELECT\n\n### Select\n";
        let err = parse_document("doc.md", text).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(ref id) if id == "select"));
    }

    #[test]
    fn test_misplaced_id_comment() {
        let text = "## Queries\n\n### SELECT\n\n- Reads rows\n<!-- id: reading -->\n";
        let err = parse_document("doc.md", text).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 6, .. }));
    }

    #[test]
    fn test_hash_inside_code_is_not_heading() {
        let text = "## Queries\n\n### SELECT\n\n```\n## not a heading\nSELECT 1;\n```\n";
        let drafts = parse_document("doc.md", text).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].example_query.as_deref(), Some("## not a heading\nSELECT 1;"));
    }
}
