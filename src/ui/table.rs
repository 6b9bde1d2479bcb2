use crate::catalog::CategoryCount;
use crate::topic::TopicEntry;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct TopicRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Trick")]
    trick: String,
    #[tabled(rename = "Q&A")]
    question: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Section")]
    label: String,
    #[tabled(rename = "Topics")]
    count: usize,
}

fn yes_no(present: bool) -> String {
    let text = if present { "yes" } else { "-" };
    text.to_string()
}

/// Table of topics; empty string when there is nothing to show
pub fn topic_table<'a>(entries: impl IntoIterator<Item = &'a TopicEntry>) -> String {
    let rows: Vec<TopicRow> = entries
        .into_iter()
        .map(|e| TopicRow {
            id: e.id.clone(),
            title: e.title.clone(),
            category: e.category.to_string(),
            trick: yes_no(e.memory_trick.is_some()),
            question: yes_no(e.common_question.is_some()),
        })
        .collect();

    if rows.is_empty() {
        return String::new();
    }
    Table::new(&rows).with(Style::rounded()).to_string()
}

pub fn category_table(counts: &[CategoryCount]) -> String {
    let rows: Vec<CategoryRow> = counts
        .iter()
        .map(|c| CategoryRow {
            category: c.category.to_string(),
            label: c.category.label().to_string(),
            count: c.count,
        })
        .collect();

    Table::new(&rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_topic_table_contains_rows() {
        let entries = vec![
            TopicEntry::new("inner-join", "INNER JOIN", Category::Join, "SELECT 1;").with_memory_trick("overlap"),
        ];
        let table = topic_table(&entries);
        assert!(table.contains("inner-join"));
        assert!(table.contains("INNER JOIN"));
        assert!(table.contains("yes"));
    }

    #[test]
    fn test_empty_topic_table() {
        assert!(topic_table(&Vec::<TopicEntry>::new()).is_empty());
    }

    #[test]
    fn test_category_table() {
        let table = category_table(&[CategoryCount { category: Category::Aggregate, count: 4 }]);
        assert!(table.contains("Aggregate Functions"));
        assert!(table.contains('4'));
    }
}
