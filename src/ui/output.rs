use crate::catalog::{MatchKind, SearchHit};
use crate::output::is_quiet;
use crate::topic::{CommonQuestion, TopicEntry};
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn banner(title: &str, subtitle: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::BOOK, title.style(theme().title));
    println!("   {}", subtitle.style(theme().subtitle));
    println!();
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO,
        label.style(theme().muted),
        value
    );
}

pub fn section(title: &str) {
    if is_quiet() {
        return;
    }
    println!();
    println!("━{}━", title.style(theme().title));
}

pub fn dim(text: &str) -> String {
    text.style(theme().subtitle).to_string()
}

pub fn muted(text: &str) -> String {
    text.style(theme().muted).to_string()
}

fn category_badge(entry: &TopicEntry) -> String {
    format!("[{}]", entry.category).style(theme().badge(entry.category)).to_string()
}

/// Full rendering of one topic
pub fn print_topic(entry: &TopicEntry) {
    println!(
        "{} {} {}",
        category_badge(entry),
        entry.title.style(theme().title),
        muted(&format!("({})", entry.id))
    );
    println!();

    for line in entry.example_query.lines() {
        println!("    {}", line.style(theme().sql));
    }

    if !entry.explanation.is_empty() {
        println!();
        for bullet in &entry.explanation {
            println!("  • {}", bullet);
        }
    }

    if let Some(trick) = &entry.memory_trick {
        println!();
        println!("{} {}", Icons::BRAIN, trick.style(theme().trick));
    }

    if let Some(q) = &entry.common_question {
        println!();
        println!("{} {}", Icons::QUESTION, q.question.style(theme().question));
        println!("{} {}", Icons::ANSWER, q.answer.style(theme().answer));
    }
}

/// One line per search hit, exact title matches starred
pub fn print_hit(hit: &SearchHit<'_>) {
    let marker = match hit.matched {
        MatchKind::ExactTitle => Icons::STAR,
        MatchKind::Title => Icons::SEARCH,
        MatchKind::MemoryTrick => Icons::BRAIN,
    };
    println!(
        "{} {} {} {}",
        marker,
        category_badge(hit.entry),
        hit.entry.title,
        muted(&format!("({})", hit.entry.id))
    );
    if hit.matched == MatchKind::MemoryTrick {
        if let Some(trick) = &hit.entry.memory_trick {
            println!("   {}", trick.style(theme().trick));
        }
    }
}

/// A numbered study question, with the answer when `reveal` is set
pub fn print_question(number: usize, entry: &TopicEntry, question: &CommonQuestion, reveal: bool) {
    println!(
        "{}. {} {}",
        number,
        question.question.style(theme().question),
        muted(&format!("({})", entry.id))
    );
    if reveal {
        println!("   {} {}", Icons::ANSWER, question.answer.style(theme().answer));
    }
}
