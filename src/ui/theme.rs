use crate::category::Category;
use owo_colors::{AnsiColors, Style};
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for the parts of a rendered topic plus status lines
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub subtitle: Style,
    /// Example SQL lines
    pub sql: Style,
    pub trick: Style,
    pub question: Style,
    pub answer: Style,
    /// Ids and other secondary text
    pub muted: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    badges: Option<[AnsiColors; 7]>,
}

impl Theme {
    pub fn detect() -> Self {
        let is_term = console::Term::stdout().is_term();
        if !is_term || crate::output::is_quiet() {
            tracing::debug!("Plain theme (terminal: {})", is_term);
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            subtitle: Style::new().white().dimmed(),
            sql: Style::new().bright_blue(),
            trick: Style::new().magenta().italic(),
            question: Style::new().bold(),
            answer: Style::new().green(),
            muted: Style::new().bright_black(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            // Same order as Category::all()
            badges: Some([
                AnsiColors::Cyan,
                AnsiColors::Red,
                AnsiColors::Yellow,
                AnsiColors::Magenta,
                AnsiColors::Blue,
                AnsiColors::Green,
                AnsiColors::BrightYellow,
            ]),
        }
    }

    pub fn plain() -> Self {
        Self {
            title: Style::new(),
            subtitle: Style::new(),
            sql: Style::new(),
            trick: Style::new(),
            question: Style::new(),
            answer: Style::new(),
            muted: Style::new(),
            success: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            badges: None,
        }
    }

    /// Badge style for a category; each category keeps its own color
    pub fn badge(&self, category: Category) -> Style {
        let index = Category::all().iter().position(|c| *c == category);
        match (self.badges, index) {
            (Some(colors), Some(i)) => Style::new().color(colors[i]).bold(),
            _ => Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
