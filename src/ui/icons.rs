pub struct Icons;

impl Icons {
    pub const BOOK: &str = "📘";
    pub const SEARCH: &str = "🔍";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const BRAIN: &str = "🧠";
    pub const QUESTION: &str = "❓";
    pub const ANSWER: &str = "💡";
    pub const CODE: &str = "🧾";
    pub const GLOBE: &str = "🌍";
    pub const STAR: &str = "⭐";
}
