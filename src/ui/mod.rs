pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{banner, dim, error, info, muted, print_hit, print_question, print_topic, section, success, warn};
pub use table::{category_table, topic_table};
pub use theme::{theme, Theme};
