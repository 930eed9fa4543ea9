pub mod classifier;
pub mod label;
pub mod state;

pub use classifier::{MOOD_KEYWORDS, classify, match_counts};
pub use label::MoodLabel;
pub use state::{MoodChange, MoodState};
