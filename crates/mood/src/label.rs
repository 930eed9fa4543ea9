use serde::{Deserialize, Serialize};

/// Discrete emotional-state tag attached to the user's latest utterance.
///
/// | Label      | Display text | Colour    |
/// |------------|--------------|-----------|
/// | `neutral`  | Neutral      | `#6366f1` |
/// | `positive` | Positive     | `#10b981` |
/// | `anxious`  | Anxious      | `#f59e0b` |
/// | `sad`      | Low          | `#ef4444` |
/// | `excited`  | Energetic    | `#8b5cf6` |
/// | `calm`     | Calm         | `#06b6d4` |
/// | `stressed` | Stressed     | `#f97316` |
/// | `angry`    | Frustrated   | `#dc2626` |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    #[default]
    Neutral,
    Positive,
    Anxious,
    Sad,
    Excited,
    Calm,
    Stressed,
    Angry,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 8] = [
        Self::Neutral,
        Self::Positive,
        Self::Anxious,
        Self::Sad,
        Self::Excited,
        Self::Calm,
        Self::Stressed,
        Self::Angry,
    ];

    /// Lowercase identifier used on the wire and in log lines.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::Anxious => "anxious",
            Self::Sad => "sad",
            Self::Excited => "excited",
            Self::Calm => "calm",
            Self::Stressed => "stressed",
            Self::Angry => "angry",
        }
    }

    /// User-facing wording for the mood indicator.
    pub fn display_text(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
            Self::Anxious => "Anxious",
            Self::Sad => "Low",
            Self::Excited => "Energetic",
            Self::Calm => "Calm",
            Self::Stressed => "Stressed",
            Self::Angry => "Frustrated",
        }
    }

    /// Indicator colour as a `#rrggbb` hex string.
    pub fn color(self) -> &'static str {
        match self {
            Self::Neutral => "#6366f1",
            Self::Positive => "#10b981",
            Self::Anxious => "#f59e0b",
            Self::Sad => "#ef4444",
            Self::Excited => "#8b5cf6",
            Self::Calm => "#06b6d4",
            Self::Stressed => "#f97316",
            Self::Angry => "#dc2626",
        }
    }

    /// Name of the indicator pulse animation for this mood.
    pub fn pulse_style(self) -> &'static str {
        match self {
            Self::Anxious => "pulse-fast",
            Self::Excited => "pulse-energetic",
            _ => "pulse",
        }
    }

    /// Parse a label from its slug (case-insensitive, surrounding whitespace ignored).
    pub fn from_slug(s: &str) -> Option<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|label| label.slug() == needle)
    }
}

impl std::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
