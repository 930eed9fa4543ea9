use serde::{Deserialize, Serialize};

/// One of the five personality dimensions measured by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Extraversion,
    Neuroticism,
    Openness,
    Conscientiousness,
    Agreeableness,
}

impl Trait {
    /// Canonical order used for score tables and result rows.
    pub const ALL: [Trait; 5] = [
        Self::Extraversion,
        Self::Neuroticism,
        Self::Openness,
        Self::Conscientiousness,
        Self::Agreeableness,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Extraversion => "extraversion",
            Self::Neuroticism => "neuroticism",
            Self::Openness => "openness",
            Self::Conscientiousness => "conscientiousness",
            Self::Agreeableness => "agreeableness",
        }
    }

    /// Heading shown next to the trait's percentage on the results screen.
    /// Neuroticism is presented inverted, hence "Emotional Stability".
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Extraversion => "Extraversion",
            Self::Neuroticism => "Emotional Stability",
            Self::Openness => "Openness to Experience",
            Self::Conscientiousness => "Conscientiousness",
            Self::Agreeableness => "Agreeableness",
        }
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
