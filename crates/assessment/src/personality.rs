//! Mapping from trait percentages to a personality archetype.

use serde::{Deserialize, Serialize};

use crate::TraitScores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonalityType {
    Analyst,
    Diplomat,
    Sentinel,
    Explorer,
    Harmonizer,
    Balanced,
}

impl PersonalityType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Analyst => "ANALYST",
            Self::Diplomat => "DIPLOMAT",
            Self::Sentinel => "SENTINEL",
            Self::Explorer => "EXPLORER",
            Self::Harmonizer => "HARMONIZER",
            Self::Balanced => "BALANCED",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Analyst => {
                "You are analytical, strategic, and enjoy solving complex problems. You tend to be independent and value competence highly."
            }
            Self::Diplomat => {
                "You are empathetic, idealistic, and focused on human potential. You value harmony and are driven by your values."
            }
            Self::Sentinel => {
                "You are practical, fact-minded, and reliable. You prefer structure and stability in your environment."
            }
            Self::Explorer => {
                "You are spontaneous, energetic, and adaptable. You enjoy new experiences and thinking on your feet."
            }
            Self::Harmonizer => {
                "You are cooperative, trusting, and focused on maintaining positive relationships with others."
            }
            Self::Balanced => {
                "You show a balanced personality profile with moderate scores across different traits, indicating adaptability and flexibility."
            }
        }
    }
}

impl std::fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

type Rule = (PersonalityType, fn(&TraitScores) -> bool);

/// Archetype rules, evaluated top to bottom; the first match wins.
/// Thresholds apply to raw scores, including the uninverted neuroticism.
pub const PERSONALITY_RULES: &[Rule] = &[
    (PersonalityType::Analyst, |s: &TraitScores| {
        s.openness > 70 && s.conscientiousness > 60
    }),
    (PersonalityType::Diplomat, |s: &TraitScores| {
        s.agreeableness > 70 && s.openness > 60
    }),
    (PersonalityType::Sentinel, |s: &TraitScores| {
        s.conscientiousness > 70 && s.neuroticism < 50
    }),
    (PersonalityType::Explorer, |s: &TraitScores| {
        s.extraversion > 60 && s.openness > 60
    }),
    (PersonalityType::Harmonizer, |s: &TraitScores| s.agreeableness > 80),
];

pub fn classify_personality_type(scores: &TraitScores) -> PersonalityType {
    PERSONALITY_RULES
        .iter()
        .find(|(_, matches)| matches(scores))
        .map(|(kind, _)| *kind)
        .unwrap_or(PersonalityType::Balanced)
}
