//! The fixed questionnaire and its five-point answer scale.

use serde::Serialize;

use crate::Trait;

/// Lowest accepted Likert answer.
pub const MIN_SCORE: u8 = 1;
/// Highest accepted Likert answer.
pub const MAX_SCORE: u8 = 5;

/// Answer labels for scores `1..=5`, in order.
pub const LIKERT_SCALE: [(u8, &str); 5] = [
    (1, "Strongly Disagree"),
    (2, "Disagree"),
    (3, "Neutral"),
    (4, "Agree"),
    (5, "Strongly Agree"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub r#trait: Trait,
    /// The statement is phrased against its trait, so the answer is inverted
    /// (`6 - raw`) before aggregation.
    pub reverse_scored: bool,
}

impl Question {
    const fn new(id: u32, text: &'static str, r#trait: Trait) -> Self {
        Self {
            id,
            text,
            r#trait,
            reverse_scored: false,
        }
    }

    const fn reversed(id: u32, text: &'static str, r#trait: Trait) -> Self {
        Self {
            id,
            text,
            r#trait,
            reverse_scored: true,
        }
    }

    /// Score contributed to the trait average for a raw Likert answer.
    /// `raw` must already be within `MIN_SCORE..=MAX_SCORE`.
    pub fn final_score(&self, raw: u8) -> u8 {
        if self.reverse_scored {
            (MIN_SCORE + MAX_SCORE).saturating_sub(raw)
        } else {
            raw
        }
    }
}

pub const QUESTION_BANK: [Question; 12] = [
    Question::new(
        1,
        "I often feel energized when I'm around other people",
        Trait::Extraversion,
    ),
    Question::new(
        2,
        "I tend to worry about things that might go wrong",
        Trait::Neuroticism,
    ),
    Question::new(
        3,
        "I enjoy trying new experiences and activities",
        Trait::Openness,
    ),
    Question::new(
        4,
        "I am usually organized and keep things tidy",
        Trait::Conscientiousness,
    ),
    Question::new(
        5,
        "I generally trust others and believe in their good intentions",
        Trait::Agreeableness,
    ),
    Question::reversed(
        6,
        "I prefer to work alone rather than in groups",
        Trait::Extraversion,
    ),
    Question::new(
        7,
        "I often feel stressed or overwhelmed by daily tasks",
        Trait::Neuroticism,
    ),
    Question::new(
        8,
        "I enjoy creative activities like art, music, or writing",
        Trait::Openness,
    ),
    Question::new(9, "I always complete tasks on time", Trait::Conscientiousness),
    Question::new(
        10,
        "I find it easy to forgive others when they make mistakes",
        Trait::Agreeableness,
    ),
    Question::new(11, "I enjoy being the center of attention", Trait::Extraversion),
    Question::reversed(12, "I rarely feel blue or depressed", Trait::Neuroticism),
];

/// Label for a Likert score, or `None` outside `1..=5`.
pub fn likert_label(score: u8) -> Option<&'static str> {
    LIKERT_SCALE
        .iter()
        .find(|(value, _)| *value == score)
        .map(|(_, label)| *label)
}
