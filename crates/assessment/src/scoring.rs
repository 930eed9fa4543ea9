//! Aggregation of answers into per-trait percentages.

use serde::{Deserialize, Serialize};

use crate::{AssessmentError, Result, Trait};

/// Multiplier turning a 1-5 trait mean into a percentage (5 × 20 = 100).
/// Only valid for a five-point scale.
pub const SCALE_FACTOR: f64 = 20.0;

/// One recorded answer.  `final_score` is `raw_score` after reverse scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub r#trait: Trait,
    pub raw_score: u8,
    pub final_score: u8,
}

/// Rounded percentage per trait.  With the built-in bank every value lies in
/// `20..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScores {
    pub extraversion: u32,
    pub neuroticism: u32,
    pub openness: u32,
    pub conscientiousness: u32,
    pub agreeableness: u32,
}

/// A result row as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub r#trait: Trait,
    pub label: &'static str,
    pub percent: u32,
}

impl TraitScores {
    pub fn get(&self, r#trait: Trait) -> u32 {
        match r#trait {
            Trait::Extraversion => self.extraversion,
            Trait::Neuroticism => self.neuroticism,
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Agreeableness => self.agreeableness,
        }
    }

    fn set(&mut self, r#trait: Trait, value: u32) {
        match r#trait {
            Trait::Extraversion => self.extraversion = value,
            Trait::Neuroticism => self.neuroticism = value,
            Trait::Openness => self.openness = value,
            Trait::Conscientiousness => self.conscientiousness = value,
            Trait::Agreeableness => self.agreeableness = value,
        }
    }

    /// `(trait, score)` pairs in [`Trait::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, u32)> + '_ {
        Trait::ALL.into_iter().map(|t| (t, self.get(t)))
    }

    /// Rows for the results screen.  Neuroticism is shown inverted as
    /// "Emotional Stability" (`100 - score`, floored at 0); the other traits
    /// pass through unchanged.  Classification never uses these values.
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        self.iter()
            .map(|(t, score)| DisplayRow {
                r#trait: t,
                label: t.display_name(),
                percent: match t {
                    Trait::Neuroticism => 100u32.saturating_sub(score),
                    _ => score,
                },
            })
            .collect()
    }
}

/// Average the final scores per trait and scale to a percentage.
///
/// Each trait's mean is multiplied by [`SCALE_FACTOR`] and rounded half away
/// from zero.  Fails with [`AssessmentError::EmptyTrait`] when some trait has
/// no answers, which cannot happen for a completed session on the built-in
/// bank.
pub fn compute_trait_scores(answers: &[Answer]) -> Result<TraitScores> {
    let mut scores = TraitScores::default();
    for t in Trait::ALL {
        let (sum, count) = answers
            .iter()
            .filter(|answer| answer.r#trait == t)
            .fold((0u32, 0u32), |(sum, count), answer| {
                (sum + u32::from(answer.final_score), count + 1)
            });
        if count == 0 {
            return Err(AssessmentError::EmptyTrait(t));
        }
        let mean = f64::from(sum) / f64::from(count);
        scores.set(t, (mean * SCALE_FACTOR).round() as u32);
    }
    Ok(scores)
}
