use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{MoodLabel, classify};

/// Transition reported by [`MoodState::observe`] when the label changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodChange {
    pub from: MoodLabel,
    pub to: MoodLabel,
}

/// The user's current mood, owned by whoever drives the conversation.
///
/// Every observed utterance replaces the mood outright; there is no decay or
/// smoothing, so a message without keywords resets the mood to neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodState {
    current: MoodLabel,
}

impl MoodState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> MoodLabel {
        self.current
    }

    /// Classify `utterance` and adopt the result.
    ///
    /// Returns `Some` only when the label differs from the previous one, which
    /// is when the indicator needs repainting.
    pub fn observe(&mut self, utterance: &str) -> Option<MoodChange> {
        let next = classify(utterance);
        if next == self.current {
            return None;
        }
        let change = MoodChange {
            from: self.current,
            to: next,
        };
        debug!(from = %change.from, to = %change.to, "mood changed");
        self.current = next;
        Some(change)
    }

    pub fn reset(&mut self) {
        self.current = MoodLabel::Neutral;
    }
}
