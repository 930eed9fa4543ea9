use crate::{SessionState, Trait};

/// Coarse classification of [`AssessmentError`] for callers that only need to
/// know whether the input or the call sequence was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad argument, or an answer submitted outside an in-progress session.
    InvalidInput,
    /// Results requested from a session that has not produced them yet.
    ImpossibleState,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("answer {score} is outside the 1-5 scale")]
    ScoreOutOfRange { score: u8 },

    #[error("cannot submit an answer while the assessment is {state}")]
    NotInProgress { state: SessionState },

    #[error("assessment incomplete: {answered} of {total} questions answered")]
    NotCompleted { answered: usize, total: usize },

    #[error("question bank has no answers for trait {0}")]
    EmptyTrait(Trait),
}

impl AssessmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ScoreOutOfRange { .. } | Self::NotInProgress { .. } => ErrorKind::InvalidInput,
            Self::NotCompleted { .. } | Self::EmptyTrait(_) => ErrorKind::ImpossibleState,
        }
    }
}

pub type Result<T, E = AssessmentError> = std::result::Result<T, E>;
