//! Five-trait personality questionnaire: question bank, answer session,
//! per-trait scoring, and archetype classification.

pub mod error;
pub mod personality;
pub mod question;
pub mod scoring;
pub mod session;
pub mod traits;

pub use error::{AssessmentError, ErrorKind, Result};
pub use personality::{PERSONALITY_RULES, PersonalityType, classify_personality_type};
pub use question::{LIKERT_SCALE, MAX_SCORE, MIN_SCORE, QUESTION_BANK, Question, likert_label};
pub use scoring::{Answer, DisplayRow, SCALE_FACTOR, TraitScores, compute_trait_scores};
pub use session::{AssessmentResults, AssessmentSession, SessionState, SubmitOutcome};
pub use traits::Trait;
