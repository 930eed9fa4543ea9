//! Caller-owned questionnaire session.
//!
//! A session walks the question bank in order.  The number of recorded answers
//! is the index of the next question, so `answers[i]` always belongs to
//! `bank[i]`.  Once every question is answered the session is complete and
//! accepts no further answers until [`AssessmentSession::retake`].

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    Answer, AssessmentError, MAX_SCORE, MIN_SCORE, PersonalityType, QUESTION_BANK, Question,
    Result, TraitScores, classify_personality_type, compute_trait_scores,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    NotStarted,
    InProgress { question_index: usize },
    Completed,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => f.write_str("not started"),
            Self::InProgress { question_index } => {
                write!(f, "in progress at question {}", question_index + 1)
            }
            Self::Completed => f.write_str("completed"),
        }
    }
}

/// What a successful [`AssessmentSession::submit_answer`] led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another question follows, at this index.
    Next { index: usize },
    /// The last question was answered.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentResults {
    pub trait_scores: TraitScores,
    pub personality_type: PersonalityType,
}

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    bank: &'static [Question],
    started: bool,
    answers: Vec<Answer>,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    /// A not-yet-started session over the built-in question bank.
    pub fn new() -> Self {
        Self::with_bank(&QUESTION_BANK)
    }

    /// A not-yet-started session over a custom bank.  Every trait should
    /// have at least one question or scoring will fail with
    /// [`AssessmentError::EmptyTrait`].
    pub fn with_bank(bank: &'static [Question]) -> Self {
        Self {
            bank,
            started: false,
            answers: Vec::with_capacity(bank.len()),
        }
    }

    pub fn state(&self) -> SessionState {
        if !self.started {
            SessionState::NotStarted
        } else if self.answers.len() >= self.bank.len() {
            SessionState::Completed
        } else {
            SessionState::InProgress {
                question_index: self.answers.len(),
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == SessionState::Completed
    }

    /// Begin (or restart) the questionnaire from the first question,
    /// discarding any previous answers.
    pub fn start(&mut self) {
        self.answers.clear();
        self.started = true;
        debug!(questions = self.bank.len(), "assessment started");
    }

    /// Same as [`start`](Self::start); offered from the results screen.
    pub fn retake(&mut self) {
        self.start();
    }

    /// Record a Likert answer (`1..=5`) for the current question.
    pub fn submit_answer(&mut self, raw_score: u8) -> Result<SubmitOutcome> {
        let index = match self.state() {
            SessionState::InProgress { question_index } => question_index,
            state => return Err(AssessmentError::NotInProgress { state }),
        };
        if !(MIN_SCORE..=MAX_SCORE).contains(&raw_score) {
            return Err(AssessmentError::ScoreOutOfRange { score: raw_score });
        }

        let question = &self.bank[index];
        let answer = Answer {
            question_id: question.id,
            r#trait: question.r#trait,
            raw_score,
            final_score: question.final_score(raw_score),
        };
        debug!(
            question_id = answer.question_id,
            raw = answer.raw_score,
            score = answer.final_score,
            "answer recorded"
        );
        self.answers.push(answer);

        if self.answers.len() == self.bank.len() {
            info!(answers = self.answers.len(), "assessment completed");
            Ok(SubmitOutcome::Completed)
        } else {
            Ok(SubmitOutcome::Next {
                index: self.answers.len(),
            })
        }
    }

    /// The question awaiting an answer; `None` when not in progress.
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state() {
            SessionState::InProgress { question_index } => self.bank.get(question_index),
            _ => None,
        }
    }

    /// "Question i of N" for the current question.
    pub fn question_label(&self) -> Option<String> {
        match self.state() {
            SessionState::InProgress { question_index } => Some(format!(
                "Question {} of {}",
                question_index + 1,
                self.bank.len()
            )),
            _ => None,
        }
    }

    /// Answered fraction of the bank, in `[0, 1]`.
    pub fn progress_fraction(&self) -> f32 {
        if self.bank.is_empty() {
            return 0.0;
        }
        self.answers.len() as f32 / self.bank.len() as f32
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn compute_trait_scores(&self) -> Result<TraitScores> {
        self.ensure_completed()?;
        compute_trait_scores(&self.answers)
    }

    pub fn classify_personality_type(&self) -> Result<PersonalityType> {
        let scores = self.compute_trait_scores()?;
        Ok(classify_personality_type(&scores))
    }

    pub fn results(&self) -> Result<AssessmentResults> {
        let trait_scores = self.compute_trait_scores()?;
        Ok(AssessmentResults {
            trait_scores,
            personality_type: classify_personality_type(&trait_scores),
        })
    }

    fn ensure_completed(&self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(AssessmentError::NotCompleted {
                answered: self.answers.len(),
                total: self.bank.len(),
            })
        }
    }
}
