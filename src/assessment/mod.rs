//! Assessment engine: question set, answer progress, scoring and banding
//!
//! An [`Assessment`] is an owned handle. The caller creates it from a question
//! set, commits one answer per question with [`Assessment::record_answer`], and
//! reads the score once every question is answered. Nothing here performs I/O
//! or keeps global state.

mod error;
mod feedback;
mod question;
pub mod scoring;

pub use error::AssessmentError;
pub use feedback::{feedback_for, FeedbackBand, FeedbackTable, DEFAULT_BANDS};
pub use question::{validate_questions, Polarity, Question, MIN_OPTIONS};
pub use scoring::{Contribution, ScoreBreakdown, ScoreCalculator};

use crate::Score;

/// Progress of an assessment, derived from how many answers are committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentState {
    /// No answer committed yet (fresh or just reset)
    NotStarted,
    InProgress,
    /// Every question answered; scoring is available
    Complete,
}

/// One run of a questionnaire, from first question to score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    questions: Vec<Question>,
    option_count: usize,
    answers: Vec<usize>,
}

impl Assessment {
    /// Start an assessment over a non-empty question set with a uniform
    /// option count of at least two.
    pub fn new(questions: Vec<Question>) -> Result<Self, AssessmentError> {
        let option_count = validate_questions(&questions)?;
        let answers = Vec::with_capacity(questions.len());
        Ok(Self {
            questions,
            option_count,
            answers,
        })
    }

    /// Commit the answer for the current question and advance.
    ///
    /// On error the assessment is left untouched.
    pub fn record_answer(&mut self, option_index: usize) -> Result<(), AssessmentError> {
        if self.is_complete() {
            return Err(AssessmentError::AlreadyComplete);
        }
        if option_index >= self.option_count {
            return Err(AssessmentError::OutOfRange {
                index: option_index,
                option_count: self.option_count,
            });
        }
        self.answers.push(option_index);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    pub fn state(&self) -> AssessmentState {
        if self.answers.is_empty() {
            AssessmentState::NotStarted
        } else if self.is_complete() {
            AssessmentState::Complete
        } else {
            AssessmentState::InProgress
        }
    }

    /// Score the completed assessment (0-100)
    pub fn compute_score(&self) -> Result<Score, AssessmentError> {
        self.breakdown().map(|b| b.score())
    }

    /// Per-question contributions behind [`compute_score`](Self::compute_score)
    pub fn breakdown(&self) -> Result<ScoreBreakdown, AssessmentError> {
        if !self.is_complete() {
            return Err(AssessmentError::IncompleteAssessment {
                answered: self.answers.len(),
                total: self.questions.len(),
            });
        }
        ScoreCalculator::calculate_breakdown(&self.questions, &self.answers)
    }

    /// Discard all answers, keeping the same question set
    pub fn reset(&mut self) {
        self.answers.clear();
    }

    /// Index of the next question to answer (equals the question count once complete)
    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    /// Next question to answer, or `None` once complete
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn option_count(&self) -> usize {
        self.option_count
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }
}
