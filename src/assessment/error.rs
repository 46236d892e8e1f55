//! Errors returned by the assessment engine

use thiserror::Error;

/// Errors raised synchronously by [`Assessment`](super::Assessment) operations.
///
/// None of these are logged or retried by the engine; the caller decides
/// whether to re-prompt, fix the question set, or finish the assessment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The question set (or feedback table) cannot be used
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Answer index outside `[0, option_count)` for the current question
    #[error("answer {index} is out of range (question has {option_count} options)")]
    OutOfRange { index: usize, option_count: usize },

    #[error("assessment is already complete")]
    AlreadyComplete,

    #[error("assessment is incomplete ({answered} of {total} questions answered)")]
    IncompleteAssessment { answered: usize, total: usize },
}

impl AssessmentError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        AssessmentError::InvalidConfiguration(reason.into())
    }
}
