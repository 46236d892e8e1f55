//! Question model and question-set validation

use super::AssessmentError;
use serde::{Deserialize, Serialize};

/// Minimum number of options a question may offer
pub const MIN_OPTIONS: usize = 2;

/// Scoring direction of a question
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Higher option index is the healthier answer
    #[default]
    Positive,
    /// Option 0 is the healthier answer (e.g. "Rarely" vs "Almost always")
    Reverse,
}

impl Polarity {
    pub fn is_reverse(self) -> bool {
        self == Polarity::Reverse
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Reverse => write!(f, "reverse"),
        }
    }
}

/// A single questionnaire item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Display text
    pub prompt: String,
    /// Choice labels; only their position carries meaning
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "is_positive")]
    pub polarity: Polarity,
}

fn is_positive(polarity: &Polarity) -> bool {
    *polarity == Polarity::Positive
}

impl Question {
    pub fn new<S: Into<String>>(prompt: impl Into<String>, options: impl IntoIterator<Item = S>) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            polarity: Polarity::Positive,
        }
    }

    /// Mark this question as negatively phrased
    pub fn reversed(mut self) -> Self {
        self.polarity = Polarity::Reverse;
        self
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Points awarded for choosing `answer` (1..=option_count)
    pub fn points_for(&self, answer: usize) -> usize {
        match self.polarity {
            Polarity::Positive => answer + 1,
            Polarity::Reverse => self.option_count() - answer,
        }
    }
}

/// Check that a question set can back an assessment.
///
/// Returns the shared option count.
pub fn validate_questions(questions: &[Question]) -> Result<usize, AssessmentError> {
    let first = questions
        .first()
        .ok_or_else(|| AssessmentError::invalid("question set is empty"))?;
    let option_count = first.option_count();

    if option_count < MIN_OPTIONS {
        return Err(AssessmentError::invalid(format!(
            "questions need at least {} options, found {}",
            MIN_OPTIONS, option_count
        )));
    }

    if let Some((i, q)) = questions
        .iter()
        .enumerate()
        .find(|(_, q)| q.option_count() != option_count)
    {
        return Err(AssessmentError::invalid(format!(
            "question {} has {} options but question 1 has {}",
            i + 1,
            q.option_count(),
            option_count
        )));
    }

    Ok(option_count)
}
