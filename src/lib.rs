//! eqscore: Emotional-Intelligence Assessment Engine
//!
//! This library runs an emotional-intelligence questionnaire, turns the
//! committed answers into a 0-100 score and maps that score to a qualitative
//! feedback band.

pub mod assessment;
pub mod config;
pub mod instruments;
pub mod quiz;
pub mod reporter;

pub use assessment::{
    feedback_for, Assessment, AssessmentError, AssessmentState, Contribution, FeedbackBand,
    FeedbackTable, Polarity, Question, ScoreBreakdown,
};
pub use instruments::Instrument;

use serde::{Deserialize, Serialize};

/// Normalized assessment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Highest possible score
    pub const MAX: Score = Score(100);

    /// Create a score, clamping anything above 100
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The outcome of a completed assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Id of the instrument that was taken
    pub instrument: String,
    /// Overall score (0-100)
    pub score: Score,
    /// Band the score falls into
    pub feedback: FeedbackBand,
    /// Per-question point contributions
    pub breakdown: ScoreBreakdown,
    /// Committed answers, 0-based, in question order
    pub answers: Vec<usize>,
}

impl AssessmentResult {
    /// Score a completed assessment against an instrument's band table
    pub fn from_assessment(
        instrument: &Instrument,
        assessment: &Assessment,
    ) -> Result<Self, AssessmentError> {
        let breakdown = assessment.breakdown()?;
        let score = breakdown.score();
        let feedback = instrument.feedback.band_for(score.value()).clone();
        Ok(Self {
            instrument: instrument.id.clone(),
            score,
            feedback,
            breakdown,
            answers: assessment.answers().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_above_hundred() {
        assert_eq!(Score::new(150).value(), 100);
        assert_eq!(Score::new(100), Score::MAX);
        assert_eq!(Score::new(0).value(), 0);
    }

    #[test]
    fn test_score_display_is_percentage() {
        assert_eq!(Score::new(66).to_string(), "66%");
    }

    #[test]
    fn test_score_serializes_as_number() {
        let json = serde_json::to_string(&Score::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_result_from_likert_assessment() {
        let instrument = instruments::builtin("likert").unwrap();
        let mut assessment = Assessment::new(instrument.questions.clone()).unwrap();
        for answer in [4, 3, 3, 2, 4] {
            assessment.record_answer(answer).unwrap();
        }

        let result = AssessmentResult::from_assessment(&instrument, &assessment).unwrap();
        // (5 + 4 + 4 + 3 + 5) = 21 of 25 -> 84
        assert_eq!(result.score.value(), 84);
        assert_eq!(result.feedback.label, "Excellent");
        assert_eq!(result.answers, vec![4, 3, 3, 2, 4]);
        assert_eq!(result.instrument, "likert");
    }

    #[test]
    fn test_result_requires_complete_assessment() {
        let instrument = instruments::builtin("likert").unwrap();
        let mut assessment = Assessment::new(instrument.questions.clone()).unwrap();
        assessment.record_answer(0).unwrap();

        let err = AssessmentResult::from_assessment(&instrument, &assessment).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::IncompleteAssessment {
                answered: 1,
                total: 5
            }
        );
    }
}
