//! Score calculation for completed assessments

use super::{AssessmentError, Question};
use crate::Score;
use serde::{Deserialize, Serialize};

/// Points one answered question adds to the raw total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    /// Question position (0-based)
    pub question: usize,
    /// Chosen option (0-based)
    pub answer: usize,
    pub option_count: usize,
    pub reverse: bool,
    /// Awarded points (1..=option_count)
    pub points: usize,
}

/// Transparent breakdown: every contribution plus the totals they add up to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub raw_total: usize,
    pub max_possible: usize,
    pub contributions: Vec<Contribution>,
}

impl ScoreBreakdown {
    /// Normalize the raw total to 0-100, rounding half up
    pub fn score(&self) -> Score {
        Score::new(ScoreCalculator::percentage(self.raw_total, self.max_possible))
    }
}

/// Calculator for assessment scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Build the breakdown for a fully answered question set.
    ///
    /// `answers` must line up with `questions` and every answer must be in range;
    /// [`Assessment`](super::Assessment) guarantees both before calling this.
    pub fn calculate_breakdown(
        questions: &[Question],
        answers: &[usize],
    ) -> Result<ScoreBreakdown, AssessmentError> {
        if answers.len() != questions.len() {
            return Err(AssessmentError::IncompleteAssessment {
                answered: answers.len(),
                total: questions.len(),
            });
        }

        let mut contributions = Vec::with_capacity(questions.len());
        for (i, (question, &answer)) in questions.iter().zip(answers).enumerate() {
            let option_count = question.option_count();
            if answer >= option_count {
                return Err(AssessmentError::OutOfRange {
                    index: answer,
                    option_count,
                });
            }
            contributions.push(Contribution {
                question: i,
                answer,
                option_count,
                reverse: question.polarity.is_reverse(),
                points: question.points_for(answer),
            });
        }

        let raw_total = contributions.iter().map(|c| c.points).sum();
        let max_possible = contributions.iter().map(|c| c.option_count).sum();

        Ok(ScoreBreakdown {
            raw_total,
            max_possible,
            contributions,
        })
    }

    /// Calculate the score for a fully answered question set
    pub fn calculate(questions: &[Question], answers: &[usize]) -> Result<Score, AssessmentError> {
        Self::calculate_breakdown(questions, answers).map(|b| b.score())
    }

    /// `round_half_up(100 * raw / max)` in integer arithmetic
    pub fn percentage(raw_total: usize, max_possible: usize) -> u8 {
        if max_possible == 0 {
            return 0;
        }
        let raw = raw_total.min(max_possible) as u64;
        let max = max_possible as u64;
        ((200 * raw + max) / (2 * max)) as u8
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::assessment::{feedback_for, Polarity};
    use proptest::prelude::*;

    /// Question set with a uniform option count and random polarities,
    /// paired with a complete in-range answer sequence.
    fn question_set_with_answers() -> impl Strategy<Value = (Vec<Question>, Vec<usize>)> {
        (2usize..=6, 1usize..=12).prop_flat_map(|(k, n)| {
            (
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(0..k, n),
            )
                .prop_map(move |(reverse, answers)| {
                    let questions = reverse
                        .into_iter()
                        .enumerate()
                        .map(|(i, rev)| {
                            let q = Question::new(
                                format!("q{}", i),
                                (0..k).map(|o| format!("option {}", o)),
                            );
                            if rev {
                                q.reversed()
                            } else {
                                q
                            }
                        })
                        .collect();
                    (questions, answers)
                })
        })
    }

    fn best_answers(questions: &[Question]) -> Vec<usize> {
        questions
            .iter()
            .map(|q| match q.polarity {
                Polarity::Positive => q.option_count() - 1,
                Polarity::Reverse => 0,
            })
            .collect()
    }

    fn worst_answers(questions: &[Question]) -> Vec<usize> {
        questions
            .iter()
            .map(|q| match q.polarity {
                Polarity::Positive => 0,
                Polarity::Reverse => q.option_count() - 1,
            })
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn score_is_bounded((questions, answers) in question_set_with_answers()) {
            let score = ScoreCalculator::calculate(&questions, &answers).unwrap();
            prop_assert!(score.value() <= 100);
        }

        #[test]
        fn score_is_idempotent((questions, answers) in question_set_with_answers()) {
            let first = ScoreCalculator::calculate_breakdown(&questions, &answers).unwrap();
            let second = ScoreCalculator::calculate_breakdown(&questions, &answers).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn raising_one_answer_moves_score_with_polarity(
            (questions, answers) in question_set_with_answers(),
            pick in any::<prop::sample::Index>(),
        ) {
            let i = pick.index(questions.len());
            let k = questions[i].option_count();
            prop_assume!(answers[i] + 1 < k);

            let before = ScoreCalculator::calculate(&questions, &answers).unwrap();
            let mut raised = answers.clone();
            raised[i] += 1;
            let after = ScoreCalculator::calculate(&questions, &raised).unwrap();

            if questions[i].polarity.is_reverse() {
                prop_assert!(after <= before);
            } else {
                prop_assert!(after >= before);
            }
        }

        #[test]
        fn extremes_bound_every_answer_sequence((questions, answers) in question_set_with_answers()) {
            let min = ScoreCalculator::calculate(&questions, &worst_answers(&questions)).unwrap();
            let max = ScoreCalculator::calculate(&questions, &best_answers(&questions)).unwrap();
            let score = ScoreCalculator::calculate(&questions, &answers).unwrap();

            prop_assert_eq!(max.value(), 100);
            prop_assert!(min <= score);
            prop_assert!(score <= max);
        }

        #[test]
        fn default_feedback_is_total(score in 0u8..=100) {
            let band = feedback_for(score);
            prop_assert!(band.min_score <= score);
        }
    }
}
