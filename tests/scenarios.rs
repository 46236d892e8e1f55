//! Reference scenarios through the public API.

use eqscore::{feedback_for, instruments, Assessment, AssessmentError, AssessmentState, Question};

fn likert_questions(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| {
            Question::new(
                format!("Statement {}", i + 1),
                ["Strongly Disagree", "Disagree", "Neutral", "Agree", "Strongly Agree"],
            )
        })
        .collect()
}

fn answer_all(assessment: &mut Assessment, answers: &[usize]) {
    for &a in answers {
        assessment.record_answer(a).unwrap();
    }
}

#[test]
fn all_highest_answers_score_hundred() {
    let mut assessment = Assessment::new(likert_questions(5)).unwrap();
    answer_all(&mut assessment, &[4, 4, 4, 4, 4]);

    let breakdown = assessment.breakdown().unwrap();
    assert_eq!(breakdown.raw_total, 25);
    assert_eq!(breakdown.max_possible, 25);
    assert_eq!(assessment.compute_score().unwrap().value(), 100);
}

#[test]
fn all_lowest_answers_score_twenty() {
    let mut assessment = Assessment::new(likert_questions(5)).unwrap();
    answer_all(&mut assessment, &[0, 0, 0, 0, 0]);

    let breakdown = assessment.breakdown().unwrap();
    assert_eq!(breakdown.raw_total, 5);
    assert_eq!(breakdown.max_possible, 25);
    assert_eq!(assessment.compute_score().unwrap().value(), 20);
}

#[test]
fn classic_instrument_first_option_everywhere() {
    let instrument = instruments::builtin("classic").unwrap();
    let mut assessment = instrument.start().unwrap();
    answer_all(&mut assessment, &[0; 11]);

    let breakdown = assessment.breakdown().unwrap();
    let points: Vec<usize> = breakdown.contributions.iter().map(|c| c.points).collect();
    assert_eq!(points, vec![1, 1, 1, 1, 1, 4, 4, 4, 4, 4, 4]);
    assert_eq!(breakdown.raw_total, 29);
    assert_eq!(breakdown.max_possible, 44);
    assert_eq!(assessment.compute_score().unwrap().value(), 66);
    assert_eq!(instrument.feedback.band_for(66).label, "Moderate");
}

#[test]
fn classic_instrument_healthiest_answers_score_hundred() {
    let instrument = instruments::builtin("classic").unwrap();
    let mut assessment = instrument.start().unwrap();
    answer_all(&mut assessment, &[3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0]);

    let score = assessment.compute_score().unwrap();
    assert_eq!(score.value(), 100);
    assert_eq!(instrument.feedback.band_for(score.value()).label, "Exceptional");
}

#[test]
fn out_of_range_answer_leaves_assessment_unchanged() {
    let mut assessment = Assessment::new(likert_questions(5)).unwrap();
    answer_all(&mut assessment, &[2, 3]);

    let err = assessment.record_answer(5).unwrap_err();
    assert_eq!(
        err,
        AssessmentError::OutOfRange {
            index: 5,
            option_count: 5
        }
    );
    assert_eq!(assessment.current_index(), 2);
    assert_eq!(assessment.answers(), &[2, 3]);
}

#[test]
fn scoring_four_of_five_answers_is_incomplete() {
    let mut assessment = Assessment::new(likert_questions(5)).unwrap();
    answer_all(&mut assessment, &[1, 2, 3, 4]);

    assert_eq!(assessment.state(), AssessmentState::InProgress);
    assert_eq!(
        assessment.compute_score().unwrap_err(),
        AssessmentError::IncompleteAssessment {
            answered: 4,
            total: 5
        }
    );
}

#[test]
fn reset_then_retake_gives_independent_score() {
    let mut assessment = Assessment::new(likert_questions(5)).unwrap();
    answer_all(&mut assessment, &[4, 4, 4, 4, 4]);
    assert_eq!(assessment.compute_score().unwrap().value(), 100);

    assessment.reset();
    assert_eq!(assessment.state(), AssessmentState::NotStarted);
    answer_all(&mut assessment, &[2, 2, 2, 2, 2]);
    assert_eq!(assessment.compute_score().unwrap().value(), 60);
}

#[test]
fn feedback_covers_every_score_once() {
    for score in 0..=100u8 {
        let band = feedback_for(score);
        assert!(band.min_score <= score);
        // No higher band also qualifies
        assert!(eqscore::assessment::DEFAULT_BANDS
            .iter()
            .filter(|b| b.min_score <= score)
            .all(|b| b.min_score <= band.min_score));
    }
}
