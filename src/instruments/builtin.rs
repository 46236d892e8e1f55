//! Built-in question sets

use super::Instrument;
use crate::assessment::{FeedbackBand, FeedbackTable, Question};

const FREQUENCY: [&str; 4] = ["Rarely", "Sometimes", "Often", "Almost always"];

const LIKERT: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

const CLASSIC_BANDS: &[FeedbackBand] = &[
    FeedbackBand::fixed(
        85,
        "Exceptional",
        "Exceptional emotional intelligence! You show strong self-awareness and empathy.",
    ),
    FeedbackBand::fixed(
        70,
        "Good",
        "Good emotional intelligence. You have solid emotional awareness with room for growth.",
    ),
    FeedbackBand::fixed(
        50,
        "Moderate",
        "Moderate emotional intelligence. Consider developing your emotional awareness further.",
    ),
    FeedbackBand::fixed(
        0,
        "Developing",
        "There's significant room for improving your emotional intelligence. Focus on self-awareness and empathy.",
    ),
];

/// Eleven four-option items: five about coping skills, where the last option
/// is healthiest, then six about strain, where the first option is healthiest.
pub(super) fn classic() -> Instrument {
    let questions = vec![
        Question::new(
            "How well do you handle unexpected changes in your daily routine?",
            [
                "I become very anxious and frustrated",
                "I feel somewhat uncomfortable but manage",
                "I adapt fairly well after initial adjustment",
                "I embrace change and adapt quickly",
            ],
        ),
        Question::new(
            "When someone criticizes your work, how do you typically respond?",
            [
                "I take it personally and become defensive",
                "I feel hurt but try to listen",
                "I consider their perspective and reflect",
                "I welcome feedback as an opportunity to improve",
            ],
        ),
        Question::new(
            "How do you handle conflicts with others?",
            [
                "I avoid conflicts at all costs",
                "I try to compromise but often feel resentful",
                "I work towards finding middle ground",
                "I address issues directly and seek win-win solutions",
            ],
        ),
        Question::new(
            "How aware are you of your emotional state throughout the day?",
            [
                "I rarely think about my emotions",
                "I notice strong emotions when they occur",
                "I'm generally aware of my emotional state",
                "I'm highly attuned to my emotional changes",
            ],
        ),
        Question::new(
            "How do you respond when someone is sharing their problems with you?",
            [
                "I try to solve their problem immediately",
                "I listen but often feel uncomfortable",
                "I listen and offer support when asked",
                "I listen actively and show genuine empathy",
            ],
        ),
        Question::new("How often do you feel overwhelmed or stressed?", FREQUENCY).reversed(),
        Question::new(
            "How do you sleep at night?",
            [
                "Well and refreshed",
                "Occasional issues",
                "Struggle with sleep",
                "Terrible sleep",
            ],
        )
        .reversed(),
        Question::new(
            "How do you usually feel throughout the day?",
            [
                "Happy and energetic",
                "Neutral",
                "Frequently sad or anxious",
                "Unmotivated",
            ],
        )
        .reversed(),
        Question::new("How often do you feel lonely or disconnected?", FREQUENCY).reversed(),
        Question::new(
            "How well do you manage negative thoughts?",
            [
                "Stay positive",
                "Handle them",
                "Struggle",
                "Stuck in negativity",
            ],
        )
        .reversed(),
        Question::new(
            "How do you handle social situations?",
            ["Confident", "Need breaks", "Avoid them", "Extreme anxiety"],
        )
        .reversed(),
    ];

    Instrument {
        id: "classic".to_string(),
        title: "Emotional Intelligence Quiz".to_string(),
        questions,
        feedback: FeedbackTable::from_static(CLASSIC_BANDS),
    }
}

/// Five agree/disagree statements, all positively phrased.
pub(super) fn likert() -> Instrument {
    let questions = [
        "I can easily identify my emotions as they occur.",
        "I am aware of how my emotions affect others.",
        "I can manage my emotions effectively under pressure.",
        "I can easily read other people's emotions.",
        "I am good at motivating myself to achieve goals.",
    ]
    .into_iter()
    .map(|prompt| Question::new(prompt, LIKERT))
    .collect();

    Instrument {
        id: "likert".to_string(),
        title: "Emotional Intelligence Assessment".to_string(),
        questions,
        feedback: FeedbackTable::default(),
    }
}
