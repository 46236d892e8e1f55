//! Feedback bands: qualitative interpretation of a score

use super::AssessmentError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A score threshold with its label and descriptive sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackBand {
    /// Lowest score (inclusive) that falls into this band
    pub min_score: u8,
    pub label: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

impl FeedbackBand {
    pub fn new(min_score: u8, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            min_score,
            label: Cow::Owned(label.into()),
            description: Cow::Owned(description.into()),
        }
    }

    /// Band backed by static text, usable in constant tables
    pub const fn fixed(min_score: u8, label: &'static str, description: &'static str) -> Self {
        Self {
            min_score,
            label: Cow::Borrowed(label),
            description: Cow::Borrowed(description),
        }
    }
}

/// Default band table, highest threshold first
pub const DEFAULT_BANDS: &[FeedbackBand] = &[
    FeedbackBand::fixed(
        80,
        "Excellent",
        "Excellent emotional intelligence! You have strong self-awareness and social skills.",
    ),
    FeedbackBand::fixed(
        60,
        "Good",
        "Good emotional intelligence. You have solid emotional skills with room for growth.",
    ),
    FeedbackBand::fixed(
        40,
        "Average",
        "Average emotional intelligence. Consider developing your emotional awareness further.",
    ),
    FeedbackBand::fixed(
        0,
        "Below average",
        "Below average emotional intelligence. Focus on building emotional awareness and regulation skills.",
    ),
];

/// Look up the default band for a score.
///
/// Total over `0..=100`: the highest band whose threshold the score meets.
pub fn feedback_for(score: u8) -> &'static FeedbackBand {
    select_band(DEFAULT_BANDS, score)
}

// `bands` is non-empty and sorted descending by `min_score`.
fn select_band(bands: &[FeedbackBand], score: u8) -> &FeedbackBand {
    bands
        .iter()
        .find(|band| score >= band.min_score)
        .unwrap_or(&bands[bands.len() - 1])
}

/// Validated band table, kept sorted highest threshold first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FeedbackBand>", into = "Vec<FeedbackBand>")]
pub struct FeedbackTable {
    bands: Vec<FeedbackBand>,
}

impl FeedbackTable {
    /// Build a table from bands in any order.
    ///
    /// Fails if the table is empty, a threshold exceeds 100, or two bands
    /// share a threshold.
    pub fn new(mut bands: Vec<FeedbackBand>) -> Result<Self, AssessmentError> {
        if bands.is_empty() {
            return Err(AssessmentError::invalid("feedback table is empty"));
        }
        if let Some(band) = bands.iter().find(|b| b.min_score > 100) {
            return Err(AssessmentError::invalid(format!(
                "feedback band '{}' has threshold {} above 100",
                band.label, band.min_score
            )));
        }

        bands.sort_by(|a, b| b.min_score.cmp(&a.min_score));
        if let Some(pair) = bands.windows(2).find(|w| w[0].min_score == w[1].min_score) {
            return Err(AssessmentError::invalid(format!(
                "feedback bands '{}' and '{}' share threshold {}",
                pair[0].label, pair[1].label, pair[0].min_score
            )));
        }

        Ok(Self { bands })
    }

    /// Table over a constant band list that is already sorted descending with
    /// distinct thresholds
    pub(crate) fn from_static(bands: &'static [FeedbackBand]) -> Self {
        debug_assert!(
            !bands.is_empty() && bands.windows(2).all(|w| w[0].min_score > w[1].min_score)
        );
        Self {
            bands: bands.to_vec(),
        }
    }

    /// Band for a score; falls back to the lowest band when no threshold is met
    pub fn band_for(&self, score: u8) -> &FeedbackBand {
        select_band(&self.bands, score)
    }

    pub fn bands(&self) -> &[FeedbackBand] {
        &self.bands
    }
}

impl Default for FeedbackTable {
    fn default() -> Self {
        Self::from_static(DEFAULT_BANDS)
    }
}

impl TryFrom<Vec<FeedbackBand>> for FeedbackTable {
    type Error = AssessmentError;

    fn try_from(bands: Vec<FeedbackBand>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<FeedbackTable> for Vec<FeedbackBand> {
    fn from(table: FeedbackTable) -> Self {
        table.bands
    }
}
