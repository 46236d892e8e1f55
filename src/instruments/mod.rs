//! Instrument catalogue: built-in question sets and custom JSON instruments

mod builtin;

use crate::assessment::{validate_questions, Assessment, FeedbackTable, Question};
use crate::config::Config;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ids of the instruments that ship with the crate
pub const BUILTIN_IDS: &[&str] = &["classic", "likert"];

/// A named question set together with its feedback-band table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub feedback: FeedbackTable,
}

impl Instrument {
    /// Load and validate an instrument from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read instrument: {}", path.display()))?;
        let instrument: Instrument = serde_json::from_str(&content)
            .with_context(|| format!("Invalid instrument JSON: {}", path.display()))?;
        validate_questions(&instrument.questions)
            .with_context(|| format!("Invalid instrument: {}", path.display()))?;
        log::debug!(
            "Loaded instrument '{}' ({} questions) from {}",
            instrument.id,
            instrument.questions.len(),
            path.display()
        );
        Ok(instrument)
    }

    /// Start a fresh assessment over this instrument's questions
    pub fn start(&self) -> Result<Assessment, crate::AssessmentError> {
        Assessment::new(self.questions.clone())
    }

    /// Replace the band table (e.g. from config)
    pub fn with_feedback(mut self, feedback: FeedbackTable) -> Self {
        self.feedback = feedback;
        self
    }
}

/// Look up a built-in instrument by id
pub fn builtin(id: &str) -> Option<Instrument> {
    match id {
        "classic" => Some(builtin::classic()),
        "likert" => Some(builtin::likert()),
        _ => None,
    }
}

/// Resolve an instrument reference: built-in id, then a name configured in
/// `.eqscorerc.json`, then a path to a JSON file.
pub fn resolve(reference: &str, config: &Config) -> Result<Instrument> {
    if let Some(instrument) = builtin(reference) {
        log::debug!("Using built-in instrument '{}'", reference);
        return Ok(instrument);
    }

    if let Some(path) = config.instruments.get(reference) {
        log::debug!(
            "Instrument '{}' configured at {}",
            reference,
            path.display()
        );
        return Instrument::from_json_file(path);
    }

    let path = Path::new(reference);
    if path.exists() {
        return Instrument::from_json_file(path);
    }

    anyhow::bail!(
        "Unknown instrument '{}' (built-in: {})",
        reference,
        BUILTIN_IDS.join(", ")
    )
}
