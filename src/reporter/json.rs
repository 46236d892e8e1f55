//! JSON reporter for machine-readable output

use crate::assessment::FeedbackBand;
use crate::AssessmentResult;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a completed assessment as JSON
    pub fn report(&self, result: &AssessmentResult) -> String {
        let output = JsonOutput {
            result,
            generated_at: chrono::Utc::now().to_rfc3339(),
        };
        self.encode(&output, "{}")
    }

    /// Report the band a bare score falls into
    pub fn report_band(&self, score: u8, band: &FeedbackBand) -> String {
        self.encode(&JsonBand { score, feedback: band }, "{}")
    }

    fn encode<T: Serialize>(&self, value: &T, fallback: &str) -> String {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    #[serde(flatten)]
    result: &'a AssessmentResult,
    generated_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonBand<'a> {
    score: u8,
    feedback: &'a FeedbackBand,
}
