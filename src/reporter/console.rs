//! Console reporter with colored output

use crate::assessment::{Contribution, FeedbackTable};
use crate::{AssessmentResult, Instrument};
use colored::{ColoredString, Colorize};

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show the per-question breakdown
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a completed assessment
    pub fn report(&self, instrument: &Instrument, result: &AssessmentResult) {
        print!("{}", self.render(instrument, result));
    }

    /// Report in quiet mode (just score and band)
    pub fn report_quiet(&self, result: &AssessmentResult) {
        println!(
            "{}: {} ({})",
            result.instrument,
            result.score.value(),
            result.feedback.label
        );
    }

    /// Report the band a bare score falls into
    pub fn report_band(&self, score: u8, feedback: &FeedbackTable) {
        let band = feedback.band_for(score);
        let tone = Tone::of(feedback, score);
        println!("   Score: {}", self.create_score_bar(score, tone));
        println!("   {}", self.paint_label(tone, &band.label));
        println!("   {}", band.description.dimmed());
    }

    /// Render the full report as text
    pub fn render(&self, instrument: &Instrument, result: &AssessmentResult) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!(
            "{}\n",
            format!("🧠 {}", instrument.title).bold()
        ));
        out.push_str(&format!(
            "   Instrument: {} | Questions: {}\n\n",
            result.instrument,
            result.answers.len()
        ));

        let score = result.score.value();
        let tone = Tone::of(&instrument.feedback, score);
        out.push_str(&format!(
            "   Score: {} {}\n",
            self.create_score_bar(score, tone),
            self.paint_label(tone, &result.feedback.label)
        ));
        out.push_str(&format!("   {}\n\n", result.feedback.description.dimmed()));

        if self.verbose {
            out.push_str(&format!("   {}\n", "Breakdown:".bold()));
            for c in &result.breakdown.contributions {
                out.push_str(&self.render_contribution(instrument, c));
            }
            out.push_str(&format!(
                "   {} of {} points\n\n",
                result.breakdown.raw_total.to_string().bold(),
                result.breakdown.max_possible
            ));
        }

        out
    }

    fn render_contribution(&self, instrument: &Instrument, c: &Contribution) -> String {
        let question = instrument.questions.get(c.question);
        let prompt = question.map(|q| q.prompt.as_str()).unwrap_or("");
        let choice = question
            .and_then(|q| q.options.get(c.answer))
            .map(String::as_str)
            .unwrap_or("");
        let polarity = if c.reverse { " (reverse)" } else { "" };

        format!(
            "   {} {} {}/{}{} {}\n       {} {}\n",
            format!("Q{:>2}", c.question + 1).dimmed(),
            self.create_mini_bar(c.points, c.option_count),
            c.points,
            c.option_count,
            polarity.dimmed(),
            prompt,
            "→".dimmed(),
            choice.italic()
        )
    }

    fn paint_label(&self, tone: Tone, label: &str) -> String {
        if !self.use_colors {
            return label.to_string();
        }
        tone.paint(label.bold()).to_string()
    }

    fn create_score_bar(&self, score: u8, tone: Tone) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            tone.paint(bar.normal()).to_string()
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, points: usize, max: usize) -> String {
        let filled = if max == 0 { 0 } else { (points.min(max) * 10) / max };
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

/// Color of a score, taken from the rank of its band in the instrument's table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    /// Top band
    Strong,
    /// Second band
    Fair,
    Weak,
}

impl Tone {
    fn of(feedback: &FeedbackTable, score: u8) -> Self {
        let band = feedback.band_for(score);
        let rank = feedback
            .bands()
            .iter()
            .position(|b| b.min_score == band.min_score)
            .unwrap_or(usize::MAX);
        match rank {
            0 => Tone::Strong,
            1 => Tone::Fair,
            _ => Tone::Weak,
        }
    }

    fn paint(self, text: ColoredString) -> ColoredString {
        match self {
            Tone::Strong => text.green(),
            Tone::Fair => text.yellow(),
            Tone::Weak => text.red(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
