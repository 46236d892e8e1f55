//! Interactive quiz: one question at a time over any reader/writer pair
//!
//! The runner owns the select-then-confirm interaction. A line is only
//! committed to the [`Assessment`] once it parses to a valid option; anything
//! else is reported and the same question is asked again.

use crate::assessment::{Assessment, AssessmentError, Question};
use crate::{AssessmentResult, Instrument};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// How an interactive run ended
#[derive(Debug, Clone, PartialEq)]
pub enum QuizOutcome {
    Completed(AssessmentResult),
    /// The user quit before answering every question
    Abandoned { answered: usize, total: usize },
}

enum Command {
    /// Option number as typed (1-based)
    Answer(usize),
    Restart,
    Quit,
}

pub struct QuizRunner<'a, R, W> {
    instrument: &'a Instrument,
    reader: R,
    writer: W,
}

impl<'a, R: BufRead, W: Write> QuizRunner<'a, R, W> {
    pub fn new(instrument: &'a Instrument, reader: R, writer: W) -> Self {
        Self {
            instrument,
            reader,
            writer,
        }
    }

    /// Run the quiz to completion, restart, or quit
    pub fn run(mut self) -> Result<QuizOutcome> {
        let mut assessment = self.instrument.start()?;
        let total = assessment.question_count();

        writeln!(self.writer, "{}", self.instrument.title)?;
        writeln!(
            self.writer,
            "Answer with the option number. Type 'r' to restart or 'q' to quit."
        )?;

        while let Some(question) = assessment.current_question() {
            let number = assessment.current_index() + 1;
            self.print_question(number, total, question)?;

            let option_count = question.option_count();

            match self.read_command(option_count)? {
                Some(Command::Answer(choice)) => {
                    // 0 maps past the last option so the engine rejects it
                    let index = choice.checked_sub(1).unwrap_or(option_count);
                    match assessment.record_answer(index) {
                        Ok(()) => {}
                        Err(AssessmentError::OutOfRange { option_count, .. }) => {
                            writeln!(
                                self.writer,
                                "Option {} is out of range; enter a number from 1 to {}",
                                choice, option_count
                            )?;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                Some(Command::Restart) => {
                    log::debug!(
                        "Restarting '{}' after {} answers",
                        self.instrument.id,
                        assessment.current_index()
                    );
                    assessment.reset();
                    writeln!(self.writer, "Starting over.")?;
                }
                Some(Command::Quit) => {
                    return Ok(QuizOutcome::Abandoned {
                        answered: assessment.current_index(),
                        total,
                    });
                }
                None => {
                    anyhow::bail!(
                        "Input ended after {} of {} questions",
                        assessment.current_index(),
                        total
                    );
                }
            }
        }

        self.writer.flush()?;
        finish(self.instrument, &assessment).map(QuizOutcome::Completed)
    }

    fn print_question(&mut self, number: usize, total: usize, question: &Question) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Question {}/{}", number, total)?;
        writeln!(self.writer, "{}", question.prompt)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", i + 1, option)?;
        }
        Ok(())
    }

    /// Read lines until one is a command; `None` on end of input
    fn read_command(&mut self, option_count: usize) -> Result<Option<Command>> {
        loop {
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read answer")?;
            if read == 0 {
                return Ok(None);
            }

            let input = line.trim();
            match input.to_ascii_lowercase().as_str() {
                "" => continue,
                "q" | "quit" => return Ok(Some(Command::Quit)),
                "r" | "restart" => return Ok(Some(Command::Restart)),
                _ => {}
            }

            match input.parse::<usize>() {
                Ok(choice) => return Ok(Some(Command::Answer(choice))),
                Err(_) => {
                    writeln!(
                        self.writer,
                        "'{}' is not an option; enter a number from 1 to {}",
                        input, option_count
                    )?;
                }
            }
        }
    }
}

/// Score an assessment that has been answered in full
pub fn finish(instrument: &Instrument, assessment: &Assessment) -> Result<AssessmentResult> {
    AssessmentResult::from_assessment(instrument, assessment)
        .with_context(|| format!("Cannot score '{}'", instrument.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments;
    use std::io::Cursor;

    fn run_with(input: &str) -> (Result<QuizOutcome>, String) {
        let instrument = instruments::builtin("likert").unwrap();
        let mut output = Vec::new();
        let outcome =
            QuizRunner::new(&instrument, Cursor::new(input.as_bytes()), &mut output).run();
        (outcome, String::from_utf8(output).unwrap())
    }

    fn completed(outcome: Result<QuizOutcome>) -> AssessmentResult {
        match outcome.unwrap() {
            QuizOutcome::Completed(result) => result,
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_completes_with_one_based_input() {
        let (outcome, output) = run_with("5\n5\n5\n5\n5\n");
        let result = completed(outcome);
        assert_eq!(result.score.value(), 100);
        assert_eq!(result.answers, vec![4, 4, 4, 4, 4]);
        assert!(output.contains("Question 1/5"));
        assert!(output.contains("Question 5/5"));
        assert!(output.contains("  5. Strongly Agree"));
    }

    #[test]
    fn test_out_of_range_reprompts_same_question() {
        let (outcome, output) = run_with("6\n0\n1\n1\n1\n1\n1\n");
        let result = completed(outcome);
        assert_eq!(result.answers, vec![0; 5]);
        assert_eq!(result.score.value(), 20);
        assert!(output.contains("Option 6 is out of range; enter a number from 1 to 5"));
        assert!(output.contains("Option 0 is out of range"));
        assert_eq!(output.matches("Question 1/5").count(), 3);
    }

    #[test]
    fn test_non_numeric_reprompts() {
        let (outcome, output) = run_with("agree\n\n3\n3\n3\n3\n3\n");
        assert_eq!(completed(outcome).score.value(), 60);
        assert!(output.contains("'agree' is not an option; enter a number from 1 to 5"));
    }

    #[test]
    fn test_restart_discards_answers() {
        let (outcome, output) = run_with("1\n1\nr\n2\n2\n2\n2\n2\n");
        let result = completed(outcome);
        assert_eq!(result.answers, vec![1; 5]);
        assert!(output.contains("Starting over."));
    }

    #[test]
    fn test_quit_abandons() {
        let (outcome, _) = run_with("4\nq\n");
        assert_eq!(
            outcome.unwrap(),
            QuizOutcome::Abandoned {
                answered: 1,
                total: 5
            }
        );
    }

    #[test]
    fn test_eof_before_completion_is_error() {
        let (outcome, _) = run_with("4\n4\n");
        let err = outcome.unwrap_err();
        assert!(err.to_string().contains("Input ended after 2 of 5 questions"));
    }
}
