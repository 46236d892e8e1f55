//! eqscore: Emotional-Intelligence Assessment CLI

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use colored::Colorize;
use eqscore::config::{load_config, starter_config, Config, CONFIG_FILENAME};
use eqscore::instruments::{self, Instrument, BUILTIN_IDS};
use eqscore::quiz::{self, QuizOutcome, QuizRunner};
use eqscore::reporter::{ConsoleReporter, JsonReporter};
use eqscore::AssessmentResult;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// eqscore: Emotional-Intelligence Assessment
#[derive(Parser, Debug)]
#[command(name = "eqscore")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take an assessment interactively
    Take {
        #[command(flatten)]
        common: CommonArgs,

        /// Show the per-question breakdown
        #[arg(long, short)]
        verbose: bool,
    },

    /// Score a complete list of answers without prompting
    Score {
        /// Comma-separated option indices, one per question (0-based)
        #[arg(long, short, value_delimiter = ',', required = true)]
        answers: Vec<usize>,

        /// Treat answers as 1-based option numbers
        #[arg(long)]
        one_based: bool,

        #[command(flatten)]
        common: CommonArgs,

        /// Show the per-question breakdown
        #[arg(long, short)]
        verbose: bool,
    },

    /// Show the feedback band for a score
    Feedback {
        /// Score between 0 and 100
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        score: u8,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// List available instruments
    List {
        /// Path to config file (default: search .eqscorerc.json in current dir and parents)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create .eqscorerc.json with sensible defaults
    Init {
        /// Default instrument (e.g. classic, likert)
        #[arg(long)]
        instrument: Option<String>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(ClapArgs, Debug)]
struct CommonArgs {
    /// Instrument: built-in id, name from config, or path to a JSON file
    #[arg(long, short)]
    instrument: Option<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to config file (default: search .eqscorerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    match args.command {
        Commands::Take { common, verbose } => run_take(&common, verbose),
        Commands::Score {
            answers,
            one_based,
            common,
            verbose,
        } => run_score(&common, &answers, one_based, verbose),
        Commands::Feedback { score, common } => run_feedback(&common, score),
        Commands::List { config } => run_list(config.as_deref()),
        Commands::Init { instrument, dir } => run_init(instrument.as_deref(), dir.as_deref()),
    }
}

/// Load config (CLI flags override config file) and resolve the instrument
fn prepare(common: &CommonArgs) -> Result<(Config, Instrument)> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd, common.config.as_deref())?
        .merge_with_cli(common.instrument.as_deref(), common.no_color);

    if !config.use_colors() {
        colored::control::set_override(false);
    }

    let mut instrument = instruments::resolve(config.instrument_ref(), &config)?;
    if let Some(ref feedback) = config.feedback {
        instrument = instrument.with_feedback(feedback.clone());
    }
    Ok((config, instrument))
}

fn console_reporter(config: &Config, verbose: bool) -> ConsoleReporter {
    let reporter = if config.use_colors() {
        ConsoleReporter::new()
    } else {
        ConsoleReporter::new().without_colors()
    };
    if verbose {
        reporter.verbose()
    } else {
        reporter
    }
}

fn report_result(
    common: &CommonArgs,
    config: &Config,
    instrument: &Instrument,
    result: &AssessmentResult,
    verbose: bool,
) {
    if common.json {
        println!("{}", JsonReporter::new().pretty().report(result));
    } else if common.quiet {
        console_reporter(config, verbose).report_quiet(result);
    } else {
        console_reporter(config, verbose).report(instrument, result);
    }
}

fn run_take(common: &CommonArgs, verbose: bool) -> Result<ExitCode> {
    let (config, instrument) = prepare(common)?;

    // Keep stdout clean for the JSON document
    let prompts: Box<dyn Write> = if common.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let stdin = io::stdin();
    let outcome = QuizRunner::new(&instrument, stdin.lock(), prompts).run()?;

    match outcome {
        QuizOutcome::Completed(result) => {
            report_result(common, &config, &instrument, &result, verbose);
            Ok(ExitCode::SUCCESS)
        }
        QuizOutcome::Abandoned { answered, total } => {
            eprintln!(
                "{}: Assessment abandoned after {} of {} questions",
                "Info".blue(),
                answered,
                total
            );
            Ok(ExitCode::from(1))
        }
    }
}

fn run_score(
    common: &CommonArgs,
    answers: &[usize],
    one_based: bool,
    verbose: bool,
) -> Result<ExitCode> {
    let (config, instrument) = prepare(common)?;
    let mut assessment = instrument.start()?;

    for (i, &answer) in answers.iter().enumerate() {
        let index = if one_based {
            answer
                .checked_sub(1)
                .with_context(|| format!("Answer {} is 0 but --one-based starts at 1", i + 1))?
        } else {
            answer
        };
        assessment
            .record_answer(index)
            .with_context(|| format!("Answer {} rejected", i + 1))?;
    }

    let result = quiz::finish(&instrument, &assessment)?;
    report_result(common, &config, &instrument, &result, verbose);
    Ok(ExitCode::SUCCESS)
}

fn run_feedback(common: &CommonArgs, score: u8) -> Result<ExitCode> {
    let (config, instrument) = prepare(common)?;
    let band = instrument.feedback.band_for(score);

    if common.json {
        println!("{}", JsonReporter::new().pretty().report_band(score, band));
    } else if common.quiet {
        println!("{}", band.label);
    } else {
        console_reporter(&config, false).report_band(score, &instrument.feedback);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_list(config_path: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd, config_path)?;

    println!("{}", "Built-in instruments:".bold());
    for id in BUILTIN_IDS {
        if let Some(instrument) = instruments::builtin(id) {
            println!(
                "   {:<10} {} ({} questions)",
                id,
                instrument.title,
                instrument.questions.len()
            );
        }
    }

    if !config.instruments.is_empty() {
        println!("{}", "Configured instruments:".bold());
        let mut names: Vec<_> = config.instruments.iter().collect();
        names.sort();
        for (name, path) in names {
            println!("   {:<10} {}", name, path.display());
        }
    }

    println!("Default: {}", config.instrument_ref());
    Ok(ExitCode::SUCCESS)
}

fn run_init(instrument: Option<&str>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let instrument = init_instrument_ref(
        instrument.unwrap_or(eqscore::config::DEFAULT_INSTRUMENT),
        &cwd,
        dir,
    )?;

    std::fs::write(&config_path, starter_config(&instrument))
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with instrument={}",
        "Done".green().bold(),
        config_path.display(),
        instrument
    );
    Ok(ExitCode::SUCCESS)
}

/// Instrument reference to store in a config written to `dir`.
///
/// A path given relative to the current directory is stored absolute unless it
/// also resolves from `dir`, where config loading will find it.
fn init_instrument_ref(instrument: &str, cwd: &Path, dir: &Path) -> Result<String> {
    if instruments::builtin(instrument).is_some() || dir.join(instrument).is_file() {
        return Ok(instrument.to_string());
    }
    let from_cwd = cwd.join(instrument);
    if from_cwd.is_file() {
        return Ok(from_cwd.to_string_lossy().into_owned());
    }
    anyhow::bail!(
        "Unknown instrument '{}' (built-in: {})",
        instrument,
        BUILTIN_IDS.join(", ")
    )
}
