//! Config schema and deserialization

use crate::assessment::FeedbackTable;
use crate::instruments::BUILTIN_IDS;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Instrument used when neither the CLI nor the config names one
pub const DEFAULT_INSTRUMENT: &str = "likert";

/// Root config structure for .eqscorerc.json
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Default instrument: built-in id, configured name, or JSON path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,

    /// Named custom instruments. Relative paths are resolved against the
    /// directory of the config file that declares them.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub instruments: HashMap<String, PathBuf>,

    /// Band table that replaces the chosen instrument's own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackTable>,

    /// Set to false to disable colored console output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_instrument: Option<&str>, cli_no_color: bool) -> Self {
        if let Some(instrument) = cli_instrument {
            self.instrument = Some(instrument.to_string());
        }
        if cli_no_color {
            self.color = Some(false);
        }
        self
    }

    /// The instrument reference to use
    pub fn instrument_ref(&self) -> &str {
        self.instrument.as_deref().unwrap_or(DEFAULT_INSTRUMENT)
    }

    pub fn use_colors(&self) -> bool {
        self.color.unwrap_or(true)
    }

    /// Make relative instrument paths absolute against `dir`
    pub fn rebase_instruments(&mut self, dir: &Path) {
        for path in self.instruments.values_mut() {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
    }

    /// Make a relative `instrument` path absolute against `dir`.
    ///
    /// Built-in ids and names from `instruments` are left alone, as is any
    /// reference that does not name a file under `dir`.
    pub fn rebase_instrument(&mut self, dir: &Path) {
        let Some(reference) = self.instrument.as_deref() else {
            return;
        };
        if BUILTIN_IDS.contains(&reference) || self.instruments.contains_key(reference) {
            return;
        }
        let path = Path::new(reference);
        if path.is_relative() && dir.join(path).is_file() {
            self.instrument = Some(dir.join(path).to_string_lossy().into_owned());
        }
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.instrument.is_none() {
            self.instrument = base.instrument;
        }
        if self.feedback.is_none() {
            self.feedback = base.feedback;
        }
        if self.color.is_none() {
            self.color = base.color;
        }

        for (name, path) in base.instruments {
            self.instruments.entry(name).or_insert(path);
        }
    }
}
