//! Configuration loading for eqscore

mod schema;

pub use schema::{Config, DEFAULT_INSTRUMENT};

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".eqscorerc.json";

/// Find and load config file with extends resolution. Searches current directory then parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            log::debug!("Loading config from {}", path.display());
            load_config_with_extends(&path, &mut HashSet::new())
        }
        None => {
            log::debug!(
                "No {} found from {}; using defaults",
                CONFIG_FILENAME,
                work_dir.display()
            );
            Ok(Config::default())
        }
    }
}

/// Load a config file and resolve extends chain
fn load_config_with_extends(config_path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Config> {
    // Prevent circular extends
    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.to_path_buf());
    if !visited.insert(canonical) {
        anyhow::bail!(
            "Circular extends detected in config: {}",
            config_path.display()
        );
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;

    let config_dir = config_path.parent().unwrap_or(Path::new("."));
    config.rebase_instruments(config_dir);
    config.rebase_instrument(config_dir);

    if let Some(extends) = config.extends.take() {
        let base_path = resolve_extends(config_path, &extends)?;
        log::debug!(
            "{} extends {}",
            config_path.display(),
            base_path.display()
        );
        let base_config = load_config_with_extends(&base_path, visited)?;
        config.merge_from(base_config);
    }

    Ok(config)
}

/// Resolve an extends reference to a config path
fn resolve_extends(config_path: &Path, extends: &str) -> Result<PathBuf> {
    let config_dir = config_path.parent().unwrap_or(Path::new("."));
    let extends_path = config_dir.join(extends);

    // Ensure it has .json extension
    let extends_path = if extends_path.extension().is_none() {
        extends_path.with_extension("json")
    } else {
        extends_path
    };

    if !extends_path.exists() {
        anyhow::bail!(
            "Extended config not found: {} (referenced from {})",
            extends_path.display(),
            config_path.display()
        );
    }

    Ok(extends_path)
}

/// Search for .eqscorerc.json in directory and its parents
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.exists())
}

/// Contents written by `eqscore init`
pub fn starter_config(instrument: &str) -> String {
    let value = serde_json::json!({
        "instrument": instrument,
        "instruments": {},
        "color": true
    });
    let mut content = serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
    content.push('\n');
    content
}
