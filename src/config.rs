use crate::error::{EvalError, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
}

/// Evaluator-specific configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluatorConfig {
    /// Label value counted as a true positive; every other value is a false positive.
    #[serde(default = "default_positive_label")]
    pub positive_label: String,
    /// Direction literal that ranks higher scores first.
    #[serde(default = "default_high_direction")]
    pub high_direction: String,
    /// Field delimiter of the label file.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            positive_label: default_positive_label(),
            high_direction: default_high_direction(),
            delimiter: default_delimiter(),
            log_level: default_log_level(),
        }
    }
}

fn default_positive_label() -> String {
    "1".to_string()
}

fn default_high_direction() -> String {
    "high".to_string()
}

fn default_delimiter() -> String {
    "\t".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from an optional TOML file.
    ///
    /// Without a path the built-in defaults are used, which reproduce the
    /// plain `label<TAB>sentence<TAB>_` / `"1"` / `"high"` conventions.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let config_str = std::fs::read_to_string(path).map_err(|source| EvalError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&config_str).map_err(|e| {
            EvalError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        log::debug!("Configuration loaded from {}", path.display());

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.evaluator.positive_label.is_empty() {
            return Err(EvalError::Config(
                "evaluator.positive_label must not be empty".to_string(),
            ));
        }

        if self.evaluator.high_direction.is_empty() {
            return Err(EvalError::Config(
                "evaluator.high_direction must not be empty".to_string(),
            ));
        }

        self.delimiter_byte()?;

        log::LevelFilter::from_str(&self.evaluator.log_level).map_err(|_| {
            EvalError::Config(format!(
                "evaluator.log_level must be one of off, error, warn, info, debug, trace; got {:?}",
                self.evaluator.log_level
            ))
        })?;
        Ok(())
    }

    /// Label file delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.evaluator.delimiter.as_bytes() {
            [b'\n'] | [b'\r'] => Err(EvalError::Config(
                "evaluator.delimiter must not be a line terminator".to_string(),
            )),
            [b'"'] => Err(EvalError::Config(
                "evaluator.delimiter must not be the quote character".to_string(),
            )),
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(EvalError::Config(format!(
                "evaluator.delimiter must be a single ASCII character, got {:?}",
                self.evaluator.delimiter
            ))),
        }
    }

    pub fn log_level(&self) -> &str {
        &self.evaluator.log_level
    }
}
