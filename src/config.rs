//! Conversion configuration
//!
//! Configuration is loaded from an optional YAML file and merged with
//! CLI flags; flags always win. The rest of the crate treats the merged
//! `ConvertConfig` as read-only input.

use crate::cli::Cli;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default config file name; missing is fine, unlike an explicitly
/// requested path.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

// ============================================================================
// Config
// ============================================================================

/// Complete conversion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Input CSV file or directory
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Output directory (default: alongside each input file)
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Delete source files after successful conversion
    #[serde(default = "default_delete_original")]
    pub delete_original: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Rows per write batch (also the progress-log granularity)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// CSV delimiter character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Number of rows to sample for type detection
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,
}

fn default_delete_original() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_batch_size() -> usize {
    10_000
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_sample_rows() -> usize {
    100
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            delete_original: default_delete_original(),
            log_level: default_log_level(),
            batch_size: default_batch_size(),
            delimiter: default_delimiter(),
            sample_rows: default_sample_rows(),
        }
    }
}

impl ConvertConfig {
    /// Load configuration: YAML file first, then CLI flag overrides.
    ///
    /// A missing file is only an error when the user named it explicitly;
    /// the default `config.yaml` is allowed to be absent.
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = match fs::read_to_string(&path) {
            Ok(data) => serde_yaml::from_str(&data)?,
            Err(e) => {
                if cli.config.is_some() {
                    return Err(Error::config(format!(
                        "reading config file {}: {e}",
                        path.display()
                    )));
                }
                Self::default()
            }
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI flag overrides on top of file values.
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(input) = &cli.input {
            self.input = Some(input.clone());
        }
        if let Some(output) = &cli.output {
            self.output = Some(output.clone());
        }
        if cli.keep {
            self.delete_original = false;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        if let Some(batch_size) = cli.batch_size {
            if batch_size > 0 {
                self.batch_size = batch_size;
            }
        }
        if let Some(delimiter) = &cli.delimiter {
            if !delimiter.is_empty() {
                self.delimiter = delimiter.clone();
            }
        }
        if let Some(sample_rows) = cli.sample_rows {
            if sample_rows > 0 {
                self.sample_rows = sample_rows;
            }
        }
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> Result<()> {
        if self.input.is_none() {
            return Err(Error::config(
                "input path is required (use --input flag or set in config)",
            ));
        }
        Ok(())
    }

    /// The configured input path.
    pub fn input_path(&self) -> Result<&std::path::Path> {
        self.input.as_deref().ok_or_else(|| {
            Error::config("input path is required (use --input flag or set in config)")
        })
    }

    /// The delimiter as a single byte; an empty string means comma.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }

    /// The configured log level as a tracing level, falling back to INFO
    /// on anything unrecognized.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .parse::<tracing::Level>()
            .unwrap_or(tracing::Level::INFO)
    }
}
