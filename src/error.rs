//! Error types for csv2parquet
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for csv2parquet
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Input Resolution Errors
    // ============================================================================
    #[error("Failed to stat {path}: {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to list directory {path}: {source}")]
    DirList {
        path: PathBuf,
        source: std::io::Error,
    },

    // ============================================================================
    // Schema / CSV Errors
    // ============================================================================
    #[error("Schema detection failed: {message}")]
    SchemaDetect { message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ============================================================================
    // Arrow/Parquet Errors
    // ============================================================================
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Output error: {message}")]
    Output { message: String },

    #[error("Output verification failed for {path}: file missing or empty")]
    OutputVerify { path: PathBuf },

    // ============================================================================
    // Batch Errors
    // ============================================================================
    #[error("Conversion task failed: {message}")]
    Task { message: String },

    #[error("{failed} file(s) failed to convert")]
    BatchFailed { failed: usize },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a stat error for a path
    pub fn stat(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Stat {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a directory listing error
    pub fn dir_list(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::DirList {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a schema detection error
    pub fn schema_detect(message: impl Into<String>) -> Self {
        Self::SchemaDetect {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Create an output verification error
    pub fn output_verify(path: impl AsRef<Path>) -> Self {
        Self::OutputVerify {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a task error
    pub fn task(message: impl Into<String>) -> Self {
        Self::Task {
            message: message.into(),
        }
    }

    /// Whether this error is local to a single file (the batch keeps going)
    /// or aborts the whole run.
    pub fn is_file_local(&self) -> bool {
        !matches!(self, Error::Config { .. } | Error::BatchFailed { .. })
    }
}

/// Result type alias for csv2parquet
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::schema_detect("unreadable header");
        assert_eq!(
            err.to_string(),
            "Schema detection failed: unreadable header"
        );

        let err = Error::BatchFailed { failed: 3 };
        assert_eq!(err.to_string(), "3 file(s) failed to convert");
    }

    #[test]
    fn test_stat_error_carries_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::stat("/no/such/file.csv", io);
        assert!(err.to_string().contains("/no/such/file.csv"));
    }

    #[test]
    fn test_is_file_local() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(Error::stat("x.csv", io).is_file_local());
        assert!(Error::schema_detect("bad header").is_file_local());
        assert!(Error::output_verify("x.parquet").is_file_local());

        assert!(!Error::config("no input").is_file_local());
        assert!(!Error::BatchFailed { failed: 1 }.is_file_local());
    }
}
