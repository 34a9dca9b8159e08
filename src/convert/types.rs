//! Conversion result types

use crate::error::Error;
use std::path::PathBuf;

/// The outcome of converting one file.
///
/// Produced once per input file and never mutated afterwards; the batch
/// run collects these positionally, matching the resolved file order.
#[derive(Debug)]
pub struct ConversionResult {
    /// Path of the source CSV file
    pub input_path: PathBuf,
    /// Path of the Parquet output, once it was computed
    pub output_path: Option<PathBuf>,
    /// Source size in bytes at conversion time
    pub input_size: u64,
    /// Output size in bytes after verification (0 on failure)
    pub output_size: u64,
    /// The failure, if the file did not convert
    pub error: Option<Error>,
}

impl ConversionResult {
    /// A result for a file that failed before producing any output.
    pub fn failed(input_path: PathBuf, error: Error) -> Self {
        Self {
            input_path,
            output_path: None,
            input_size: 0,
            output_size: 0,
            error: Some(error),
        }
    }

    /// Whether this file converted successfully.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Bytes saved by the conversion (0 when the output grew or the
    /// file failed).
    pub fn bytes_saved(&self) -> u64 {
        if self.is_success() {
            self.input_size.saturating_sub(self.output_size)
        } else {
            0
        }
    }
}
