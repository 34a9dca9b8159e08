//! CLI runner - executes the conversion and reports the summary

use crate::config::ConvertConfig;
use crate::convert::{convert_all, ConversionResult};
use crate::error::{Error, Result};
use tracing::{error, info};

/// CLI runner
pub struct Runner {
    config: ConvertConfig,
}

impl Runner {
    /// Create a new runner from a merged configuration.
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Run the batch conversion and log the summary.
    ///
    /// Returns an error when any file failed, so the process exit
    /// status reflects partial failure; each file's own error stays in
    /// its result and is logged here.
    pub async fn run(&self) -> Result<()> {
        if let Some(input) = &self.config.input {
            info!("csv2parquet starting, input: {}", input.display());
        }

        let results = convert_all(&self.config).await;
        let failed = self.summarize(&results);

        if failed > 0 {
            return Err(Error::BatchFailed { failed });
        }
        Ok(())
    }

    /// Log per-failure details plus the aggregate tallies; returns the
    /// number of failed files.
    fn summarize(&self, results: &[ConversionResult]) -> usize {
        let mut converted = 0usize;
        let mut failed = 0usize;
        let mut total_input: u64 = 0;
        let mut total_output: u64 = 0;

        for result in results {
            match &result.error {
                Some(e) => {
                    failed += 1;
                    error!("FAILED {}: {e}", result.input_path.display());
                }
                None => {
                    converted += 1;
                    total_input += result.input_size;
                    total_output += result.output_size;
                }
            }
        }

        info!("Done: {converted} converted, {failed} failed");
        if converted > 0 {
            let saved = total_input.saturating_sub(total_output);
            info!(
                "Space: {:.1} MB input -> {:.1} MB parquet ({:.1} MB saved)",
                total_input as f64 / 1024.0 / 1024.0,
                total_output as f64 / 1024.0 / 1024.0,
                saved as f64 / 1024.0 / 1024.0,
            );
        }

        failed
    }
}
