//! Conversion module
//!
//! Per-file conversion pipeline and the bounded-concurrency batch run.
//!
//! # Overview
//!
//! One file moves through: stat input → detect schema → prepare output
//! location → stream encode+write → verify output → optionally delete
//! the source. Failures are local to their file; the batch always runs
//! every file and reports results in input order.

mod types;

pub use types::ConversionResult;

use crate::config::ConvertConfig;
use crate::encode::encode_row;
use crate::error::{Error, Result};
use crate::output::{ParquetSink, ParquetWriterConfig};
use crate::resolve::{resolve_input, SourceFile};
use crate::schema::{detect_schema, Schema};
use futures::StreamExt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Maximum number of files converted concurrently.
pub const MAX_CONCURRENT_CONVERSIONS: usize = 4;

/// Convert every file resolved from the configured input path.
///
/// Files run concurrently under a fixed admission bound; results come
/// back in the same order as the resolved file list regardless of which
/// conversion finishes first. A failure in one file never aborts the
/// rest of the batch.
pub async fn convert_all(config: &ConvertConfig) -> Vec<ConversionResult> {
    let input = match config.input_path() {
        Ok(path) => path,
        Err(e) => return vec![ConversionResult::failed(PathBuf::new(), e)],
    };

    let files = match resolve_input(input) {
        Ok(files) => files,
        Err(e) => return vec![ConversionResult::failed(input.to_path_buf(), e)],
    };

    if files.is_empty() {
        warn!("No CSV files found");
        return Vec::new();
    }

    info!("Converting {} file(s)", files.len());

    futures::stream::iter(files)
        .map(|file| {
            let config = config.clone();
            async move {
                let path = file.path.clone();
                match tokio::task::spawn_blocking(move || convert_file(&file.path, &config)).await
                {
                    Ok(result) => result,
                    Err(e) => ConversionResult::failed(path, Error::task(e.to_string())),
                }
            }
        })
        .buffered(MAX_CONCURRENT_CONVERSIONS)
        .collect()
        .await
}

/// Convert a single CSV file to Parquet.
///
/// Never panics or aborts the process; every failure ends up in the
/// returned result.
pub fn convert_file(input: &Path, config: &ConvertConfig) -> ConversionResult {
    info!("Converting {}", input.display());

    // StatInput
    let input_size = match SourceFile::stat(input) {
        Ok(source) => source.size,
        Err(e) => return ConversionResult::failed(input.to_path_buf(), e),
    };

    let out_path = output_path(input, config);
    let mut result = ConversionResult {
        input_path: input.to_path_buf(),
        output_path: Some(out_path.clone()),
        input_size,
        output_size: 0,
        error: None,
    };

    // DetectSchema; no output file exists yet on failure
    let schema = match detect_file_schema(input, config) {
        Ok(schema) => schema,
        Err(e) => {
            result.error = Some(e);
            return result;
        }
    };
    debug!("Detected schema: {schema}");

    // PrepareOutputLocation
    if let Some(dir) = &config.output {
        if let Err(e) = fs::create_dir_all(dir) {
            result.error = Some(Error::output(format!("creating output dir: {e}")));
            return result;
        }
    }

    // StreamEncodeWrite
    if let Err(e) = stream_file(input, &out_path, &schema, config) {
        // Clean up partial output
        let _ = fs::remove_file(&out_path);
        result.error = Some(e);
        return result;
    }

    // VerifyOutput: the write phase can report success with nothing on disk
    match fs::metadata(&out_path) {
        Ok(meta) if meta.len() > 0 => result.output_size = meta.len(),
        _ => {
            result.error = Some(Error::output_verify(&out_path));
            return result;
        }
    }

    // OptionalDeleteSource: a failed delete never flips the result
    if config.delete_original {
        match fs::remove_file(input) {
            Ok(()) => info!("Deleted original {}", input.display()),
            Err(e) => warn!("Failed to delete original {}: {e}", input.display()),
        }
    }

    info!(
        "Converted {} -> {} ({:.1} MB -> {:.1} MB)",
        input.display(),
        out_path.display(),
        result.input_size as f64 / 1024.0 / 1024.0,
        result.output_size as f64 / 1024.0 / 1024.0,
    );

    result
}

/// Compute the destination path: same base name with a parquet
/// extension, alongside the input unless an output directory is set.
fn output_path(input: &Path, config: &ConvertConfig) -> PathBuf {
    let renamed = input.with_extension("parquet");
    match &config.output {
        Some(dir) => match renamed.file_name() {
            Some(name) => dir.join(name),
            None => dir.join("output.parquet"),
        },
        None => renamed,
    }
}

/// First pass: open the input and detect its schema from a bounded
/// sample of rows.
fn detect_file_schema(input: &Path, config: &ConvertConfig) -> Result<Schema> {
    let file = File::open(input)
        .map_err(|e| Error::schema_detect(format!("opening {}: {e}", input.display())))?;
    detect_schema(file, config.delimiter_byte(), config.sample_rows)
}

/// Second pass: re-open the input, skip the header, and stream every
/// data row through the encoder into the Parquet sink.
fn stream_file(
    input: &Path,
    output: &Path,
    schema: &Schema,
    config: &ConvertConfig,
) -> Result<usize> {
    let mut sink = ParquetSink::create(
        output,
        schema,
        &ParquetWriterConfig::default(),
        config.batch_size,
    )?;

    let file = File::open(input)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut records = rdr.records();

    // Skip exactly one row: the header
    match records.next() {
        Some(Ok(_)) => {}
        Some(Err(e)) => return Err(Error::Csv(e)),
        None => return Err(Error::output("input ended before the header row")),
    }

    let mut row_number = 0usize;
    for record in records {
        row_number += 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping malformed row {row_number}: {e}");
                continue;
            }
        };

        let row = encode_row(schema, &record);
        if let Err(e) = sink.append(row) {
            warn!("Error writing row {row_number}: {e}");
            continue;
        }
    }

    // Finalize failure is fatal for this file
    let rows = sink.close()?;
    info!("Wrote {} rows to {}", rows, output.display());
    Ok(rows)
}

#[cfg(test)]
mod tests;
