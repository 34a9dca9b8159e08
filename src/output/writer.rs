//! Parquet file writer
//!
//! Configures and drives the parquet crate's `ArrowWriter`: schema
//! declaration, row-group sizing, batched row writes, finalize.

use super::batch::{rows_to_batch, to_arrow_schema};
use crate::encode::EncodedRow;
use crate::error::{Error, Result};
use crate::schema::Schema;
use arrow::datatypes::SchemaRef;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Configuration for the Parquet writer
#[derive(Debug, Clone)]
pub struct ParquetWriterConfig {
    compression: Compression,
    row_group_size: usize,
    dictionary_enabled: bool,
    statistics_enabled: bool,
}

impl Default for ParquetWriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::SNAPPY,
            row_group_size: 1024 * 1024, // 1M rows per group
            dictionary_enabled: true,
            statistics_enabled: true,
        }
    }
}

impl ParquetWriterConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set compression algorithm
    #[must_use]
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Set maximum row-group size (in rows)
    #[must_use]
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Enable or disable dictionary encoding
    #[must_use]
    pub fn with_dictionary(mut self, enabled: bool) -> Self {
        self.dictionary_enabled = enabled;
        self
    }

    /// Enable or disable statistics
    #[must_use]
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.statistics_enabled = enabled;
        self
    }

    /// Get row group size
    #[must_use]
    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Build writer properties
    fn build_properties(&self) -> WriterProperties {
        let mut builder = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size);

        if !self.dictionary_enabled {
            builder = builder.set_dictionary_enabled(false);
        }

        if !self.statistics_enabled {
            builder =
                builder.set_statistics_enabled(parquet::file::properties::EnabledStatistics::None);
        }

        builder.build()
    }
}

/// Row-at-a-time Parquet sink for one output file.
///
/// Buffers appended rows and forwards them to the underlying
/// `ArrowWriter` in batches of `batch_size` rows, emitting a progress
/// signal at each flush. `close()` finalizes the file; a finalize
/// failure is fatal for the file being written.
pub struct ParquetSink {
    writer: ArrowWriter<File>,
    schema: Schema,
    arrow_schema: SchemaRef,
    buffer: Vec<EncodedRow>,
    batch_size: usize,
    rows_written: usize,
}

impl ParquetSink {
    /// Create the output file and declare the schema to the writer.
    pub fn create(
        path: impl AsRef<Path>,
        schema: &Schema,
        config: &ParquetWriterConfig,
        batch_size: usize,
    ) -> Result<Self> {
        let file = File::create(path.as_ref())
            .map_err(|e| Error::output(format!("Failed to create file: {e}")))?;

        let arrow_schema = Arc::new(to_arrow_schema(schema));
        let props = config.build_properties();
        let writer = ArrowWriter::try_new(file, Arc::clone(&arrow_schema), Some(props))
            .map_err(|e| Error::output(format!("Failed to create Parquet writer: {e}")))?;

        Ok(Self {
            writer,
            schema: schema.clone(),
            arrow_schema,
            buffer: Vec::new(),
            batch_size: batch_size.max(1),
            rows_written: 0,
        })
    }

    /// Append one encoded row, flushing a batch when the buffer fills.
    pub fn append(&mut self, row: EncodedRow) -> Result<()> {
        self.buffer.push(row);
        if self.buffer.len() >= self.batch_size {
            self.flush_buffer()?;
            debug!("Processed {} rows", self.rows_written);
        }
        Ok(())
    }

    /// Rows forwarded to the writer so far (excludes the current buffer).
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    fn flush_buffer(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let batch = rows_to_batch(&self.schema, &self.arrow_schema, &self.buffer)?;
        self.writer
            .write(&batch)
            .map_err(|e| Error::output(format!("Failed to write batch: {e}")))?;
        self.rows_written += self.buffer.len();
        self.buffer.clear();
        Ok(())
    }

    /// Flush the remaining buffer and finalize the file.
    ///
    /// Returns the total number of rows written.
    pub fn close(mut self) -> Result<usize> {
        self.flush_buffer()?;
        let rows = self.rows_written;
        self.writer
            .close()
            .map_err(|e| Error::output(format!("Failed to close Parquet writer: {e}")))?;
        Ok(rows)
    }
}
