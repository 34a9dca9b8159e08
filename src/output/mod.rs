//! Output module
//!
//! Drives the Parquet writer: schema declaration, batched row writes,
//! and finalization.
//!
//! # Overview
//!
//! - Converting encoded rows to Arrow RecordBatches
//! - Writer configuration (compression, row-group sizing)
//! - The `ParquetSink` row-at-a-time write surface

mod batch;
mod writer;

pub use batch::{rows_to_batch, to_arrow_schema};
pub use writer::{ParquetSink, ParquetWriterConfig};
