// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # csv2parquet
//!
//! Convert delimited text files into Parquet with automatic per-file
//! schema detection.
//!
//! ## Features
//!
//! - **Schema Detection**: Infers a type per column from a bounded
//!   sample of rows, widening conservatively toward text
//! - **Streaming Conversion**: Two-pass processing keeps memory flat
//!   for large files
//! - **Sparse Rows**: Empty and missing cells become nulls in the
//!   optional Parquet columns, not placeholder values
//! - **Bounded Parallelism**: Converts many files concurrently under a
//!   fixed admission limit, with per-file failure isolation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csv2parquet::{convert_all, ConvertConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ConvertConfig {
//!         input: Some("data/".into()),
//!         ..ConvertConfig::default()
//!     };
//!     for result in convert_all(&config).await {
//!         // Inspect per-file outcome
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Batch Scheduler                      │
//! │        bounded concurrency, ordered results              │
//! └──────────────────────────┬───────────────────────────────┘
//!                            │ per file
//! ┌──────────┬───────────────┴───────────┬──────────────────┐
//! │  Resolve │        Convert            │      Output      │
//! ├──────────┼───────────────────────────┼──────────────────┤
//! │ File     │ stat → detect schema →    │ Arrow batches    │
//! │ Directory│ stream encode → verify →  │ Parquet writer   │
//! │          │ optional source delete    │ row groups       │
//! └──────────┴───────────────────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Conversion configuration
pub mod config;

/// Input path resolution
pub mod resolve;

/// Schema detection and type widening
pub mod schema;

/// Row encoding against a detected schema
pub mod encode;

/// Parquet output
pub mod output;

/// Per-file conversion and batch scheduling
pub mod convert;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ConvertConfig;
pub use convert::{convert_all, convert_file, ConversionResult};
pub use error::{Error, Result};
pub use resolve::{resolve_input, SourceFile};
pub use schema::{detect_schema, FieldType, Schema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
