//! Schema detection module
//!
//! Infers a per-column type for a CSV file from its header row and a
//! bounded sample of data rows.
//!
//! # Features
//!
//! - **Header Normalization**: BOM stripping, trimming, placeholder names
//! - **Type Inference**: Classifies cell values into atomic field types
//! - **Type Widening**: Join-semilattice combination of type evidence
//! - **Bounded Sampling**: At most N read attempts per file

mod detect;
mod types;

pub use detect::{detect_schema, infer_value_type, is_date_like, normalize_header};
pub use types::{Column, FieldType, Schema};
