//! Record encoding module
//!
//! Turns raw CSV rows into sparse typed rows aligned with a detected
//! schema, ready for the columnar writer.
//!
//! # Overview
//!
//! - **Sparse encoding**: empty or missing cells are omitted, not
//!   written as nulls by the encoder itself
//! - **Defensive parsing**: a cell that no longer parses as the decided
//!   type is omitted rather than failing the row

mod encoder;
mod types;

pub use encoder::encode_row;
pub use types::{CellValue, EncodedRow};

#[cfg(test)]
mod tests;
