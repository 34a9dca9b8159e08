//! CLI module
//!
//! Command-line interface for the converter: flag parsing and the
//! top-level run that reports the batch summary.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
