//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Convert CSV files to Parquet with automatic schema detection
#[derive(Parser, Debug)]
#[command(name = "csv2parquet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (default: config.yaml, missing is fine)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input CSV file or directory
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory (default: same as input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep original CSV files after conversion
    #[arg(short, long)]
    pub keep: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Rows per write batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// CSV delimiter character
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Number of rows to sample for type detection
    #[arg(long)]
    pub sample_rows: Option<usize>,
}
