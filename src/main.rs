//! csv2parquet CLI
//!
//! Command-line entry point: merges configuration, initializes logging,
//! and runs the batch conversion.

use clap::Parser;
use csv2parquet::cli::{Cli, Runner};
use csv2parquet::ConvertConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConvertConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging at the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.tracing_level().into()),
        )
        .init();

    let runner = Runner::new(config);
    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
