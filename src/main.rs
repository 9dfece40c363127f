//! Synthetic OHLCV generator
//!
//! Run with: cargo run --release -- -n 1000 -o data/synthetic.csv

use clap::Parser;
use synthetic_ohlcv::cli::{self, Cli, Destination};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout may carry the CSV itself, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = cli::run(&cli)?;

    match report.destination {
        Destination::Stdout => {
            tracing::info!(rows = report.rows, seed = report.seed, "Generated rows -> stdout")
        }
        Destination::File(path) => {
            println!("Generated {} rows -> {}", report.rows, path.display())
        }
    }

    Ok(())
}
