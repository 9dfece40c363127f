//! Command-line surface: flags, environment overrides and the generate-then-write run

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use rand::Rng;
use std::path::{Path, PathBuf};

use crate::csv_io::{write_csv, write_csv_path};
use crate::generator::PathGenerator;
use crate::params::{
    default_start_date, GenerationParameters, DEFAULT_DRIFT, DEFAULT_ROWS, DEFAULT_START_PRICE,
    DEFAULT_VOLATILITY,
};
use crate::stats::SeriesSummary;

#[derive(Parser, Debug)]
#[command(name = "synthetic-ohlcv")]
#[command(version, about = "Generate synthetic OHLCV data", long_about = None)]
pub struct Cli {
    /// Number of rows
    #[arg(short = 'n', long, env = "SYNTH_ROWS", default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Output file, `-` writes to stdout
    #[arg(short, long, env = "SYNTH_OUTPUT", default_value = "data/synthetic.csv")]
    pub output: PathBuf,

    /// Starting price
    #[arg(long, env = "SYNTH_START_PRICE", default_value_t = DEFAULT_START_PRICE)]
    pub start_price: f64,

    /// Daily volatility (standard deviation of returns)
    #[arg(long, env = "SYNTH_VOLATILITY", default_value_t = DEFAULT_VOLATILITY)]
    pub volatility: f64,

    /// Daily trend (mean return)
    #[arg(
        long,
        visible_alias = "drift",
        env = "SYNTH_TREND",
        default_value_t = DEFAULT_DRIFT,
        allow_negative_numbers = true
    )]
    pub trend: f64,

    /// Date of the first bar (YYYY-MM-DD)
    #[arg(long, env = "SYNTH_START_DATE", default_value_t = default_start_date())]
    pub start_date: NaiveDate,

    /// Random seed; a fresh one is drawn and logged when omitted
    #[arg(long, env = "SYNTH_SEED")]
    pub seed: Option<u64>,
}

/// Where the generated table goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Destination::Stdout
        } else {
            Destination::File(path.to_path_buf())
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Stdout => write!(f, "stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Outcome of a run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub rows: usize,
    pub seed: u64,
    pub destination: Destination,
    pub summary: Option<SeriesSummary>,
}

impl Cli {
    pub fn params(&self) -> GenerationParameters {
        GenerationParameters::new(self.rows, self.start_price, self.volatility, self.trend)
            .with_start_date(self.start_date)
    }

    pub fn destination(&self) -> Destination {
        Destination::from_path(&self.output)
    }
}

/// Validates, generates and writes one series
///
/// Parameters are checked before anything is written, so a rejected run
/// leaves no partial output behind.
pub fn run(cli: &Cli) -> Result<RunReport> {
    let generator = PathGenerator::new(cli.params()).context("invalid generation parameters")?;

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::info!(
        seed,
        rows = cli.rows,
        start_price = cli.start_price,
        volatility = cli.volatility,
        drift = cli.trend,
        "Generating synthetic series"
    );

    let bars = generator.generate_seeded(seed);
    let summary = SeriesSummary::from_bars(&bars);
    if let Some(s) = &summary {
        tracing::info!(
            first_date = %s.first_date,
            last_date = %s.last_date,
            last_close = s.last_close,
            min_low = s.min_low,
            max_high = s.max_high,
            realized_drift = s.mean_return,
            realized_volatility = s.return_std_dev,
            "Series summary"
        );
    }

    let destination = cli.destination();
    let rows = match &destination {
        Destination::Stdout => write_csv(&bars, std::io::stdout().lock())?,
        Destination::File(path) => write_csv_path(&bars, path)
            .with_context(|| format!("failed to write {}", path.display()))?,
    };

    Ok(RunReport {
        rows,
        seed,
        destination,
        summary,
    })
}
