//! # Synthetic OHLCV
//!
//! Generates artificial daily OHLCV series (with adjusted close) for use as
//! test fixtures. Prices follow a multiplicative random walk with opening
//! gaps; high and low are derived from the open/close body so every bar is
//! internally consistent.
//!
//! ## Modules
//!
//! - [`params`] - Generation parameters and validation
//! - [`generator`] - Path generator (seeded, explicit random source)
//! - [`bar`] - Daily bar record
//! - [`stats`] - Realized statistics of a series
//! - [`csv_io`] - CSV writer and reader
//! - [`validate`] - Whole-series validation
//! - [`cli`] - Command-line surface
//!
//! ## Example
//!
//! ```rust
//! use synthetic_ohlcv::{GenerationParameters, PathGenerator};
//!
//! let params = GenerationParameters::new(252, 100.0, 0.02, 0.0001);
//! let generator = PathGenerator::new(params).unwrap();
//!
//! let bars = generator.generate_seeded(42);
//! assert_eq!(bars.len(), 252);
//! assert!(bars.iter().all(|b| b.low <= b.open.min(b.close)));
//! ```

pub mod bar;
pub mod cli;
pub mod csv_io;
pub mod error;
pub mod generator;
pub mod params;
pub mod stats;
pub mod validate;

pub use bar::Bar;
pub use error::{GeneratorError, Result};
pub use generator::{generate, DailyShock, PathGenerator};
pub use params::GenerationParameters;
pub use stats::SeriesSummary;
pub use validate::{validate_series, SeriesViolation, Violation};
