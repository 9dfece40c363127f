//! Path generator
//!
//! Produces daily OHLCV bars from a multiplicative random walk:
//!
//! open_t  = close_{t-1} (1 + g),        g ~ N(0, 0.2σ)
//! close_t = open_t (1 + r),             r ~ N(μ, σ)
//! high_t  = max(open_t, close_t) (1 + h), h = |N(0, 0.5σ)|
//! low_t   = min(open_t, close_t) (1 - h)
//!
//! The per-day draws are independent; only the price level is carried from one
//! day to the next. Generation is therefore split into drawing the shocks and
//! folding them into bars.

use crate::bar::{Bar, VOLUME_FLOOR};
use crate::error::{GeneratorError, Result};
use crate::params::GenerationParameters;
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

/// Gap noise standard deviation as a fraction of volatility
pub const GAP_SCALE: f64 = 0.2;
/// Intraday range noise standard deviation as a fraction of volatility
pub const RANGE_SCALE: f64 = 0.5;
pub const VOLUME_MEAN: f64 = 1_000_000.0;
pub const VOLUME_STD_DEV: f64 = 200_000.0;

/// The independent random draws for one day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyShock {
    /// Open-to-close return
    pub daily_return: f64,
    /// Relative gap between the previous close and this open
    pub gap: f64,
    /// Relative intraday extension beyond the body, never negative
    pub range: f64,
    /// Volume, already rounded and floored
    pub volume: u64,
}

/// Synthetic daily bar generator
///
/// Holds validated parameters and the four normal distributions the walk
/// draws from. Cheap to clone and safe to share across threads; the random
/// source is always supplied by the caller.
#[derive(Debug, Clone)]
pub struct PathGenerator {
    params: GenerationParameters,
    returns: Normal<f64>,
    gaps: Normal<f64>,
    ranges: Normal<f64>,
    volumes: Normal<f64>,
}

impl PathGenerator {
    /// Creates a generator after validating `params`
    ///
    /// # Errors
    /// [`GeneratorError::InvalidParameter`] if any parameter is out of range.
    ///
    /// # Example
    /// ```
    /// use synthetic_ohlcv::{GenerationParameters, PathGenerator};
    ///
    /// let generator = PathGenerator::new(GenerationParameters::new(5, 100.0, 0.02, 0.0)).unwrap();
    /// let bars = generator.generate_seeded(7);
    /// assert_eq!(bars.len(), 5);
    /// ```
    pub fn new(params: GenerationParameters) -> Result<Self> {
        params.validate()?;

        let normal = |name: &'static str, mean: f64, std_dev: f64| {
            Normal::new(mean, std_dev).map_err(|e| GeneratorError::invalid(name, e.to_string()))
        };

        Ok(Self {
            returns: normal("volatility", params.drift, params.volatility)?,
            gaps: normal("volatility", 0.0, params.volatility * GAP_SCALE)?,
            ranges: normal("volatility", 0.0, params.volatility * RANGE_SCALE)?,
            volumes: normal("volume", VOLUME_MEAN, VOLUME_STD_DEV)?,
            params,
        })
    }

    /// Draws one day's shocks
    ///
    /// Draw order is return, gap, range, volume. Reordering changes every
    /// seeded series.
    pub fn draw_shock<R: Rng>(&self, rng: &mut R) -> DailyShock {
        let daily_return = self.returns.sample(rng);
        let gap = self.gaps.sample(rng);
        let range = self.ranges.sample(rng).abs();
        let volume = self.volumes.sample(rng).round().max(VOLUME_FLOOR as f64) as u64;

        DailyShock {
            daily_return,
            gap,
            range,
            volume,
        }
    }

    /// Draws `n_days` of independent shocks
    pub fn draw_shocks<R: Rng>(&self, rng: &mut R, n_days: usize) -> Vec<DailyShock> {
        (0..n_days).map(|_| self.draw_shock(rng)).collect()
    }

    /// Folds shocks into bars, carrying the rounded close forward
    ///
    /// Bar `i` is dated `start_date + i`. Stops early only if a date would
    /// fall past the end of the calendar, which `new` rules out for
    /// `row_count` shocks.
    pub fn assemble(&self, shocks: &[DailyShock]) -> Vec<Bar> {
        let start_date = self.params.start_date;

        shocks
            .iter()
            .enumerate()
            .scan(self.params.start_price, |current_price, (i, shock)| {
                let date = start_date.checked_add_days(Days::new(i as u64))?;
                let bar = next_bar(date, *current_price, shock);
                *current_price = bar.close;
                Some(bar)
            })
            .collect()
    }

    /// Generates `row_count` bars from the supplied random source
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Bar> {
        let shocks = self.draw_shocks(rng, self.params.row_count);
        let bars = self.assemble(&shocks);

        tracing::debug!(
            rows = bars.len(),
            start_date = %self.params.start_date,
            "generated synthetic series"
        );
        bars
    }

    /// Generates from a fresh `StdRng` seeded with `seed`
    ///
    /// Identical seeds and parameters give bit-identical series.
    pub fn generate_seeded(&self, seed: u64) -> Vec<Bar> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    /// Generates `n_series` independent series in parallel
    ///
    /// Series `k` uses its own stream seeded with `base_seed + k`, so the
    /// result matches calling [`generate_seeded`](Self::generate_seeded)
    /// for each seed in turn.
    pub fn generate_batch_parallel(&self, n_series: usize, base_seed: u64) -> Vec<Vec<Bar>> {
        (0..n_series)
            .into_par_iter()
            .map(|k| self.generate_seeded(base_seed.wrapping_add(k as u64)))
            .collect()
    }
}

/// Builds one bar from the previous close and the day's shocks
///
/// Every raw price saturates at `±f64::MAX`, so a walk that outgrows the
/// `f64` range stays finite and the bar still orders correctly.
fn next_bar(date: NaiveDate, previous_close: f64, shock: &DailyShock) -> Bar {
    let open = saturate(previous_close * (1.0 + shock.gap));
    let close = saturate(open * (1.0 + shock.daily_return));

    let high = saturate(extend_up(open.max(close), shock.range));
    let low = saturate(extend_down(open.min(close), shock.range));

    Bar::from_raw(date, open, high, low, close, shock.volume)
}

/// `x (1 + h)` for a non-negative body edge, `x (1 - h)` below zero
fn extend_up(x: f64, h: f64) -> f64 {
    if x >= 0.0 {
        x * (1.0 + h)
    } else {
        x * (1.0 - h)
    }
}

/// `x (1 - h)` for a non-negative body edge, `x (1 + h)` below zero
fn extend_down(x: f64, h: f64) -> f64 {
    if x >= 0.0 {
        x * (1.0 - h)
    } else {
        x * (1.0 + h)
    }
}

fn saturate(x: f64) -> f64 {
    x.clamp(-f64::MAX, f64::MAX)
}

/// Validates `params` and generates a series from `rng`
pub fn generate<R: Rng>(params: GenerationParameters, rng: &mut R) -> Result<Vec<Bar>> {
    Ok(PathGenerator::new(params)?.generate(rng))
}
