//! Generation parameters
//!
//! Supplied once per series and never mutated. Validation happens here, at the
//! boundary, so that a rejected parameter set never produces a partial series.

use crate::error::{GeneratorError, Result};
use chrono::{Days, NaiveDate};

pub const DEFAULT_ROWS: usize = 10_000;
pub const DEFAULT_START_PRICE: f64 = 100.0;
pub const DEFAULT_VOLATILITY: f64 = 0.02;
pub const DEFAULT_DRIFT: f64 = 0.0001;

/// First bar date used when none is given: 2020-01-01
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Inputs of a single synthetic series
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParameters {
    /// Number of bars to produce (0 yields an empty series)
    pub row_count: usize,
    /// Reference price the first open gaps away from
    pub start_price: f64,
    /// Standard deviation of the daily return
    pub volatility: f64,
    /// Mean of the daily return, may be negative
    pub drift: f64,
    /// Date of the first bar
    pub start_date: NaiveDate,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROWS,
            start_price: DEFAULT_START_PRICE,
            volatility: DEFAULT_VOLATILITY,
            drift: DEFAULT_DRIFT,
            start_date: default_start_date(),
        }
    }
}

impl GenerationParameters {
    /// Creates a parameter set starting on the default date
    ///
    /// # Example
    /// ```
    /// use synthetic_ohlcv::GenerationParameters;
    ///
    /// let params = GenerationParameters::new(250, 100.0, 0.02, 0.0001);
    /// assert!(params.validate().is_ok());
    /// ```
    pub fn new(row_count: usize, start_price: f64, volatility: f64, drift: f64) -> Self {
        Self {
            row_count,
            start_price,
            volatility,
            drift,
            start_date: default_start_date(),
        }
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Checks every parameter, returning the first one that is out of range
    ///
    /// The start price must be positive: the walk is multiplicative and has no
    /// floor, so a non-positive seed price would propagate into every bar.
    pub fn validate(&self) -> Result<()> {
        if !self.start_price.is_finite() || self.start_price <= 0.0 {
            return Err(GeneratorError::invalid(
                "start_price",
                format!("must be positive and finite, got {}", self.start_price),
            ));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(GeneratorError::invalid(
                "volatility",
                format!("must be non-negative and finite, got {}", self.volatility),
            ));
        }
        if !self.drift.is_finite() {
            return Err(GeneratorError::invalid(
                "drift",
                format!("must be finite, got {}", self.drift),
            ));
        }
        self.last_date()?;
        Ok(())
    }

    /// Date of the final bar, or the start date for an empty series
    pub fn last_date(&self) -> Result<NaiveDate> {
        let span = self.row_count.saturating_sub(1) as u64;
        self.start_date
            .checked_add_days(Days::new(span))
            .ok_or_else(|| {
                GeneratorError::invalid(
                    "row_count",
                    format!(
                        "{} days from {} runs past the last representable date",
                        self.row_count, self.start_date
                    ),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = GenerationParameters::default();
        assert_eq!(p.row_count, 10_000);
        assert_eq!(p.start_price, 100.0);
        assert_eq!(p.volatility, 0.02);
        assert_eq!(p.drift, 0.0001);
        assert_eq!(p.start_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_zero_rows_is_valid() {
        let p = GenerationParameters::new(0, 100.0, 0.02, 0.0);
        assert!(p.validate().is_ok());
        assert_eq!(p.last_date().unwrap(), p.start_date);
    }

    #[test]
    fn test_rejects_non_positive_price() {
        for price in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = GenerationParameters::new(10, price, 0.02, 0.0)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                GeneratorError::InvalidParameter { name: "start_price", .. }
            ));
        }
    }

    #[test]
    fn test_rejects_negative_volatility() {
        let err = GenerationParameters::new(10, 100.0, -0.01, 0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::InvalidParameter { name: "volatility", .. }
        ));
    }

    #[test]
    fn test_negative_drift_allowed() {
        assert!(GenerationParameters::new(10, 100.0, 0.02, -0.05)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_rejects_non_finite_drift() {
        let err = GenerationParameters::new(10, 100.0, 0.02, f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::InvalidParameter { name: "drift", .. }
        ));
    }

    #[test]
    fn test_rejects_calendar_overflow() {
        let p = GenerationParameters::new(10, 100.0, 0.02, 0.0)
            .with_start_date(NaiveDate::MAX);
        let err = p.validate().unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::InvalidParameter { name: "row_count", .. }
        ));
    }
}
