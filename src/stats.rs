//! Summary statistics for a generated series
//!
//! Realized drift and volatility are measured on close-to-close simple
//! returns, so they include the opening gap as well as the intraday return.

use crate::bar::Bar;
use chrono::NaiveDate;

/// Descriptive statistics of a bar series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub rows: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub first_open: f64,
    pub last_close: f64,
    pub min_low: f64,
    pub max_high: f64,
    /// Mean close-to-close simple return
    pub mean_return: f64,
    /// Sample standard deviation of close-to-close simple returns
    pub return_std_dev: f64,
    pub mean_volume: f64,
}

impl SeriesSummary {
    /// Computes statistics from a series, `None` when it is empty
    ///
    /// With a single bar there are no returns and both return statistics are 0.
    pub fn from_bars(bars: &[Bar]) -> Option<Self> {
        let first = bars.first()?;
        let last = bars.last()?;
        let n = bars.len() as f64;

        let returns: Vec<f64> = bars
            .windows(2)
            .map(|w| simple_return(w[0].close, w[1].close))
            .collect();
        let (mean_return, return_std_dev) = mean_and_std_dev(&returns);

        let min_low = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let max_high = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
        let mean_volume = bars.iter().map(|b| b.volume as f64).sum::<f64>() / n;

        Some(Self {
            rows: bars.len(),
            first_date: first.date,
            last_date: last.date,
            first_open: first.open,
            last_close: last.close,
            min_low,
            max_high,
            mean_return,
            return_std_dev,
            mean_volume,
        })
    }

    /// Total return from the first open to the last close
    pub fn total_return(&self) -> f64 {
        simple_return(self.first_open, self.last_close)
    }
}

/// Computes simple return: (p1 - p0) / p0
pub fn simple_return(p0: f64, p1: f64) -> f64 {
    (p1 - p0) / p0
}

fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, 0.0);
    }
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::PathGenerator;
    use crate::params::GenerationParameters;

    fn bar(d: u32, open: f64, close: f64, volume: u64) -> Bar {
        Bar::from_raw(
            NaiveDate::from_ymd_opt(2020, 1, d).unwrap(),
            open,
            open.max(close) + 1.0,
            open.min(close) - 1.0,
            close,
            volume,
        )
    }

    #[test]
    fn test_empty_has_no_summary() {
        assert!(SeriesSummary::from_bars(&[]).is_none());
    }

    #[test]
    fn test_single_bar() {
        let s = SeriesSummary::from_bars(&[bar(1, 10.0, 12.0, 200_000)]).unwrap();
        assert_eq!(s.rows, 1);
        assert_eq!(s.mean_return, 0.0);
        assert_eq!(s.return_std_dev, 0.0);
        assert_eq!(s.min_low, 9.0);
        assert_eq!(s.max_high, 13.0);
        assert!((s.total_return() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_known_values() {
        let bars = [
            bar(1, 100.0, 100.0, 100_000),
            bar(2, 100.0, 110.0, 200_000),
            bar(3, 110.0, 99.0, 300_000),
        ];
        let s = SeriesSummary::from_bars(&bars).unwrap();

        assert_eq!(s.first_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(s.last_date, NaiveDate::from_ymd_opt(2020, 1, 3).unwrap());
        // returns: +10%, -10%
        assert!(s.mean_return.abs() < 1e-12);
        assert!((s.return_std_dev - 0.02_f64.sqrt()).abs() < 1e-9);
        assert_eq!(s.mean_volume, 200_000.0);
        assert_eq!(s.max_high, 111.0);
        assert_eq!(s.min_low, 98.0);
    }

    #[test]
    fn test_simple_return() {
        assert!((simple_return(80.0, 100.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_realized_drift_and_volatility() {
        let drift: f64 = 0.001;
        let volatility: f64 = 0.02;
        let generator = PathGenerator::new(GenerationParameters::new(20_000, 100.0, volatility, drift)).unwrap();
        let s = SeriesSummary::from_bars(&generator.generate_seeded(2024)).unwrap();

        // close-to-close return mixes the gap and the daily return
        let expected_std = (volatility.powi(2) + (volatility * 0.2).powi(2)).sqrt();

        assert!(
            (s.mean_return - drift).abs() < 0.001,
            "Mean return: {}, expected: {}",
            s.mean_return,
            drift
        );
        assert!(
            (s.return_std_dev - expected_std).abs() / expected_std < 0.1,
            "Return std dev: {}, expected: {}",
            s.return_std_dev,
            expected_std
        );
        assert!((s.mean_volume - 1_000_000.0).abs() < 10_000.0);
    }
}
