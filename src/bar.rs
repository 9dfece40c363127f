//! Daily bar record
//!
//! One `Bar` per generated day. Prices carry cent precision and the field names
//! map onto the `Date,Open,High,Low,Close,Adj Close,Volume` table layout.

use crate::validate::Violation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest volume a bar may report
pub const VOLUME_FLOOR: u64 = 100_000;

/// Column names of the output table, in order
pub const COLUMNS: [&str; 7] = ["Date", "Open", "High", "Low", "Close", "Adj Close", "Volume"];

/// Daily OHLCV bar with adjusted close
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    /// Always equal to `close`; corporate actions are not modelled
    #[serde(rename = "Adj Close")]
    pub adjusted_close: f64,
    #[serde(rename = "Volume")]
    pub volume: u64,
}

impl Bar {
    /// Builds a bar from raw prices, rounding each to cents
    ///
    /// `adjusted_close` is taken from the rounded close and the volume is
    /// lifted to [`VOLUME_FLOOR`].
    pub fn from_raw(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        let close = round_cents(close);
        Self {
            date,
            open: round_cents(open),
            high: round_cents(high),
            low: round_cents(low),
            close,
            adjusted_close: close,
            volume: volume.max(VOLUME_FLOOR),
        }
    }

    /// Body extremes: (min(open, close), max(open, close))
    pub fn body(&self) -> (f64, f64) {
        (self.open.min(self.close), self.open.max(self.close))
    }

    /// Checks that all four prices and the adjusted close are finite
    pub fn check_finite(&self) -> Result<(), Violation> {
        let prices = [self.open, self.high, self.low, self.close, self.adjusted_close];
        if prices.iter().all(|p| p.is_finite()) {
            Ok(())
        } else {
            Err(Violation::NonFinitePrice {
                open: self.open,
                high: self.high,
                low: self.low,
                close: self.close,
            })
        }
    }

    /// Checks the per-bar rules: finite prices, price ordering, adjusted
    /// close, volume floor
    pub fn check(&self) -> Result<(), Violation> {
        self.check_finite()?;

        let (body_low, body_high) = self.body();
        if !(self.low <= body_low && body_high <= self.high) {
            return Err(Violation::PriceOrder {
                open: self.open,
                high: self.high,
                low: self.low,
                close: self.close,
            });
        }
        if self.adjusted_close != self.close {
            return Err(Violation::AdjustedClose {
                close: self.close,
                adjusted_close: self.adjusted_close,
            });
        }
        if self.volume < VOLUME_FLOOR {
            return Err(Violation::VolumeBelowFloor(self.volume));
        }
        Ok(())
    }

    /// Row in table order with prices formatted to two decimals
    pub fn to_record(&self) -> [String; 7] {
        [
            self.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", self.open),
            format!("{:.2}", self.high),
            format!("{:.2}", self.low),
            format!("{:.2}", self.close),
            format!("{:.2}", self.adjusted_close),
            self.volume.to_string(),
        ]
    }
}

/// Magnitude above which an `f64` cannot resolve cents
const CENT_RESOLUTION_LIMIT: f64 = 1e15;

/// Rounds to two decimal places, half away from zero
///
/// Values at or beyond 1e15 are returned unchanged: they have no cent digits
/// to round and scaling them by 100 could overflow.
pub fn round_cents(x: f64) -> f64 {
    if x.abs() >= CENT_RESOLUTION_LIMIT {
        return x;
    }
    (x * 100.0).round() / 100.0
}
