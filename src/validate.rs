//! Series validation
//!
//! Checks a whole series against the bar rules plus calendar continuity.
//! Useful on series read back from disk, where nothing guarantees the rules
//! still hold.

use crate::bar::{Bar, VOLUME_FLOOR};
use chrono::{Days, NaiveDate};
use thiserror::Error as ThisError;

/// A single broken rule
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum Violation {
    #[error("non-finite price: open={open} high={high} low={low} close={close}")]
    NonFinitePrice {
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    },

    #[error("price order broken: open={open} high={high} low={low} close={close}")]
    PriceOrder {
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    },

    #[error("adjusted close {adjusted_close} differs from close {close}")]
    AdjustedClose { close: f64, adjusted_close: f64 },

    #[error("volume {0} below floor {floor}", floor = VOLUME_FLOOR)]
    VolumeBelowFloor(u64),

    #[error("expected date {expected}, found {found}")]
    DateGap { expected: NaiveDate, found: NaiveDate },
}

/// First violation found in a series, with the offending row index
#[derive(ThisError, Debug, Clone, PartialEq)]
#[error("row {index}: {violation}")]
pub struct SeriesViolation {
    pub index: usize,
    pub violation: Violation,
}

/// Validates every bar and the one-day spacing between consecutive dates
pub fn validate_series(bars: &[Bar]) -> Result<(), SeriesViolation> {
    let mut expected_date: Option<NaiveDate> = None;

    for (index, bar) in bars.iter().enumerate() {
        bar.check()
            .map_err(|violation| SeriesViolation { index, violation })?;

        if let Some(expected) = expected_date {
            if bar.date != expected {
                return Err(SeriesViolation {
                    index,
                    violation: Violation::DateGap {
                        expected,
                        found: bar.date,
                    },
                });
            }
        }
        expected_date = bar.date.checked_add_days(Days::new(1));
    }

    Ok(())
}
