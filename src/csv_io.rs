//! CSV output and input
//!
//! Layout: `Date,Open,High,Low,Close,Adj Close,Volume`, one header row then
//! one row per bar, prices with exactly two decimals.

use crate::bar::{Bar, COLUMNS};
use crate::error::{GeneratorError, Result};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Writes the header and every bar, returning the number of rows written
pub fn write_csv<W: Write>(bars: &[Bar], writer: W) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(COLUMNS)?;
    for bar in bars {
        writer.write_record(&bar.to_record())?;
    }

    writer.flush()?;
    Ok(bars.len())
}

/// Writes bars to `path`, creating missing parent directories
pub fn write_csv_path(bars: &[Bar], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_csv(bars, file)
}

/// Parses bars from CSV with the output header
///
/// Rows with a non-finite price are rejected. Ordering and calendar rules are
/// left to [`validate_series`](crate::validate::validate_series).
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Bar>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut bars: Vec<Bar> = Vec::new();

    for (row, record) in reader.deserialize().enumerate() {
        let bar: Bar = record?;
        bar.check_finite()
            .map_err(|violation| GeneratorError::InvalidRow { row, violation })?;
        bars.push(bar);
    }

    Ok(bars)
}

pub fn read_csv_path(path: &Path) -> Result<Vec<Bar>> {
    read_csv(File::open(path)?)
}
