//! CSV ingestion for the three analyzed-file formats.
//!
//! All files are header-less with a fixed arity per format: two fields for
//! value series, three for message counts and rates. Rows deserialize
//! positionally into per-format row structs; a row with the wrong field count
//! or a field that fails type coercion aborts the read with the offending
//! path attached. Row order is preserved.

use std::path::Path;

use serde::Deserialize;

use crate::error::PlotError;
use crate::series::{CountSeries, RateSeries, ValueSeries};

#[derive(Debug, Deserialize)]
struct ValueRow {
    timestamp: i64,
    value: f64,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    timestamp: i64,
    sent: i64,
    received: i64,
}

#[derive(Debug, Deserialize)]
struct RateRow {
    timestamp: i64,
    sent: f64,
    received: f64,
}

fn reader_for(path: &Path) -> Result<csv::Reader<std::fs::File>, PlotError> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| PlotError::csv(path, e))
}

/// Read a `timestamp,value` series.
pub fn read_value_series(path: &Path) -> Result<ValueSeries, PlotError> {
    let mut reader = reader_for(path)?;
    let mut series = ValueSeries::default();
    for row in reader.deserialize() {
        let row: ValueRow = row.map_err(|e| PlotError::csv(path, e))?;
        series.push(row.timestamp, row.value);
    }
    Ok(series)
}

/// Read a `timestamp,sent,received` message-count series.
pub fn read_count_series(path: &Path) -> Result<CountSeries, PlotError> {
    let mut reader = reader_for(path)?;
    let mut series = CountSeries::default();
    for row in reader.deserialize() {
        let row: CountRow = row.map_err(|e| PlotError::csv(path, e))?;
        series.timestamps.push(row.timestamp);
        series.sent.push(row.sent);
        series.received.push(row.received);
    }
    Ok(series)
}

/// Read a `timestamp,sent_rate,received_rate` series.
pub fn read_rate_series(path: &Path) -> Result<RateSeries, PlotError> {
    let mut reader = reader_for(path)?;
    let mut series = RateSeries::default();
    for row in reader.deserialize() {
        let row: RateRow = row.map_err(|e| PlotError::csv(path, e))?;
        series.timestamps.push(row.timestamp);
        series.sent.push(row.sent);
        series.received.push(row.received);
    }
    Ok(series)
}
