//! In-memory time-series snapshots of the analyzed CSV files.
//!
//! Each series keeps its fields as parallel vectors in file order. Nothing
//! here is mutated after ingestion; charts borrow the data read-only.

use std::collections::HashMap;

/// An ordered `(timestamp, value)` series.
///
/// Timestamps are integer seconds since experiment start. They are assumed
/// unique and increasing per file; this is not enforced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSeries {
    /// Timestamps, in file order.
    pub timestamps: Vec<i64>,
    /// One value per timestamp.
    pub values: Vec<f64>,
}

impl ValueSeries {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Append one sample.
    pub fn push(&mut self, timestamp: i64, value: f64) {
        self.timestamps.push(timestamp);
        self.values.push(value);
    }

    /// Iterate `(timestamp, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

/// An ordered `(timestamp, sent, received)` message-count series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountSeries {
    /// Timestamps, in file order.
    pub timestamps: Vec<i64>,
    /// Messages sent per timestamp.
    pub sent: Vec<i64>,
    /// Messages received per timestamp.
    pub received: Vec<i64>,
}

impl CountSeries {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// An ordered `(timestamp, sent_rate, received_rate)` series in msg/s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSeries {
    /// Timestamps, in file order.
    pub timestamps: Vec<i64>,
    /// Send rate per timestamp.
    pub sent: Vec<f64>,
    /// Receive rate per timestamp.
    pub received: Vec<f64>,
}

impl RateSeries {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// The expected reference signal, indexed by timestamp for O(1) lookup.
///
/// Built once from `value_expected.csv` at startup and immutable thereafter.
/// The ordered series is kept alongside the index because two charts draw the
/// expected line as a backdrop.
#[derive(Debug, Clone)]
pub struct ExpectedIndex {
    series: ValueSeries,
    by_timestamp: HashMap<i64, f64>,
}

impl ExpectedIndex {
    /// Build the index from the loaded expected series.
    pub fn new(series: ValueSeries) -> Self {
        let by_timestamp = series.iter().collect();
        Self {
            series,
            by_timestamp,
        }
    }

    /// The expected value at `timestamp`, if the reference file has one.
    pub fn get(&self, timestamp: i64) -> Option<f64> {
        self.by_timestamp.get(&timestamp).copied()
    }

    /// The expected series in its original file order.
    pub fn series(&self) -> &ValueSeries {
        &self.series
    }
}
