//! Derived metric: the pointwise absolute error against the expected signal.

use crate::series::{ExpectedIndex, ValueSeries};

/// The `(timestamp, |observed - expected|)` series for a protocol trace.
///
/// Inner-join semantics on the timestamp: samples whose timestamp is absent
/// from the expected index are silently dropped, and no interpolation is
/// performed. Output order follows the input series.
pub fn absolute_error(observed: &ValueSeries, expected: &ExpectedIndex) -> ValueSeries {
    let mut out = ValueSeries::default();
    for (timestamp, value) in observed.iter() {
        if let Some(reference) = expected.get(timestamp) {
            out.push(timestamp, (value - reference).abs());
        }
    }
    out
}
