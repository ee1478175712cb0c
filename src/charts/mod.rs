//! The five chart emitters and their shared scaffolding.
//!
//! Each chart follows the same shape: ingest every series it needs first
//! (plotters wants explicit axis ranges up front), then build the chart,
//! draw the series in protocol order, and write the PNG. The drawing area is
//! dropped before the next chart begins, so peak memory is bounded by one
//! chart's data plus the expected series.
//!
//! A protocol whose input file is absent contributes nothing to the chart
//! and raises no error; a missing `value_expected.csv` aborts before any
//! chart is drawn.

use std::collections::HashSet;
use std::ops::Range;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::Settings;
use crate::error::PlotError;
use crate::ingest;
use crate::series::ExpectedIndex;

mod mae;
mod messages;
mod scatter;
mod value;

pub use messages::MessageKind;

/// Required reference file inside the analyzed directory.
pub const EXPECTED_FILE: &str = "value_expected.csv";

/// Output file name of the expected-vs-real value chart.
pub const VALUE_CHART: &str = "value_expected_vs_real.png";
/// Output file name of the message-count chart.
pub const MSG_COUNT_CHART: &str = "msg_count.png";
/// Output file name of the message-rate chart.
pub const MSG_RATE_CHART: &str = "msg_rate.png";
/// Output file name of the absolute-error chart.
pub const MAE_CHART: &str = "mae.png";
/// Output file name of the per-node overlay chart.
pub const SCATTER_CHART: &str = "value_scatter.png";

/// Canvas size of the four line charts, in pixels.
const CHART_SIZE: (u32, u32) = (1000, 500);
/// Canvas size of the per-node overlay chart, in pixels.
const SCATTER_SIZE: (u32, u32) = (1200, 600);

/// Render all five charts for `experiment` and return the plots directory.
///
/// Creates `<base>/<experiment>_plots/` (with parents) if absent. Charts are
/// committed to disk one at a time; if a later chart fails, the earlier ones
/// stay written.
pub fn render_all(settings: &Settings, experiment: &str) -> Result<PathBuf, PlotError> {
    let analyzed = settings.analyzed_dir(experiment);
    let plots = settings.plots_dir(experiment);
    std::fs::create_dir_all(&plots)?;

    let expected_path = analyzed.join(EXPECTED_FILE);
    let expected = ExpectedIndex::new(ingest::read_value_series(&expected_path)?);
    info!(
        "loaded {} expected samples from {}",
        expected.series().len(),
        expected_path.display()
    );

    value::render(settings, &analyzed, &expected, &plots.join(VALUE_CHART))?;
    info!("wrote {VALUE_CHART}");

    messages::render(
        settings,
        &analyzed,
        MessageKind::Count,
        &plots.join(MSG_COUNT_CHART),
    )?;
    info!("wrote {MSG_COUNT_CHART}");

    messages::render(
        settings,
        &analyzed,
        MessageKind::Rate,
        &plots.join(MSG_RATE_CHART),
    )?;
    info!("wrote {MSG_RATE_CHART}");

    mae::render(settings, &analyzed, &expected, &plots.join(MAE_CHART))?;
    info!("wrote {MAE_CHART}");

    scatter::render(settings, &analyzed, &expected, &plots.join(SCATTER_CHART))?;
    info!("wrote {SCATTER_CHART}");

    Ok(plots)
}

/// First-seen-per-label legend deduplication.
///
/// The per-node overlay draws many traces per protocol but must show one
/// legend entry per label. Only the first trace to claim a label gets a
/// legend handle; entry order is claim order.
#[derive(Debug, Default)]
pub struct LegendDedup {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl LegendDedup {
    /// Create an empty dedup set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `label`; returns true only for its first occurrence.
    pub fn admit(&mut self, label: &str) -> bool {
        if self.seen.insert(label.to_string()) {
            self.order.push(label.to_string());
            true
        } else {
            false
        }
    }

    /// The admitted labels, in claim order.
    pub fn labels(&self) -> &[String] {
        &self.order
    }
}

/// The x axis over `timestamps`; `0..1` when empty, padded when degenerate.
fn time_axis(timestamps: impl Iterator<Item = i64>) -> Range<i64> {
    let mut min = i64::MAX;
    let mut max = i64::MIN;
    for t in timestamps {
        min = min.min(t);
        max = max.max(t);
    }
    if min > max {
        return 0..1;
    }
    if min == max {
        return min..min + 1;
    }
    min..max
}

/// The y axis over `values` with 5% headroom; `0..1` when empty.
fn value_axis(values: impl Iterator<Item = f64>) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min > max {
        return 0.0..1.0;
    }
    if min == max {
        return min - 0.5..max + 0.5;
    }
    let pad = (max - min) * 0.05;
    min - pad..max + pad
}

/// Whether a protocol input file is present; absent files are skipped, not
/// errors.
fn optional_input(path: &Path) -> Option<&Path> {
    if path.exists() {
        Some(path)
    } else {
        log::debug!("skipping absent input {}", path.display());
        None
    }
}
