//! Chart 5: every individual node trace overlaid on the expected signal.
//!
//! Unlike the other charts this one plots raw per-node files, discovered by
//! filename pattern, to visualize cross-node dispersion around the average.
//! All traces of one protocol share its color; the legend collapses them to
//! a single entry per protocol (first handle wins) plus "expected".

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::{time_axis, value_axis, LegendDedup, SCATTER_CHART, SCATTER_SIZE};
use crate::config::{Protocol, Settings};
use crate::discover::{list_file_names, node_value_files};
use crate::error::PlotError;
use crate::ingest;
use crate::series::{ExpectedIndex, ValueSeries};

pub(crate) fn render(
    settings: &Settings,
    analyzed: &Path,
    expected: &ExpectedIndex,
    out: &Path,
) -> Result<(), PlotError> {
    let file_names = list_file_names(analyzed)?;

    let mut traces: Vec<(Protocol, ValueSeries)> = Vec::new();
    for &protocol in &settings.protocols {
        for name in node_value_files(protocol, file_names.iter().map(String::as_str)) {
            let series = ingest::read_value_series(&analyzed.join(name))?;
            traces.push((protocol, series));
        }
    }

    let reference = expected.series();
    let x_range = time_axis(
        reference
            .timestamps
            .iter()
            .copied()
            .chain(traces.iter().flat_map(|(_, s)| s.timestamps.iter().copied())),
    );
    let y_range = value_axis(
        reference
            .values
            .iter()
            .copied()
            .chain(traces.iter().flat_map(|(_, s)| s.values.iter().copied())),
    );

    let err = |e: &dyn std::fmt::Display| PlotError::render(SCATTER_CHART, e);

    let root = BitMapBackend::new(out, SCATTER_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Node Values vs Expected Value (All Nodes)", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| err(&e))?;

    chart
        .configure_mesh()
        .x_desc("time [s]")
        .y_desc("value")
        .draw()
        .map_err(|e| err(&e))?;

    let mut legend = LegendDedup::new();

    // DashedLineSeries needs a Clone iterator, which ValueSeries::iter is not
    let reference_points = reference
        .timestamps
        .iter()
        .copied()
        .zip(reference.values.iter().copied());
    let anno = chart
        .draw_series(DashedLineSeries::new(
            reference_points,
            8,
            4,
            BLACK.stroke_width(3),
        ))
        .map_err(|e| err(&e))?;
    if legend.admit("expected") {
        anno.label("expected").legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(3))
        });
    }

    for (protocol, series) in &traces {
        let color = protocol.color();
        let style = color.mix(0.25).stroke_width(1);
        let anno = chart
            .draw_series(LineSeries::new(series.iter(), style))
            .map_err(|e| err(&e))?;
        // one legend entry per protocol, however many node traces it has
        if legend.admit(protocol.code()) {
            anno.label(protocol.code()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| err(&e))?;

    root.present().map_err(|e| err(&e))?;
    Ok(())
}
