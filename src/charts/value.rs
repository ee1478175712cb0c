//! Chart 1: expected reference vs per-protocol averaged values.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::{optional_input, time_axis, value_axis, CHART_SIZE, VALUE_CHART};
use crate::config::{averaged_path, Protocol, Settings};
use crate::error::PlotError;
use crate::ingest;
use crate::series::{ExpectedIndex, ValueSeries};

pub(crate) fn render(
    settings: &Settings,
    analyzed: &Path,
    expected: &ExpectedIndex,
    out: &Path,
) -> Result<(), PlotError> {
    let mut traces: Vec<(Protocol, ValueSeries)> = Vec::new();
    for &protocol in &settings.protocols {
        let path = averaged_path(analyzed, protocol, "value");
        if optional_input(&path).is_some() {
            traces.push((protocol, ingest::read_value_series(&path)?));
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

    let err = |e: &dyn std::fmt::Display| PlotError::render(VALUE_CHART, e);

    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Expected vs Real Value", ("sans-serif", 28))
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

    // DashedLineSeries needs a Clone iterator, which ValueSeries::iter is not
    let reference_points = reference
        .timestamps
        .iter()
        .copied()
        .zip(reference.values.iter().copied());
    chart
        .draw_series(DashedLineSeries::new(
            reference_points,
            8,
            4,
            BLACK.stroke_width(2),
        ))
        .map_err(|e| err(&e))?
        .label("expected")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));

    for (protocol, series) in &traces {
        let color = protocol.color();
        chart
            .draw_series(LineSeries::new(series.iter(), color.stroke_width(2)))
            .map_err(|e| err(&e))?
            .label(protocol.code())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
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
