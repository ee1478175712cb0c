//! Charts 2 and 3: per-protocol sent/received message traffic.
//!
//! Counts and rates share one rendering routine; the two variants differ
//! only in source file, axis label and sample type, so counts are widened to
//! `f64` at load time.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::{optional_input, time_axis, value_axis, CHART_SIZE, MSG_COUNT_CHART, MSG_RATE_CHART};
use crate::config::{averaged_path, Protocol, Settings};
use crate::error::PlotError;
use crate::ingest;

/// Which message-traffic chart to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Cumulative message counts (`<proto>_msgcount_averaged.csv`).
    Count,
    /// Message rates in msg/s (`<proto>_msgrate_averaged.csv`).
    Rate,
}

impl MessageKind {
    fn file_kind(self) -> &'static str {
        match self {
            MessageKind::Count => "msgcount",
            MessageKind::Rate => "msgrate",
        }
    }

    fn title(self) -> &'static str {
        match self {
            MessageKind::Count => "Message Count (Sent / Received)",
            MessageKind::Rate => "Message Rate",
        }
    }

    fn y_desc(self) -> &'static str {
        match self {
            MessageKind::Count => "message count",
            MessageKind::Rate => "msg/s",
        }
    }

    fn chart_file(self) -> &'static str {
        match self {
            MessageKind::Count => MSG_COUNT_CHART,
            MessageKind::Rate => MSG_RATE_CHART,
        }
    }
}

struct Trace {
    protocol: Protocol,
    timestamps: Vec<i64>,
    sent: Vec<f64>,
    received: Vec<f64>,
}

fn load(analyzed: &Path, kind: MessageKind, protocol: Protocol) -> Result<Option<Trace>, PlotError> {
    let path = averaged_path(analyzed, protocol, kind.file_kind());
    if optional_input(&path).is_none() {
        return Ok(None);
    }
    let trace = match kind {
        MessageKind::Count => {
            let series = ingest::read_count_series(&path)?;
            Trace {
                protocol,
                timestamps: series.timestamps,
                sent: series.sent.iter().map(|&c| c as f64).collect(),
                received: series.received.iter().map(|&c| c as f64).collect(),
            }
        }
        MessageKind::Rate => {
            let series = ingest::read_rate_series(&path)?;
            Trace {
                protocol,
                timestamps: series.timestamps,
                sent: series.sent,
                received: series.received,
            }
        }
    };
    Ok(Some(trace))
}

pub(crate) fn render(
    settings: &Settings,
    analyzed: &Path,
    kind: MessageKind,
    out: &Path,
) -> Result<(), PlotError> {
    let mut traces = Vec::new();
    for &protocol in &settings.protocols {
        if let Some(trace) = load(analyzed, kind, protocol)? {
            traces.push(trace);
        }
    }

    let x_range = time_axis(traces.iter().flat_map(|t| t.timestamps.iter().copied()));
    let y_range = value_axis(
        traces
            .iter()
            .flat_map(|t| t.sent.iter().chain(t.received.iter()).copied()),
    );

    let chart_file = kind.chart_file();
    let err = |e: &dyn std::fmt::Display| PlotError::render(chart_file, e);

    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(kind.title(), ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| err(&e))?;

    chart
        .configure_mesh()
        .x_desc("time [s]")
        .y_desc(kind.y_desc())
        .draw()
        .map_err(|e| err(&e))?;

    for trace in &traces {
        let color = trace.protocol.color();
        let code = trace.protocol.code();

        let sent = trace
            .timestamps
            .iter()
            .copied()
            .zip(trace.sent.iter().copied());
        chart
            .draw_series(LineSeries::new(sent, color.stroke_width(2)))
            .map_err(|e| err(&e))?
            .label(format!("{code} sent"))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        let received = trace
            .timestamps
            .iter()
            .copied()
            .zip(trace.received.iter().copied());
        chart
            .draw_series(DashedLineSeries::new(received, 6, 3, color.stroke_width(2)))
            .map_err(|e| err(&e))?
            .label(format!("{code} rcvd"))
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
