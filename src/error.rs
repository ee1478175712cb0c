//! Crate-wide error type.

use std::path::PathBuf;

/// Errors that can occur while loading experiment data or rendering charts.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV file could not be read or one of its rows failed to parse.
    ///
    /// Wrong field count and type mismatches both land here; there is no
    /// row-level recovery.
    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        /// The offending file.
        path: PathBuf,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Chart rendering failed in the drawing backend.
    #[error("chart rendering failed for {chart}: {detail}")]
    Render {
        /// Output file name of the chart being rendered.
        chart: String,
        /// Backend error description.
        detail: String,
    },
}

impl PlotError {
    /// Wrap a CSV error with the path of the file it came from.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Wrap a drawing-backend error with the chart it occurred in.
    pub fn render(chart: impl Into<String>, detail: impl ToString) -> Self {
        Self::Render {
            chart: chart.into(),
            detail: detail.to_string(),
        }
    }
}
