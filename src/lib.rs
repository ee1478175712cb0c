//! # evalplot - Experiment Evaluation Charts
//!
//! `evalplot` is the reporting step of a dissemination-protocol evaluation
//! pipeline. The upstream pipeline analyzes raw experiment output into a
//! directory of CSV files; this crate reads those files, derives a pointwise
//! absolute-error series against the expected reference signal, and renders
//! five diagnostic PNG charts.
//!
//! ## Input layout
//!
//! For an experiment named `run1`, the analyzed directory
//! `<base>/run1_analyzed/` contains:
//!
//! ```text
//! value_expected.csv              # required: timestamp,value
//! <proto>_value_averaged.csv      # optional per protocol: timestamp,value
//! <proto>_msgcount_averaged.csv   # optional per protocol: timestamp,sent,received
//! <proto>_msgrate_averaged.csv    # optional per protocol: timestamp,sent_rate,received_rate
//! <proto>_value_<node>.csv        # zero or more raw per-node traces
//! ```
//!
//! Protocols are a fixed set of five short codes (`hi`, `fu`, `ep`, `dd`,
//! `rr`), each bound to a display color. A protocol whose file is absent is
//! simply left off the corresponding chart; a missing `value_expected.csv`
//! is fatal.
//!
//! ## Output
//!
//! Five PNGs in `<base>/run1_plots/` (created if absent):
//! `value_expected_vs_real.png`, `msg_count.png`, `msg_rate.png`, `mae.png`
//! and `value_scatter.png`.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use evalplot::config::Settings;
//! use evalplot::charts;
//!
//! let settings = Settings::default();
//! let plots_dir = charts::render_all(&settings, "run1")?;
//! println!("Plots saved to: {}", plots_dir.display());
//! # Ok::<(), evalplot::error::PlotError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod charts;
pub mod config;
pub mod discover;
pub mod error;
pub mod ingest;
pub mod metrics;
pub mod series;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::charts::render_all;
    pub use crate::config::{Protocol, Settings};
    pub use crate::discover::{is_node_value_file, node_value_files};
    pub use crate::error::PlotError;
    pub use crate::ingest::{read_count_series, read_rate_series, read_value_series};
    pub use crate::metrics::absolute_error;
    pub use crate::series::{CountSeries, ExpectedIndex, RateSeries, ValueSeries};
}
