//! Run settings: base directory, the protocol set, and display colors.
//!
//! Everything here is fixed at build time. [`Settings`] is constructed once
//! at process start and passed explicitly to the chart emitters; tests build
//! one pointing at a temporary directory.

use std::path::{Path, PathBuf};

use plotters::style::RGBColor;

/// Default storage root for experiment data.
pub const DEFAULT_BASE_DIR: &str = "/home/tamara/experiments";

/// One of the five data-dissemination protocols under evaluation.
///
/// Purely a labeling and grouping key: it names the per-protocol input files
/// and selects the trace color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Hierarchical dissemination
    Hi,
    /// Full flooding
    Fu,
    /// Epidemic / gossip
    Ep,
    /// Direct delivery
    Dd,
    /// Round robin
    Rr,
}

impl Protocol {
    /// All protocols, in the fixed order charts iterate them.
    pub const ALL: [Protocol; 5] = [
        Protocol::Hi,
        Protocol::Fu,
        Protocol::Ep,
        Protocol::Dd,
        Protocol::Rr,
    ];

    /// The short code used in input file names and legend labels.
    pub fn code(self) -> &'static str {
        match self {
            Protocol::Hi => "hi",
            Protocol::Fu => "fu",
            Protocol::Ep => "ep",
            Protocol::Dd => "dd",
            Protocol::Rr => "rr",
        }
    }

    /// The protocol's display color (tab10 palette, matching the rest of
    /// the evaluation tooling).
    pub fn color(self) -> RGBColor {
        match self {
            Protocol::Hi => RGBColor(0x1f, 0x77, 0xb4), // tab:blue
            Protocol::Fu => RGBColor(0xff, 0x7f, 0x0e), // tab:orange
            Protocol::Ep => RGBColor(0x2c, 0xa0, 0x2c), // tab:green
            Protocol::Dd => RGBColor(0xd6, 0x27, 0x28), // tab:red
            Protocol::Rr => RGBColor(0x94, 0x67, 0xbd), // tab:purple
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Immutable configuration for one run of the renderer.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Storage root under which `<experiment>_analyzed/` and
    /// `<experiment>_plots/` live.
    pub base_dir: PathBuf,
    /// Protocols to look for, in chart iteration order.
    pub protocols: Vec<Protocol>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            protocols: Protocol::ALL.to_vec(),
        }
    }
}

impl Settings {
    /// Create settings rooted at a custom base directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// The analyzed-input directory for `experiment`.
    pub fn analyzed_dir(&self, experiment: &str) -> PathBuf {
        self.base_dir.join(format!("{experiment}_analyzed"))
    }

    /// The chart-output directory for `experiment`.
    pub fn plots_dir(&self, experiment: &str) -> PathBuf {
        self.base_dir.join(format!("{experiment}_plots"))
    }
}

/// Convenience: the averaged-file name for a protocol and data kind
/// (`value`, `msgcount` or `msgrate`).
pub fn averaged_file(protocol: Protocol, kind: &str) -> String {
    format!("{}_{kind}_averaged.csv", protocol.code())
}

/// Convenience: full path of a protocol's averaged file inside `dir`.
pub fn averaged_path(dir: &Path, protocol: Protocol, kind: &str) -> PathBuf {
    dir.join(averaged_file(protocol, kind))
}
