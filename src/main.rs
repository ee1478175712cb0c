//! # evalplot
//!
//! Command-line entry point: render the five diagnostic charts for one
//! analyzed experiment.
//!
//! ```bash
//! evalplot <experiment-name>
//! ```
//!
//! Reads `<base>/<experiment>_analyzed/` and writes the charts to
//! `<base>/<experiment>_plots/`, creating it if needed. On success the
//! output directory path is printed.

use anyhow::{Context, Result};
use clap::Parser;

use evalplot::charts;
use evalplot::config::Settings;

/// evalplot - Experiment Evaluation Chart Renderer
#[derive(Parser)]
#[command(name = "evalplot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the experiment to render charts for
    #[arg(value_name = "EXPERIMENT")]
    experiment: String,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn main() -> Result<()> {
    // Usage errors exit with code 1 and print to stdout, not clap's
    // default stderr/exit-2 behavior.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                e.exit()
            }
            _ => {
                println!("{e}");
                std::process::exit(1);
            }
        },
    };

    init_logging(cli.verbose);

    let settings = Settings::default();
    let plots_dir = charts::render_all(&settings, &cli.experiment)
        .with_context(|| format!("rendering charts for experiment {}", cli.experiment))?;

    println!("Plots saved to: {}", plots_dir.display());
    Ok(())
}
