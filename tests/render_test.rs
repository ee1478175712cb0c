//! End-to-end tests: synthesize an analyzed directory, render all five
//! charts, and check the output artifacts and skip/error policies.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use evalplot::charts::{
    self, EXPECTED_FILE, MAE_CHART, MSG_COUNT_CHART, MSG_RATE_CHART, SCATTER_CHART, VALUE_CHART,
};
use evalplot::config::Settings;
use evalplot::error::PlotError;
use evalplot::ingest::read_value_series;
use evalplot::metrics::absolute_error;
use evalplot::series::ExpectedIndex;

const ALL_CHARTS: [&str; 5] = [
    VALUE_CHART,
    MSG_COUNT_CHART,
    MSG_RATE_CHART,
    MAE_CHART,
    SCATTER_CHART,
];

fn write_csv(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn setup(base: &Path, experiment: &str) -> std::path::PathBuf {
    let analyzed = base.join(format!("{experiment}_analyzed"));
    fs::create_dir_all(&analyzed).unwrap();
    analyzed
}

fn assert_png(path: &Path) {
    let bytes = fs::read(path).unwrap();
    assert!(bytes.len() > 8, "{} is empty", path.display());
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "{} is not a PNG", path.display());
}

#[test]
fn renders_all_five_charts_from_a_full_experiment() {
    let base = tempdir().unwrap();
    let analyzed = setup(base.path(), "full");

    write_csv(&analyzed, EXPECTED_FILE, "0,1.0\n1,2.0\n2,3.0\n");
    write_csv(&analyzed, "hi_value_averaged.csv", "0,1.1\n1,1.9\n2,3.2\n");
    write_csv(&analyzed, "fu_value_averaged.csv", "0,0.8\n1,2.4\n2,2.7\n");
    write_csv(&analyzed, "hi_msgcount_averaged.csv", "0,10,9\n1,20,19\n2,30,28\n");
    write_csv(&analyzed, "hi_msgrate_averaged.csv", "0,5.0,4.5\n1,5.2,5.0\n2,5.1,4.9\n");
    write_csv(&analyzed, "hi_value_node1.csv", "0,1.0\n1,1.8\n2,3.4\n");
    write_csv(&analyzed, "hi_value_node2.csv", "0,1.2\n1,2.0\n2,3.0\n");
    write_csv(&analyzed, "fu_value_node1.csv", "0,0.7\n1,2.5\n2,2.6\n");

    let settings = Settings::with_base_dir(base.path());
    let plots = charts::render_all(&settings, "full").unwrap();

    assert_eq!(plots, base.path().join("full_plots"));
    for chart in ALL_CHARTS {
        assert_png(&plots.join(chart));
    }
}

#[test]
fn renders_all_charts_with_only_the_expected_file() {
    let base = tempdir().unwrap();
    let analyzed = setup(base.path(), "bare");

    write_csv(&analyzed, EXPECTED_FILE, "0,1.0\n1,2.0\n");

    let settings = Settings::with_base_dir(base.path());
    let plots = charts::render_all(&settings, "bare").unwrap();

    // no protocol files anywhere, yet all five charts exist
    for chart in ALL_CHARTS {
        assert_png(&plots.join(chart));
    }
}

#[test]
fn missing_expected_file_is_fatal() {
    let base = tempdir().unwrap();
    let analyzed = setup(base.path(), "noref");

    // protocol data alone does not make up for the missing reference
    write_csv(&analyzed, "hi_value_averaged.csv", "0,1.1\n");

    let settings = Settings::with_base_dir(base.path());
    let err = charts::render_all(&settings, "noref").unwrap_err();
    assert!(matches!(err, PlotError::Csv { .. }));
}

#[test]
fn malformed_protocol_row_aborts_rendering() {
    let base = tempdir().unwrap();
    let analyzed = setup(base.path(), "bad");

    write_csv(&analyzed, EXPECTED_FILE, "0,1.0\n1,2.0\n");
    write_csv(&analyzed, "hi_value_averaged.csv", "0,not-a-number\n");

    let settings = Settings::with_base_dir(base.path());
    assert!(charts::render_all(&settings, "bad").is_err());
}

#[test]
fn rerunning_overwrites_the_same_artifacts_deterministically() {
    let base = tempdir().unwrap();
    let analyzed = setup(base.path(), "rerun");

    write_csv(&analyzed, EXPECTED_FILE, "0,1.0\n1,2.0\n2,3.0\n");
    write_csv(&analyzed, "ep_value_averaged.csv", "0,1.0\n1,2.1\n2,2.9\n");
    write_csv(&analyzed, "ep_value_n1.csv", "0,0.9\n1,2.2\n2,2.8\n");

    let settings = Settings::with_base_dir(base.path());
    let plots = charts::render_all(&settings, "rerun").unwrap();
    let first: Vec<Vec<u8>> = ALL_CHARTS
        .iter()
        .map(|c| fs::read(plots.join(c)).unwrap())
        .collect();

    let plots = charts::render_all(&settings, "rerun").unwrap();
    for (chart, bytes) in ALL_CHARTS.iter().zip(&first) {
        assert_eq!(&fs::read(plots.join(chart)).unwrap(), bytes, "{chart} differs across reruns");
    }
}

#[test]
fn mae_series_matches_hand_computed_values() {
    let base = tempdir().unwrap();
    let analyzed = setup(base.path(), "mae");

    write_csv(&analyzed, EXPECTED_FILE, "0,1.0\n1,2.0\n");
    write_csv(&analyzed, "hi_value_averaged.csv", "0,1.5\n1,1.5\n");

    let expected =
        ExpectedIndex::new(read_value_series(&analyzed.join(EXPECTED_FILE)).unwrap());
    let observed = read_value_series(&analyzed.join("hi_value_averaged.csv")).unwrap();

    let mae = absolute_error(&observed, &expected);
    assert_eq!(mae.timestamps, [0, 1]);
    assert_eq!(mae.values, [0.5, 0.5]);
}
