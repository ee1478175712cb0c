use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write as _;
use tempfile::TempDir;

use evalplot::ingest::read_value_series;
use evalplot::metrics::absolute_error;
use evalplot::series::ExpectedIndex;

/// Write a synthetic value CSV with `rows` samples
fn create_value_csv(path: &std::path::Path, rows: usize) {
    let mut contents = String::with_capacity(rows * 16);
    for i in 0..rows {
        writeln!(contents, "{},{}", i, (i as f64 * 0.1).sin()).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// Benchmark parsing a value CSV into a series
fn bench_read_value_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_value_series");

    for rows in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(rows as u64));

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("values.csv");
        create_value_csv(&path, rows);

        group.bench_with_input(BenchmarkId::from_parameter(rows), &path, |b, path| {
            b.iter(|| read_value_series(black_box(path)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark deriving the absolute-error series against the expected index
fn bench_absolute_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("absolute_error");

    for rows in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(rows as u64));

        let temp_dir = TempDir::new().unwrap();
        let expected_path = temp_dir.path().join("expected.csv");
        let observed_path = temp_dir.path().join("observed.csv");
        create_value_csv(&expected_path, rows);
        create_value_csv(&observed_path, rows);

        let expected = ExpectedIndex::new(read_value_series(&expected_path).unwrap());
        let observed = read_value_series(&observed_path).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(rows),
            &(observed, expected),
            |b, (observed, expected)| {
                b.iter(|| absolute_error(black_box(observed), black_box(expected)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_read_value_series, bench_absolute_error);
criterion_main!(benches);
