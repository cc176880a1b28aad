//! Benchmarks for the bias engine on synthetic datasets of increasing size.
//!
//! Measures the full pipeline (classification, distributions, risk, report)
//! and, separately, CSV decoding, so regressions in either stage show up.

use biasmap::io::read_dataset;
use biasmap::{analyze, Dataset};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write;
use std::hint::black_box;

const GENDERS: &[&str] = &["male", "Female", "MALE", "non-binary"];
const RACES: &[&str] = &["Asian", "Black", "White", "Hispanic", "Other"];

fn synthetic_csv(rows: usize) -> String {
    let mut csv = String::from("id,gender,age,race,salary\n");
    for i in 0..rows {
        let _ = writeln!(
            csv,
            "{i},{},{},{},{}",
            GENDERS[i % GENDERS.len()],
            18 + (i * 7) % 50,
            RACES[(i / 3) % RACES.len()],
            30_000 + i
        );
    }
    csv
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for rows in [100, 1_000, 10_000, 100_000] {
        let dataset: Dataset = read_dataset(synthetic_csv(rows).as_bytes(), ',').unwrap();
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &dataset, |b, data| {
            b.iter(|| analyze(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_read_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_dataset");
    for rows in [1_000, 100_000] {
        let csv = synthetic_csv(rows);
        group.throughput(Throughput::Bytes(csv.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &csv, |b, csv| {
            b.iter(|| read_dataset(black_box(csv.as_bytes()), ',').unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analyze, bench_read_dataset);
criterion_main!(benches);
