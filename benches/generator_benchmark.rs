//! Benchmarks for synthetic series generation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use synthetic_ohlcv::csv_io::write_csv;
use synthetic_ohlcv::{GenerationParameters, PathGenerator};

fn benchmark_series_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Series Generation");

    for rows in [1_000, 10_000, 100_000].iter() {
        let generator =
            PathGenerator::new(GenerationParameters::new(*rows, 100.0, 0.02, 0.0001)).unwrap();

        group.bench_with_input(BenchmarkId::new("Fused", rows), rows, |b, _| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| generator.generate(&mut rng));
        });

        group.bench_with_input(BenchmarkId::new("Shocks only", rows), rows, |b, &n| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| generator.draw_shocks(&mut rng, n));
        });
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let generator = PathGenerator::new(GenerationParameters::new(2_520, 100.0, 0.02, 0.0001)).unwrap();

    let mut group = c.benchmark_group("Series Batch");

    for n_series in [16, 128].iter() {
        group.bench_with_input(BenchmarkId::new("Sequential", n_series), n_series, |b, &n| {
            b.iter(|| {
                (0..n as u64)
                    .map(|seed| generator.generate_seeded(seed))
                    .collect::<Vec<_>>()
            });
        });

        group.bench_with_input(BenchmarkId::new("Parallel", n_series), n_series, |b, &n| {
            b.iter(|| generator.generate_batch_parallel(n, 0));
        });
    }

    group.finish();
}

fn benchmark_csv_write(c: &mut Criterion) {
    let bars = PathGenerator::new(GenerationParameters::default())
        .unwrap()
        .generate_seeded(7);

    c.bench_function("CSV write 10k rows", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            write_csv(&bars, &mut out).unwrap()
        });
    });
}

criterion_group!(benches, benchmark_series_generation, benchmark_batch, benchmark_csv_write);
criterion_main!(benches);
