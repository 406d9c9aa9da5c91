//! Benchmarks for Burg AR estimation and prediction.

use burg_forecast::models::ar::BurgFit;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// AR(2) process driven by seeded uniform noise. Full-rank excitation,
/// so estimation never degenerates at any benchmarked order.
fn generate_series(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut values = vec![0.0, 0.0];
    for t in 2..n {
        let next = 0.75 * values[t - 1] - 0.5 * values[t - 2] + rng.gen_range(-1.0..1.0);
        values.push(next);
    }
    values
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("burg_estimate");

    for size in [128, 256, 512, 1024, 2048].iter() {
        let signal = generate_series(*size);

        for order in [4usize, 16, 32].iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("order_{order}"), size),
                size,
                |b, _| b.iter(|| BurgFit::estimate(black_box(&signal), *order)),
            );
        }
    }

    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let signal = generate_series(1024);
    let fit = BurgFit::estimate(&signal, 32).unwrap();

    c.bench_function("burg_predict_order_32", |b| {
        b.iter(|| fit.predict(black_box(32)))
    });
}

criterion_group!(benches, bench_estimate, bench_predict);
criterion_main!(benches);
