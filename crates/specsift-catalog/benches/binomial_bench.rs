//! Binomial coefficient benchmarks

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use specsift_catalog::domain::binomial::binomial;

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
}

fn bench_binomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial");

    for &(n, k) in &[(20u64, 10u64), (64, 32), (128, 64)] {
        group.bench_function(format!("c_{}_{}", n, k), |b| {
            b.iter(|| binomial(black_box(n), black_box(k)))
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_binomial,
}

criterion_main!(benches);
