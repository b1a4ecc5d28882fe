use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use stitchforge::calculator::calculate;
use stitchforge::distribution::distribute;

fn bench_distribute(c: &mut Criterion) {
    c.bench_function("distribute_10k_over_3k", |b| {
        b.iter(|| distribute(black_box(10_000), black_box(3_001)))
    });
}

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    group.bench_function("even_increase", |b| {
        b.iter(|| calculate(black_box(240), black_box(300)))
    });
    group.bench_function("dense_increase", |b| {
        b.iter(|| calculate(black_box(120), black_box(300)))
    });
    group.bench_function("even_decrease", |b| {
        b.iter(|| calculate(black_box(300), black_box(220)))
    });
    group.finish();
}

criterion_group!(benches, bench_distribute, bench_calculate);
criterion_main!(benches);
