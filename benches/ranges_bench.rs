//! Benchmarks for range compression.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shapegen::{compress, render_alternation};

fn bench_compress_dense(c: &mut Criterion) {
    // one maximal span
    let ids: Vec<u32> = (0..20_000).collect();

    c.bench_function("compress_dense_20k", |b| {
        b.iter(|| compress(black_box(&ids)))
    });
}

fn bench_compress_sparse(c: &mut Criterion) {
    // all singletons
    let ids: Vec<u32> = (0..20_000).map(|i| i * 3).collect();

    c.bench_function("compress_sparse_20k", |b| {
        b.iter(|| compress(black_box(&ids)))
    });
}

fn bench_compress_runs(c: &mut Criterion) {
    // short runs broken by gaps, roughly the real block-state distribution
    let ids: Vec<u32> = (0..20_000).filter(|i| i % 7 != 0).collect();

    c.bench_function("compress_runs_20k", |b| {
        b.iter(|| compress(black_box(&ids)))
    });
}

fn bench_render_alternation(c: &mut Criterion) {
    let ids: Vec<u32> = (0..20_000).filter(|i| i % 7 != 0).collect();
    let ranges = compress(&ids);

    c.bench_function("render_alternation_runs_20k", |b| {
        b.iter(|| render_alternation(black_box(&ranges)))
    });
}

criterion_group!(
    benches,
    bench_compress_dense,
    bench_compress_sparse,
    bench_compress_runs,
    bench_render_alternation
);
criterion_main!(benches);
