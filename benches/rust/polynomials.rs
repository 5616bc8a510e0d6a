//! Polynomial Engine Benchmark
//!
//! Forward transforms and inversions for growing orders.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wnpoly::{Bell, Bernoulli, Complete, Elementary, PartialBell, PowerSum, SymmetricPolynomial};

/// Deterministic variable sequence with x[0] = 0 and values in [1, 2)
fn variables(len: usize) -> Vec<f64> {
    std::iter::once(0.0)
        .chain((1..len).map(|i| 1.0 + ((i * 37) % 100) as f64 / 100.0))
        .collect()
}

fn bench_symmetric(c: &mut Criterion) {
    let mut group = c.benchmark_group("symmetric");
    for &len in &[16usize, 64, 256] {
        let x: Vec<f64> = variables(len + 1)[1..].to_vec();
        group.bench_with_input(BenchmarkId::new("elementary", len), &x, |b, x| {
            b.iter(|| Elementary.compute(black_box(x), len))
        });
        group.bench_with_input(BenchmarkId::new("complete", len), &x, |b, x| {
            b.iter(|| Complete.compute(black_box(x), len))
        });
        group.bench_with_input(BenchmarkId::new("power_sum", len), &x, |b, x| {
            b.iter(|| PowerSum.compute(black_box(x), len))
        });
    }
    group.finish();
}

fn bench_bell(c: &mut Criterion) {
    let mut group = c.benchmark_group("bell");
    for &len in &[8usize, 32, 96] {
        let x = variables(len);
        let b = Bell.compute(&x).unwrap();
        group.bench_with_input(BenchmarkId::new("compute", len), &x, |bench, x| {
            bench.iter(|| Bell.compute(black_box(x)))
        });
        group.bench_with_input(BenchmarkId::new("invert", len), &b, |bench, b| {
            bench.iter(|| Bell.invert(black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("negate", len), &b, |bench, b| {
            bench.iter(|| Bell.negate(black_box(b)))
        });
    }
    group.finish();
}

fn bench_partial_bell(c: &mut Criterion) {
    let mut group = c.benchmark_group("partial_bell");
    for &len in &[8usize, 24, 48] {
        let x = variables(len);
        let table = PartialBell.compute(&x).unwrap();
        group.bench_with_input(BenchmarkId::new("table", len), &x, |b, x| {
            b.iter(|| PartialBell.compute(black_box(x)))
        });
        for k in [1usize, 3] {
            let column = table.column(k);
            group.bench_with_input(
                BenchmarkId::new(format!("invert_k{k}"), len),
                &column,
                |b, column| b.iter(|| PartialBell.invert(k, black_box(column))),
            );
        }
    }
    group.finish();
}

fn bench_bernoulli(c: &mut Criterion) {
    let mut group = c.benchmark_group("bernoulli");
    for &n in &[10usize, 40, 120] {
        group.bench_function(BenchmarkId::new("compute", n), |b| {
            b.iter(|| Bernoulli.compute(black_box(n), black_box(0.75_f64)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_symmetric,
    bench_bell,
    bench_partial_bell,
    bench_bernoulli
);
criterion_main!(benches);
