//! Benchmarks for the portfolio optimizer and frontier sampling.
//!
//! Run with: cargo bench -p finsim-portfolio

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use finsim_portfolio::{efficient_frontier, optimize_two_asset_portfolio, Asset, CorrelationMatrix};

fn bench_optimizer(c: &mut Criterion) {
    let equities = Asset::new("Equities", 0.10, 0.20);
    let bonds = Asset::new("Bonds", 0.04, 0.05);

    c.bench_function("optimize_two_asset", |b| {
        b.iter(|| optimize_two_asset_portfolio(black_box(&equities), black_box(&bonds), 0.3, 0.02))
    });
}

fn bench_frontier(c: &mut Criterion) {
    let assets = [Asset::new("Equities", 0.10, 0.20), Asset::new("Bonds", 0.04, 0.05)];
    let rho = CorrelationMatrix::identity(2);

    let mut group = c.benchmark_group("efficient_frontier");
    for points in [10usize, 30, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, &points| {
            b.iter(|| efficient_frontier(black_box(&assets), &rho, points))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_optimizer, bench_frontier);
criterion_main!(benches);
