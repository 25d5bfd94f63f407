//! Criterion benchmarks for the full solve on random point clouds.
//! Focus sizes: n in {40, 80, 120} points on a 300x300 grid.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p fvs

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fvs::cloud::{draw_point_cloud, CloudCfg, ReplayToken};
use fvs::graph::UnitDiskGraph;
use fvs::solver::{approximate, solve};

fn cloud(count: usize, index: u64) -> Vec<fvs::Point> {
    let cfg = CloudCfg {
        count,
        width: 300,
        height: 300,
    };
    draw_point_cloud(cfg, ReplayToken { seed: 2024, index }).unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let g = UnitDiskGraph::default();
    let mut group = c.benchmark_group("solve");
    group.sample_size(20);
    for &n in &[40usize, 80, 120] {
        group.bench_with_input(BenchmarkId::new("weighting_only", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 1),
                |pts| {
                    let _ = approximate(&g, &pts);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("weighting_and_pruning", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 1),
                |pts| {
                    let _ = solve(&g, &pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
