//! Criterion microbenches for the DFS cycle finder and degree reduction.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fvs::cloud::{draw_point_cloud, CloudCfg, ReplayToken};
use fvs::graph::{EdgeListGraph, UnitDiskGraph};
use fvs::solver::{clean_up, find_cycle, semi_disjoint_cycle};

/// One long cycle `0 - 1 - ... - (n-1) - 0`: the search walks every vertex.
fn ring(n: u32) -> EdgeListGraph<u32> {
    EdgeListGraph::from_edges((0..n).map(|i| (i, (i + 1) % n)))
}

fn bench_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    for &n in &[100u32, 500, 2_000] {
        let g = ring(n);
        let vs: Vec<u32> = (0..n).collect();
        group.bench_with_input(BenchmarkId::new("find_cycle_ring", n), &n, |b, _| {
            b.iter(|| find_cycle(&g, &vs))
        });
    }
    let disk = UnitDiskGraph::default();
    let cfg = CloudCfg {
        count: 150,
        width: 300,
        height: 300,
    };
    let pts = draw_point_cloud(cfg, ReplayToken { seed: 5, index: 0 }).unwrap();
    group.bench_function(BenchmarkId::new("semi_disjoint_cloud", 150), |b| {
        b.iter(|| semi_disjoint_cycle(&disk, &pts))
    });
    group.bench_function(BenchmarkId::new("clean_up_cloud", 150), |b| {
        b.iter_batched(
            || pts.clone(),
            |mut working| {
                clean_up(&disk, &mut working);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_cycles);
criterion_main!(benches);
