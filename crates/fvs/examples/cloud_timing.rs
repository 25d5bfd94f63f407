//! Timing run: solve one random point cloud and report sizes.
//!
//! Usage: `cargo run --release -p fvs --example cloud_timing -- [count] [seed]`

use std::time::Instant;

use fvs::cloud::{draw_point_cloud, CloudCfg, ReplayToken};
use fvs::exact::{minimum_feedback_vertex_set, MAX_EXACT_VERTICES};
use fvs::graph::UnitDiskGraph;
use fvs::solver::solve;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(200);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let cfg = CloudCfg {
        count,
        ..CloudCfg::default()
    };
    let pts = draw_point_cloud(cfg, ReplayToken { seed, index: 0 }).expect("valid cloud params");
    let g = UnitDiskGraph::default();

    let start = Instant::now();
    let out = solve(&g, &pts);
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    println!("points={count} seed={seed} threshold={}", g.cfg.threshold);
    println!(
        "candidate={} fvs={} iterations={} cycle_rule={} degree_rule={}",
        out.candidate_size,
        out.len(),
        out.stats.iterations,
        out.stats.cycle_rule,
        out.stats.degree_rule
    );
    println!("solve_time_ms={elapsed:.3}");

    if pts.len() <= MAX_EXACT_VERTICES {
        let best = minimum_feedback_vertex_set(&g, &pts).expect("small enough");
        println!("optimum={}", best.len());
    }
}
