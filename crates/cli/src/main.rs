use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use fvs::cloud::{draw_point_cloud, CloudCfg, ReplayToken};
use fvs::solver::is_minimal_feedback_set;
use fvs::{Adjacency, DiskCfg, Point, UnitDiskGraph};
use serde_json::json;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{PointRecord, SolveReport};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "fvs-cli")]
#[command(about = "Feedback vertex sets of unit-disk point graphs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one point set and write the result with a provenance sidecar
    Solve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = DiskCfg::default().threshold)]
        threshold: f64,
    },
    /// Draw a reproducible random point cloud
    Generate {
        #[arg(long, default_value_t = CloudCfg::default().count)]
        count: usize,
        #[arg(long, default_value_t = CloudCfg::default().width)]
        width: i32,
        #[arg(long, default_value_t = CloudCfg::default().height)]
        height: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Verify that a stored result is a valid, minimal feedback vertex set
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        fvs: PathBuf,
        /// Defaults to the threshold recorded in the result file
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            out,
            threshold,
        } => solve(&input, &out, threshold).map(|_| ()),
        Action::Generate {
            count,
            width,
            height,
            seed,
            index,
            out,
        } => generate(CloudCfg { count, width, height }, ReplayToken { seed, index }, &out),
        Action::Check {
            input,
            fvs,
            threshold,
        } => check(&input, &fvs, threshold),
        Action::Report => report(),
    }
}

fn solve(input: &Path, out: &Path, threshold: f64) -> Result<SolveReport> {
    if !threshold.is_finite() || threshold <= 0.0 {
        bail!("threshold must be positive and finite, got {threshold}");
    }
    let points = io::read_points(input)?;
    let graph = UnitDiskGraph::with_threshold(threshold);
    let outcome = fvs::solve(&graph, &points);
    let valid = graph.is_valid_feedback_set(&points, &outcome.fvs);
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        vertices = points.len(),
        candidate = outcome.candidate_size,
        fvs = outcome.len(),
        iterations = outcome.stats.iterations,
        valid,
        "solve"
    );

    let report = SolveReport {
        fvs: outcome.ordered.iter().copied().map(PointRecord::from).collect(),
        size: outcome.len(),
        candidate_size: outcome.candidate_size,
        vertices: points.len(),
        threshold,
        iterations: outcome.stats.iterations,
        cycle_rule: outcome.stats.cycle_rule,
        degree_rule: outcome.stats.degree_rule,
        valid,
    };
    io::write_json(out, &report)?;
    provenance::write_sidecar(
        out,
        Payload::new(json!({ "command": "solve", "threshold": threshold })).with_input(input),
    )?;
    Ok(report)
}

fn generate(cfg: CloudCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    let points = draw_point_cloud(cfg, tok)?;
    tracing::info!(
        count = cfg.count,
        drawn = points.len(),
        seed = tok.seed,
        index = tok.index,
        out = %out.display(),
        "generate"
    );
    let records: Vec<PointRecord> = points.into_iter().map(PointRecord::from).collect();
    io::write_json(out, &records)?;
    provenance::write_sidecar(
        out,
        Payload::new(json!({
            "command": "generate",
            "count": cfg.count,
            "width": cfg.width,
            "height": cfg.height,
            "seed": tok.seed,
            "index": tok.index
        })),
    )?;
    Ok(())
}

fn check(input: &Path, fvs_path: &Path, threshold: Option<f64>) -> Result<()> {
    let points = io::read_points(input)?;
    let report = io::read_report(fvs_path)?;
    let threshold = threshold.unwrap_or(report.threshold);
    let graph = UnitDiskGraph::with_threshold(threshold);

    let known: HashSet<Point> = points.iter().copied().collect();
    let fvs: HashSet<Point> = report.fvs.iter().copied().map(Point::from).collect();
    if let Some(stray) = fvs.iter().find(|p| !known.contains(*p)) {
        bail!(
            "{}: member ({}, {}) is not a vertex of {}",
            fvs_path.display(),
            stray.x,
            stray.y,
            input.display()
        );
    }

    let valid = graph.is_valid_feedback_set(&points, &fvs);
    let minimal = valid && is_minimal_feedback_set(&graph, &points, &fvs);
    tracing::info!(
        input = %input.display(),
        fvs = %fvs_path.display(),
        threshold,
        size = fvs.len(),
        valid,
        minimal,
        "check"
    );
    if !valid {
        bail!("{}: remaining graph still has a cycle", fvs_path.display());
    }
    if !minimal {
        bail!("{}: set is valid but not minimal", fvs_path.display());
    }
    Ok(())
}

fn report() -> Result<()> {
    tracing::info!("report");
    println!("{}", serde_json::to_string_pretty(&provenance::standalone())?);
    Ok(())
}
