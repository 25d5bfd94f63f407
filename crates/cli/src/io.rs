//! Point files and result documents.
//!
//! Inputs are either a JSON array of `{"x": .., "y": ..}` objects or a CSV
//! file with integer `x` and `y` columns (read through polars). Outputs are
//! always pretty JSON.

use anyhow::{anyhow, bail, Context, Result};
use fvs::Point;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serialized form of a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: i32,
    pub y: i32,
}

impl From<Point> for PointRecord {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PointRecord> for Point {
    fn from(r: PointRecord) -> Self {
        Point::new(r.x, r.y)
    }
}

/// Result document written by `solve` and read back by `check`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolveReport {
    /// Members in the order they entered the candidate set.
    pub fvs: Vec<PointRecord>,
    pub size: usize,
    pub candidate_size: usize,
    pub vertices: usize,
    pub threshold: f64,
    pub iterations: usize,
    pub cycle_rule: usize,
    pub degree_rule: usize,
    pub valid: bool,
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        read_points_csv(path)
    } else {
        read_points_json(path)
    }
}

fn read_points_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<PointRecord> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing points from {}", path.display()))?;
    Ok(records.into_iter().map(Point::from).collect())
}

fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Int32),
            col("y").cast(DataType::Int32),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "points_csv");
    let xs = df.column("x")?.i32()?;
    let ys = df.column("y")?.i32()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(anyhow!("{}: missing coordinate in row {row}", path.display())),
        })
        .collect()
}

pub fn read_report(path: &Path) -> Result<SolveReport> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing result {}", path.display()))
}

/// Write `value` as pretty JSON, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if path.as_os_str().is_empty() {
        bail!("empty output path");
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
