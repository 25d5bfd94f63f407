//! Random point clouds on an integer grid (replay tokens).
//!
//! Purpose
//! - Provide reproducible vertex sets for the unit-disk graph: benchmarks,
//!   property tests and the CLI `generate` command draw from here.
//!
//! Model
//! - `count` distinct points, uniform on `[0, width) × [0, height)`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the i-th cloud of a stream can be regenerated on its own.

use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloudCfg {
    pub count: usize,
    pub width: i32,
    pub height: i32,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            width: 400,
            height: 400,
        }
    }
}

impl CloudCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.count == 0 {
            return Err(GeneratorError::invalid("count must be > 0"));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(GeneratorError::invalid("width and height must be > 0"));
        }
        let cells = self.width as u64 * self.height as u64;
        if self.count as u64 > cells {
            return Err(GeneratorError::invalid(format!(
                "count {} exceeds the {cells} grid cells",
                self.count
            )));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` distinct points in draw order.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Result<Vec<Point>, GeneratorError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let mut seen: HashSet<Point> = HashSet::with_capacity(cfg.count);
    let mut points = Vec::with_capacity(cfg.count);
    while points.len() < cfg.count {
        let p = Point::new(rng.gen_range(0..cfg.width), rng.gen_range(0..cfg.height));
        if seen.insert(p) {
            points.push(p);
        }
    }
    Ok(points)
}
