//! Geometric adjacency: points closer than a threshold are connected.
//!
//! Points carry integer coordinates, so vertex equality and hashing are exact
//! (no tolerance). Distances are compared in squared form on `f64`.

use nalgebra::Vector2;

use super::adjacency::Adjacency;

/// Vertex type for point clouds.
pub type Point = Vector2<i32>;

/// Unit-disk graph configuration.
#[derive(Clone, Copy, Debug)]
pub struct DiskCfg {
    /// Two distinct points are adjacent iff their distance is strictly below this.
    pub threshold: f64,
}

impl Default for DiskCfg {
    fn default() -> Self {
        Self { threshold: 55.0 }
    }
}

/// Graph whose edges join distinct points at distance `< cfg.threshold`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitDiskGraph {
    pub cfg: DiskCfg,
}

impl UnitDiskGraph {
    pub fn new(cfg: DiskCfg) -> Self {
        Self { cfg }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self::new(DiskCfg { threshold })
    }

    #[inline]
    pub fn adjacent(&self, a: &Point, b: &Point) -> bool {
        if a == b {
            return false;
        }
        let d = a.cast::<f64>() - b.cast::<f64>();
        d.norm_squared() < self.cfg.threshold * self.cfg.threshold
    }
}

impl Adjacency<Point> for UnitDiskGraph {
    fn neighbors(&self, v: &Point, subset: &[Point]) -> Vec<Point> {
        subset.iter().filter(|u| self.adjacent(v, u)).copied().collect()
    }

    fn degree(&self, v: &Point, subset: &[Point]) -> usize {
        subset.iter().filter(|u| self.adjacent(v, u)).count()
    }
}
