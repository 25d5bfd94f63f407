//! Approximate minimal feedback vertex sets of undirected graphs.
//!
//! A feedback vertex set (FVS) is a set of vertices whose removal leaves a
//! forest. `solver` runs the cycle/degree local-ratio weighting (factor 2)
//! and then prunes the result to an inclusion-wise minimal set.
//!
//! Layout
//! - `graph`: the `Adjacency` seam plus edge-list and unit-disk graphs.
//! - `solver`: degree reduction, cycle search, weighting loop, pruning.
//! - `exact`: brute-force minimum for tiny graphs (reference answers).
//! - `cloud`: reproducible random point sets for the unit-disk graph.

pub mod cloud;
pub mod exact;
pub mod graph;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use graph::{Adjacency, DiskCfg, EdgeListGraph, Point, UnitDiskGraph, Vertex};
pub use solver::{compute_feedback_vertex_set, solve, FvsOutcome};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{draw_point_cloud, CloudCfg, ReplayToken};
    pub use crate::graph::{is_forest, Adjacency, DiskCfg, EdgeListGraph, Point, UnitDiskGraph};
    pub use crate::solver::{compute_feedback_vertex_set, solve, FvsOutcome};
}
