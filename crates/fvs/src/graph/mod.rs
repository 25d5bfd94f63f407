//! Graph collaborators consumed by the solver.
//!
//! Purpose
//! - Define the `Adjacency` seam: the solver only ever asks "who are the
//!   neighbors of `v` inside this subset?" and "is this a valid feedback set?".
//! - Ship two concrete graphs: an explicit edge list and the geometric
//!   unit-disk rule used for point clouds.
//!
//! Conventions
//! - Edges are recomputed on demand, scoped to whatever subset is passed in.
//!   Nothing here caches degrees.
//! - Neighbor lists come back in `subset` order so that every traversal built
//!   on top of them is deterministic.

mod adjacency;
mod disk;
mod forest;

pub use adjacency::{Adjacency, EdgeListGraph, Vertex};
pub use disk::{DiskCfg, Point, UnitDiskGraph};
pub use forest::{is_forest, UnionFind};
