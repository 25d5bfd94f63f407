//! Approximate minimal feedback vertex sets by local-ratio weighting.
//!
//! Pipeline
//! - `reduce`: strip vertices of degree < 2 from the working list.
//! - `cycle`: DFS for one cycle and the semi-disjoint test on it.
//! - `schedule`: the weighting loop (cycle rule / degree rule), seeded with the
//!   first input vertex, producing a candidate set and its insertion order.
//! - `prune`: reverse-order redundancy removal against the untouched input.
//!
//! The result is a minimal feedback vertex set; the weighting phase carries
//! the factor-2 bound of the cycle/degree local-ratio scheme.
//!
//! Cost
//! - Degrees are recomputed from scratch by scanning neighbors, so a run is
//!   roughly O(|V|² · |E|) adjacency work. Fine for a few hundred vertices.

mod cycle;
mod prune;
mod reduce;
mod schedule;
mod types;

pub use cycle::{find_cycle, semi_disjoint_cycle};
pub use prune::{is_minimal_feedback_set, minimalize};
pub use reduce::{clean_up, is_clean};
pub use types::{Candidate, FvsOutcome, ScheduleStats};

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::graph::{Adjacency, Vertex};
use types::Reduction;

/// Distinct vertices of `vertices`, first occurrence wins.
pub fn dedup_vertices<V: Vertex>(vertices: &[V]) -> Vec<V> {
    let mut seen = HashSet::with_capacity(vertices.len());
    vertices
        .iter()
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

/// Run only the weighting phase on `vertices`.
///
/// Repeated vertices are dropped first (first occurrence wins). The first
/// vertex seeds the candidate set unconditionally. The returned set is a
/// feedback vertex set, usually not a minimal one.
pub fn approximate<V, G>(graph: &G, vertices: &[V]) -> Candidate<V>
where
    V: Vertex,
    G: Adjacency<V> + ?Sized,
{
    Reduction::new(graph, &dedup_vertices(vertices)).run()
}

/// Compute a minimal feedback vertex set of the graph induced on `vertices`,
/// with diagnostics.
///
/// # Preconditions
///
/// `graph` must describe a fixed, symmetric, loop-free relation. Violations are
/// not rejected and the output is then unspecified. A weighting result that
/// fails the validity oracle is logged at `warn` level.
pub fn solve<V, G>(graph: &G, vertices: &[V]) -> FvsOutcome<V>
where
    V: Vertex,
    G: Adjacency<V> + ?Sized,
{
    let vertices = dedup_vertices(vertices);
    if vertices.len() < 2 {
        return FvsOutcome::empty();
    }
    let candidate = Reduction::new(graph, &vertices).run();
    let candidate_size = candidate.fvs.len();
    if !graph.is_valid_feedback_set(&vertices, &candidate.fvs) {
        // pruning only removes members, so this carries into the result
        warn!(candidate_size, "weighting left a cycle behind");
    }
    let (fvs, ordered) = minimalize(graph, &vertices, candidate.fvs, candidate.order);
    debug!(candidate_size, fvs = fvs.len(), "solved");
    FvsOutcome {
        fvs,
        ordered,
        candidate_size,
        stats: candidate.stats,
    }
}

/// Minimal feedback vertex set of the graph induced on `vertices`.
///
/// Shorthand for `solve(graph, vertices).fvs`.
pub fn compute_feedback_vertex_set<V, G>(graph: &G, vertices: &[V]) -> HashSet<V>
where
    V: Vertex,
    G: Adjacency<V> + ?Sized,
{
    solve(graph, vertices).fvs
}
