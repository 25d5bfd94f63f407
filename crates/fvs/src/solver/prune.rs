//! Minimality pass: drop candidates that turn out to be redundant.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::{Adjacency, Vertex};

/// Test each member of `fvs` once, most recently inserted first, and remove it
/// if the rest is still a valid feedback vertex set of the graph induced on
/// `vertices`.
///
/// `order` is the insertion stack (last element = last inserted) and must list
/// every member of `fvs`. Returns the minimal set and its surviving members in
/// insertion order.
pub fn minimalize<V, G>(
    graph: &G,
    vertices: &[V],
    mut fvs: HashSet<V>,
    mut order: Vec<V>,
) -> (HashSet<V>, Vec<V>)
where
    V: Vertex,
    G: Adjacency<V> + ?Sized,
{
    let mut kept = Vec::with_capacity(order.len());
    while let Some(u) = order.pop() {
        if !fvs.remove(&u) {
            continue;
        }
        let redundant = graph.is_valid_feedback_set(vertices, &fvs);
        debug!(vertex = ?u, redundant, "prune");
        if !redundant {
            fvs.insert(u.clone());
            kept.push(u);
        }
    }
    kept.reverse();
    (fvs, kept)
}

/// True iff `fvs` is a feedback vertex set of the graph induced on `vertices`
/// and no single member can be dropped from it.
pub fn is_minimal_feedback_set<V, G>(graph: &G, vertices: &[V], fvs: &HashSet<V>) -> bool
where
    V: Vertex,
    G: Adjacency<V> + ?Sized,
{
    if !graph.is_valid_feedback_set(vertices, fvs) {
        return false;
    }
    let mut trial = fvs.clone();
    for u in fvs {
        trial.remove(u);
        let redundant = graph.is_valid_feedback_set(vertices, &trial);
        trial.insert(u.clone());
        if redundant {
            return false;
        }
    }
    true
}
