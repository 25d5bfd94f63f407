//! Degree reduction: strip vertices that cannot lie on a cycle.

use crate::graph::{Adjacency, Vertex};

/// Remove every vertex of degree < 2 (within `working`) until none is left.
///
/// Degrees are recomputed against the current list after each removal, so a
/// removal that drops a neighbor below 2 is picked up by the same call.
/// Surviving vertices keep their relative order. Returns the removed vertices
/// in removal order.
pub fn clean_up<V, G>(graph: &G, working: &mut Vec<V>) -> Vec<V>
where
    V: Vertex,
    G: Adjacency<V> + ?Sized,
{
    let mut removed = Vec::new();
    loop {
        let before = removed.len();
        let mut i = 0;
        while i < working.len() {
            if graph.degree(&working[i], working) < 2 {
                removed.push(working.remove(i));
            } else {
                i += 1;
            }
        }
        if removed.len() == before {
            return removed;
        }
    }
}

/// True iff every vertex of `working` has at least two neighbors in it.
pub fn is_clean<V, G>(graph: &G, working: &[V]) -> bool
where
    V: Vertex,
    G: Adjacency<V> + ?Sized,
{
    working.iter().all(|v| graph.degree(v, working) >= 2)
}
