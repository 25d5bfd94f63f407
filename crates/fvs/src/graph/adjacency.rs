//! The adjacency seam and an explicit edge-list graph.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use super::forest::is_forest;

/// Vertex identity: compared and hashed by value.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// Adjacency oracle over a fixed, undirected edge relation.
///
/// # Preconditions
///
/// The relation must be symmetric and irreflexive, and it must not change
/// between calls. The solver does not detect violations; results are
/// unspecified if they occur.
pub trait Adjacency<V: Vertex> {
    /// Vertices of `subset` adjacent to `v`, in `subset` order.
    fn neighbors(&self, v: &V, subset: &[V]) -> Vec<V>;

    /// Degree of `v` inside `subset`.
    fn degree(&self, v: &V, subset: &[V]) -> usize {
        self.neighbors(v, subset).len()
    }

    /// True iff removing `candidate` from the graph induced on `vertices`
    /// leaves a forest.
    fn is_valid_feedback_set(&self, vertices: &[V], candidate: &HashSet<V>) -> bool {
        let rest: Vec<V> = vertices
            .iter()
            .filter(|v| !candidate.contains(*v))
            .cloned()
            .collect();
        is_forest(self, &rest)
    }
}

/// Graph given by an explicit list of undirected edges.
///
/// Self-loops are dropped and parallel edges collapse into one.
#[derive(Clone, Debug)]
pub struct EdgeListGraph<V: Vertex> {
    adj: HashMap<V, HashSet<V>>,
}

impl<V: Vertex> Default for EdgeListGraph<V> {
    fn default() -> Self {
        Self {
            adj: HashMap::new(),
        }
    }
}

impl<V: Vertex> EdgeListGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut g = Self::new();
        for (a, b) in edges {
            g.add_edge(a, b);
        }
        g
    }

    pub fn add_edge(&mut self, a: V, b: V) {
        if a == b {
            return;
        }
        self.adj.entry(a.clone()).or_default().insert(b.clone());
        self.adj.entry(b).or_default().insert(a);
    }

    #[inline]
    pub fn has_edge(&self, a: &V, b: &V) -> bool {
        self.adj.get(a).is_some_and(|ns| ns.contains(b))
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(HashSet::len).sum::<usize>() / 2
    }
}

impl<V: Vertex> Adjacency<V> for EdgeListGraph<V> {
    fn neighbors(&self, v: &V, subset: &[V]) -> Vec<V> {
        let Some(ns) = self.adj.get(v) else {
            return Vec::new();
        };
        subset.iter().filter(|u| ns.contains(*u)).cloned().collect()
    }

    fn degree(&self, v: &V, subset: &[V]) -> usize {
        self.adj
            .get(v)
            .map_or(0, |ns| subset.iter().filter(|u| ns.contains(*u)).count())
    }
}
