//! Exhaustive minimum feedback vertex set for tiny graphs.
//!
//! Reference answers for checking the approximation on small instances.
//! Subsets are tried by increasing size, so the first hit is a minimum.

use std::collections::HashSet;
use std::fmt;

use crate::graph::{is_forest, Adjacency, Vertex};
use crate::solver::dedup_vertices;

/// Largest input accepted by [`minimum_feedback_vertex_set`].
pub const MAX_EXACT_VERTICES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExactError {
    TooLarge { vertices: usize, limit: usize },
}

impl fmt::Display for ExactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { vertices, limit } => write!(
                f,
                "exhaustive search refused: {vertices} vertices exceeds the limit of {limit}"
            ),
        }
    }
}

impl std::error::Error for ExactError {}

/// A minimum feedback vertex set of the graph induced on `vertices`.
pub fn minimum_feedback_vertex_set<V, G>(graph: &G, vertices: &[V]) -> Result<HashSet<V>, ExactError>
where
    V: Vertex,
    G: Adjacency<V> + ?Sized,
{
    let vertices = dedup_vertices(vertices);
    let n = vertices.len();
    if n > MAX_EXACT_VERTICES {
        return Err(ExactError::TooLarge {
            vertices: n,
            limit: MAX_EXACT_VERTICES,
        });
    }
    for k in 0..=n {
        let mut idx: Vec<usize> = (0..k).collect();
        loop {
            let removed: HashSet<usize> = idx.iter().copied().collect();
            let rest: Vec<V> = (0..n)
                .filter(|i| !removed.contains(i))
                .map(|i| vertices[i].clone())
                .collect();
            if is_forest(graph, &rest) {
                return Ok(idx.iter().map(|&i| vertices[i].clone()).collect());
            }
            if !next_combination(&mut idx, n) {
                break;
            }
        }
    }
    // removing every vertex always leaves a forest
    Ok(vertices.into_iter().collect())
}

/// Advance `idx` (strictly increasing, values `< n`) to the next k-subset in
/// lexicographic order. Returns `false` once exhausted.
fn next_combination(idx: &mut [usize], n: usize) -> bool {
    let k = idx.len();
    for i in (0..k).rev() {
        if idx[i] < n - k + i {
            idx[i] += 1;
            for j in i + 1..k {
                idx[j] = idx[j - 1] + 1;
            }
            return true;
        }
    }
    false
}
