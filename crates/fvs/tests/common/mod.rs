//! Shared helpers: an acyclicity check that does not go through the solver's
//! validity oracle, and small named graphs.
#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use fvs::graph::{Adjacency, EdgeListGraph, Vertex};

/// Forest test by counting: a graph is a forest iff |E| + #components == |V|.
pub fn is_acyclic_without<V, G>(graph: &G, vertices: &[V], removed: &HashSet<V>) -> bool
where
    V: Vertex,
    G: Adjacency<V>,
{
    let mut rest: Vec<V> = Vec::new();
    for v in vertices {
        if !removed.contains(v) && !rest.contains(v) {
            rest.push(v.clone());
        }
    }
    let degree_sum: usize = rest.iter().map(|v| graph.neighbors(v, &rest).len()).sum();
    let edges = degree_sum / 2;

    let mut seen: HashSet<V> = HashSet::new();
    let mut components = 0;
    for v in &rest {
        if !seen.insert(v.clone()) {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::from([v.clone()]);
        while let Some(u) = queue.pop_front() {
            for w in graph.neighbors(&u, &rest) {
                if seen.insert(w.clone()) {
                    queue.push_back(w);
                }
            }
        }
    }
    edges + components == rest.len()
}

/// Every single-vertex removal from `fvs` breaks validity.
pub fn is_minimal<V, G>(graph: &G, vertices: &[V], fvs: &HashSet<V>) -> bool
where
    V: Vertex,
    G: Adjacency<V>,
{
    fvs.iter().all(|u| {
        let mut trial = fvs.clone();
        trial.remove(u);
        !is_acyclic_without(graph, vertices, &trial)
    })
}

pub fn complete(n: u32) -> EdgeListGraph<u32> {
    let mut g = EdgeListGraph::new();
    for a in 0..n {
        for b in a + 1..n {
            g.add_edge(a, b);
        }
    }
    g
}

/// Hub `0` joined to every vertex of the rim cycle `1..=n`.
pub fn wheel(n: u32) -> EdgeListGraph<u32> {
    let mut g = EdgeListGraph::new();
    for i in 1..=n {
        g.add_edge(0, i);
        g.add_edge(i, i % n + 1);
    }
    g
}

pub fn petersen() -> EdgeListGraph<u32> {
    let mut g = EdgeListGraph::new();
    for i in 0..5 {
        g.add_edge(i, (i + 1) % 5);
        g.add_edge(i, i + 5);
        g.add_edge(i + 5, (i + 2) % 5 + 5);
    }
    g
}

pub fn prism() -> EdgeListGraph<u32> {
    EdgeListGraph::from_edges([(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (0, 3), (1, 4), (2, 5)])
}

pub fn k33() -> EdgeListGraph<u32> {
    let mut g = EdgeListGraph::new();
    for a in 0..3 {
        for b in 3..6 {
            g.add_edge(a, b);
        }
    }
    g
}

pub fn vertices(n: u32) -> Vec<u32> {
    (0..n).collect()
}
