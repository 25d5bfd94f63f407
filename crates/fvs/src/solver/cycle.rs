//! Cycle finding by depth-first search and the semi-disjoint test.
//!
//! The search runs on an explicit frame stack instead of recursion. Each frame
//! remembers the DFS parent and how far it got through its neighbor list, so
//! the visiting order is exactly that of the recursive formulation. The search
//! stops at the first back-edge and returns the path segment it closes.

use std::collections::{HashMap, HashSet};

use crate::graph::{Adjacency, Vertex};

struct Frame<V> {
    vertex: V,
    parent: Option<V>,
    children: Vec<V>,
    next: usize,
}

/// Find one cycle of the subgraph induced on `working`, searching from its
/// first vertex.
///
/// Returns the cycle as the DFS path from the back-edge target down to the
/// vertex that closed it. `None` if `working` is empty or nothing reachable
/// from the start closes a cycle; other components are not searched.
pub fn find_cycle<V, G>(graph: &G, working: &[V]) -> Option<Vec<V>>
where
    V: Vertex,
    G: Adjacency<V> + ?Sized,
{
    let start = working.first()?;
    let mut visited: HashSet<V> = HashSet::from([start.clone()]);
    // depth of every vertex currently on the DFS path
    let mut on_path: HashMap<V, usize> = HashMap::from([(start.clone(), 0)]);
    let mut stack = vec![Frame {
        vertex: start.clone(),
        parent: None,
        children: graph.neighbors(start, working),
        next: 0,
    }];

    while let Some(top) = stack.last_mut() {
        if top.next == top.children.len() {
            if let Some(done) = stack.pop() {
                on_path.remove(&done.vertex);
            }
            continue;
        }
        let w = top.children[top.next].clone();
        top.next += 1;
        if top.parent.as_ref() == Some(&w) {
            continue;
        }
        let from = top.vertex.clone();

        if visited.contains(&w) {
            if let Some(&depth) = on_path.get(&w) {
                return Some(stack[depth..].iter().map(|f| f.vertex.clone()).collect());
            }
            continue;
        }
        visited.insert(w.clone());
        on_path.insert(w.clone(), stack.len());
        let children = graph.neighbors(&w, working);
        stack.push(Frame {
            vertex: w,
            parent: Some(from),
            children,
            next: 0,
        });
    }
    None
}

/// Cycle from [`find_cycle`] if at most one of its vertices has degree > 2 in
/// `working`; `None` otherwise (the cycle is discarded, no other is tried).
pub fn semi_disjoint_cycle<V, G>(graph: &G, working: &[V]) -> Option<Vec<V>>
where
    V: Vertex,
    G: Adjacency<V> + ?Sized,
{
    let cycle = find_cycle(graph, working)?;
    let mut exceptions = 0usize;
    for v in &cycle {
        if graph.degree(v, working) > 2 {
            exceptions += 1;
            if exceptions > 1 {
                return None;
            }
        }
    }
    Some(cycle)
}
