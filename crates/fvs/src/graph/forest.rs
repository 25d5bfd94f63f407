//! Acyclicity check for induced subgraphs.
//!
//! An undirected graph is a forest iff no edge joins two vertices that are
//! already connected. Vertices are mapped to ordinals and merged in a
//! union-find as edges are discovered.

use std::collections::HashMap;

use super::adjacency::{Adjacency, Vertex};

/// Disjoint sets over ordinals `0..n` with path halving and union by rank.
///
/// On equal rank the lower ordinal becomes the root, so representatives do not
/// depend on the order of `union` calls.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0u8; n],
        }
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
                self.parent[child] = root;
                self.rank[root] += 1;
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

/// True iff the subgraph induced on `vertices` contains no cycle.
///
/// Repeated vertices are counted once.
pub fn is_forest<V, G>(graph: &G, vertices: &[V]) -> bool
where
    V: Vertex,
    G: Adjacency<V> + ?Sized,
{
    let mut index: HashMap<&V, usize> = HashMap::with_capacity(vertices.len());
    let mut unique: Vec<V> = Vec::with_capacity(vertices.len());
    for v in vertices {
        if !index.contains_key(v) {
            index.insert(v, unique.len());
            unique.push(v.clone());
        }
    }
    let mut uf = UnionFind::new(unique.len());
    for (i, v) in unique.iter().enumerate() {
        for u in graph.neighbors(v, &unique) {
            // each undirected edge is seen from both ends; merge it once
            let Some(&j) = index.get(&u) else { continue };
            if j <= i {
                continue;
            }
            if !uf.union(i, j) {
                return false;
            }
        }
    }
    true
}
