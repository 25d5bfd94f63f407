//! Working state of one solver run and the values it hands back.

use std::collections::{HashMap, HashSet};

use crate::graph::{Adjacency, Vertex};

/// Counters collected by the weight scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScheduleStats {
    /// Main-loop iterations (seeding not included).
    pub iterations: usize,
    /// Iterations that decremented along a semi-disjoint cycle.
    pub cycle_rule: usize,
    /// Iterations that decremented by degree.
    pub degree_rule: usize,
}

/// Output of the weighting phase: a valid but not necessarily minimal set.
#[derive(Clone, Debug)]
pub struct Candidate<V: Vertex> {
    pub fvs: HashSet<V>,
    /// Insertion order; the last element was inserted last.
    pub order: Vec<V>,
    pub stats: ScheduleStats,
}

/// Final result of [`solve`](super::solve).
#[derive(Clone, Debug)]
pub struct FvsOutcome<V: Vertex> {
    /// Minimal feedback vertex set.
    pub fvs: HashSet<V>,
    /// Members of `fvs` in the order they entered the candidate set.
    pub ordered: Vec<V>,
    /// Size of the candidate set before pruning.
    pub candidate_size: usize,
    pub stats: ScheduleStats,
}

impl<V: Vertex> FvsOutcome<V> {
    pub(crate) fn empty() -> Self {
        Self {
            fvs: HashSet::new(),
            ordered: Vec::new(),
            candidate_size: 0,
            stats: ScheduleStats::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.fvs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fvs.is_empty()
    }
}

/// Context owning the working list `V`, the weights `w`, the candidate set `F`
/// and its insertion stack for a single run.
///
/// Invariant: `weights` has an entry, in `[0, 1]`, exactly for the vertices of
/// `working`.
pub(crate) struct Reduction<'g, V: Vertex, G: Adjacency<V> + ?Sized> {
    pub(crate) graph: &'g G,
    pub(crate) working: Vec<V>,
    pub(crate) weights: HashMap<V, f64>,
    pub(crate) fvs: HashSet<V>,
    pub(crate) order: Vec<V>,
    pub(crate) stats: ScheduleStats,
}

impl<'g, V: Vertex, G: Adjacency<V> + ?Sized> Reduction<'g, V, G> {
    pub(crate) fn new(graph: &'g G, vertices: &[V]) -> Self {
        let working = vertices.to_vec();
        let weights = working.iter().map(|v| (v.clone(), 1.0)).collect();
        Self {
            graph,
            working,
            weights,
            fvs: HashSet::new(),
            order: Vec::new(),
            stats: ScheduleStats::default(),
        }
    }

    pub(crate) fn into_candidate(self) -> Candidate<V> {
        Candidate {
            fvs: self.fvs,
            order: self.order,
            stats: self.stats,
        }
    }
}
