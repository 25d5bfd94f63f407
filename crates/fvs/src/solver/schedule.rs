//! Weight scheduler: the local-ratio loop that builds the candidate set.
//!
//! Every active vertex starts at weight 1. Each iteration lowers weights by a
//! binding amount λ, using one of two rules:
//! - cycle rule: along a semi-disjoint cycle C, λ = min w over C, and every
//!   vertex of C loses λ;
//! - degree rule: λ = min w(v) / (d(v) − 1) over the whole working list, and
//!   every vertex loses λ · (d(v) − 1).
//!
//! Vertices that hit exactly 0 move into the candidate set, then the degree
//! reducer runs again. Because λ is an exact minimum, at least one vertex
//! reaches 0 per iteration.

use tracing::{debug, trace, warn};

use super::cycle::semi_disjoint_cycle;
use super::reduce::clean_up;
use super::types::{Candidate, Reduction};
use crate::graph::{Adjacency, Vertex};

impl<'g, V: Vertex, G: Adjacency<V> + ?Sized> Reduction<'g, V, G> {
    /// Seed with the first vertex, then iterate until the working list is empty.
    pub(crate) fn run(mut self) -> Candidate<V> {
        self.seed();
        while !self.working.is_empty() {
            let before = self.working.len();
            self.step();
            if self.working.len() == before {
                // λ is a binding minimum, so a consistent adjacency always makes progress
                warn!(
                    remaining = before,
                    "weight scheduler stalled; adjacency precondition violated"
                );
                break;
            }
        }
        debug!(
            candidate = self.fvs.len(),
            iterations = self.stats.iterations,
            cycle_rule = self.stats.cycle_rule,
            degree_rule = self.stats.degree_rule,
            "weighting done"
        );
        self.into_candidate()
    }

    /// Put the first vertex into the candidate set unconditionally and clean up.
    fn seed(&mut self) {
        if self.working.is_empty() {
            return;
        }
        let first = self.working.remove(0);
        self.weights.remove(&first);
        debug!(vertex = ?first, "seed");
        self.fvs.insert(first.clone());
        self.order.push(first);
        self.clean_up();
    }

    fn step(&mut self) {
        self.stats.iterations += 1;
        let lambda = match semi_disjoint_cycle(self.graph, &self.working) {
            Some(cycle) if cycle.len() > 1 => {
                self.stats.cycle_rule += 1;
                self.apply_cycle_rule(&cycle)
            }
            _ => {
                self.stats.degree_rule += 1;
                self.apply_degree_rule()
            }
        };
        let moved = self.collect_zero_weight();
        let stripped = self.clean_up();
        trace!(
            iteration = self.stats.iterations,
            lambda,
            moved,
            stripped,
            remaining = self.working.len(),
            "step"
        );
    }

    fn apply_cycle_rule(&mut self, cycle: &[V]) -> f64 {
        // members outside the working list only appear if the adjacency
        // ignores its subset; they carry no weight and bind nothing
        let lambda = cycle
            .iter()
            .filter_map(|v| self.weights.get(v).copied())
            .fold(f64::INFINITY, f64::min);
        if !lambda.is_finite() {
            return lambda;
        }
        for v in cycle {
            if let Some(w) = self.weights.get_mut(v) {
                // x - x == 0 exactly, so the minimizers land on zero
                *w -= lambda;
            }
        }
        lambda
    }

    fn apply_degree_rule(&mut self) -> f64 {
        let slack: Vec<f64> = self
            .working
            .iter()
            .map(|v| self.graph.degree(v, &self.working).saturating_sub(1) as f64)
            .collect();
        let ratios: Vec<f64> = self
            .working
            .iter()
            .zip(&slack)
            .map(|(v, &s)| {
                if s > 0.0 {
                    self.weight(v) / s
                } else {
                    f64::INFINITY
                }
            })
            .collect();
        let lambda = ratios.iter().copied().fold(f64::INFINITY, f64::min);
        if !lambda.is_finite() {
            return lambda;
        }
        for ((v, &s), &r) in self.working.iter().zip(&slack).zip(&ratios) {
            if let Some(w) = self.weights.get_mut(v) {
                // (w / s) * s may miss w by an ulp; binding vertices are zeroed directly
                *w = if r == lambda {
                    0.0
                } else {
                    (*w - lambda * s).max(0.0)
                };
            }
        }
        lambda
    }

    /// Move every zero-weight vertex into the candidate set, in list order.
    fn collect_zero_weight(&mut self) -> usize {
        let mut moved = 0;
        let mut i = 0;
        while i < self.working.len() {
            if self.weights.get(&self.working[i]) == Some(&0.0) {
                let u = self.working.remove(i);
                self.weights.remove(&u);
                self.fvs.insert(u.clone());
                self.order.push(u);
                moved += 1;
            } else {
                i += 1;
            }
        }
        moved
    }

    fn clean_up(&mut self) -> usize {
        let removed = clean_up(self.graph, &mut self.working);
        for v in &removed {
            self.weights.remove(v);
        }
        removed.len()
    }

    /// Weight of a working vertex. Panics if the weight map lost track of it.
    #[inline]
    fn weight(&self, v: &V) -> f64 {
        match self.weights.get(v) {
            Some(&w) => w,
            None => panic!("working vertex {v:?} has no weight"),
        }
    }
}
