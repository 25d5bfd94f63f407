//! End-to-end scenarios on named graphs, checked against exhaustive search.

mod common;

use std::collections::HashSet;

use common::{complete, is_acyclic_without, is_minimal, k33, petersen, prism, vertices, wheel};
use fvs::exact::minimum_feedback_vertex_set;
use fvs::graph::{Adjacency, EdgeListGraph, Point, UnitDiskGraph, Vertex};
use fvs::{compute_feedback_vertex_set, solve};

fn check<V: Vertex, G: Adjacency<V>>(graph: &G, vs: &[V]) -> HashSet<V> {
    let fvs = compute_feedback_vertex_set(graph, vs);
    assert!(is_acyclic_without(graph, vs, &fvs), "not a feedback set: {fvs:?}");
    assert!(is_minimal(graph, vs, &fvs), "not minimal: {fvs:?}");
    fvs
}

#[test]
fn triangle_needs_one() {
    let g = EdgeListGraph::from_edges([('a', 'b'), ('b', 'c'), ('c', 'a')]);
    assert_eq!(check(&g, &['a', 'b', 'c']).len(), 1);
}

#[test]
fn four_cycle_needs_one() {
    let g = EdgeListGraph::from_edges([('A', 'B'), ('B', 'C'), ('C', 'D'), ('D', 'A')]);
    let fvs = check(&g, &['A', 'B', 'C', 'D']);
    assert_eq!(fvs.len(), 1);
}

#[test]
fn disjoint_triangles_need_one_each() {
    let g = EdgeListGraph::from_edges([(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)]);
    let fvs = check(&g, &[1, 2, 3, 4, 5, 6]);
    assert_eq!(fvs.len(), 2);
    assert_eq!(fvs.iter().filter(|v| **v <= 3).count(), 1);
    assert_eq!(fvs.iter().filter(|v| **v >= 4).count(), 1);
}

#[test]
fn trees_need_nothing() {
    let g = EdgeListGraph::from_edges([(1, 2), (1, 3), (1, 4), (4, 5), (4, 6), (6, 7)]);
    assert!(check(&g, &[1, 2, 3, 4, 5, 6, 7]).is_empty());
    // the seed is a leaf here
    assert!(check(&g, &[7, 6, 5, 4, 3, 2, 1]).is_empty());
}

#[test]
fn empty_and_single_vertex_inputs() {
    let g: EdgeListGraph<u32> = EdgeListGraph::new();
    assert!(compute_feedback_vertex_set(&g, &[]).is_empty());
    assert!(compute_feedback_vertex_set(&g, &[5]).is_empty());
    let disk = UnitDiskGraph::default();
    assert!(compute_feedback_vertex_set(&disk, &[Point::new(3, 4)]).is_empty());
}

#[test]
fn duplicate_vertices_collapse() {
    let g = EdgeListGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
    let fvs = check(&g, &[1, 1, 2, 3, 2, 1]);
    assert_eq!(fvs.len(), 1);
}

#[test]
fn point_triangle_under_default_threshold() {
    let disk = UnitDiskGraph::default();
    let pts = [Point::new(0, 0), Point::new(40, 0), Point::new(20, 30)];
    assert_eq!(check(&disk, &pts).len(), 1);
    // spread out: no edges at all
    let far = [Point::new(0, 0), Point::new(100, 0), Point::new(50, 90)];
    assert!(check(&disk, &far).is_empty());
}

#[test]
fn within_twice_the_optimum_on_named_graphs() {
    let mut cases: Vec<(&str, EdgeListGraph<u32>, Vec<u32>)> = Vec::new();
    for n in 3..=6 {
        cases.push(("complete", complete(n), vertices(n)));
    }
    for n in 4..=6 {
        cases.push(("wheel", wheel(n), vertices(n + 1)));
    }
    cases.push(("petersen", petersen(), vertices(10)));
    cases.push(("prism", prism(), vertices(6)));
    cases.push(("k33", k33(), vertices(6)));
    cases.push((
        "bowtie",
        EdgeListGraph::from_edges([(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)]),
        vertices(5),
    ));
    cases.push((
        "triangle-chain",
        EdgeListGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2), (4, 5), (5, 6), (6, 4)]),
        vertices(7),
    ));

    for (name, g, vs) in &cases {
        let opt = minimum_feedback_vertex_set(g, vs).unwrap().len();
        for order in [vs.clone(), vs.iter().rev().copied().collect()] {
            let fvs = check(g, &order);
            assert!(
                fvs.len() <= 2 * opt,
                "{name}: got {} with optimum {opt}",
                fvs.len()
            );
        }
    }
}

#[test]
fn complete_graphs_are_solved_exactly() {
    for n in 3..=7 {
        let out = solve(&complete(n), &vertices(n));
        assert_eq!(out.len(), n as usize - 2);
        assert!(out.candidate_size >= out.len());
    }
}
