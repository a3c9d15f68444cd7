//! Greedy clique construction for seeding the incumbent.

use std::cmp::Reverse;

use crate::graph::Graph;

/// Largest clique found by greedy extension from every seed vertex.
///
/// From each seed, candidates (common neighbors of the clique so far) are
/// added in descending degree order, ties by index. Deterministic.
pub(crate) fn greedy_clique(graph: &Graph) -> Vec<usize> {
    let n = graph.vertex_count();
    let mut by_degree: Vec<usize> = (0..n).collect();
    by_degree.sort_by_key(|&v| (Reverse(graph.degree(v)), v));

    let mut best: Vec<usize> = Vec::new();
    for &seed in &by_degree {
        // A clique through `seed` has at most deg(seed) + 1 vertices.
        if graph.degree(seed) < best.len() {
            continue;
        }
        let mut clique = vec![seed];
        for &v in &by_degree {
            if v != seed && clique.iter().all(|&u| graph.is_edge(u, v)) {
                clique.push(v);
            }
        }
        if clique.len() > best.len() {
            best = clique;
        }
    }
    best.sort_unstable();
    best
}
