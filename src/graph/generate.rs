//! Deterministic graph generators for tests and benchmarks.

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use super::types::Graph;

/// The complete graph K_n.
pub fn complete(n: usize) -> Graph {
    let edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
        .collect();
    Graph::from_edges(n, &edges).unwrap_or_else(|_| Graph::empty(n))
}

/// The edgeless graph on `n` vertices.
pub fn empty(n: usize) -> Graph {
    Graph::empty(n)
}

/// Erdős–Rényi G(n, p): each pair is an edge independently with probability `p`.
///
/// `p` is clamped to `[0, 1]`. The same seed always yields the same graph.
pub fn gnp(n: usize, p: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(p) {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges(n, &edges).unwrap_or_else(|_| Graph::empty(n))
}

/// G(n, p) with a clique on `k` randomly chosen vertices added on top.
///
/// Returns the graph and the planted vertices (ascending). `k` is capped at `n`.
pub fn planted_clique(n: usize, p: f64, k: usize, seed: u64) -> (Graph, Vec<usize>) {
    let base = gnp(n, p, seed);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(0x9E37_79B9_7F4A_7C15));
    let mut planted = sample(&mut rng, n, k.min(n)).into_vec();
    planted.sort_unstable();

    let mut edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|u| base.neighbors(u).iter().filter(move |&&v| v > u).map(move |&v| (u, v)))
        .collect();
    for (i, &u) in planted.iter().enumerate() {
        for &v in &planted[i + 1..] {
            edges.push((u, v));
        }
    }
    let graph = Graph::from_edges(n, &edges).unwrap_or(base);
    (graph, planted)
}
