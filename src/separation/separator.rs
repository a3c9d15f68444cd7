//! Independent-set and disconnected-pair separation.

use crate::coloring::{greedy_coloring, ColoringOrder};
use crate::graph::Graph;
use crate::lp::LinearConstraint;

/// An independent set whose relaxation weight exceeds 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolatedSet {
    /// Members, ascending.
    pub vertices: Vec<usize>,
    /// `sum(x_v for v in vertices)` at the separated point.
    pub weight: f64,
}

impl ViolatedSet {
    /// The cut `sum(x_v) <= 1`.
    pub fn to_constraint(&self) -> LinearConstraint {
        LinearConstraint::at_most_one(&self.vertices)
    }
}

/// Separation routines bound to a graph.
#[derive(Debug, Clone)]
pub struct Separator<'g> {
    graph: &'g Graph,
    /// Values at or below this are treated as zero.
    zero_tolerance: f64,
    /// Required excess of a set's weight over 1.
    violation_tolerance: f64,
    order: ColoringOrder,
}

impl<'g> Separator<'g> {
    /// Creates a separator with `1e-6` tolerances and natural coloring order.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            zero_tolerance: 1e-6,
            violation_tolerance: 1e-6,
            order: ColoringOrder::Natural,
        }
    }

    /// Sets the threshold below which a value is ignored.
    pub fn with_zero_tolerance(mut self, tolerance: f64) -> Self {
        self.zero_tolerance = tolerance;
        self
    }

    /// Sets the excess over 1 a set's weight needs to count as violated.
    pub fn with_violation_tolerance(mut self, tolerance: f64) -> Self {
        self.violation_tolerance = tolerance;
        self
    }

    /// Sets the coloring order used to build independent sets.
    pub fn with_order(mut self, order: ColoringOrder) -> Self {
        self.order = order;
        self
    }

    /// Independent sets covering the support of `values`.
    ///
    /// The support is every vertex with `x_v > zero_tolerance`; it is colored
    /// greedily and each color class is returned with its weight.
    pub fn weighted_independent_sets(&self, values: &[f64]) -> Vec<ViolatedSet> {
        let support: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|&(_, &x)| x > self.zero_tolerance)
            .map(|(v, _)| v)
            .collect();
        if support.is_empty() {
            return Vec::new();
        }
        greedy_coloring(self.graph, &support, self.order)
            .independent_sets()
            .into_iter()
            .map(|vertices| {
                let weight = vertices.iter().map(|&v| values[v]).sum();
                ViolatedSet { vertices, weight }
            })
            .collect()
    }

    /// The most violated independent-set inequality at `values`, if any.
    ///
    /// The heaviest color class is chosen (first one on ties). It is reported
    /// only when its weight exceeds `1 + violation_tolerance`.
    pub fn most_violated(&self, values: &[f64]) -> Option<ViolatedSet> {
        let mut best: Option<ViolatedSet> = None;
        for set in self.weighted_independent_sets(values) {
            if best.as_ref().map_or(true, |b| set.weight > b.weight) {
                best = Some(set);
            }
        }
        best.filter(|b| b.weight > 1.0 + self.violation_tolerance)
    }

    /// All unordered non-adjacent pairs among `selected`, as `(u, v)` with
    /// `u < v`, in lexicographic order.
    pub fn disconnected_pairs(&self, selected: &[usize]) -> Vec<(usize, usize)> {
        let mut sorted = selected.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let mut pairs = Vec::new();
        for (i, &u) in sorted.iter().enumerate() {
            for &v in &sorted[i + 1..] {
                if !self.graph.is_edge(u, v) {
                    pairs.push((u, v));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate;
    use proptest::prelude::*;

    fn all_cliques(graph: &Graph) -> Vec<Vec<usize>> {
        let n = graph.vertex_count();
        (0u32..(1 << n))
            .map(|mask| (0..n).filter(|&v| mask & (1 << v) != 0).collect::<Vec<_>>())
            .filter(|s| graph.is_clique(s))
            .collect()
    }

    fn indicator(n: usize, vertices: &[usize]) -> Vec<f64> {
        let mut x = vec![0.0; n];
        for &v in vertices {
            x[v] = 1.0;
        }
        x
    }

    #[test]
    fn test_most_violated_on_empty_graph() {
        let g = generate::empty(4);
        let sep = Separator::new(&g);
        let found = sep.most_violated(&[0.5, 0.5, 0.5, 0.0]).unwrap();
        assert_eq!(found.vertices, vec![0, 1, 2]);
        assert!((found.weight - 1.5).abs() < 1e-12);
        assert_eq!(found.to_constraint(), LinearConstraint::at_most_one(&[0, 1, 2]));
    }

    #[test]
    fn test_no_violation_when_weight_at_most_one() {
        let g = generate::empty(3);
        let sep = Separator::new(&g);
        assert!(sep.most_violated(&[0.5, 0.5, 0.0]).is_none());
        // Within tolerance of 1 is not a violation either.
        assert!(sep.most_violated(&[0.5, 0.5 + 1e-9, 0.0]).is_none());
    }

    #[test]
    fn test_no_violation_on_empty_support() {
        let g = generate::complete(3);
        let sep = Separator::new(&g);
        assert!(sep.weighted_independent_sets(&[0.0, 1e-9, 0.0]).is_empty());
        assert!(sep.most_violated(&[0.0, 0.0, 0.0]).is_none());
    }

    #[test]
    fn test_tie_breaks_to_first_class() {
        // Two triangles: classes {0,3}, {1,4}, {2,5} all weigh 1.2.
        let g = Graph::from_edges(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]).unwrap();
        let sep = Separator::new(&g);
        let found = sep.most_violated(&[0.6; 6]).unwrap();
        assert_eq!(found.vertices, vec![0, 3]);
    }

    #[test]
    fn test_heaviest_class_selected() {
        let g = Graph::from_edges(4, &[(0, 1), (2, 3), (0, 2)]).unwrap();
        let sep = Separator::new(&g);
        // Natural coloring: 0->1, 1->2, 2->2, 3->1. Classes {0,3}, {1,2}.
        let found = sep.most_violated(&[0.3, 0.9, 0.8, 0.4]).unwrap();
        assert_eq!(found.vertices, vec![1, 2]);
        assert!((found.weight - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_disconnected_pairs() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2)]).unwrap();
        let sep = Separator::new(&g);
        assert_eq!(sep.disconnected_pairs(&[2, 0, 1]), vec![(0, 2)]);
        assert_eq!(
            sep.disconnected_pairs(&[0, 1, 2, 3]),
            vec![(0, 2), (0, 3), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn test_disconnected_pairs_idempotent_on_clique() {
        let g = generate::complete(5);
        let sep = Separator::new(&g);
        assert!(sep.disconnected_pairs(&[0, 1, 2, 3, 4]).is_empty());
        assert!(sep.disconnected_pairs(&[3]).is_empty());
        assert!(sep.disconnected_pairs(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_cuts_never_exclude_a_clique(
            n in 1usize..9,
            p in 0.0f64..1.0,
            seed in any::<u64>(),
            raw in proptest::collection::vec(0.0f64..1.0, 9),
        ) {
            let g = generate::gnp(n, p, seed);
            let sep = Separator::new(&g);
            let values = &raw[..n];
            let cliques = all_cliques(&g);

            let mut cuts = Vec::new();
            if let Some(set) = sep.most_violated(values) {
                prop_assert!(set.weight > 1.0);
                cuts.push(set.to_constraint());
            }
            let selected: Vec<usize> = (0..n).filter(|&v| values[v] > 0.5).collect();
            for (u, v) in sep.disconnected_pairs(&selected) {
                prop_assert!(!g.is_edge(u, v));
                cuts.push(LinearConstraint::pair(u, v));
            }

            for clique in &cliques {
                let x = indicator(n, clique);
                for cut in &cuts {
                    prop_assert!(cut.is_satisfied(&x, 1e-9));
                }
            }
        }
    }
}
