//! Sequential greedy coloring.

use crate::graph::Graph;

/// Order in which [`greedy_coloring`] visits vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColoringOrder {
    /// The order the vertices were given in.
    #[default]
    Natural,
    /// Descending degree inside the subset; ties by ascending vertex index.
    DegreeDescending,
}

/// A proper coloring of a vertex subset.
///
/// Colors are numbered from 1. Vertices outside the colored subset have no
/// color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    /// `colors[v]` is 0 for vertices outside the subset.
    colors: Vec<usize>,
    /// Colored vertices in processing order.
    order: Vec<usize>,
    num_colors: usize,
}

impl Coloring {
    /// Number of colors used; an upper bound on any clique in the subset.
    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    /// Color of `v`, if `v` was colored.
    #[cfg(test)]
    fn color_of(&self, v: usize) -> Option<usize> {
        match self.colors.get(v) {
            Some(&c) if c > 0 => Some(c),
            _ => None,
        }
    }

    /// Colored vertices in the order they were processed.
    #[cfg(test)]
    fn vertices(&self) -> &[usize] {
        &self.order
    }

    /// One independent set per color, in color order; members ascending.
    pub fn independent_sets(&self) -> Vec<Vec<usize>> {
        let mut sets = vec![Vec::new(); self.num_colors];
        for &v in &self.order {
            sets[self.colors[v] - 1].push(v);
        }
        for set in &mut sets {
            set.sort_unstable();
        }
        sets
    }
}

/// Greedily colors `vertices`, giving each the smallest color not used by an
/// already-colored neighbor inside the subset.
///
/// The result is always proper but not necessarily minimal. Duplicate entries
/// in `vertices` are colored once.
///
/// # Examples
///
/// ```
/// use u_maxclique::coloring::{greedy_coloring, ColoringOrder};
/// use u_maxclique::graph::generate;
///
/// let k4 = generate::complete(4);
/// let coloring = greedy_coloring(&k4, &[0, 1, 2, 3], ColoringOrder::Natural);
/// assert_eq!(coloring.num_colors(), 4);
/// ```
pub fn greedy_coloring(graph: &Graph, vertices: &[usize], order: ColoringOrder) -> Coloring {
    let n = graph.vertex_count();
    let within = graph.mask(vertices);

    let mut sequence: Vec<usize> = Vec::with_capacity(vertices.len());
    let mut seen = vec![false; n];
    for &v in vertices {
        if !seen[v] {
            seen[v] = true;
            sequence.push(v);
        }
    }
    if order == ColoringOrder::DegreeDescending {
        let degree: Vec<usize> = sequence
            .iter()
            .map(|&v| graph.neighbors_within(v, &within).len())
            .collect();
        let mut keyed: Vec<(usize, usize)> = degree.into_iter().zip(sequence).collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        sequence = keyed.into_iter().map(|(_, v)| v).collect();
    }

    let mut colors = vec![0usize; n];
    let mut num_colors = 0;
    // taken[c] == v marks color c as used by a neighbor of v.
    let mut taken = vec![usize::MAX; sequence.len() + 2];

    for &v in &sequence {
        for &u in graph.neighbors(v) {
            if within[u] && colors[u] > 0 {
                taken[colors[u]] = v;
            }
        }
        let color = (1..).find(|&c| taken[c] != v).unwrap_or(1);
        colors[v] = color;
        num_colors = num_colors.max(color);
    }

    Coloring {
        colors,
        order: sequence,
        num_colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate;
    use proptest::prelude::*;

    fn max_clique_brute_force(graph: &Graph, vertices: &[usize]) -> usize {
        let k = vertices.len();
        let mut best = 0;
        for mask in 0u32..(1 << k) {
            let subset: Vec<usize> = (0..k)
                .filter(|&i| mask & (1 << i) != 0)
                .map(|i| vertices[i])
                .collect();
            if subset.len() > best && graph.is_clique(&subset) {
                best = subset.len();
            }
        }
        best
    }

    #[test]
    fn test_complete_graph_needs_n_colors() {
        let g = generate::complete(5);
        let all: Vec<usize> = (0..5).collect();
        let c = greedy_coloring(&g, &all, ColoringOrder::Natural);
        assert_eq!(c.num_colors(), 5);
        for v in 0..5 {
            assert_eq!(c.color_of(v), Some(v + 1));
        }
    }

    #[test]
    fn test_empty_graph_single_color() {
        let g = generate::empty(6);
        let all: Vec<usize> = (0..6).collect();
        let c = greedy_coloring(&g, &all, ColoringOrder::Natural);
        assert_eq!(c.num_colors(), 1);
        assert_eq!(c.independent_sets(), vec![all]);
    }

    #[test]
    fn test_no_vertices() {
        let g = generate::complete(3);
        let c = greedy_coloring(&g, &[], ColoringOrder::Natural);
        assert_eq!(c.num_colors(), 0);
        assert!(c.independent_sets().is_empty());
        assert_eq!(c.color_of(0), None);
    }

    #[test]
    fn test_two_triangles() {
        let g = Graph::from_edges(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]).unwrap();
        let all: Vec<usize> = (0..6).collect();
        let c = greedy_coloring(&g, &all, ColoringOrder::Natural);
        assert_eq!(c.num_colors(), 3);
        assert_eq!(c.independent_sets(), vec![vec![0, 3], vec![1, 4], vec![2, 5]]);
    }

    #[test]
    fn test_subset_ignores_outside_neighbors() {
        // Star centered at 0; leaves only are pairwise non-adjacent.
        let g = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        let c = greedy_coloring(&g, &[1, 2, 3], ColoringOrder::Natural);
        assert_eq!(c.num_colors(), 1);
        assert_eq!(c.color_of(0), None);
    }

    #[test]
    fn test_duplicates_colored_once() {
        let g = generate::complete(3);
        let c = greedy_coloring(&g, &[2, 2, 0], ColoringOrder::Natural);
        assert_eq!(c.vertices(), &[2, 0]);
        assert_eq!(c.num_colors(), 2);
    }

    #[test]
    fn test_degree_order_deterministic() {
        // Vertex 3 has the highest degree and must be colored first.
        let g = Graph::from_edges(5, &[(3, 0), (3, 1), (3, 2), (3, 4), (0, 1)]).unwrap();
        let all: Vec<usize> = (0..5).collect();
        let a = greedy_coloring(&g, &all, ColoringOrder::DegreeDescending);
        let b = greedy_coloring(&g, &all, ColoringOrder::DegreeDescending);
        assert_eq!(a, b);
        assert_eq!(a.vertices()[0], 3);
        assert_eq!(a.color_of(3), Some(1));
        assert_eq!(a.vertices(), &[3, 0, 1, 2, 4]);
    }

    proptest! {
        #[test]
        fn prop_coloring_is_proper_and_bounds_clique(
            n in 1usize..10,
            p in 0.0f64..1.0,
            seed in any::<u64>(),
            subset_mask in any::<u16>(),
            by_degree in any::<bool>(),
        ) {
            let g = generate::gnp(n, p, seed);
            let vertices: Vec<usize> = (0..n).filter(|&v| subset_mask & (1 << v) != 0).collect();
            let order = if by_degree { ColoringOrder::DegreeDescending } else { ColoringOrder::Natural };
            let c = greedy_coloring(&g, &vertices, order);

            for set in c.independent_sets() {
                prop_assert!(!set.is_empty());
                for (i, &u) in set.iter().enumerate() {
                    for &v in &set[i + 1..] {
                        prop_assert!(!g.is_edge(u, v));
                    }
                }
            }
            prop_assert!(c.num_colors() >= max_clique_brute_force(&g, &vertices));
            prop_assert!(c.num_colors() <= vertices.len());
        }
    }
}
