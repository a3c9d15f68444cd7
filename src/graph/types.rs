//! Adjacency structure for the search core.

use thiserror::Error;

/// Failure while building a [`Graph`] from an edge list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint is not in `0..vertex_count`.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// An edge joins a vertex to itself.
    #[error("self-loop on vertex {0}")]
    SelfLoop(usize),

    /// The vertex count exceeds [`Graph::MAX_VERTICES`].
    #[error("{vertex_count} vertices exceeds the dense-matrix limit of {max}")]
    TooLarge { vertex_count: usize, max: usize },
}

/// An undirected simple graph on vertices `0..n`.
///
/// Stores both a dense adjacency matrix (O(1) edge tests) and sorted
/// neighbor lists (O(deg) neighborhood scans). The graph is immutable once
/// built; the relation is symmetric and irreflexive.
///
/// # Examples
///
/// ```
/// use u_maxclique::graph::Graph;
///
/// let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// assert!(g.is_edge(1, 0));
/// assert!(!g.is_edge(0, 2));
/// assert_eq!(g.neighbors(1), &[0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    matrix: Vec<bool>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Largest vertex count [`from_edges`](Self::from_edges) accepts; the
    /// adjacency matrix holds `n * n` entries.
    pub const MAX_VERTICES: usize = 1 << 15;

    /// Creates a graph with `n` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Allocates `n * n` matrix entries; panics if that overflows.
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            matrix: vec![false; n * n],
            adjacency: vec![Vec::new(); n],
            edge_count: 0,
        }
    }

    /// Builds a graph from an undirected edge list.
    ///
    /// Duplicate edges (in either orientation) are collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if `n` exceeds [`MAX_VERTICES`](Self::MAX_VERTICES),
    /// an endpoint is out of range, or an edge is a self-loop.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        Self::check_size(n)?;
        let mut graph = Self::empty(n);
        for &(u, v) in edges {
            graph.insert_edge(u, v)?;
        }
        for list in &mut graph.adjacency {
            list.sort_unstable();
        }
        Ok(graph)
    }

    pub(crate) fn check_size(n: usize) -> Result<(), GraphError> {
        if n > Self::MAX_VERTICES {
            return Err(GraphError::TooLarge {
                vertex_count: n,
                max: Self::MAX_VERTICES,
            });
        }
        Ok(())
    }

    fn insert_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        for w in [u, v] {
            if w >= self.n {
                return Err(GraphError::VertexOutOfRange {
                    vertex: w,
                    vertex_count: self.n,
                });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.matrix[u * self.n + v] {
            return Ok(());
        }
        self.matrix[u * self.n + v] = true;
        self.matrix[v * self.n + u] = true;
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edge_count += 1;
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `u` and `v` are adjacent.
    #[inline]
    pub fn is_edge(&self, u: usize, v: usize) -> bool {
        self.matrix[u * self.n + v]
    }

    /// All neighbors of `v`, ascending.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Neighbors of `v` restricted to a vertex subset.
    ///
    /// `within` is a membership mask indexed by vertex. Output is ascending.
    pub fn neighbors_within(&self, v: usize, within: &[bool]) -> Vec<usize> {
        self.adjacency[v]
            .iter()
            .copied()
            .filter(|&u| within[u])
            .collect()
    }

    /// Degree of `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Whether `vertices` are pairwise adjacent (distinct entries assumed).
    pub fn is_clique(&self, vertices: &[usize]) -> bool {
        vertices.iter().enumerate().all(|(i, &u)| {
            vertices[i + 1..]
                .iter()
                .all(|&v| u != v && self.is_edge(u, v))
        })
    }

    /// Builds a membership mask for `vertices`.
    pub fn mask(&self, vertices: &[usize]) -> Vec<bool> {
        let mut mask = vec![false; self.n];
        for &v in vertices {
            mask[v] = true;
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path4() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let g = path4();
        for u in 0..4 {
            for v in 0..4 {
                assert_eq!(g.is_edge(u, v), g.is_edge(v, u));
            }
            assert!(!g.is_edge(u, u));
        }
    }

    #[test]
    fn test_neighbors_sorted() {
        let g = Graph::from_edges(4, &[(2, 0), (0, 3), (1, 0)]).unwrap();
        assert_eq!(g.neighbors(0), &[1, 2, 3]);
        assert_eq!(g.degree(0), 3);
        assert_eq!(g.degree(2), 1);
    }

    #[test]
    fn test_neighbors_within_subset() {
        let g = path4();
        let mask = g.mask(&[0, 2]);
        assert_eq!(g.neighbors_within(1, &mask), vec![0, 2]);
        assert_eq!(g.neighbors_within(3, &mask), vec![2]);
        let none = g.mask(&[]);
        assert!(g.neighbors_within(1, &none).is_empty());
    }

    #[test]
    fn test_duplicate_edges_collapsed() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 0), (0, 1)]).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors(0), &[1]);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = Graph::from_edges(3, &[(0, 3)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_self_loop_rejected() {
        assert_eq!(
            Graph::from_edges(2, &[(1, 1)]).unwrap_err(),
            GraphError::SelfLoop(1)
        );
    }

    #[test]
    fn test_too_many_vertices_rejected() {
        assert_eq!(
            Graph::from_edges(usize::MAX, &[]).unwrap_err(),
            GraphError::TooLarge {
                vertex_count: usize::MAX,
                max: Graph::MAX_VERTICES
            }
        );
        assert!(Graph::from_edges(Graph::MAX_VERTICES + 1, &[(0, 1)]).is_err());
    }

    #[test]
    fn test_is_clique() {
        let g = Graph::from_edges(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]).unwrap();
        assert!(g.is_clique(&[0, 1, 2]));
        assert!(g.is_clique(&[3]));
        assert!(g.is_clique(&[]));
        assert!(!g.is_clique(&[0, 1, 3]));
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::empty(0);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }
}
