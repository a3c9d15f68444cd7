//! Exact maximum clique search by branch-and-cut.
//!
//! Provides:
//!
//! - **Graph**: adjacency-matrix graphs, a DIMACS reader, and seeded random
//!   generators.
//! - **Coloring**: greedy coloring, used both as a clique-size upper bound
//!   and to extract independent sets.
//! - **LP**: the [`LpOracle`](lp::LpOracle) interface for the continuous
//!   relaxation plus a bundled dense simplex backend.
//! - **Separation**: independent-set cuts for fractional points and
//!   disconnected-pair cuts for integral non-cliques.
//! - **Branch-and-cut**: the search driver with a wall-clock deadline,
//!   cooperative cancellation and scoped constraint ownership.
//!
//! # Example
//!
//! ```
//! use u_maxclique::bnc::{BncConfig, BncRunner};
//! use u_maxclique::graph::Graph;
//!
//! let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
//! let result = BncRunner::run_with_simplex(&graph, &BncConfig::default()).unwrap();
//! assert_eq!(result.clique, vec![0, 1, 2]);
//! assert!(result.is_optimal());
//! ```

pub mod bnc;
pub mod coloring;
pub mod graph;
pub mod lp;
pub mod separation;
