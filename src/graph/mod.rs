//! Undirected simple graphs.
//!
//! The search core consumes a finished, immutable [`Graph`]. This module also
//! hosts the collaborators that produce one:
//!
//! - [`dimacs`]: reader for the DIMACS `p`/`e`/`c` benchmark format
//! - [`generate`]: deterministic generators (complete, empty, G(n, p), planted clique)
//!
//! # Key Types
//!
//! - [`Graph`]: adjacency matrix plus sorted neighbor lists
//! - [`GraphError`]: construction failures (bad vertex index, self-loop)

pub mod dimacs;
pub mod generate;
mod types;

pub use types::{Graph, GraphError};
