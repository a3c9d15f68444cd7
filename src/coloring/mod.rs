//! Greedy coloring upper bound.
//!
//! A proper coloring of a vertex subset partitions it into independent sets
//! (the color classes). Any clique inside the subset picks at most one vertex
//! per class, so the number of colors bounds the clique size from above, and
//! each class yields a valid `sum(x_v) <= 1` inequality for the relaxation.
//!
//! # Key Types
//!
//! - [`Coloring`]: vertex → color assignment with class extraction
//! - [`ColoringOrder`]: deterministic processing order
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph
//!   and its application to timetabling problems"

mod greedy;

pub use greedy::{greedy_coloring, Coloring, ColoringOrder};
