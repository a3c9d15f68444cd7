//! Exact maximum clique by LP-based branch-and-cut.
//!
//! Each vertex gets a relaxed indicator `x_v` in `[0, 1]`; the objective
//! maximizes `sum(x_v)`. Independent sets give valid `sum(x_v) <= 1` cuts,
//! greedy coloring supplies both the global upper bound and the separation
//! heuristic, and integral points are repaired with pair cuts until they are
//! cliques. The relaxation itself is delegated to an [`LpOracle`](crate::lp::LpOracle).
//!
//! # References
//!
//! - Balas, E. & Yu, C. S. (1986). "Finding a maximum clique in an arbitrary
//!   graph", *SIAM Journal on Computing* 15(4), 1054-1068.
//! - Nemhauser, G. L. & Sigismondi, G. (1992). "A strong cutting plane/branch-and-bound
//!   algorithm for node packing", *JORS* 43(5), 443-457.

mod config;
mod runner;
mod scope;
mod types;
mod warm_start;

pub use config::BncConfig;
pub use runner::BncRunner;
pub use types::{BncResult, SearchError, SearchStats, SearchStatus};
