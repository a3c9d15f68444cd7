//! Linear relaxation oracle.
//!
//! The search treats the LP solver as a black box: it sets a maximization
//! objective over per-vertex indicator variables in `[0, 1]`, adds and removes
//! linear inequalities by handle, and asks for an optimal point.
//!
//! # Key Components
//!
//! - **Constraints**: [`LinearConstraint`], [`Sense`], [`ConstraintHandle`]
//! - **Oracle**: [`LpOracle`] trait, [`LpSolution`], [`LpStatus`], [`OracleError`]
//! - **Backend**: [`SimplexOracle`], a dense two-phase simplex for small and
//!   moderate instances
//!
//! # Design
//!
//! Any backend (an external LP library, a native solver binding, or an exact
//! combinatorial procedure for tiny graphs) can sit behind [`LpOracle`]. The
//! bundled simplex exists so the crate works without native dependencies.
//!
//! # References
//!
//! - Dantzig, Orden & Wolfe (1955), "The generalized simplex method"
//! - Bland (1977), "New finite pivoting rules for the simplex method"

mod model;
mod oracle;
mod simplex;

pub use model::{ConstraintHandle, LinearConstraint, Sense};
pub use oracle::{LpOracle, LpSolution, LpStatus, OracleError};
pub use simplex::SimplexOracle;
