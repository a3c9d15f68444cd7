//! LP oracle interface.

use thiserror::Error;

use super::model::{ConstraintHandle, LinearConstraint};

/// Outcome of a relaxation solve that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpStatus {
    /// An optimal point was found.
    Optimal,
    /// The constraint set admits no point in `[0, 1]^n`.
    Infeasible,
}

/// Result of [`LpOracle::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    /// Whether `objective_value` and `values` describe an optimum.
    pub status: LpStatus,
    /// Optimal objective value (0 when infeasible).
    pub objective_value: f64,
    /// One value per variable (empty when infeasible).
    pub values: Vec<f64>,
}

impl LpSolution {
    /// An infeasible result.
    pub fn infeasible() -> Self {
        Self {
            status: LpStatus::Infeasible,
            objective_value: 0.0,
            values: Vec::new(),
        }
    }

    /// Whether an optimal point is available.
    pub fn is_optimal(&self) -> bool {
        self.status == LpStatus::Optimal
    }
}

/// Internal solver failure. Distinct from infeasibility, and fatal to a search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OracleError {
    /// The pivot budget ran out before optimality.
    #[error("iteration limit of {0} reached")]
    IterationLimit(usize),

    /// The objective grows without bound.
    #[error("relaxation is unbounded")]
    Unbounded,

    /// Non-finite data or a malformed result.
    #[error("numerical failure: {0}")]
    Numerical(String),

    /// A constraint term names a variable past the objective length.
    #[error("constraint references variable {index} but only {count} variables exist")]
    UnknownVariable { index: usize, count: usize },
}

/// A linear relaxation solver over variables in `[0, 1]`.
///
/// Implementors keep the current constraint set; the search adds constraints
/// before descending and removes them on the way back, strictly in stack
/// order.
pub trait LpOracle {
    /// Sets the maximization objective. The slice length fixes the number of
    /// variables.
    fn set_objective(&mut self, coefficients: &[f64]);

    /// Adds a constraint and returns a handle for later removal.
    fn add_constraint(&mut self, constraint: LinearConstraint) -> ConstraintHandle;

    /// Removes a constraint. Returns `false` if the handle is unknown.
    fn remove_constraint(&mut self, handle: ConstraintHandle) -> bool;

    /// Number of constraints currently held.
    fn constraint_count(&self) -> usize;

    /// Solves the relaxation.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`] on solver failure. Infeasibility is reported
    /// through [`LpStatus::Infeasible`], not as an error.
    fn solve(&mut self) -> Result<LpSolution, OracleError>;
}
