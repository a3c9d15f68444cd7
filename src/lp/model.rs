//! Linear inequalities over indicator variables.

/// Direction of a linear inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// `sum(a_j * x_j) <= rhs`
    Le,
    /// `sum(a_j * x_j) >= rhs`
    Ge,
}

/// Opaque identifier returned by [`LpOracle::add_constraint`](super::LpOracle::add_constraint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintHandle(pub(crate) u64);

/// A sparse linear inequality `sum(coef * x_var) (<= | >=) rhs`.
///
/// # Examples
///
/// ```
/// use u_maxclique::lp::{LinearConstraint, Sense};
///
/// let c = LinearConstraint::at_most_one(&[0, 3, 5]);
/// assert_eq!(c.sense, Sense::Le);
/// assert!(c.is_satisfied(&[1.0, 1.0, 1.0, 0.0, 0.0, 0.0], 1e-9));
/// assert!(!c.is_satisfied(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0], 1e-9));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    /// `(variable index, coefficient)` pairs.
    pub terms: Vec<(usize, f64)>,
    /// Direction of the inequality.
    pub sense: Sense,
    /// Right-hand side.
    pub rhs: f64,
}

impl LinearConstraint {
    /// `sum(x_v for v in vertices) <= 1`: at most one member of an independent set.
    pub fn at_most_one(vertices: &[usize]) -> Self {
        Self {
            terms: vertices.iter().map(|&v| (v, 1.0)).collect(),
            sense: Sense::Le,
            rhs: 1.0,
        }
    }

    /// `x_u + x_v <= 1`: cuts a non-adjacent pair.
    pub fn pair(u: usize, v: usize) -> Self {
        Self::at_most_one(&[u, v])
    }

    /// `x_v >= 1`: branch fixing `v` into the clique.
    pub fn fix_one(v: usize) -> Self {
        Self {
            terms: vec![(v, 1.0)],
            sense: Sense::Ge,
            rhs: 1.0,
        }
    }

    /// `x_v <= 0`: branch fixing `v` out of the clique.
    pub fn fix_zero(v: usize) -> Self {
        Self {
            terms: vec![(v, 1.0)],
            sense: Sense::Le,
            rhs: 0.0,
        }
    }

    /// Left-hand side evaluated at `values`.
    pub fn activity(&self, values: &[f64]) -> f64 {
        self.terms.iter().map(|&(j, a)| a * values[j]).sum()
    }

    /// Whether `values` satisfies the inequality within `tolerance`.
    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs = self.activity(values);
        match self.sense {
            Sense::Le => lhs <= self.rhs + tolerance,
            Sense::Ge => lhs >= self.rhs - tolerance,
        }
    }
}
