//! Dense two-phase tableau simplex.
//!
//! Solves `max c·x` subject to the held constraints and `0 <= x <= 1`.
//! Every solve rebuilds the tableau from scratch; there is no warm start.
//!
//! # Algorithm
//!
//! 1. Normalize every row to `a·x <= b`; add `x_j <= 1` bound rows
//! 2. Rows with `b >= 0` start with their slack basic; rows with `b < 0` are
//!    negated and get an artificial variable
//! 3. Phase 1 maximizes `-sum(artificials)`; a negative optimum means infeasible
//! 4. Phase 2 maximizes the real objective with artificials barred from entering
//!
//! Bland's smallest-index rule is used for both entering and leaving
//! variables, so degenerate pivots cannot cycle.

use super::model::{ConstraintHandle, LinearConstraint, Sense};
use super::oracle::{LpOracle, LpSolution, LpStatus, OracleError};

const PIVOT_EPS: f64 = 1e-9;
const FEASIBILITY_EPS: f64 = 1e-7;

/// Bundled [`LpOracle`] backend.
///
/// # Examples
///
/// ```
/// use u_maxclique::lp::{LinearConstraint, LpOracle, SimplexOracle};
///
/// let mut lp = SimplexOracle::new();
/// lp.set_objective(&[1.0, 1.0, 1.0]);
/// lp.add_constraint(LinearConstraint::pair(0, 1));
/// let solution = lp.solve().unwrap();
/// assert!((solution.objective_value - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct SimplexOracle {
    objective: Vec<f64>,
    constraints: Vec<(ConstraintHandle, LinearConstraint)>,
    next_handle: u64,
    max_iterations: usize,
}

impl SimplexOracle {
    /// Creates an oracle with no variables and a 100 000 pivot budget.
    pub fn new() -> Self {
        Self {
            objective: Vec::new(),
            constraints: Vec::new(),
            next_handle: 0,
            max_iterations: 100_000,
        }
    }

    /// Sets the pivot budget per solve (both phases together).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Number of variables fixed by the last [`set_objective`](LpOracle::set_objective).
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Dense `a·x <= b` rows, including the unit upper bounds.
    fn normalized_rows(&self) -> Result<Vec<(Vec<f64>, f64)>, OracleError> {
        let n = self.num_vars();
        let mut rows = Vec::with_capacity(self.constraints.len() + n);
        for (_, constraint) in &self.constraints {
            let sign = match constraint.sense {
                Sense::Le => 1.0,
                Sense::Ge => -1.0,
            };
            let mut coefs = vec![0.0; n];
            for &(j, a) in &constraint.terms {
                if j >= n {
                    return Err(OracleError::UnknownVariable { index: j, count: n });
                }
                coefs[j] += sign * a;
            }
            let rhs = sign * constraint.rhs;
            if !rhs.is_finite() || coefs.iter().any(|a| !a.is_finite()) {
                return Err(OracleError::Numerical("non-finite constraint data".into()));
            }
            rows.push((coefs, rhs));
        }
        for j in 0..n {
            let mut coefs = vec![0.0; n];
            coefs[j] = 1.0;
            rows.push((coefs, 1.0));
        }
        Ok(rows)
    }
}

impl Default for SimplexOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl LpOracle for SimplexOracle {
    fn set_objective(&mut self, coefficients: &[f64]) {
        self.objective = coefficients.to_vec();
    }

    fn add_constraint(&mut self, constraint: LinearConstraint) -> ConstraintHandle {
        let handle = ConstraintHandle(self.next_handle);
        self.next_handle += 1;
        self.constraints.push((handle, constraint));
        handle
    }

    fn remove_constraint(&mut self, handle: ConstraintHandle) -> bool {
        // Removals arrive in stack order, so search from the back.
        match self.constraints.iter().rposition(|(h, _)| *h == handle) {
            Some(pos) => {
                self.constraints.remove(pos);
                true
            }
            None => false,
        }
    }

    fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    fn solve(&mut self) -> Result<LpSolution, OracleError> {
        if self.objective.iter().any(|c| !c.is_finite()) {
            return Err(OracleError::Numerical("non-finite objective".into()));
        }
        let n = self.num_vars();
        let rows = self.normalized_rows()?;
        let mut tableau = Tableau::new(n, rows);
        let mut iterations = 0;

        if tableau.artificials > 0 {
            let mut phase1 = vec![0.0; tableau.width];
            for c in &mut phase1[tableau.first_artificial()..] {
                *c = -1.0;
            }
            tableau.price(&phase1);
            tableau.optimize(tableau.width, self.max_iterations, &mut iterations)?;
            if tableau.objective() < -FEASIBILITY_EPS {
                return Ok(LpSolution::infeasible());
            }
            tableau.evict_artificials();
        }

        let mut phase2 = vec![0.0; tableau.width];
        phase2[..n].copy_from_slice(&self.objective);
        tableau.price(&phase2);
        tableau.optimize(tableau.first_artificial(), self.max_iterations, &mut iterations)?;

        let values = tableau.primal(n);
        let objective_value = values
            .iter()
            .zip(&self.objective)
            .map(|(x, c)| x * c)
            .sum();
        Ok(LpSolution {
            status: LpStatus::Optimal,
            objective_value,
            values,
        })
    }
}

/// Columns: structural `0..n`, slacks `n..n+m`, artificials, then the rhs.
struct Tableau {
    rows: Vec<Vec<f64>>,
    /// Reduced costs; the rhs entry holds `-z`.
    cost: Vec<f64>,
    basis: Vec<usize>,
    n: usize,
    m: usize,
    artificials: usize,
    /// Column count excluding the rhs.
    width: usize,
}

impl Tableau {
    fn new(n: usize, rows: Vec<(Vec<f64>, f64)>) -> Self {
        let m = rows.len();
        let artificials = rows.iter().filter(|(_, b)| *b < 0.0).count();
        let width = n + m + artificials;
        let mut dense = Vec::with_capacity(m);
        let mut basis = Vec::with_capacity(m);
        let mut next_artificial = n + m;

        for (i, (coefs, b)) in rows.into_iter().enumerate() {
            let mut row = vec![0.0; width + 1];
            if b >= 0.0 {
                row[..n].copy_from_slice(&coefs);
                row[n + i] = 1.0;
                row[width] = b;
                basis.push(n + i);
            } else {
                for (dst, a) in row[..n].iter_mut().zip(&coefs) {
                    *dst = -a;
                }
                row[n + i] = -1.0;
                row[next_artificial] = 1.0;
                row[width] = -b;
                basis.push(next_artificial);
                next_artificial += 1;
            }
            dense.push(row);
        }

        Self {
            rows: dense,
            cost: vec![0.0; width + 1],
            basis,
            n,
            m,
            artificials,
            width,
        }
    }

    fn first_artificial(&self) -> usize {
        self.n + self.m
    }

    /// Current objective value `z`.
    fn objective(&self) -> f64 {
        -self.cost[self.width]
    }

    /// Rebuilds the reduced-cost row for objective `c` under the current basis.
    fn price(&mut self, c: &[f64]) {
        let mut cost = c.to_vec();
        cost.push(0.0);
        for (row, &b) in self.rows.iter().zip(&self.basis) {
            let cb = c[b];
            if cb != 0.0 {
                for (dst, a) in cost.iter_mut().zip(row) {
                    *dst -= cb * a;
                }
            }
        }
        self.cost = cost;
    }

    fn pivot(&mut self, r: usize, e: usize) {
        let p = self.rows[r][e];
        for a in &mut self.rows[r] {
            *a /= p;
        }
        let pivot_row = self.rows[r].clone();
        for (i, row) in self.rows.iter_mut().enumerate() {
            let f = row[e];
            if i == r || f == 0.0 {
                continue;
            }
            for (dst, a) in row.iter_mut().zip(&pivot_row) {
                *dst -= f * a;
            }
            if row[self.width] < 0.0 && row[self.width] > -PIVOT_EPS {
                row[self.width] = 0.0;
            }
        }
        let f = self.cost[e];
        if f != 0.0 {
            for (dst, a) in self.cost.iter_mut().zip(&pivot_row) {
                *dst -= f * a;
            }
        }
        self.basis[r] = e;
    }

    /// Pivots to optimality; only columns `< allowed` may enter.
    fn optimize(
        &mut self,
        allowed: usize,
        max_iterations: usize,
        iterations: &mut usize,
    ) -> Result<(), OracleError> {
        let rhs = self.width;
        loop {
            let Some(e) = (0..allowed).find(|&j| self.cost[j] > PIVOT_EPS) else {
                return Ok(());
            };

            let mut leave: Option<(usize, f64)> = None;
            for (i, row) in self.rows.iter().enumerate() {
                let a = row[e];
                if a <= PIVOT_EPS {
                    continue;
                }
                let ratio = row[rhs] / a;
                let better = match leave {
                    None => true,
                    Some((li, lr)) => {
                        ratio < lr - PIVOT_EPS
                            || (ratio <= lr + PIVOT_EPS && self.basis[i] < self.basis[li])
                    }
                };
                if better {
                    leave = Some((i, ratio));
                }
            }
            let Some((r, _)) = leave else {
                return Err(OracleError::Unbounded);
            };

            *iterations += 1;
            if *iterations > max_iterations {
                return Err(OracleError::IterationLimit(max_iterations));
            }
            self.pivot(r, e);
        }
    }

    /// Pivots zero-valued artificials out of the basis where a real column
    /// can replace them. Rows with no such column are redundant and keep
    /// their artificial at zero.
    fn evict_artificials(&mut self) {
        let first = self.first_artificial();
        for r in 0..self.rows.len() {
            if self.basis[r] < first {
                continue;
            }
            if let Some(j) = (0..first).find(|&j| self.rows[r][j].abs() > PIVOT_EPS) {
                self.pivot(r, j);
            }
        }
    }

    fn primal(&self, n: usize) -> Vec<f64> {
        let mut values = vec![0.0; n];
        for (row, &b) in self.rows.iter().zip(&self.basis) {
            if b < n {
                values[b] = row[self.width].clamp(0.0, 1.0);
            }
        }
        values
    }
}
