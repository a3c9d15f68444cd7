//! Branch-and-cut execution engine.
//!
//! # Algorithm
//!
//! 1. Greedy-color the whole graph: the color count is the global upper
//!    bound and each color class becomes a root `sum(x_v) <= 1` row
//! 2. At each node, loop:
//!    a. Check the deadline, then solve the relaxation (infeasible → prune)
//!    b. At the root, tighten the global bound with `floor(objective)`
//!    c. Prune if `floor(objective)` cannot beat the incumbent
//!    d. Fractional point: add the most violated independent-set cut and
//!       re-solve, until none is found, the node's cut budget is spent, or
//!       the objective stalls; then branch on the largest fractional value
//!       (`x_i >= 1` first, then `x_i <= 0`)
//!    e. Integral point: add a pair cut for every non-adjacent selected pair
//!       and re-solve; if there are none, the point is a clique
//! 3. Stop when the tree is exhausted, the incumbent reaches the global
//!    bound, or the deadline passes
//!
//! Constraints added at a node live in a [`ConstraintScope`] and are removed
//! when the node returns, so sibling subtrees never see each other's rows.
//!
//! # Reference
//!
//! Nemhauser & Trotter (1975), "Vertex packings: Structural properties and algorithms".
//! Balas & Yu (1986), "Finding a maximum clique in an arbitrary graph".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::config::BncConfig;
use super::scope::ConstraintScope;
use super::types::{BncResult, Incumbent, SearchError, SearchStats, SearchStatus};
use super::warm_start::greedy_clique;
use crate::coloring::greedy_coloring;
use crate::graph::Graph;
use crate::lp::{LinearConstraint, LpOracle, LpSolution, OracleError, SimplexOracle};
use crate::separation::Separator;

/// Branch-and-cut runner.
pub struct BncRunner;

impl BncRunner {
    /// Finds a maximum clique of `graph`, driving `oracle` for relaxations.
    ///
    /// The oracle's objective is overwritten; every constraint the search
    /// adds is removed again before this returns.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidConfig`] if `config` fails validation,
    /// [`SearchError::Oracle`] if the oracle fails. A timeout is not an
    /// error: it yields [`SearchStatus::TimedOut`] with the best clique so far.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_maxclique::bnc::{BncConfig, BncRunner};
    /// use u_maxclique::graph::generate;
    /// use u_maxclique::lp::SimplexOracle;
    ///
    /// let graph = generate::complete(5);
    /// let mut oracle = SimplexOracle::new();
    /// let result = BncRunner::run(&graph, &mut oracle, &BncConfig::default()).unwrap();
    /// assert_eq!(result.one_indexed(), vec![1, 2, 3, 4, 5]);
    /// assert!(result.is_optimal());
    /// ```
    pub fn run<O: LpOracle>(
        graph: &Graph,
        oracle: &mut O,
        config: &BncConfig,
    ) -> Result<BncResult, SearchError> {
        Self::run_with_cancel(graph, oracle, config, None)
    }

    /// Runs with the bundled [`SimplexOracle`].
    pub fn run_with_simplex(graph: &Graph, config: &BncConfig) -> Result<BncResult, SearchError> {
        let mut oracle = SimplexOracle::new();
        Self::run(graph, &mut oracle, config)
    }

    /// Runs with an optional cancellation flag.
    ///
    /// A raised flag is treated exactly like an expired deadline: it is
    /// observed before the next relaxation solve and the search returns
    /// [`SearchStatus::TimedOut`] with the best clique so far.
    pub fn run_with_cancel<O: LpOracle>(
        graph: &Graph,
        oracle: &mut O,
        config: &BncConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BncResult, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        let start = Instant::now();
        let n = graph.vertex_count();

        let all: Vec<usize> = (0..n).collect();
        let coloring = greedy_coloring(graph, &all, config.coloring_order);
        log::info!(
            "max clique search: {} vertices, {} edges, coloring bound {}",
            n,
            graph.edge_count(),
            coloring.num_colors()
        );

        oracle.set_objective(&vec![1.0; n]);
        let separator = Separator::new(graph)
            .with_zero_tolerance(config.integrality_tolerance)
            .with_violation_tolerance(config.violation_tolerance)
            .with_order(config.coloring_order);

        let mut ctx = SearchContext {
            graph,
            oracle,
            separator,
            config,
            deadline: Deadline {
                start,
                limit: config.time_limit_ms.map(Duration::from_millis),
                cancel,
            },
            incumbent: Incumbent::default(),
            upper_bound: coloring.num_colors(),
            cut_budget: config.cut_budget(n),
            stats: SearchStats::default(),
        };

        if config.greedy_warm_start {
            let clique = greedy_clique(graph);
            let size = clique.len();
            if ctx.incumbent.offer(clique) {
                ctx.stats.incumbent_updates += 1;
                log::debug!("warm start clique of size {size}");
            }
        }

        let outcome = if ctx.incumbent.size() >= ctx.upper_bound {
            NodeOutcome::Optimal
        } else {
            let mut root = ConstraintScope::new(&mut ctx);
            for set in coloring.independent_sets() {
                root.push(LinearConstraint::at_most_one(&set));
            }
            explore(&mut *root, 0)?
        };

        let status = match outcome {
            NodeOutcome::TimedOut => SearchStatus::TimedOut,
            NodeOutcome::Optimal | NodeOutcome::Exhausted => SearchStatus::Optimal,
        };
        let elapsed = start.elapsed();
        let SearchContext {
            incumbent,
            upper_bound,
            stats,
            ..
        } = ctx;
        let (clique, incumbent_history) = incumbent.into_parts();
        let size = clique.len();
        let upper_bound = match status {
            SearchStatus::Optimal => size,
            SearchStatus::TimedOut => upper_bound,
        };

        match status {
            SearchStatus::Optimal => log::info!(
                "optimal clique of size {size} in {:.3}s ({} nodes, {} relaxations)",
                elapsed.as_secs_f64(),
                stats.nodes,
                stats.relaxations
            ),
            SearchStatus::TimedOut => log::info!(
                "time limit reached after {:.3}s: best clique {size}, bound {upper_bound}",
                elapsed.as_secs_f64()
            ),
        }

        Ok(BncResult {
            clique,
            size,
            status,
            upper_bound,
            elapsed,
            stats,
            incumbent_history,
        })
    }
}

/// How a subtree ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeOutcome {
    /// Subtree fully explored or pruned.
    Exhausted,
    /// The incumbent reached the global upper bound; stop everything.
    Optimal,
    /// The deadline passed; unwind without further oracle calls.
    TimedOut,
}

/// Wall-clock budget plus an optional external cancel flag.
struct Deadline {
    start: Instant,
    limit: Option<Duration>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Deadline {
    fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
            || self
                .cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Shape of a relaxation point.
enum Point {
    /// Branch on this variable.
    Fractional(usize),
    /// Vertices at 1.
    Integral(Vec<usize>),
}

/// Per-node cutting-loop termination state.
struct CuttingLoop {
    budget: usize,
    added: usize,
    stall_rounds: usize,
    stall_tolerance: f64,
    stalled: usize,
    last_objective: Option<f64>,
}

impl CuttingLoop {
    fn new(budget: usize, config: &BncConfig) -> Self {
        Self {
            budget,
            added: 0,
            stall_rounds: config.stall_rounds,
            stall_tolerance: config.stall_tolerance,
            stalled: 0,
            last_objective: None,
        }
    }

    /// Whether another cutting round is worthwhile at `objective`.
    fn proceed(&mut self, objective: f64) -> bool {
        if self.added >= self.budget {
            return false;
        }
        if let Some(previous) = self.last_objective {
            if previous - objective > self.stall_tolerance {
                self.stalled = 0;
            } else {
                self.stalled += 1;
            }
        }
        self.last_objective = Some(objective);
        self.stalled < self.stall_rounds
    }

    fn record_cut(&mut self) {
        self.added += 1;
    }
}

/// State shared by every frame of one search.
pub(crate) struct SearchContext<'g, O: LpOracle> {
    graph: &'g Graph,
    pub(crate) oracle: &'g mut O,
    separator: Separator<'g>,
    config: &'g BncConfig,
    deadline: Deadline,
    incumbent: Incumbent,
    upper_bound: usize,
    cut_budget: usize,
    stats: SearchStats,
}

impl<O: LpOracle> SearchContext<'_, O> {
    /// Solves the current relaxation, or returns `None` once the deadline
    /// has passed.
    fn solve_relaxation(&mut self) -> Result<Option<LpSolution>, SearchError> {
        if self.deadline.expired() {
            return Ok(None);
        }
        self.stats.relaxations += 1;
        let solution = self.oracle.solve()?;
        if !solution.is_optimal() {
            return Ok(Some(solution));
        }
        let n = self.graph.vertex_count();
        if solution.values.len() != n {
            return Err(OracleError::Numerical(format!(
                "expected {n} values, got {}",
                solution.values.len()
            ))
            .into());
        }
        if !solution.objective_value.is_finite() || solution.values.iter().any(|x| !x.is_finite()) {
            return Err(OracleError::Numerical("non-finite relaxation point".into()).into());
        }
        Ok(Some(solution))
    }

    /// Largest integer not exceeding `objective`, allowing for round-off.
    fn integral_bound(&self, objective: f64) -> usize {
        let slack = self.config.integrality_tolerance * objective.abs().max(1.0);
        (objective + slack).floor().max(0.0) as usize
    }

    fn near(&self, value: f64, target: f64) -> bool {
        let scale = value.abs().max(target.abs()).max(1.0);
        (value - target).abs() <= self.config.integrality_tolerance * scale
    }

    /// Picks the branching variable (largest fractional value, first on
    /// ties), or collects the selected vertices when the point is integral.
    fn classify(&self, values: &[f64]) -> Point {
        let mut branch: Option<(usize, f64)> = None;
        let mut selected = Vec::new();
        for (v, &x) in values.iter().enumerate() {
            if self.near(x, 1.0) {
                selected.push(v);
            } else if self.near(x, 0.0) {
                continue;
            } else if branch.map_or(true, |(_, best)| x > best) {
                branch = Some((v, x));
            }
        }
        match branch {
            Some((v, _)) => Point::Fractional(v),
            None => Point::Integral(selected),
        }
    }

    /// Offers a verified clique to the incumbent.
    fn accept(&mut self, clique: Vec<usize>) -> NodeOutcome {
        let size = clique.len();
        if self.incumbent.offer(clique) {
            self.stats.incumbent_updates += 1;
            log::debug!(
                "new incumbent of size {size} (bound {}) after {} nodes",
                self.upper_bound,
                self.stats.nodes
            );
        }
        if self.incumbent.size() >= self.upper_bound {
            NodeOutcome::Optimal
        } else {
            NodeOutcome::Exhausted
        }
    }
}

/// Explores one node. Cuts added here are dropped when it returns.
fn explore<O: LpOracle>(
    ctx: &mut SearchContext<'_, O>,
    depth: usize,
) -> Result<NodeOutcome, SearchError> {
    ctx.stats.nodes += 1;
    ctx.stats.max_depth = ctx.stats.max_depth.max(depth);
    let budget = ctx.cut_budget;
    let mut cutting = CuttingLoop::new(budget, ctx.config);
    let mut node = ConstraintScope::new(ctx);

    loop {
        let Some(solution) = node.solve_relaxation()? else {
            log::debug!("deadline reached at depth {depth}");
            return Ok(NodeOutcome::TimedOut);
        };
        if !solution.is_optimal() {
            node.stats.infeasible_nodes += 1;
            log::trace!("depth {depth}: infeasible");
            return Ok(NodeOutcome::Exhausted);
        }

        let bound = node.integral_bound(solution.objective_value);
        if depth == 0 && bound < node.upper_bound {
            log::debug!("root relaxation tightens bound {} -> {bound}", node.upper_bound);
            node.upper_bound = bound;
        }
        if node.incumbent.size() >= node.upper_bound {
            return Ok(NodeOutcome::Optimal);
        }
        if bound <= node.incumbent.size() {
            node.stats.pruned_by_bound += 1;
            log::trace!(
                "depth {depth}: pruned, bound {bound} <= incumbent {}",
                node.incumbent.size()
            );
            return Ok(NodeOutcome::Exhausted);
        }

        match node.classify(&solution.values) {
            Point::Fractional(var) => {
                if node.config.cutting_planes && cutting.proceed(solution.objective_value) {
                    if let Some(set) = node.separator.most_violated(&solution.values) {
                        log::trace!(
                            "depth {depth}: independent-set cut on {:?} (weight {:.4})",
                            set.vertices,
                            set.weight
                        );
                        node.push(set.to_constraint());
                        node.stats.independent_set_cuts += 1;
                        cutting.record_cut();
                        continue;
                    }
                }
                return branch(&mut *node, var, depth);
            }
            Point::Integral(selected) => {
                let pairs = node.separator.disconnected_pairs(&selected);
                if pairs.is_empty() {
                    return Ok(node.accept(selected));
                }
                log::trace!("depth {depth}: {} pair cuts", pairs.len());
                node.stats.pair_cuts += pairs.len();
                for (u, v) in pairs {
                    node.push(LinearConstraint::pair(u, v));
                }
            }
        }
    }
}

/// Splits on `var`: `x_var >= 1` first, then `x_var <= 0`.
fn branch<O: LpOracle>(
    ctx: &mut SearchContext<'_, O>,
    var: usize,
    depth: usize,
) -> Result<NodeOutcome, SearchError> {
    ctx.stats.branches += 1;
    for fixing in [LinearConstraint::fix_one(var), LinearConstraint::fix_zero(var)] {
        let mut child = ConstraintScope::new(&mut *ctx);
        child.push(fixing);
        let outcome = explore(&mut *child, depth + 1)?;
        if outcome != NodeOutcome::Exhausted {
            return Ok(outcome);
        }
    }
    Ok(NodeOutcome::Exhausted)
}
