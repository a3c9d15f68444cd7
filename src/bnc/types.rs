//! Result, statistics and error types for the branch-and-cut search.

use std::time::Duration;

use thiserror::Error;

use crate::lp::OracleError;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The returned clique is maximum: the tree was exhausted or the
    /// incumbent reached the global upper bound.
    Optimal,
    /// The deadline (or an external cancel) stopped the search; the clique
    /// is the best found so far.
    TimedOut,
}

/// Fatal search failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// [`BncConfig::validate`](super::BncConfig::validate) rejected the configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The relaxation solver failed; the search cannot continue.
    #[error("LP oracle failed: {0}")]
    Oracle(#[from] OracleError),
}

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Search-tree nodes entered.
    pub nodes: usize,
    /// Relaxations solved by the oracle.
    pub relaxations: usize,
    /// Nodes split on a fractional variable.
    pub branches: usize,
    /// Nodes discarded because their bound could not beat the incumbent.
    pub pruned_by_bound: usize,
    /// Nodes whose relaxation was infeasible.
    pub infeasible_nodes: usize,
    /// Independent-set cuts added.
    pub independent_set_cuts: usize,
    /// Disconnected-pair cuts added.
    pub pair_cuts: usize,
    /// Times the incumbent was replaced.
    pub incumbent_updates: usize,
    /// Deepest node reached (root is 0).
    pub max_depth: usize,
}

/// Result of a branch-and-cut run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BncResult {
    /// Best clique found, 0-indexed and ascending.
    pub clique: Vec<usize>,
    /// `clique.len()`.
    pub size: usize,
    /// Whether `clique` is proven maximum.
    pub status: SearchStatus,
    /// Best proven upper bound on the clique number; equals `size` when optimal.
    pub upper_bound: usize,
    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
    /// Search counters.
    pub stats: SearchStats,
    /// Incumbent size after each update, in order.
    pub incumbent_history: Vec<usize>,
}

impl BncResult {
    /// Whether the clique is proven maximum.
    pub fn is_optimal(&self) -> bool {
        self.status == SearchStatus::Optimal
    }

    /// Clique vertices numbered from 1, as benchmark files number them.
    pub fn one_indexed(&self) -> Vec<usize> {
        self.clique.iter().map(|v| v + 1).collect()
    }
}

/// Best verified clique so far.
///
/// Only ever replaced by a strictly larger clique.
#[derive(Debug, Clone, Default)]
pub(crate) struct Incumbent {
    vertices: Vec<usize>,
    history: Vec<usize>,
}

impl Incumbent {
    pub(crate) fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Replaces the incumbent if `clique` is strictly larger.
    pub(crate) fn offer(&mut self, mut clique: Vec<usize>) -> bool {
        if clique.len() <= self.vertices.len() {
            return false;
        }
        clique.sort_unstable();
        self.history.push(clique.len());
        self.vertices = clique;
        true
    }

    pub(crate) fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.vertices, self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incumbent_only_grows() {
        let mut inc = Incumbent::default();
        assert!(inc.offer(vec![2]));
        assert!(!inc.offer(vec![0]));
        assert!(inc.offer(vec![3, 1, 2]));
        assert!(!inc.offer(vec![4, 5]));
        assert!(!inc.offer(vec![4, 5, 6]));
        assert_eq!(inc.size(), 3);
        let (vertices, history) = inc.into_parts();
        assert_eq!(vertices, vec![1, 2, 3]);
        assert_eq!(history, vec![1, 3]);
    }

    #[test]
    fn test_one_indexed() {
        let result = BncResult {
            clique: vec![0, 2, 4],
            size: 3,
            status: SearchStatus::Optimal,
            upper_bound: 3,
            elapsed: Duration::ZERO,
            stats: SearchStats::default(),
            incumbent_history: vec![3],
        };
        assert_eq!(result.one_indexed(), vec![1, 3, 5]);
        assert!(result.is_optimal());
    }

    #[test]
    fn test_error_from_oracle() {
        let err: SearchError = OracleError::Unbounded.into();
        assert_eq!(err, SearchError::Oracle(OracleError::Unbounded));
        assert!(err.to_string().contains("unbounded"));
    }
}
