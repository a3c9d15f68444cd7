//! Branch-and-cut configuration.

use crate::coloring::ColoringOrder;

/// Configuration parameters for the branch-and-cut search.
///
/// # Examples
///
/// ```
/// use u_maxclique::bnc::BncConfig;
///
/// let config = BncConfig::default()
///     .with_time_limit_ms(5_000)
///     .with_cutting_planes(true)
///     .with_stall_rounds(3);
/// assert_eq!(config.time_limit_ms, Some(5_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BncConfig {
    /// Wall-clock budget in milliseconds. `None` means unlimited.
    ///
    /// Checked before every relaxation solve, so the overrun is at most one
    /// oracle call. `Some(0)` times out before the first solve.
    pub time_limit_ms: Option<u64>,

    /// A value counts as 0 or 1 if it is within this distance, scaled by
    /// `max(1, |value|)`.
    pub integrality_tolerance: f64,

    /// An independent set is a cut only if its weight exceeds `1 + violation_tolerance`.
    pub violation_tolerance: f64,

    /// Whether to run the independent-set cutting loop at every node.
    ///
    /// Disabling it leaves plain branch-and-bound; disconnected-pair cuts on
    /// integral points are always generated.
    pub cutting_planes: bool,

    /// Per-node cut budget, as a multiple of the vertex count (at least one cut).
    pub cuts_per_vertex: f64,

    /// Consecutive low-progress cutting rounds tolerated before branching.
    pub stall_rounds: usize,

    /// Minimum objective decrease for a cutting round to count as progress.
    pub stall_tolerance: f64,

    /// Vertex order for every greedy coloring (bound and separation).
    pub coloring_order: ColoringOrder,

    /// Seed the incumbent with a greedy clique before searching.
    pub greedy_warm_start: bool,
}

impl Default for BncConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: None,
            integrality_tolerance: 1e-6,
            violation_tolerance: 1e-6,
            cutting_planes: true,
            cuts_per_vertex: 1.0,
            stall_rounds: 5,
            stall_tolerance: 1e-4,
            coloring_order: ColoringOrder::Natural,
            greedy_warm_start: false,
        }
    }
}

impl BncConfig {
    /// Sets the wall-clock budget in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the integrality tolerance.
    pub fn with_integrality_tolerance(mut self, tolerance: f64) -> Self {
        self.integrality_tolerance = tolerance;
        self
    }

    /// Sets the violation tolerance for independent-set cuts.
    pub fn with_violation_tolerance(mut self, tolerance: f64) -> Self {
        self.violation_tolerance = tolerance;
        self
    }

    /// Enables or disables the independent-set cutting loop.
    pub fn with_cutting_planes(mut self, enabled: bool) -> Self {
        self.cutting_planes = enabled;
        self
    }

    /// Sets the per-node cut budget multiplier.
    pub fn with_cuts_per_vertex(mut self, factor: f64) -> Self {
        self.cuts_per_vertex = factor;
        self
    }

    /// Sets how many stalled rounds end the cutting loop.
    pub fn with_stall_rounds(mut self, rounds: usize) -> Self {
        self.stall_rounds = rounds;
        self
    }

    /// Sets the minimum objective decrease that counts as progress.
    pub fn with_stall_tolerance(mut self, tolerance: f64) -> Self {
        self.stall_tolerance = tolerance;
        self
    }

    /// Sets the coloring order.
    pub fn with_coloring_order(mut self, order: ColoringOrder) -> Self {
        self.coloring_order = order;
        self
    }

    /// Enables or disables the greedy warm start.
    pub fn with_greedy_warm_start(mut self, enabled: bool) -> Self {
        self.greedy_warm_start = enabled;
        self
    }

    /// Maximum cuts added at one node for a graph with `n` vertices.
    pub fn cut_budget(&self, n: usize) -> usize {
        ((self.cuts_per_vertex * n as f64).ceil() as usize).max(1)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        let tolerances = [
            ("integrality_tolerance", self.integrality_tolerance),
            ("violation_tolerance", self.violation_tolerance),
            ("stall_tolerance", self.stall_tolerance),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and non-negative"));
            }
        }
        if self.integrality_tolerance >= 0.5 {
            return Err("integrality_tolerance must be below 0.5".into());
        }
        if !self.cuts_per_vertex.is_finite() || self.cuts_per_vertex < 0.0 {
            return Err("cuts_per_vertex must be finite and non-negative".into());
        }
        if self.stall_rounds == 0 {
            return Err("stall_rounds must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BncConfig::default();
        assert!(config.time_limit_ms.is_none());
        assert!((config.integrality_tolerance - 1e-6).abs() < 1e-15);
        assert!((config.violation_tolerance - 1e-6).abs() < 1e-15);
        assert!(config.cutting_planes);
        assert_eq!(config.stall_rounds, 5);
        assert_eq!(config.coloring_order, ColoringOrder::Natural);
        assert!(!config.greedy_warm_start);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = BncConfig::default()
            .with_time_limit_ms(250)
            .with_integrality_tolerance(1e-7)
            .with_violation_tolerance(1e-5)
            .with_cutting_planes(false)
            .with_cuts_per_vertex(0.5)
            .with_stall_rounds(2)
            .with_stall_tolerance(1e-3)
            .with_coloring_order(ColoringOrder::DegreeDescending)
            .with_greedy_warm_start(true);

        assert_eq!(config.time_limit_ms, Some(250));
        assert!(!config.cutting_planes);
        assert_eq!(config.stall_rounds, 2);
        assert_eq!(config.coloring_order, ColoringOrder::DegreeDescending);
        assert!(config.greedy_warm_start);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cut_budget() {
        let config = BncConfig::default().with_cuts_per_vertex(0.5);
        assert_eq!(config.cut_budget(10), 5);
        assert_eq!(config.cut_budget(3), 2);
        assert_eq!(config.cut_budget(0), 1);
        assert_eq!(BncConfig::default().with_cuts_per_vertex(0.0).cut_budget(50), 1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(BncConfig::default()
            .with_integrality_tolerance(-1.0)
            .validate()
            .is_err());
        assert!(BncConfig::default()
            .with_integrality_tolerance(0.5)
            .validate()
            .is_err());
        assert!(BncConfig::default()
            .with_violation_tolerance(f64::NAN)
            .validate()
            .is_err());
        assert!(BncConfig::default()
            .with_cuts_per_vertex(f64::INFINITY)
            .validate()
            .is_err());
        assert!(BncConfig::default().with_stall_rounds(0).validate().is_err());
    }

    #[test]
    fn test_zero_time_limit_is_valid() {
        assert!(BncConfig::default().with_time_limit_ms(0).validate().is_ok());
    }
}
