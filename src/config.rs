//! Tuning knobs for all-pairs shortest path search
//!
//! Floyd-Warshall records every intermediate node whose route ties the best
//! known cost. Deciding what counts as a tie on floating point costs is the
//! only tunable part of the search; this module holds that choice together
//! with a cap on how many equal-cost paths a single query may enumerate.

/// Default absolute tolerance under which two path costs count as equal
pub const DEFAULT_TIE_TOLERANCE: f64 = 1e-5;

/// How two path costs are compared for equality
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// Costs tie when `|a - b| <= eps`
    ///
    /// Suitable when edge weights stay within a few orders of magnitude of 1.
    Absolute(f64),

    /// Costs tie when `|a - b| <= eps * max(1, |a|, |b|)`
    ///
    /// Scales with the magnitude of the costs, so ties on very large weights
    /// are still recognised after rounding.
    Relative(f64),
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Absolute(DEFAULT_TIE_TOLERANCE)
    }
}

impl Tolerance {
    /// Returns `true` if `a` and `b` are equal under this tolerance.
    ///
    /// Two infinite costs of the same sign are equal. A NaN never ties.
    #[must_use]
    pub fn ties(self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let diff = (a - b).abs();
        match self {
            Tolerance::Absolute(eps) => diff <= eps,
            Tolerance::Relative(eps) => diff <= eps * 1f64.max(a.abs()).max(b.abs()),
        }
    }

    /// Returns `true` if `candidate` is strictly better than `best`, that is
    /// lower and not within the tie band.
    #[must_use]
    pub fn improves(self, candidate: f64, best: f64) -> bool {
        candidate < best && !self.ties(candidate, best)
    }
}

/// Configuration for [`floyd_warshall_with_config`](crate::floyd_warshall_with_config)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllPairsConfig {
    /// Tie rule used to record alternative junctions (default: absolute `1e-5`)
    pub tolerance: Tolerance,

    /// Maximum number of paths one `all_paths` query returns (default: unlimited)
    ///
    /// Graphs with many equal-cost routes grow the number of shortest paths
    /// exponentially; a cap keeps a single query bounded.
    pub max_paths: Option<usize>,
}

impl Default for AllPairsConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            max_paths: None,
        }
    }
}

impl AllPairsConfig {
    /// Creates a configuration that only accepts exactly equal costs as ties
    #[must_use]
    pub fn exact() -> Self {
        Self {
            tolerance: Tolerance::Absolute(0.0),
            ..Self::default()
        }
    }

    /// Creates a configuration using a relative tie band of `1e-9`
    ///
    /// Prefer this for graphs whose edge weights are large.
    #[must_use]
    pub fn relative() -> Self {
        Self {
            tolerance: Tolerance::Relative(1e-9),
            ..Self::default()
        }
    }

    /// Returns this configuration with a cap on enumerated paths
    #[must_use]
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = Some(max_paths);
        self
    }

    /// Returns this configuration with a different tie rule
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}
