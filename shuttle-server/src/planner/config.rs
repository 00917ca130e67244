//! Search configuration for the trip planner.

/// Default bound on dequeued search entries per query.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Configuration parameters for trip search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of queue entries processed before the search gives up.
    ///
    /// This is a work bound, not a statement that no path exists: a
    /// search stopped by it reports no trip even if one would have been
    /// found later.
    pub max_iterations: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given iteration cap.
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
