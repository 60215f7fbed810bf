//! Error types for metric extraction and scenario comparison.

use thiserror::Error;

/// Errors surfaced by the analysis layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Metric extraction was handed a trajectory with no rows.
    #[error("cannot extract metrics from an empty trajectory")]
    EmptyTrajectory,

    /// The comparator was given scenarios with different horizons.
    #[error("incompatible scenarios: horizons {horizon_a} and {horizon_b} differ")]
    IncompatibleScenarios {
        /// Horizon of the first scenario.
        horizon_a: usize,
        /// Horizon of the second scenario.
        horizon_b: usize,
    },

    /// One of the comparator's underlying simulation runs failed.
    #[error(transparent)]
    Simulation(#[from] macro_model::SimulationError),
}
