//! Headline impact metrics derived from a trajectory.

use macro_core::Variable;
use macro_model::Trajectory;
use serde::Serialize;

use crate::error::AnalysisError;

/// The variables of primary policy interest.
pub const HEADLINE_VARIABLES: [Variable; 4] = [
    Variable::Output,
    Variable::Inflation,
    Variable::PublicDebt,
    Variable::Credit,
];

/// Scalar impact indicators for one headline variable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableMetrics {
    /// The variable being summarised.
    pub variable: Variable,
    /// Signed deviation of largest magnitude across all periods.
    pub peak: f64,
    /// Earliest period at which the peak magnitude occurs.
    pub peak_period: usize,
    /// Deviation at the final period, a proxy for persistence.
    pub residual: f64,
    /// Deviation summed over the whole horizon.
    pub cumulative: f64,
}

/// Read-only summary of a trajectory's headline variables.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricsSummary {
    entries: Vec<VariableMetrics>,
}

impl MetricsSummary {
    /// Build a summary from precomputed entries (tests and synthetic
    /// fixtures; production summaries come from [`extract`]).
    pub fn from_entries(entries: Vec<VariableMetrics>) -> Self {
        Self { entries }
    }

    /// Metrics for `variable`, if it is a headline variable.
    pub fn get(&self, variable: Variable) -> Option<&VariableMetrics> {
        self.entries.iter().find(|m| m.variable == variable)
    }

    /// All entries in headline order.
    pub fn entries(&self) -> &[VariableMetrics] {
        &self.entries
    }
}

/// Reduce a trajectory to its headline impact metrics.
///
/// Scans every period per headline variable; the peak is the deviation of
/// largest magnitude with ties broken towards the earliest period.
///
/// # Errors
///
/// [`AnalysisError::EmptyTrajectory`] if the trajectory has no rows.
pub fn extract(trajectory: &Trajectory) -> Result<MetricsSummary, AnalysisError> {
    if trajectory.periods() == 0 {
        return Err(AnalysisError::EmptyTrajectory);
    }

    let entries = HEADLINE_VARIABLES
        .iter()
        .map(|&variable| {
            let column = trajectory.column(variable);
            let mut peak = 0.0_f64;
            let mut peak_period = 0;
            for (period, &deviation) in column.iter().enumerate() {
                if deviation.abs() > peak.abs() {
                    peak = deviation;
                    peak_period = period;
                }
            }
            VariableMetrics {
                variable,
                peak,
                peak_period,
                residual: *column.last().expect("trajectory has at least one row"),
                cumulative: column.iter().sum(),
            }
        })
        .collect();

    Ok(MetricsSummary { entries })
}
