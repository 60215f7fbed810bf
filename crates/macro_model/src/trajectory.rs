//! The impulse-response trajectory produced by one simulation run.

use macro_core::{SteadyState, Variable, VariableUnit};
use serde::Serialize;

use crate::shocks::ShockType;

/// Deterministic impulse response of all fifteen variables.
///
/// Row 0 is the steady state; rows 1..=horizon are the post-shock periods.
/// Deviations are fractional for index variables and percentage points for
/// rate variables (see [`VariableUnit`]); [`Trajectory::level`] folds them
/// back onto the steady-state levels. A trajectory is immutable after
/// creation and owned by the caller that requested the run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trajectory {
    shock_type: ShockType,
    amplitude: f64,
    steady_state: SteadyState,
    deviations: Vec<[f64; Variable::COUNT]>,
}

impl Trajectory {
    /// Assemble a trajectory from raw deviation rows.
    ///
    /// Normally produced by [`crate::engine::simulate`]; public so derived
    /// views and tests can build synthetic paths.
    pub fn new(
        shock_type: ShockType,
        amplitude: f64,
        steady_state: SteadyState,
        deviations: Vec<[f64; Variable::COUNT]>,
    ) -> Self {
        Self {
            shock_type,
            amplitude,
            steady_state,
            deviations,
        }
    }

    /// Shock kind this trajectory responds to.
    pub fn shock_type(&self) -> ShockType {
        self.shock_type
    }

    /// Amplitude of the originating shock.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Steady state underlying the run.
    pub fn steady_state(&self) -> &SteadyState {
        &self.steady_state
    }

    /// Number of rows (horizon + 1; row 0 is the steady state).
    pub fn periods(&self) -> usize {
        self.deviations.len()
    }

    /// Horizon in quarters.
    pub fn horizon(&self) -> usize {
        self.deviations.len().saturating_sub(1)
    }

    /// Deviation of `variable` at `period`.
    ///
    /// # Panics
    ///
    /// Panics if `period` exceeds the horizon.
    pub fn deviation(&self, variable: Variable, period: usize) -> f64 {
        self.deviations[period][variable.index()]
    }

    /// Full deviation row at `period`, in canonical column order.
    pub fn row(&self, period: usize) -> Option<&[f64; Variable::COUNT]> {
        self.deviations.get(period)
    }

    /// Level of `variable` at `period`: steady state plus deviation.
    ///
    /// Index variables scale multiplicatively, rate variables add in
    /// percentage points.
    pub fn level(&self, variable: Variable, period: usize) -> f64 {
        let steady = self.steady_state.value(variable);
        let deviation = self.deviation(variable, period);
        match variable.unit() {
            VariableUnit::Index => steady * (1.0 + deviation),
            VariableUnit::Rate => steady + deviation,
        }
    }

    /// The deviation path of a single variable across all periods.
    pub fn column(&self, variable: Variable) -> Vec<f64> {
        self.deviations
            .iter()
            .map(|row| row[variable.index()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn synthetic() -> Trajectory {
        let mut rows = vec![[0.0; Variable::COUNT]; 3];
        rows[1][Variable::Output.index()] = -0.01;
        rows[1][Variable::InterestRate.index()] = 0.01;
        rows[2][Variable::Output.index()] = -0.005;
        Trajectory::new(
            ShockType::MonetaryPolicy,
            0.01,
            SteadyState::default(),
            rows,
        )
    }

    #[test]
    fn test_period_zero_is_steady_state() {
        let trajectory = synthetic();
        for variable in Variable::ALL {
            assert_eq!(trajectory.deviation(variable, 0), 0.0);
            assert_relative_eq!(
                trajectory.level(variable, 0),
                trajectory.steady_state().value(variable)
            );
        }
    }

    #[test]
    fn test_periods_and_horizon() {
        let trajectory = synthetic();
        assert_eq!(trajectory.periods(), 3);
        assert_eq!(trajectory.horizon(), 2);
    }

    #[test]
    fn test_index_levels_scale_multiplicatively() {
        let trajectory = synthetic();
        // output steady state is 100.0, deviation -1%
        assert_relative_eq!(trajectory.level(Variable::Output, 1), 99.0);
    }

    #[test]
    fn test_rate_levels_add_percentage_points() {
        let trajectory = synthetic();
        // policy rate steady state is 4.5%, deviation +1pp
        assert_relative_eq!(trajectory.level(Variable::InterestRate, 1), 0.055);
    }

    #[test]
    fn test_column_extraction() {
        let trajectory = synthetic();
        assert_eq!(trajectory.column(Variable::Output), vec![0.0, -0.01, -0.005]);
    }

    #[test]
    fn test_row_out_of_range_is_none() {
        assert!(synthetic().row(3).is_none());
    }
}
