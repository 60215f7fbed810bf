//! Two-scenario comparison: runs the engine twice and diffs the paths.

use macro_core::{CalibrationParameters, Variable};
use macro_model::{simulate, ShockSpecification, Trajectory};
use serde::Serialize;

use crate::error::AnalysisError;

/// Differential view of two simulation runs over the same horizon.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Trajectory of the first scenario.
    pub trajectory_a: Trajectory,
    /// Trajectory of the second scenario.
    pub trajectory_b: Trajectory,
    /// Per-period, per-variable difference (a minus b).
    difference: Vec<[f64; Variable::COUNT]>,
}

impl ComparisonResult {
    /// Difference of deviations (scenario A minus scenario B) at `period`.
    pub fn difference_row(&self, period: usize) -> Option<&[f64; Variable::COUNT]> {
        self.difference.get(period)
    }

    /// Difference of deviations for one variable at one period.
    pub fn difference(&self, variable: Variable, period: usize) -> f64 {
        self.difference[period][variable.index()]
    }

    /// Number of rows in the difference table (horizon + 1).
    pub fn periods(&self) -> usize {
        self.difference.len()
    }
}

/// Run both scenarios against the same calibration and diff them.
///
/// Pure composition of two [`simulate`] calls plus an element-wise
/// subtraction; within the engine's linear formulation the difference of
/// two same-shock runs is itself a scaled impulse response.
///
/// # Errors
///
/// - [`AnalysisError::IncompatibleScenarios`] if the horizons differ
/// - [`AnalysisError::Simulation`] if either underlying run fails
pub fn compare(
    shock_a: &ShockSpecification,
    shock_b: &ShockSpecification,
    params: &CalibrationParameters,
) -> Result<ComparisonResult, AnalysisError> {
    if shock_a.horizon() != shock_b.horizon() {
        return Err(AnalysisError::IncompatibleScenarios {
            horizon_a: shock_a.horizon(),
            horizon_b: shock_b.horizon(),
        });
    }

    let trajectory_a = simulate(shock_a, params)?;
    let trajectory_b = simulate(shock_b, params)?;

    let difference = (0..trajectory_a.periods())
        .map(|period| {
            let mut row = [0.0_f64; Variable::COUNT];
            for variable in Variable::ALL {
                row[variable.index()] = trajectory_a.deviation(variable, period)
                    - trajectory_b.deviation(variable, period);
            }
            row
        })
        .collect();

    Ok(ComparisonResult {
        trajectory_a,
        trajectory_b,
        difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use macro_model::ShockType;

    #[test]
    fn test_mismatched_horizons_rejected() {
        let params = CalibrationParameters::default();
        let a = ShockSpecification::new(ShockType::MonetaryPolicy, 0.01, 40).unwrap();
        let b = ShockSpecification::new(ShockType::FiscalPolicy, 0.01, 32).unwrap();
        let err = compare(&a, &b, &params).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::IncompatibleScenarios {
                horizon_a: 40,
                horizon_b: 32,
            }
        );
    }

    #[test]
    fn test_identical_scenarios_difference_is_zero() {
        let params = CalibrationParameters::default();
        let a = ShockSpecification::new(ShockType::OilPrice, 0.02, 28).unwrap();
        let result = compare(&a, &a, &params).unwrap();
        for period in 0..result.periods() {
            for variable in Variable::ALL {
                assert_eq!(result.difference(variable, period), 0.0);
            }
        }
    }

    #[test]
    fn test_difference_matches_independent_runs() {
        let params = CalibrationParameters::default();
        let a = ShockSpecification::new(ShockType::MonetaryPolicy, 0.02, 36).unwrap();
        let b = ShockSpecification::new(ShockType::RiskPremium, 0.015, 36).unwrap();
        let result = compare(&a, &b, &params).unwrap();

        let run_a = simulate(&a, &params).unwrap();
        let run_b = simulate(&b, &params).unwrap();
        for period in 0..result.periods() {
            for variable in Variable::ALL {
                assert_eq!(
                    result.difference(variable, period),
                    run_a.deviation(variable, period) - run_b.deviation(variable, period)
                );
            }
        }
    }

    #[test]
    fn test_comparison_carries_both_trajectories() {
        let params = CalibrationParameters::default();
        let a = ShockSpecification::new(ShockType::FiscalPolicy, 0.01, 24).unwrap();
        let b = ShockSpecification::new(ShockType::Productivity, 0.01, 24).unwrap();
        let result = compare(&a, &b, &params).unwrap();
        assert_eq!(result.trajectory_a.shock_type(), ShockType::FiscalPolicy);
        assert_eq!(result.trajectory_b.shock_type(), ShockType::Productivity);
        assert_eq!(result.periods(), 25);
    }
}
