//! Structural parameters of the small open-economy model.

use serde::{Deserialize, Serialize};

use crate::calibration::SteadyState;
use crate::error::CalibrationError;

/// Immutable record of the model's structural coefficients.
///
/// Created once at process start (defaults or a TOML override via
/// [`crate::CalibrationStore`]) and never mutated during a simulation run;
/// each run reads its own snapshot.
///
/// # Constraints
///
/// - `discount_factor` (β) strictly in (0, 1)
/// - `risk_aversion` (σ), `inverse_frisch` (φ), `substitution_elasticity`
///   (η), `goods_elasticity` (ε) strictly positive
/// - `import_share` (θ_c), `capital_share` (α), `calvo_stickiness` (θ),
///   `depreciation` (δ), `reserve_ratio` in [0, 1]
/// - `spending_persistence` (ρ_g) strictly in (0, 1); it is the propagation
///   engine's decay coefficient for public spending
/// - `taylor_inflation` (φ_π), `taylor_output_gap` (φ_y), `bank_margin`
///   (μ), `inflation_target` (π*) non-negative
///
/// Defaults follow the documented posterior means of the underlying model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibrationParameters {
    /// Discount factor β.
    pub discount_factor: f64,
    /// Relative risk aversion σ.
    pub risk_aversion: f64,
    /// Inverse Frisch elasticity φ.
    pub inverse_frisch: f64,
    /// Import share θ_c.
    pub import_share: f64,
    /// Capital share α.
    pub capital_share: f64,
    /// Calvo price-stickiness θ.
    pub calvo_stickiness: f64,
    /// Taylor-rule inflation weight φ_π.
    pub taylor_inflation: f64,
    /// Taylor-rule output-gap weight φ_y.
    pub taylor_output_gap: f64,
    /// Capital depreciation rate δ.
    pub depreciation: f64,
    /// Intertemporal substitution elasticity η.
    pub substitution_elasticity: f64,
    /// Elasticity of substitution between goods ε.
    pub goods_elasticity: f64,
    /// Average bank margin μ.
    pub bank_margin: f64,
    /// Required reserve ratio.
    pub reserve_ratio: f64,
    /// Public-spending persistence ρ_g.
    pub spending_persistence: f64,
    /// Inflation target π*.
    pub inflation_target: f64,
    /// Steady-state levels of the fifteen tracked variables.
    pub steady_state: SteadyState,
}

impl Default for CalibrationParameters {
    fn default() -> Self {
        Self {
            discount_factor: 0.96,
            risk_aversion: 2.0,
            inverse_frisch: 1.5,
            import_share: 0.3,
            capital_share: 0.35,
            calvo_stickiness: 0.75,
            taylor_inflation: 1.5,
            taylor_output_gap: 0.5,
            depreciation: 0.1,
            substitution_elasticity: 1.5,
            goods_elasticity: 6.0,
            bank_margin: 0.02,
            reserve_ratio: 0.05,
            spending_persistence: 0.7,
            inflation_target: 0.03,
            steady_state: SteadyState::default(),
        }
    }
}

impl CalibrationParameters {
    /// Validate every structural constraint.
    ///
    /// Returns the first violation as
    /// [`CalibrationError::InvalidParameter`] naming the offending field.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        let unit_interval: [(&'static str, f64); 5] = [
            ("import_share", self.import_share),
            ("capital_share", self.capital_share),
            ("calvo_stickiness", self.calvo_stickiness),
            ("depreciation", self.depreciation),
            ("reserve_ratio", self.reserve_ratio),
        ];
        let strictly_positive: [(&'static str, f64); 4] = [
            ("risk_aversion", self.risk_aversion),
            ("inverse_frisch", self.inverse_frisch),
            ("substitution_elasticity", self.substitution_elasticity),
            ("goods_elasticity", self.goods_elasticity),
        ];
        let non_negative: [(&'static str, f64); 4] = [
            ("taylor_inflation", self.taylor_inflation),
            ("taylor_output_gap", self.taylor_output_gap),
            ("bank_margin", self.bank_margin),
            ("inflation_target", self.inflation_target),
        ];

        if !(self.discount_factor > 0.0 && self.discount_factor < 1.0) {
            return Err(CalibrationError::InvalidParameter {
                name: "discount_factor",
                value: self.discount_factor,
                constraint: "must lie strictly in (0, 1)",
            });
        }
        for (name, value) in unit_interval {
            if !(0.0..=1.0).contains(&value) {
                return Err(CalibrationError::InvalidParameter {
                    name,
                    value,
                    constraint: "must lie in [0, 1]",
                });
            }
        }
        for (name, value) in strictly_positive {
            if !(value > 0.0) {
                return Err(CalibrationError::InvalidParameter {
                    name,
                    value,
                    constraint: "must be strictly positive",
                });
            }
        }
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(CalibrationError::InvalidParameter {
                    name,
                    value,
                    constraint: "must be non-negative",
                });
            }
        }
        if !(self.spending_persistence > 0.0 && self.spending_persistence < 1.0) {
            return Err(CalibrationError::InvalidParameter {
                name: "spending_persistence",
                value: self.spending_persistence,
                constraint: "must lie strictly in (0, 1)",
            });
        }
        self.steady_state.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CalibrationParameters::default().validate().is_ok());
    }

    #[test]
    fn test_discount_factor_bounds_are_strict() {
        for bad in [0.0, 1.0, 1.2, -0.5] {
            let params = CalibrationParameters {
                discount_factor: bad,
                ..CalibrationParameters::default()
            };
            let err = params.validate().unwrap_err();
            match err {
                CalibrationError::InvalidParameter { name, value, .. } => {
                    assert_eq!(name, "discount_factor");
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_share_outside_unit_interval_rejected() {
        let params = CalibrationParameters {
            import_share: 1.05,
            ..CalibrationParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_negative_taylor_weight_rejected() {
        let params = CalibrationParameters {
            taylor_inflation: -0.1,
            ..CalibrationParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_nan_elasticity_rejected() {
        let params = CalibrationParameters {
            risk_aversion: f64::NAN,
            ..CalibrationParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_spending_persistence_must_decay() {
        let params = CalibrationParameters {
            spending_persistence: 1.0,
            ..CalibrationParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_invalid_steady_state_surfaces() {
        let params = CalibrationParameters {
            steady_state: SteadyState {
                output: -1.0,
                ..SteadyState::default()
            },
            ..CalibrationParameters::default()
        };
        assert!(params.validate().is_err());
    }
}
