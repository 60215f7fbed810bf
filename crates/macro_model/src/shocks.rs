//! The shock catalogue and the validated shock specification.

use std::fmt;

use macro_core::Variable;
use serde::Serialize;

use crate::error::SimulationError;

/// Smallest supported shock amplitude (0.1%).
pub const MIN_AMPLITUDE: f64 = 0.001;
/// Largest supported shock amplitude (5.0%).
pub const MAX_AMPLITUDE: f64 = 0.05;
/// Shortest supported horizon in quarters.
pub const MIN_HORIZON: usize = 20;
/// Longest supported horizon in quarters.
pub const MAX_HORIZON: usize = 60;

/// The five structural shocks the model can be hit with.
///
/// Each kind maps to a fixed impact vector and persistence profile in
/// [`crate::tables`]; those are structural knowledge, not user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ShockType {
    /// Unexpected change of the policy rate (TIAO).
    MonetaryPolicy,
    /// Change in public spending.
    FiscalPolicy,
    /// Total-factor-productivity shock to the production function.
    Productivity,
    /// Credit-spread and country risk-premium shock.
    RiskPremium,
    /// Oil-price / terms-of-trade shock.
    OilPrice,
}

impl ShockType {
    /// All shock kinds.
    pub const ALL: [ShockType; 5] = [
        ShockType::MonetaryPolicy,
        ShockType::FiscalPolicy,
        ShockType::Productivity,
        ShockType::RiskPremium,
        ShockType::OilPrice,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            ShockType::MonetaryPolicy => "Monetary Policy Shock",
            ShockType::FiscalPolicy => "Fiscal Policy Shock",
            ShockType::Productivity => "Productivity Shock",
            ShockType::RiskPremium => "Risk Premium Shock",
            ShockType::OilPrice => "Oil Price Shock",
        }
    }

    /// One-line description of the experiment.
    pub fn description(self) -> &'static str {
        match self {
            ShockType::MonetaryPolicy => "Unexpected change of the policy rate by the central bank",
            ShockType::FiscalPolicy => "Change in public spending",
            ShockType::Productivity => "Technology shock to the production function",
            ShockType::RiskPremium => "Change in the credit spread and country risk premium",
            ShockType::OilPrice => "Change in the terms of trade",
        }
    }

    /// The variables a reader looks at first for this shock.
    ///
    /// Used by presentation code to pick default columns; the engine
    /// always propagates all fifteen variables.
    pub fn headline_variables(self) -> &'static [Variable] {
        match self {
            ShockType::MonetaryPolicy => &[
                Variable::InterestRate,
                Variable::Inflation,
                Variable::Credit,
                Variable::Output,
            ],
            ShockType::FiscalPolicy => &[
                Variable::GovernmentSpending,
                Variable::PublicDebt,
                Variable::Output,
                Variable::Inflation,
            ],
            ShockType::Productivity => &[
                Variable::Output,
                Variable::RealWage,
                Variable::Labour,
                Variable::Investment,
            ],
            ShockType::RiskPremium => &[
                Variable::BankSpread,
                Variable::Credit,
                Variable::Investment,
                Variable::RealExchangeRate,
            ],
            ShockType::OilPrice => &[
                Variable::NetExports,
                Variable::Inflation,
                Variable::RealExchangeRate,
                Variable::Output,
            ],
        }
    }
}

impl fmt::Display for ShockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One simulation experiment: shock kind, amplitude and horizon.
///
/// Can only be built through [`ShockSpecification::new`], which enforces
/// the supported ranges; an out-of-range field is a configuration error,
/// never a silent clamp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShockSpecification {
    shock_type: ShockType,
    amplitude: f64,
    horizon: usize,
}

impl ShockSpecification {
    /// Create a validated specification.
    ///
    /// # Arguments
    ///
    /// * `shock_type` - one of the five structural shocks
    /// * `amplitude` - first-period impulse size as a fraction
    ///   (0.01 = 1%), within [0.001, 0.05]
    /// * `horizon` - simulation length in quarters, within [20, 60]
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidShockSpecification`] naming the field
    /// that is out of range.
    pub fn new(
        shock_type: ShockType,
        amplitude: f64,
        horizon: usize,
    ) -> Result<Self, SimulationError> {
        if !(MIN_AMPLITUDE..=MAX_AMPLITUDE).contains(&amplitude) {
            return Err(SimulationError::InvalidShockSpecification {
                field: "amplitude",
                value: amplitude,
                min: MIN_AMPLITUDE,
                max: MAX_AMPLITUDE,
            });
        }
        if !(MIN_HORIZON..=MAX_HORIZON).contains(&horizon) {
            return Err(SimulationError::InvalidShockSpecification {
                field: "horizon",
                value: horizon as f64,
                min: MIN_HORIZON as f64,
                max: MAX_HORIZON as f64,
            });
        }
        Ok(Self {
            shock_type,
            amplitude,
            horizon,
        })
    }

    /// The shock kind.
    pub fn shock_type(&self) -> ShockType {
        self.shock_type
    }

    /// First-period impulse size as a fraction.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Simulation length in quarters.
    pub fn horizon(&self) -> usize {
        self.horizon
    }
}
