//! Steady-state levels of the tracked variables.

use serde::{Deserialize, Serialize};

use crate::error::CalibrationError;
use crate::variables::Variable;

/// The level each variable takes absent any shock (the period-0 baseline).
///
/// Index variables are expressed on a GDP-indexed scale (output = 100);
/// rate variables are annualised fractions (inflation of 0.03 is 3%). The
/// output gap's steady state is zero by definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SteadyState {
    /// Real GDP index.
    pub output: f64,
    /// Household consumption.
    pub consumption: f64,
    /// Gross investment.
    pub investment: f64,
    /// Annual inflation rate.
    pub inflation: f64,
    /// Policy rate (TIAO).
    pub interest_rate: f64,
    /// Real wage index.
    pub real_wage: f64,
    /// Hours worked index.
    pub labour: f64,
    /// Net exports.
    pub net_exports: f64,
    /// Public spending.
    pub government_spending: f64,
    /// Fiscal revenue.
    pub tax_revenue: f64,
    /// Public debt stock.
    pub public_debt: f64,
    /// Bank credit to the private sector.
    pub credit: f64,
    /// Bank lending spread.
    pub bank_spread: f64,
    /// Real effective exchange rate index.
    pub real_exchange_rate: f64,
    /// Output gap.
    pub output_gap: f64,
}

impl Default for SteadyState {
    /// Built-in steady state, indexed to output = 100.
    fn default() -> Self {
        Self {
            output: 100.0,
            consumption: 68.0,
            investment: 22.0,
            inflation: 0.03,
            interest_rate: 0.045,
            real_wage: 100.0,
            labour: 100.0,
            net_exports: 4.0,
            government_spending: 15.0,
            tax_revenue: 13.5,
            public_debt: 45.0,
            credit: 25.0,
            bank_spread: 0.02,
            real_exchange_rate: 100.0,
            output_gap: 0.0,
        }
    }
}

impl SteadyState {
    /// Steady-state level of `variable`.
    pub fn value(&self, variable: Variable) -> f64 {
        match variable {
            Variable::Output => self.output,
            Variable::Consumption => self.consumption,
            Variable::Investment => self.investment,
            Variable::Inflation => self.inflation,
            Variable::InterestRate => self.interest_rate,
            Variable::RealWage => self.real_wage,
            Variable::Labour => self.labour,
            Variable::NetExports => self.net_exports,
            Variable::GovernmentSpending => self.government_spending,
            Variable::TaxRevenue => self.tax_revenue,
            Variable::PublicDebt => self.public_debt,
            Variable::Credit => self.credit,
            Variable::BankSpread => self.bank_spread,
            Variable::RealExchangeRate => self.real_exchange_rate,
            Variable::OutputGap => self.output_gap,
        }
    }

    /// Validate the steady state.
    ///
    /// Index variables must have a strictly positive level (deviations are
    /// multiplicative around them); rate variables must be finite.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        for variable in Variable::ALL {
            let value = self.value(variable);
            if !value.is_finite() {
                return Err(CalibrationError::InvalidParameter {
                    name: variable.name(),
                    value,
                    constraint: "steady-state level must be finite",
                });
            }
            if variable.unit() == crate::variables::VariableUnit::Index && value <= 0.0 {
                return Err(CalibrationError::InvalidParameter {
                    name: variable.name(),
                    value,
                    constraint: "steady-state index level must be positive",
                });
            }
        }
        Ok(())
    }
}
