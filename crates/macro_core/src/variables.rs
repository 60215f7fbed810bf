//! The fifteen-variable catalogue of the small open-economy model.
//!
//! Every table in the kernel (impact vectors, persistence coefficients,
//! feedback channels) and every trajectory row is keyed by [`Variable`] in
//! the canonical order of [`Variable::ALL`]. The order is part of the wire
//! format of exported tables and must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit class of a tracked variable.
///
/// Index variables (output, credit, the real exchange rate, ...) are
/// reported multiplicatively around their steady-state level: a deviation
/// of 0.01 means the level sits 1% above steady state. Rate variables
/// (inflation, the policy rate, the bank spread, the output gap) are
/// reported in additive percentage points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableUnit {
    /// Multiplicative deviation around a steady-state index level.
    Index,
    /// Additive deviation in percentage points.
    Rate,
}

/// The fifteen macroeconomic variables tracked by the model.
///
/// The discriminant order is the canonical column order used by every
/// structural table and every trajectory snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variable {
    /// Real GDP.
    Output,
    /// Private household consumption.
    Consumption,
    /// Gross fixed capital formation.
    Investment,
    /// Consumer price inflation.
    Inflation,
    /// The central bank's policy rate (TIAO).
    InterestRate,
    /// Real wage.
    RealWage,
    /// Hours worked.
    Labour,
    /// Net exports.
    NetExports,
    /// Public spending.
    GovernmentSpending,
    /// Fiscal revenue.
    TaxRevenue,
    /// Public debt stock.
    PublicDebt,
    /// Bank credit to the private sector.
    Credit,
    /// Bank lending spread over the policy rate.
    BankSpread,
    /// Real effective exchange rate.
    RealExchangeRate,
    /// Output gap.
    OutputGap,
}

impl Variable {
    /// Number of tracked variables.
    pub const COUNT: usize = 15;

    /// All variables in canonical column order.
    pub const ALL: [Variable; Variable::COUNT] = [
        Variable::Output,
        Variable::Consumption,
        Variable::Investment,
        Variable::Inflation,
        Variable::InterestRate,
        Variable::RealWage,
        Variable::Labour,
        Variable::NetExports,
        Variable::GovernmentSpending,
        Variable::TaxRevenue,
        Variable::PublicDebt,
        Variable::Credit,
        Variable::BankSpread,
        Variable::RealExchangeRate,
        Variable::OutputGap,
    ];

    /// Stable column index of this variable.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Variable::Output => "Output",
            Variable::Consumption => "Consumption",
            Variable::Investment => "Investment",
            Variable::Inflation => "Inflation",
            Variable::InterestRate => "InterestRate",
            Variable::RealWage => "RealWage",
            Variable::Labour => "Labour",
            Variable::NetExports => "NetExports",
            Variable::GovernmentSpending => "GovernmentSpending",
            Variable::TaxRevenue => "TaxRevenue",
            Variable::PublicDebt => "PublicDebt",
            Variable::Credit => "Credit",
            Variable::BankSpread => "BankSpread",
            Variable::RealExchangeRate => "RealExchangeRate",
            Variable::OutputGap => "OutputGap",
        }
    }

    /// Unit class governing how deviations translate into levels.
    pub fn unit(self) -> VariableUnit {
        match self {
            Variable::Inflation
            | Variable::InterestRate
            | Variable::BankSpread
            | Variable::OutputGap => VariableUnit::Rate,
            _ => VariableUnit::Index,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
