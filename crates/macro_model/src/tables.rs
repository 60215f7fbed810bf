//! Structural transmission tables.
//!
//! All of the model's structural knowledge lives here as inspectable data:
//! per-shock first-period impact vectors, per-variable persistence
//! coefficients and the cross-variable feedback channels. The propagation
//! loop in [`crate::engine`] contains no economics of its own.
//!
//! Every vector is indexed by the canonical column order of
//! [`Variable::ALL`]:
//!
//! ```text
//! Output, Consumption, Investment, Inflation, InterestRate, RealWage,
//! Labour, NetExports, GovernmentSpending, TaxRevenue, PublicDebt, Credit,
//! BankSpread, RealExchangeRate, OutputGap
//! ```

use macro_core::{CalibrationParameters, Variable};

use crate::shocks::ShockType;

/// Baseline per-variable decay coefficients.
///
/// Public debt (0.93) and credit (0.88) decay the slowest; price and gap
/// variables fade fastest. The public-spending slot is overridden by the
/// calibrated ρ_g in [`persistence_vector`].
const BASE_PERSISTENCE: [f64; Variable::COUNT] = [
    0.80, // Output
    0.78, // Consumption
    0.76, // Investment
    0.70, // Inflation
    0.75, // InterestRate
    0.80, // RealWage
    0.78, // Labour
    0.72, // NetExports
    0.70, // GovernmentSpending (replaced by rho_g)
    0.74, // TaxRevenue
    0.93, // PublicDebt
    0.88, // Credit
    0.76, // BankSpread
    0.74, // RealExchangeRate
    0.72, // OutputGap
];

/// First-period elasticities of a monetary tightening (+1 on the policy
/// rate). Credit and investment carry the brunt of the transmission; the
/// direct demand effect on output is small and the trough builds through
/// the feedback channels over the following quarters.
const MONETARY_IMPACT: [f64; Variable::COUNT] = [
    -0.15, // Output
    -0.15, // Consumption
    -0.50, // Investment
    -0.10, // Inflation
    1.00,  // InterestRate
    -0.10, // RealWage
    -0.15, // Labour
    0.05,  // NetExports
    0.00,  // GovernmentSpending
    -0.05, // TaxRevenue
    0.10,  // PublicDebt
    -1.00, // Credit
    0.05,  // BankSpread
    -0.15, // RealExchangeRate
    -0.25, // OutputGap
];

/// First-period elasticities of a public-spending expansion (+1 on
/// government spending, fiscal multiplier of 0.6 on impact).
const FISCAL_IMPACT: [f64; Variable::COUNT] = [
    0.60,  // Output
    0.10,  // Consumption
    0.10,  // Investment
    0.10,  // Inflation
    0.05,  // InterestRate
    0.05,  // RealWage
    0.20,  // Labour
    -0.05, // NetExports
    1.00,  // GovernmentSpending
    0.30,  // TaxRevenue
    0.80,  // PublicDebt
    0.05,  // Credit
    0.00,  // BankSpread
    0.05,  // RealExchangeRate
    0.50,  // OutputGap
];

/// First-period elasticities of a positive technology shock (+1 on total
/// factor productivity): output and the real wage rise, labour input and
/// marginal costs fall.
const PRODUCTIVITY_IMPACT: [f64; Variable::COUNT] = [
    1.00,  // Output
    0.30,  // Consumption
    0.30,  // Investment
    -0.30, // Inflation
    -0.05, // InterestRate
    0.70,  // RealWage
    -0.20, // Labour
    0.10,  // NetExports
    0.00,  // GovernmentSpending
    0.15,  // TaxRevenue
    -0.05, // PublicDebt
    0.10,  // Credit
    -0.05, // BankSpread
    -0.05, // RealExchangeRate
    0.40,  // OutputGap
];

/// First-period elasticities of a risk-premium shock (+1 on the bank
/// spread): credit contracts hard and the real exchange rate depreciates.
const RISK_PREMIUM_IMPACT: [f64; Variable::COUNT] = [
    -0.25, // Output
    -0.10, // Consumption
    -0.40, // Investment
    0.05,  // Inflation
    0.10,  // InterestRate
    -0.05, // RealWage
    -0.10, // Labour
    0.10,  // NetExports
    0.00,  // GovernmentSpending
    -0.05, // TaxRevenue
    0.10,  // PublicDebt
    -0.90, // Credit
    1.00,  // BankSpread
    0.50,  // RealExchangeRate
    -0.20, // OutputGap
];

/// First-period elasticities of a favourable oil-price / terms-of-trade
/// shock (+1 on net exports' driver): the trade balance improves, prices
/// rise and the real exchange rate appreciates.
const OIL_PRICE_IMPACT: [f64; Variable::COUNT] = [
    0.30,  // Output
    0.10,  // Consumption
    0.10,  // Investment
    0.40,  // Inflation
    0.05,  // InterestRate
    -0.10, // RealWage
    0.05,  // Labour
    0.80,  // NetExports
    0.05,  // GovernmentSpending
    0.10,  // TaxRevenue
    -0.05, // PublicDebt
    0.05,  // Credit
    0.00,  // BankSpread
    -0.30, // RealExchangeRate
    0.25,  // OutputGap
];

/// Scale translating annual Taylor-rule weights into the quarterly
/// feedback table (policy smoothing).
const TAYLOR_SCALE: f64 = 0.1;

/// Per-variable persistence for a given calibration.
///
/// The government-spending slot carries the calibrated ρ_g; every other
/// coefficient is structural.
pub fn persistence_vector(params: &CalibrationParameters) -> [f64; Variable::COUNT] {
    let mut persistence = BASE_PERSISTENCE;
    persistence[Variable::GovernmentSpending.index()] = params.spending_persistence;
    persistence
}

/// First-period impact vector of `shock`.
pub fn impact_vector(shock: ShockType) -> &'static [f64; Variable::COUNT] {
    match shock {
        ShockType::MonetaryPolicy => &MONETARY_IMPACT,
        ShockType::FiscalPolicy => &FISCAL_IMPACT,
        ShockType::Productivity => &PRODUCTIVITY_IMPACT,
        ShockType::RiskPremium => &RISK_PREMIUM_IMPACT,
        ShockType::OilPrice => &OIL_PRICE_IMPACT,
    }
}

/// One cross-variable transmission channel.
///
/// The engine adds `coefficient * deviation(source, t-1)` to the target's
/// deviation at period t. Using only the previous period keeps the forward
/// pass single-sweep with no fixed-point iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeedbackChannel {
    /// Variable whose lagged deviation drives the channel.
    pub source: Variable,
    /// Variable receiving the impulse.
    pub target: Variable,
    /// Linear coupling coefficient.
    pub coefficient: f64,
}

impl FeedbackChannel {
    fn new(source: Variable, target: Variable, coefficient: f64) -> Self {
        Self {
            source,
            target,
            coefficient,
        }
    }
}

/// Slope of the Phillips curve implied by the Calvo calibration,
/// κ = (1 − θ)(1 − βθ) / θ.
pub fn phillips_slope(params: &CalibrationParameters) -> f64 {
    let theta = params.calvo_stickiness;
    let beta = params.discount_factor;
    (1.0 - theta) * (1.0 - beta * theta) / theta
}

/// The cross-variable transmission channels for a given calibration.
///
/// The credit, demand and fiscal couplings are fixed structural constants;
/// the Phillips-curve and Taylor-rule couplings derive from the
/// calibration (θ, β, φ_π, φ_y).
pub fn feedback_channels(params: &CalibrationParameters) -> Vec<FeedbackChannel> {
    use Variable::*;

    let kappa = phillips_slope(params);
    vec![
        // Credit channel: the policy rate squeezes credit and investment,
        // a thinner credit stock feeds back into capital formation.
        FeedbackChannel::new(InterestRate, Credit, -0.35),
        FeedbackChannel::new(InterestRate, Investment, -0.50),
        FeedbackChannel::new(BankSpread, Credit, -0.20),
        FeedbackChannel::new(Credit, Investment, 0.15),
        // Demand side: investment and credit drive output, output drives
        // consumption, employment and the tax take.
        FeedbackChannel::new(Investment, Output, 0.50),
        FeedbackChannel::new(Credit, Output, 0.30),
        FeedbackChannel::new(NetExports, Output, 0.08),
        FeedbackChannel::new(Output, Consumption, 0.15),
        FeedbackChannel::new(Output, Labour, 0.25),
        FeedbackChannel::new(Output, TaxRevenue, 0.20),
        FeedbackChannel::new(Output, OutputGap, 0.60),
        // Nominal side: the output gap moves inflation along the Phillips
        // curve; the policy rate follows the Taylor rule.
        FeedbackChannel::new(OutputGap, Inflation, kappa),
        FeedbackChannel::new(Inflation, InterestRate, TAYLOR_SCALE * params.taylor_inflation),
        FeedbackChannel::new(OutputGap, InterestRate, TAYLOR_SCALE * params.taylor_output_gap),
        // Fiscal block: spending builds debt and (partially) revenue.
        FeedbackChannel::new(GovernmentSpending, PublicDebt, 0.25),
        FeedbackChannel::new(GovernmentSpending, TaxRevenue, 0.10),
        // External block: a weaker real exchange rate lifts net exports.
        FeedbackChannel::new(RealExchangeRate, NetExports, 0.15),
    ]
}
