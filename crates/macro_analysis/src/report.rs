//! Rule-based qualitative assessment of a metrics summary.
//!
//! The rule table is plain data: an ordered list of (conditions, finding)
//! pairs evaluated against a fixed metrics snapshot. All matching rules
//! fire, in table order; no match yields an empty report, which renderers
//! present as "no material impact". Keeping the thresholds in one table
//! lets them be audited and tested independently of the propagation math.

use macro_core::Variable;
use macro_model::ShockType;
use serde::Serialize;

use crate::metrics::MetricsSummary;

/// Qualitative weight of a finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// Informational; no policy response suggested.
    Low,
    /// Material impact worth monitoring.
    Moderate,
    /// Impact calling for a policy response.
    High,
}

/// One qualitative finding of the report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Finding {
    /// Severity of the finding.
    pub severity: Severity,
    /// Variable the finding refers to.
    pub variable: Variable,
    /// The finding itself.
    pub text: &'static str,
}

/// Ordered list of findings for one simulation run.
///
/// Stateless and regenerable: the same metrics and shock kind always
/// produce the same report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisReport {
    findings: Vec<Finding>,
}

impl AnalysisReport {
    /// The findings, in rule-table order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Whether no rule fired.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

/// A typed predicate over the metrics snapshot.
///
/// Conditions referencing a variable that is not part of the headline set
/// never hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RuleCondition {
    /// The run was driven by this shock kind.
    ShockIs(ShockType),
    /// Signed peak deviation at or below `limit`.
    PeakAtMost {
        /// Headline variable inspected.
        variable: Variable,
        /// Inclusive signed upper bound.
        limit: f64,
    },
    /// Signed peak deviation at or above `limit`.
    PeakAtLeast {
        /// Headline variable inspected.
        variable: Variable,
        /// Inclusive signed lower bound.
        limit: f64,
    },
    /// Peak magnitude at or above `magnitude`.
    PeakMagnitudeAtLeast {
        /// Headline variable inspected.
        variable: Variable,
        /// Inclusive magnitude threshold.
        magnitude: f64,
    },
    /// Peak magnitude at or below `magnitude`.
    PeakMagnitudeAtMost {
        /// Headline variable inspected.
        variable: Variable,
        /// Inclusive magnitude threshold.
        magnitude: f64,
    },
    /// Final-period deviation magnitude at or above `magnitude`.
    ResidualMagnitudeAtLeast {
        /// Headline variable inspected.
        variable: Variable,
        /// Inclusive magnitude threshold.
        magnitude: f64,
    },
}

impl RuleCondition {
    fn holds(&self, metrics: &MetricsSummary, shock_type: ShockType) -> bool {
        match *self {
            RuleCondition::ShockIs(kind) => shock_type == kind,
            RuleCondition::PeakAtMost { variable, limit } => metrics
                .get(variable)
                .is_some_and(|m| m.peak <= limit),
            RuleCondition::PeakAtLeast { variable, limit } => metrics
                .get(variable)
                .is_some_and(|m| m.peak >= limit),
            RuleCondition::PeakMagnitudeAtLeast {
                variable,
                magnitude,
            } => metrics
                .get(variable)
                .is_some_and(|m| m.peak.abs() >= magnitude),
            RuleCondition::PeakMagnitudeAtMost {
                variable,
                magnitude,
            } => metrics
                .get(variable)
                .is_some_and(|m| m.peak.abs() <= magnitude),
            RuleCondition::ResidualMagnitudeAtLeast {
                variable,
                magnitude,
            } => metrics
                .get(variable)
                .is_some_and(|m| m.residual.abs() >= magnitude),
        }
    }
}

/// One row of the rule table: all conditions must hold for the finding to
/// fire.
#[derive(Clone, Debug)]
pub struct ReportRule {
    conditions: Vec<RuleCondition>,
    severity: Severity,
    variable: Variable,
    text: &'static str,
}

impl ReportRule {
    /// Create a rule.
    pub fn new(
        conditions: Vec<RuleCondition>,
        severity: Severity,
        variable: Variable,
        text: &'static str,
    ) -> Self {
        Self {
            conditions,
            severity,
            variable,
            text,
        }
    }

    /// Whether every condition holds for this snapshot.
    pub fn matches(&self, metrics: &MetricsSummary, shock_type: ShockType) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.holds(metrics, shock_type))
    }

    /// The finding emitted when the rule fires.
    fn finding(&self) -> Finding {
        Finding {
            severity: self.severity,
            variable: self.variable,
            text: self.text,
        }
    }
}

/// The built-in rule table, in priority order.
///
/// Thresholds are fractional deviations (0.005 = 0.5%).
pub fn default_rules() -> Vec<ReportRule> {
    use RuleCondition::*;
    use Variable::*;

    vec![
        ReportRule::new(
            vec![
                ShockIs(ShockType::MonetaryPolicy),
                PeakAtMost {
                    variable: Output,
                    limit: -0.005,
                },
            ],
            Severity::High,
            Output,
            "Output contracts by more than 0.5% at its trough; the tightening transmits \
             strongly through the credit and investment channels.",
        ),
        ReportRule::new(
            vec![
                ShockIs(ShockType::MonetaryPolicy),
                PeakAtMost {
                    variable: Output,
                    limit: -0.002,
                },
                PeakAtLeast {
                    variable: Output,
                    limit: -0.005,
                },
            ],
            Severity::Moderate,
            Output,
            "Output falls noticeably, though the contraction stays below 0.5% at its trough.",
        ),
        ReportRule::new(
            vec![PeakAtMost {
                variable: Credit,
                limit: -0.008,
            }],
            Severity::High,
            Credit,
            "Credit contracts by more than 0.8% at its trough, consistent with a credit crunch.",
        ),
        ReportRule::new(
            vec![
                PeakAtMost {
                    variable: Credit,
                    limit: -0.004,
                },
                PeakAtLeast {
                    variable: Credit,
                    limit: -0.008,
                },
            ],
            Severity::Moderate,
            Credit,
            "Bank credit tightens materially over the adjustment path.",
        ),
        ReportRule::new(
            vec![
                ShockIs(ShockType::FiscalPolicy),
                PeakAtLeast {
                    variable: PublicDebt,
                    limit: 0.006,
                },
            ],
            Severity::Moderate,
            PublicDebt,
            "The spending expansion builds up public debt faster than revenue recovers.",
        ),
        ReportRule::new(
            vec![ResidualMagnitudeAtLeast {
                variable: PublicDebt,
                magnitude: 0.002,
            }],
            Severity::Moderate,
            PublicDebt,
            "Public debt has not returned to its steady-state path by the end of the horizon.",
        ),
        ReportRule::new(
            vec![PeakMagnitudeAtLeast {
                variable: Inflation,
                magnitude: 0.01,
            }],
            Severity::High,
            Inflation,
            "Inflation deviates by more than one percentage point at its peak, a material \
             breach of price stability.",
        ),
        ReportRule::new(
            vec![
                ShockIs(ShockType::OilPrice),
                PeakAtLeast {
                    variable: Inflation,
                    limit: 0.003,
                },
            ],
            Severity::Moderate,
            Inflation,
            "The terms-of-trade shock passes through to consumer prices.",
        ),
        ReportRule::new(
            vec![
                ShockIs(ShockType::Productivity),
                PeakAtLeast {
                    variable: Output,
                    limit: 0.005,
                },
            ],
            Severity::Low,
            Output,
            "The supply-side expansion lifts output with subdued inflationary pressure.",
        ),
        ReportRule::new(
            vec![PeakMagnitudeAtMost {
                variable: Output,
                magnitude: 0.001,
            }],
            Severity::Low,
            Output,
            "Output is broadly stable over the simulation horizon.",
        ),
    ]
}

/// Evaluate the built-in rule table against a metrics snapshot.
pub fn generate(metrics: &MetricsSummary, shock_type: ShockType) -> AnalysisReport {
    generate_with_rules(&default_rules(), metrics, shock_type)
}

/// Evaluate a caller-supplied rule table (used to audit rules in
/// isolation).
pub fn generate_with_rules(
    rules: &[ReportRule],
    metrics: &MetricsSummary,
    shock_type: ShockType,
) -> AnalysisReport {
    let findings = rules
        .iter()
        .filter(|rule| rule.matches(metrics, shock_type))
        .map(ReportRule::finding)
        .collect();
    AnalysisReport { findings }
}
