//! Derived views over simulation output: headline impact metrics, the
//! rule-based analysis report and the two-scenario comparator.
//!
//! Everything in this crate is a pure function of trajectories and
//! metrics; nothing here touches the propagation math.

pub mod compare;
pub mod error;
pub mod metrics;
pub mod report;

pub use compare::{compare, ComparisonResult};
pub use error::AnalysisError;
pub use metrics::{extract, MetricsSummary, VariableMetrics, HEADLINE_VARIABLES};
pub use report::{default_rules, generate, AnalysisReport, Finding, ReportRule, Severity};
