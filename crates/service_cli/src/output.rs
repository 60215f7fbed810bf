//! Table, CSV and JSON rendering of simulation results.
//!
//! Deviations are printed in percent (index variables) or percentage
//! points (rate variables); both scale by 100 from the engine's
//! fractional units.

use std::io::Write;

use macro_analysis::{AnalysisReport, ComparisonResult, MetricsSummary};
use macro_core::Variable;
use macro_model::Trajectory;

use crate::error::Result;

fn column_width(variable: Variable) -> usize {
    variable.name().len().max(12)
}

fn horizontal_rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        line.push_str(&"─".repeat(width + 2));
        line.push(if i + 1 == widths.len() { right } else { mid });
    }
    line
}

/// Render selected columns of a trajectory as a box-drawn table.
pub fn render_trajectory_table(trajectory: &Trajectory, variables: &[Variable]) -> String {
    let mut widths = vec![6_usize];
    widths.extend(variables.iter().map(|v| column_width(*v)));

    let mut out = String::new();
    out.push_str("Deviations from steady state (% / pp)\n");
    out.push_str(&horizontal_rule(&widths, '┌', '┬', '┐'));
    out.push('\n');
    out.push_str(&format!("│ {:>6} │", "Period"));
    for variable in variables {
        out.push_str(&format!(" {:>width$} │", variable.name(), width = column_width(*variable)));
    }
    out.push('\n');
    out.push_str(&horizontal_rule(&widths, '├', '┼', '┤'));
    out.push('\n');
    for period in 0..trajectory.periods() {
        out.push_str(&format!("│ {:>6} │", period));
        for variable in variables {
            out.push_str(&format!(
                " {:>width$.4} │",
                trajectory.deviation(*variable, period) * 100.0,
                width = column_width(*variable)
            ));
        }
        out.push('\n');
    }
    out.push_str(&horizontal_rule(&widths, '└', '┴', '┘'));
    out.push('\n');
    out
}

/// Render the headline metrics block.
pub fn render_metrics_table(metrics: &MetricsSummary) -> String {
    let widths = [18_usize, 10, 12, 12, 12];

    let mut out = String::new();
    out.push_str("Headline metrics (% / pp)\n");
    out.push_str(&horizontal_rule(&widths, '┌', '┬', '┐'));
    out.push('\n');
    out.push_str(&format!(
        "│ {:>18} │ {:>10} │ {:>12} │ {:>12} │ {:>12} │\n",
        "Variable", "Peak", "Peak period", "Residual", "Cumulative"
    ));
    out.push_str(&horizontal_rule(&widths, '├', '┼', '┤'));
    out.push('\n');
    for entry in metrics.entries() {
        out.push_str(&format!(
            "│ {:>18} │ {:>10.4} │ {:>12} │ {:>12.4} │ {:>12.4} │\n",
            entry.variable.name(),
            entry.peak * 100.0,
            entry.peak_period,
            entry.residual * 100.0,
            entry.cumulative * 100.0,
        ));
    }
    out.push_str(&horizontal_rule(&widths, '└', '┴', '┘'));
    out.push('\n');
    out
}

/// Render the analysis report findings.
pub fn render_findings(report: &AnalysisReport) -> String {
    if report.is_empty() {
        return "Analysis: no material impact\n".to_string();
    }
    let mut out = String::from("Analysis\n");
    for finding in report.findings() {
        out.push_str(&format!(
            "  [{:?}] {}: {}\n",
            finding.severity,
            finding.variable.name(),
            finding.text
        ));
    }
    out
}

/// Render the per-period difference table of a comparison.
pub fn render_difference_table(result: &ComparisonResult, variables: &[Variable]) -> String {
    let mut widths = vec![6_usize];
    widths.extend(variables.iter().map(|v| column_width(*v)));

    let mut out = String::new();
    out.push_str("Scenario difference, A minus B (% / pp)\n");
    out.push_str(&horizontal_rule(&widths, '┌', '┬', '┐'));
    out.push('\n');
    out.push_str(&format!("│ {:>6} │", "Period"));
    for variable in variables {
        out.push_str(&format!(" {:>width$} │", variable.name(), width = column_width(*variable)));
    }
    out.push('\n');
    out.push_str(&horizontal_rule(&widths, '├', '┼', '┤'));
    out.push('\n');
    for period in 0..result.periods() {
        out.push_str(&format!("│ {:>6} │", period));
        for variable in variables {
            out.push_str(&format!(
                " {:>width$.4} │",
                result.difference(*variable, period) * 100.0,
                width = column_width(*variable)
            ));
        }
        out.push('\n');
    }
    out.push_str(&horizontal_rule(&widths, '└', '┴', '┘'));
    out.push('\n');
    out
}

/// Write the full fifteen-column trajectory as CSV.
pub fn write_trajectory_csv<W: Write>(trajectory: &Trajectory, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["period".to_string()];
    header.extend(Variable::ALL.iter().map(|v| v.name().to_string()));
    csv_writer.write_record(&header)?;

    for period in 0..trajectory.periods() {
        let mut record = vec![period.to_string()];
        for variable in Variable::ALL {
            record.push(format!("{}", trajectory.deviation(variable, period)));
        }
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use macro_core::CalibrationParameters;
    use macro_model::{simulate, ShockSpecification, ShockType};

    fn sample_trajectory() -> Trajectory {
        let params = CalibrationParameters::default();
        let spec = ShockSpecification::new(ShockType::MonetaryPolicy, 0.01, 20).unwrap();
        simulate(&spec, &params).unwrap()
    }

    #[test]
    fn test_trajectory_table_has_one_row_per_period() {
        let trajectory = sample_trajectory();
        let table = render_trajectory_table(&trajectory, &[Variable::Output]);
        let data_rows = table.lines().filter(|l| l.starts_with("│ ")).count();
        // header row plus horizon + 1 periods
        assert_eq!(data_rows, 1 + trajectory.periods());
    }

    #[test]
    fn test_csv_export_shape() {
        let trajectory = sample_trajectory();
        let mut buffer = Vec::new();
        write_trajectory_csv(&trajectory, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 1 + trajectory.periods());
        assert_eq!(lines[0].split(',').count(), 1 + Variable::COUNT);
        assert!(lines[0].starts_with("period,Output,"));
    }

    #[test]
    fn test_empty_report_renders_no_material_impact() {
        let report = macro_analysis::generate(
            &macro_analysis::MetricsSummary::from_entries(Vec::new()),
            ShockType::RiskPremium,
        );
        assert!(render_findings(&report).contains("no material impact"));
    }
}
