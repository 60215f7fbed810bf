//! Simulate command implementation
//!
//! Runs one impulse-response simulation and renders the trajectory, the
//! headline metrics and the analysis report.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use macro_analysis::{extract, generate};
use macro_core::CalibrationStore;
use macro_model::{simulate, ShockSpecification, ShockType};
use serde::Serialize;
use tracing::info;

use crate::output;
use crate::{CliError, Result};

/// Everything one simulation run produces, for JSON export.
#[derive(Serialize)]
struct SimulationBundle {
    shock: &'static str,
    amplitude: f64,
    horizon: usize,
    trajectory: macro_model::Trajectory,
    metrics: macro_analysis::MetricsSummary,
    report: macro_analysis::AnalysisReport,
}

/// Run the simulate command.
///
/// `amplitude_pct` is the user-facing percent figure; the engine works in
/// fractions.
pub fn run(
    shock: ShockType,
    amplitude_pct: f64,
    horizon: usize,
    calibration: Option<&Path>,
    format: &str,
    output_path: Option<&Path>,
) -> Result<()> {
    info!("Starting simulation...");
    info!("  Shock: {}", shock);
    info!("  Amplitude: {}%", amplitude_pct);
    info!("  Horizon: {} quarters", horizon);

    let params = CalibrationStore::load(calibration);
    let spec = ShockSpecification::new(shock, amplitude_pct / 100.0, horizon)?;
    let trajectory = simulate(&spec, &params)?;
    let metrics = extract(&trajectory)?;
    let report = generate(&metrics, shock);

    if format == "csv" {
        match output_path {
            Some(path) => {
                output::write_trajectory_csv(&trajectory, File::create(path)?)?;
                info!("Results written to {}", path.display());
            }
            None => output::write_trajectory_csv(&trajectory, std::io::stdout().lock())?,
        }
        info!("Simulation complete");
        return Ok(());
    }

    let rendered = match format {
        "table" => {
            let mut text = String::new();
            text.push_str(&format!("{} ({}%)\n\n", shock.name(), amplitude_pct));
            text.push_str(&output::render_trajectory_table(
                &trajectory,
                shock.headline_variables(),
            ));
            text.push('\n');
            text.push_str(&output::render_metrics_table(&metrics));
            text.push('\n');
            text.push_str(&output::render_findings(&report));
            text
        }
        "json" => {
            let bundle = SimulationBundle {
                shock: shock.name(),
                amplitude: spec.amplitude(),
                horizon: spec.horizon(),
                trajectory,
                metrics,
                report,
            };
            let mut text = serde_json::to_string_pretty(&bundle)?;
            text.push('\n');
            text
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            )));
        }
    };

    match output_path {
        Some(path) => {
            File::create(path)?.write_all(rendered.as_bytes())?;
            info!("Results written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    info!("Simulation complete");
    Ok(())
}
