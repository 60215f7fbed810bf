//! Compare command implementation
//!
//! Runs two scenarios over the same horizon against the same calibration
//! and renders the differential view.

use std::path::Path;

use macro_analysis::compare;
use macro_core::{CalibrationStore, Variable};
use macro_model::{ShockSpecification, ShockType};
use tracing::info;

use crate::output;
use crate::{CliError, Result};

/// Columns shown in the differential table.
const DIFFERENCE_COLUMNS: [Variable; 4] = [
    Variable::Output,
    Variable::Inflation,
    Variable::PublicDebt,
    Variable::Credit,
];

/// Run the compare command.
pub fn run(
    shock_a: ShockType,
    amplitude_a_pct: f64,
    shock_b: ShockType,
    amplitude_b_pct: f64,
    horizon: usize,
    calibration: Option<&Path>,
    format: &str,
) -> Result<()> {
    info!("Starting comparison...");
    info!("  Scenario A: {} at {}%", shock_a, amplitude_a_pct);
    info!("  Scenario B: {} at {}%", shock_b, amplitude_b_pct);
    info!("  Horizon: {} quarters", horizon);

    let params = CalibrationStore::load(calibration);
    let spec_a = ShockSpecification::new(shock_a, amplitude_a_pct / 100.0, horizon)?;
    let spec_b = ShockSpecification::new(shock_b, amplitude_b_pct / 100.0, horizon)?;
    let result = compare(&spec_a, &spec_b, &params)?;

    match format {
        "table" => {
            println!(
                "Scenario A: {} ({}%)   Scenario B: {} ({}%)\n",
                shock_a.name(),
                amplitude_a_pct,
                shock_b.name(),
                amplitude_b_pct
            );
            print!(
                "{}",
                output::render_difference_table(&result, &DIFFERENCE_COLUMNS)
            );
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("Comparison complete");
    Ok(())
}
