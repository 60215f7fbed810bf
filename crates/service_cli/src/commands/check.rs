//! Check command implementation
//!
//! Resolves the calibration (defaults or override) in strict mode and
//! prints the resulting parameter set.

use std::path::Path;

use macro_core::{CalibrationParameters, CalibrationStore};
use tracing::info;

use crate::Result;

/// Run the check command.
///
/// Unlike the simulation path, an invalid override fails here instead of
/// falling back, so the defect can be fixed.
pub fn run(calibration: Option<&Path>) -> Result<()> {
    let params = match calibration {
        Some(path) => {
            info!("Validating calibration override {}", path.display());
            CalibrationStore::try_load(path)?
        }
        None => {
            info!("No override supplied, using built-in defaults");
            CalibrationParameters::default()
        }
    };
    params.validate()?;

    println!("Calibration OK\n");
    println!("{}", toml::to_string_pretty(&params)?);
    Ok(())
}
