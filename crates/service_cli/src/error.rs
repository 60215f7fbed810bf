//! CLI error type: argument and IO wrappers over the kernel errors.

use thiserror::Error;

/// Errors surfaced by the macrosim CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// An argument was syntactically valid but unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Calibration loading or validation failed in strict mode.
    #[error(transparent)]
    Calibration(#[from] macro_core::CalibrationError),

    /// Shock specification or propagation failed.
    #[error(transparent)]
    Simulation(#[from] macro_model::SimulationError),

    /// Metric extraction or scenario comparison failed.
    #[error(transparent)]
    Analysis(#[from] macro_analysis::AnalysisError),

    /// File IO failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failed.
    #[error("serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV export failed.
    #[error("csv export error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML rendering failed (check command).
    #[error("toml rendering error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
