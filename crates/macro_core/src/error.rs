//! Error types for calibration loading and validation.

use thiserror::Error;

/// Categorised calibration errors.
///
/// # Variants
/// - `InvalidParameter`: a structural parameter or steady-state level
///   violates its documented constraint
/// - `ConfigurationLoad`: the calibration override file could not be read
///   or parsed
///
/// A `ConfigurationLoad` error is recoverable: [`crate::CalibrationStore::load`]
/// reports it as a warning and falls back to the built-in defaults, which is
/// the documented degradation path. `InvalidParameter` is a configuration
/// defect and is never silently repaired.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// A parameter value violates its documented constraint.
    #[error("invalid parameter {name}: {value} ({constraint})")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable constraint, e.g. "must lie in (0, 1)".
        constraint: &'static str,
    },

    /// The calibration override file could not be read or parsed.
    #[error("failed to load calibration override {path}: {reason}")]
    ConfigurationLoad {
        /// Path of the override file.
        path: String,
        /// Underlying IO or parse failure.
        reason: String,
    },
}
