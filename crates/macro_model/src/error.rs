//! Error types for shock specification and propagation.

use macro_core::Variable;
use thiserror::Error;

/// Errors surfaced by the propagation engine and its input validation.
///
/// Both variants are deterministic: the same inputs reproduce the same
/// error. There is no transient or retryable failure class in the kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Amplitude or horizon outside the supported range.
    ///
    /// User input error; surfaced verbatim to the caller, never clamped.
    #[error("invalid shock specification: {field} {value} outside supported range [{min}, {max}]")]
    InvalidShockSpecification {
        /// The offending field ("amplitude" or "horizon").
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Lower bound of the supported range.
        min: f64,
        /// Upper bound of the supported range.
        max: f64,
    },

    /// Propagation produced a deviation beyond the ±100% stability bound.
    ///
    /// Indicates a miscalibrated feedback loop producing an explosive
    /// path; the offending variable and period identify the defect.
    #[error(
        "numerical instability: {variable} deviation {deviation:.4} exceeds the \
         stability bound at period {period}"
    )]
    NumericalInstability {
        /// Variable whose deviation left the stable region.
        variable: Variable,
        /// First period at which the bound was exceeded.
        period: usize,
        /// The offending deviation.
        deviation: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_specification_display_names_field() {
        let err = SimulationError::InvalidShockSpecification {
            field: "amplitude",
            value: 0.0005,
            min: 0.001,
            max: 0.05,
        };
        let text = format!("{}", err);
        assert!(text.contains("amplitude"));
        assert!(text.contains("0.0005"));
        assert!(text.contains("[0.001, 0.05]"));
    }

    #[test]
    fn test_numerical_instability_display_names_variable_and_period() {
        let err = SimulationError::NumericalInstability {
            variable: Variable::InterestRate,
            period: 8,
            deviation: 1.9966,
        };
        let text = format!("{}", err);
        assert!(text.contains("InterestRate"));
        assert!(text.contains("period 8"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SimulationError::InvalidShockSpecification {
            field: "horizon",
            value: 61.0,
            min: 20.0,
            max: 60.0,
        };
        let _: &dyn std::error::Error = &err;
    }
}
