//! # macro_core: Foundation for the Macrosim Impulse-Response Engine
//!
//! ## Foundation Layer Role
//!
//! macro_core serves as the bottom layer of the workspace, providing:
//! - The fifteen-variable catalogue of the small open-economy model
//!   (`variables`)
//! - Structural calibration parameters with documented defaults
//!   (`calibration::parameters`)
//! - Steady-state levels for every tracked variable
//!   (`calibration::steady_state`)
//! - Calibration override loading with fallback-to-defaults
//!   (`calibration::store`)
//! - Error types: `CalibrationError` (`error`)
//!
//! ## Minimal Dependency Principle
//!
//! The foundation layer depends on no other macro_* crate, with minimal
//! external dependencies:
//! - serde/toml: calibration override parsing and result serialisation
//! - thiserror: structured error types
//! - tracing: the configuration-fallback warning
//!
//! ## Usage Examples
//!
//! ```rust
//! use macro_core::{CalibrationParameters, Variable};
//!
//! let params = CalibrationParameters::default();
//! assert!(params.validate().is_ok());
//!
//! // The canonical column order of every table and trajectory row
//! assert_eq!(Variable::ALL[0], Variable::Output);
//! assert_eq!(Variable::Output.name(), "Output");
//!
//! // Steady-state level lookup
//! let policy_rate = params.steady_state.value(Variable::InterestRate);
//! assert!(policy_rate > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calibration;
pub mod error;
pub mod variables;

pub use calibration::{CalibrationParameters, CalibrationStore, SteadyState};
pub use error::CalibrationError;
pub use variables::{Variable, VariableUnit};
