//! Structural calibration: parameters, steady state, and the override store.
//!
//! This module provides:
//! - [`CalibrationParameters`]: the immutable structural coefficients
//! - [`SteadyState`]: the no-shock level of every tracked variable
//! - [`CalibrationStore`]: defaults plus optional TOML override loading

mod parameters;
mod steady_state;
mod store;

pub use parameters::CalibrationParameters;
pub use steady_state::SteadyState;
pub use store::CalibrationStore;
