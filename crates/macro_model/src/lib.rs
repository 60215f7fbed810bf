//! Kernel of the macrosim workspace: the shock catalogue, the structural
//! transmission tables and the impulse propagation engine.
//!
//! The engine is a reduced-form impulse propagator, not a full
//! rational-expectations solver: each simulation applies one deterministic
//! shock from the steady state and rolls the fifteen-variable system
//! forward one period at a time. All structural knowledge lives in
//! explicit data tables ([`tables`]) keyed by [`ShockType`], so the
//! transmission mechanism stays auditable independently of the propagation
//! loop.
//!
//! ```rust
//! use macro_core::CalibrationParameters;
//! use macro_model::{simulate, ShockSpecification, ShockType};
//!
//! let params = CalibrationParameters::default();
//! let spec = ShockSpecification::new(ShockType::MonetaryPolicy, 0.01, 40).unwrap();
//! let trajectory = simulate(&spec, &params).unwrap();
//! assert_eq!(trajectory.periods(), 41);
//! ```

pub mod engine;
pub mod error;
pub mod shocks;
pub mod tables;
pub mod trajectory;

pub use engine::{simulate, STABILITY_BOUND};
pub use error::SimulationError;
pub use shocks::{ShockSpecification, ShockType};
pub use trajectory::Trajectory;
