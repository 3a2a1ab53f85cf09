//! # lethe-core
//!
//! Foundation crate for the Lethe trust-decay retention simulator.
//! Defines the tracked-object model, config, errors, constants, and the
//! traits the pipeline crates implement. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SimConfig;
pub use errors::{LetheError, LetheResult};
pub use model::{
    AccessEvent, AccessWindow, Action, DecisionRecord, ReasonCode, RiskSnapshot, Role,
    Sensitivity, Tier, TrackedObject, Trust, TrustHistory,
};
