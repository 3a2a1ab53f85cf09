//! # lethe-decay
//!
//! Trust update engine. Runs after the risk analyzer (it consumes the risk
//! snapshot) and before convergence observation each tick.

mod convergence;
mod engine;

pub use convergence::observe;
pub use engine::TrustDecayEngine;
