//! # lethe-risk
//!
//! Derives the per-object risk snapshot from the sensitivity class and the
//! current window statistics. Must run before trust decay and relevance
//! prediction each tick, since both consume its outputs.

mod analyzer;

pub use analyzer::RiskAnalyzer;
