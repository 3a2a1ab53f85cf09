//! # lethe-retention
//!
//! The retention state machine: an explicit ordered list of guarded rules
//! evaluated top to bottom with early return. Rule priority and exclusivity
//! are part of the observable contract and must not be reordered.

mod controller;

pub use controller::{Decision, RetentionController};
