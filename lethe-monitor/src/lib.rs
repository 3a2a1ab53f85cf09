//! # lethe-monitor
//!
//! The monitoring step: judges each access event against the role policy
//! and request-score gate, then feeds the outcome into the target object's
//! sliding window.

mod monitor;

pub use monitor::{AccessMonitor, AccessOutcome};
