//! # lethe-sim
//!
//! Everything around the scoring pipeline: pre-computed synthetic workload,
//! the per-tick orchestrator, the CSV evidence trail, and aggregate run
//! metrics. The simulation is single-threaded by design — each object's
//! state is exclusively owned and evaluated in ascending-id order, so runs
//! are fully deterministic for fixed seeds.

pub mod evidence;
pub mod metrics;
pub mod orchestrator;
pub mod workload;

pub use evidence::EvidenceLog;
pub use metrics::{MetricsAggregator, RunSummary};
pub use orchestrator::Simulation;
pub use workload::{Profile, WorkloadGenerator};
