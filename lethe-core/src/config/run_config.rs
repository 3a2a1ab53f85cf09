use serde::{Deserialize, Serialize};

/// Top-level run parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of tracked objects. Default: 10_000.
    pub population: usize,
    /// Run length in ticks. Default: 300.
    pub duration: i64,
    /// Logical tick size. Default: 1.
    pub tick: i64,
    /// Seed for population construction (sensitivity, value, initial trust,
    /// profiles). Default: 7.
    pub seed: u64,
    /// CSV audit-trail path. Default: "lethe_audit.csv".
    pub evidence_path: String,
    /// Suppress evidence rows whose action repeats the object's previous
    /// logged action. Default: false.
    pub changed_only: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            population: 10_000,
            duration: 300,
            tick: 1,
            seed: 7,
            evidence_path: "lethe_audit.csv".to_string(),
            changed_only: false,
        }
    }
}
