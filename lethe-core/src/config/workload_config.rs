use serde::{Deserialize, Serialize};

/// Synthetic-workload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Seed for the workload RNG. Default: 99.
    pub seed: u64,
    /// Fraction of objects with a Hot access profile. Default: 0.15.
    pub hot_fraction: f64,
    /// Fraction of objects with a Warm access profile. Default: 0.25.
    /// The remainder is Cold.
    pub warm_fraction: f64,
    /// Per-tick legitimate-access probability for Hot objects. Default: 0.25.
    pub hot_access_prob: f64,
    /// Warm objects are only eligible every this many ticks. Default: 5.
    pub warm_period: i64,
    /// Access probability for Warm objects on eligible ticks. Default: 0.18.
    pub warm_access_prob: f64,
    /// Per-tick access probability for Cold objects. Default: 0.01.
    pub cold_access_prob: f64,
    /// Background suspicious-attempt probability for sensitive objects.
    /// Default: 0.0015.
    pub noise_prob: f64,
    /// Ticks between attack bursts against sensitive objects. Default: 30.
    pub burst_interval: i64,
    /// Max sensitive objects targeted per burst. Default: 40.
    pub burst_targets: usize,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            seed: 99,
            hot_fraction: 0.15,
            warm_fraction: 0.25,
            hot_access_prob: 0.25,
            warm_period: 5,
            warm_access_prob: 0.18,
            cold_access_prob: 0.01,
            noise_prob: 0.0015,
            burst_interval: 30,
            burst_targets: 40,
        }
    }
}
