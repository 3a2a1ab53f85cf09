use serde::{Deserialize, Serialize};

/// Relevance-model training configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Synthetic training samples generated before the run. Default: 50_000.
    pub samples: usize,
    /// Full-batch gradient-descent epochs. Default: 200.
    pub epochs: usize,
    /// Learning rate. Default: 0.01.
    pub learning_rate: f64,
    /// L2 penalty on the mean logistic loss. Default: 1e-4.
    pub l2: f64,
    /// Per-weight per-epoch update magnitude clip. Default: 0.1.
    pub step_clip: f64,
    /// Seed for the small random weight initialization. Default: 42.
    pub init_seed: u64,
    /// Seed for synthetic sample generation. Default: 123.
    pub train_seed: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            samples: 50_000,
            epochs: 200,
            learning_rate: 0.01,
            l2: 1e-4,
            step_clip: 0.1,
            init_seed: 42,
            train_seed: 123,
        }
    }
}
