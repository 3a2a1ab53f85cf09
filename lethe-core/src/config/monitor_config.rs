use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ACCESS_WINDOW;

/// Access-monitoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Sliding-window capacity W. Rates always divide by this. Default: 20.
    pub window_size: usize,
    /// Requests scoring below this are suspicious even when the role is
    /// allowed. Default: 0.55.
    pub request_score_threshold: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_ACCESS_WINDOW,
            request_score_threshold: 0.55,
        }
    }
}
