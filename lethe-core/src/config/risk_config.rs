use serde::{Deserialize, Serialize};

/// Risk-analyzer configuration. Penalties are additive and applied
/// independently on top of the sensitivity base risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Suspicious-rate level above which the rate penalty applies. Default: 0.20.
    pub suspicious_rate_trigger: f64,
    /// Penalty added when the suspicious rate exceeds the trigger. Default: 0.15.
    pub rate_penalty: f64,
    /// Penalty added while a burst is detected. Default: 0.15.
    pub burst_penalty: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            suspicious_rate_trigger: 0.20,
            rate_penalty: 0.15,
            burst_penalty: 0.15,
        }
    }
}
