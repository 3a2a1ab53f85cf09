use serde::{Deserialize, Serialize};

/// Retention-decision thresholds and protection windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Ticks after creation during which objects are always retained.
    /// Default: 5.
    pub grace_period: i64,
    /// Ticks during which a never-accessed object is protected from
    /// low-trust deletion. Default: 20.
    pub cold_start_window: i64,
    /// High-trust threshold. Default: 0.75.
    pub t_high: f64,
    /// Mid-trust threshold. Default: 0.40.
    pub t_mid: f64,
    /// High-risk threshold. Default: 0.70.
    pub r_high: f64,
    /// Mid-risk threshold. Default: 0.50.
    pub r_mid: f64,
    /// Low predicted-relevance threshold. Default: 0.30.
    pub p_low: f64,
    /// Mid predicted-relevance threshold. Default: 0.50.
    pub p_mid: f64,
    /// Risk reduction applied when an object is anonymized. Default: 0.20.
    pub anonymize_risk_reduction: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            grace_period: 5,
            cold_start_window: 20,
            t_high: 0.75,
            t_mid: 0.40,
            r_high: 0.70,
            r_mid: 0.50,
            p_low: 0.30,
            p_mid: 0.50,
            anonymize_risk_reduction: 0.20,
        }
    }
}
