use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONVERGENCE_BAND;

/// Trust-decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Inactivity horizon (ticks): inactivity saturates at this age. Default: 30.
    pub half_life: i64,
    /// Trust lost per tick at full inactivity. Default: 0.03.
    pub decay_rate: f64,
    /// Trust gained per unit legitimate-access rate. Default: 0.10.
    pub reinforcement_rate: f64,
    /// Trust lost per unit risk. Default: 0.12.
    pub risk_weight: f64,
    /// Trust lost per unit anomaly score. Default: 0.20.
    pub anomaly_weight: f64,
    /// Max−min band over the trust history that counts as converged.
    /// Default: 0.04.
    pub convergence_band: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            half_life: 30,
            decay_rate: 0.03,
            reinforcement_rate: 0.10,
            risk_weight: 0.12,
            anomaly_weight: 0.20,
            convergence_band: DEFAULT_CONVERGENCE_BAND,
        }
    }
}
