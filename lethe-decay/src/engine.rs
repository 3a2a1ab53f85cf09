use lethe_core::config::DecayConfig;
use lethe_core::model::{TrackedObject, Trust};

/// Linear trust update:
///
/// ```text
/// trust' = clamp(trust
///   − decayRate · inactivity
///   + reinforcementRate · legitRate
///   − riskWeight · risk
///   − anomalyWeight · anomaly, 0, 1)
/// ```
///
/// where inactivity = min(1, max(0, now − lastAccess) / halfLife).
#[derive(Debug, Clone, Default)]
pub struct TrustDecayEngine {
    config: DecayConfig,
}

impl TrustDecayEngine {
    pub fn new(config: DecayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    pub fn update_trust(&self, object: &mut TrackedObject, now: i64) {
        let idle = (now - object.last_access).max(0) as f64;
        let inactivity = (idle / self.config.half_life as f64).min(1.0);

        let updated = object.trust.value()
            - self.config.decay_rate * inactivity
            + self.config.reinforcement_rate * object.window.legit_rate()
            - self.config.risk_weight * object.risk.risk
            - self.config.anomaly_weight * object.risk.anomaly_score;

        object.trust = Trust::new(updated);
    }
}
