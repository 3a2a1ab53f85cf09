use lethe_core::config::RiskConfig;
use lethe_core::constants::HIGH_RISK_THRESHOLD;
use lethe_core::model::{RiskSnapshot, TrackedObject};

/// Computes a fresh risk snapshot per tick. Pure function of the object's
/// sensitivity and window state; the snapshot is overwritten wholesale.
#[derive(Debug, Clone, Default)]
pub struct RiskAnalyzer {
    config: RiskConfig,
}

impl RiskAnalyzer {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn update_risk(&self, object: &mut TrackedObject, now: i64) {
        let base = object.sensitivity.base_risk();
        let suspicious_rate = object.window.suspicious_rate();
        let burst = object.window.burst_detected(now);

        let mut penalties = 0.0;
        if suspicious_rate > self.config.suspicious_rate_trigger {
            penalties += self.config.rate_penalty;
        }
        if burst {
            penalties += self.config.burst_penalty;
        }

        let burst_indicator = if burst { 1.0 } else { 0.0 };
        let anomaly_score = (0.5 * suspicious_rate + 0.5 * burst_indicator).clamp(0.0, 1.0);
        let risk = (base + penalties).clamp(0.0, 1.0);

        object.risk = RiskSnapshot {
            anomaly_score,
            risk,
            high_risk: risk >= HIGH_RISK_THRESHOLD,
        };
    }
}
