//! Synthetic labeled samples for training, drawn from a fixed seed.
//!
//! Risk and anomaly are derived with the same formulas the risk analyzer
//! applies to live objects, so the training distribution matches inference.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lethe_core::config::{ModelConfig, RiskConfig};
use lethe_core::model::Sensitivity;

use crate::features::{self, DIM};

/// Pre-rescaled feature matrix plus binary labels.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    pub features: Vec<[f64; DIM]>,
    pub labels: Vec<u8>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Generate `config.samples` labeled samples from `config.train_seed`.
///
/// Exactly 8 uniform draws are consumed per sample, in this order:
/// 1. businessValue ~ U[0,1)
/// 2. mixture selector (20% high / 50% medium / 30% low access)
/// 3. accessRate uniform within the selected band
/// 4. legitRate factor: legitRate = clamp(accessRate · (0.6 + 0.4u))
/// 5. suspicious noise: suspiciousRate = clamp(accessRate − legitRate + 0.2u·(1−legitRate))
/// 6. trust noise: trust = clamp(0.5 + 0.4·legitRate − 0.6·suspiciousRate + 0.1(u−0.5))
/// 7. sensitivity categorical selector
/// 8. burst Bernoulli (p = 0.25 when suspiciousRate > 0.25, else 0.05)
///
/// Changing the draw order changes the trained weights; keep it stable.
pub fn generate(config: &ModelConfig) -> TrainingSet {
    let mut rng = StdRng::seed_from_u64(config.train_seed);
    let risk_cfg = RiskConfig::default();

    let mut xs = Vec::with_capacity(config.samples);
    let mut ys = Vec::with_capacity(config.samples);

    for _ in 0..config.samples {
        let business_value: f64 = rng.gen();

        let mix: f64 = rng.gen();
        let access_rate = if mix < 0.2 {
            0.6 + 0.4 * rng.gen::<f64>()
        } else if mix < 0.7 {
            0.2 + 0.5 * rng.gen::<f64>()
        } else {
            0.25 * rng.gen::<f64>()
        };

        let legit_rate = (access_rate * (0.6 + 0.4 * rng.gen::<f64>())).clamp(0.0, 1.0);
        let suspicious_rate = (access_rate - legit_rate
            + 0.2 * rng.gen::<f64>() * (1.0 - legit_rate))
            .clamp(0.0, 1.0);
        let trust = (0.5 + 0.4 * legit_rate - 0.6 * suspicious_rate
            + 0.1 * (rng.gen::<f64>() - 0.5))
            .clamp(0.0, 1.0);

        let sensitivity = Sensitivity::sample(rng.gen());

        let burst_prob = if suspicious_rate > 0.25 { 0.25 } else { 0.05 };
        let burst = rng.gen::<f64>() < burst_prob;

        let burst_indicator = if burst { 1.0 } else { 0.0 };
        let anomaly_score = (0.5 * suspicious_rate + 0.5 * burst_indicator).clamp(0.0, 1.0);
        let mut risk = sensitivity.base_risk();
        if suspicious_rate > risk_cfg.suspicious_rate_trigger {
            risk += risk_cfg.rate_penalty;
        }
        if burst {
            risk += risk_cfg.burst_penalty;
        }
        risk = risk.clamp(0.0, 1.0);

        let mut x = [
            1.0,
            business_value,
            access_rate,
            legit_rate,
            suspicious_rate,
            trust,
            sensitivity.numeric(),
            anomaly_score,
            risk,
        ];
        features::rescale(&mut x);

        let mut relevant = business_value > 0.65 || access_rate > 0.50;
        if risk > 0.85 && suspicious_rate > 0.35 {
            relevant = false;
        }

        xs.push(x);
        ys.push(u8::from(relevant));
    }

    TrainingSet {
        features: xs,
        labels: ys,
    }
}
