use lethe_core::config::DecisionConfig;
use lethe_core::model::{Action, ReasonCode, Tier, TrackedObject};

/// Outcome of one decision: the action plus the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub reason: ReasonCode,
}

impl Decision {
    fn new(action: Action, reason: ReasonCode) -> Self {
        Self { action, reason }
    }
}

/// Maps (trust, risk, predicted relevance, age, access history) to a
/// retention action, mutating tier and the anonymized flag as a side effect.
/// The first matching rule wins; later rules are never consulted.
#[derive(Debug, Clone, Default)]
pub struct RetentionController {
    config: DecisionConfig,
}

impl RetentionController {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    pub fn decide(
        &self,
        object: &mut TrackedObject,
        predicted_relevance: f64,
        now: i64,
    ) -> Decision {
        let cfg = &self.config;

        // (a) Deleted is terminal: re-affirm without touching the object.
        if object.is_deleted() {
            return Decision::new(Action::Delete, ReasonCode::AlreadyDeleted);
        }

        // (b) Grace period: newly created objects are always retained.
        if object.age(now) < cfg.grace_period {
            object.tier = Tier::Hot;
            return Decision::new(Action::Retain, ReasonCode::GracePeriod);
        }

        let trust = object.trust.value();
        let risk = object.risk.risk;

        // (c) High risk but worth keeping: anonymize and discount the risk.
        if risk >= cfg.r_high && predicted_relevance >= cfg.p_mid {
            object.anonymized = true;
            object.risk.risk = (risk - cfg.anonymize_risk_reduction).clamp(0.0, 1.0);
            object.risk.refresh_flag();
            return Decision::new(Action::Anonymize, ReasonCode::HighRiskKeepValue);
        }

        // (d) Cold start: never-accessed objects stay hot for a while.
        if object.lifetime_accesses == 0 && object.age(now) < cfg.cold_start_window {
            object.tier = Tier::Hot;
            return Decision::new(Action::Retain, ReasonCode::ColdStartHold);
        }

        // (e) Clearly low trust and low predicted value.
        if trust < cfg.t_mid && predicted_relevance < cfg.p_low {
            object.mark_deleted(now);
            return Decision::new(Action::Delete, ReasonCode::LowTrustLowValue);
        }

        // (f) Clearly high trust and high predicted value, moderate risk.
        if trust >= cfg.t_high && predicted_relevance >= cfg.p_mid && risk < cfg.r_mid {
            object.tier = Tier::Hot;
            return Decision::new(Action::Retain, ReasonCode::HighTrustHighValue);
        }

        // (g) Everything else is archived.
        object.tier = Tier::Cold;
        Decision::new(Action::Archive, ReasonCode::MidZone)
    }
}
