use serde::{Deserialize, Serialize};

use super::object::{Sensitivity, Tier, TrackedObject};

/// Retention action taken for one object in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Retain,
    Archive,
    Anonymize,
    Delete,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Retain => "Retain",
            Action::Archive => "Archive",
            Action::Anonymize => "Anonymize",
            Action::Delete => "Delete",
        }
    }
}

/// Short stable identifier for the decision rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonCode {
    AlreadyDeleted,
    GracePeriod,
    HighRiskKeepValue,
    ColdStartHold,
    LowTrustLowValue,
    HighTrustHighValue,
    MidZone,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::AlreadyDeleted => "already_deleted",
            ReasonCode::GracePeriod => "grace_period",
            ReasonCode::HighRiskKeepValue => "high_risk_keep_value",
            ReasonCode::ColdStartHold => "cold_start_hold",
            ReasonCode::LowTrustLowValue => "low_trust_low_value",
            ReasonCode::HighTrustHighValue => "high_trust_high_value",
            ReasonCode::MidZone => "mid_zone",
        }
    }
}

/// One evidence row: the full per-object observation for one tick, captured
/// after the decision mutated the object.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionRecord {
    pub time: i64,
    pub object_id: u32,
    pub sensitivity: Sensitivity,
    pub trust: f64,
    pub access_rate: f64,
    pub legit_rate: f64,
    pub suspicious_rate: f64,
    pub risk: f64,
    pub anomaly_score: f64,
    pub predicted_relevance: f64,
    pub action: Action,
    pub tier: Tier,
    pub anonymized: bool,
    pub reason: ReasonCode,
}

impl DecisionRecord {
    /// Snapshot an object's post-decision state into a record.
    pub fn capture(
        time: i64,
        object: &TrackedObject,
        predicted_relevance: f64,
        action: Action,
        reason: ReasonCode,
    ) -> Self {
        Self {
            time,
            object_id: object.id,
            sensitivity: object.sensitivity,
            trust: object.trust.value(),
            access_rate: object.window.access_rate(),
            legit_rate: object.window.legit_rate(),
            suspicious_rate: object.window.suspicious_rate(),
            risk: object.risk.risk,
            anomaly_score: object.risk.anomaly_score,
            predicted_relevance,
            action,
            tier: object.tier,
            anonymized: object.anonymized,
            reason,
        }
    }
}
