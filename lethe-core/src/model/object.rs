use serde::{Deserialize, Serialize};

use super::history::TrustHistory;
use super::trust::Trust;
use super::window::AccessWindow;
use crate::constants::HIGH_RISK_THRESHOLD;

/// Data-sensitivity class, ordered by rising sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sensitivity {
    NonSensitive,
    Pii,
    Financial,
    Health,
}

impl Sensitivity {
    /// Base risk contributed by the sensitivity class alone.
    pub fn base_risk(self) -> f64 {
        match self {
            Sensitivity::NonSensitive => 0.10,
            Sensitivity::Pii => 0.60,
            Sensitivity::Financial => 0.70,
            Sensitivity::Health => 0.80,
        }
    }

    /// Numeric encoding used as a relevance-model feature.
    pub fn numeric(self) -> f64 {
        match self {
            Sensitivity::NonSensitive => 0.0,
            Sensitivity::Pii => 0.4,
            Sensitivity::Financial => 0.7,
            Sensitivity::Health => 1.0,
        }
    }

    /// Sample from the fixed categorical distribution
    /// (55% NonSensitive, 25% PII, 12% Financial, 8% Health) given a
    /// uniform draw in [0, 1).
    pub fn sample(u: f64) -> Self {
        if u < 0.55 {
            Sensitivity::NonSensitive
        } else if u < 0.80 {
            Sensitivity::Pii
        } else if u < 0.92 {
            Sensitivity::Financial
        } else {
            Sensitivity::Health
        }
    }

    pub fn is_sensitive(self) -> bool {
        self != Sensitivity::NonSensitive
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sensitivity::NonSensitive => "NonSensitive",
            Sensitivity::Pii => "PII",
            Sensitivity::Financial => "Financial",
            Sensitivity::Health => "Health",
        }
    }
}

/// Coarse storage state. `Deleted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Hot,
    Cold,
    Deleted,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Hot => "Hot",
            Tier::Cold => "Cold",
            Tier::Deleted => "Deleted",
        }
    }
}

/// Risk evaluation result, overwritten wholesale each tick — never merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskSnapshot {
    pub anomaly_score: f64,
    pub risk: f64,
    pub high_risk: bool,
}

impl RiskSnapshot {
    /// Recompute the high-risk flag from the current risk value.
    pub fn refresh_flag(&mut self) {
        self.high_risk = self.risk >= HIGH_RISK_THRESHOLD;
    }
}

/// One tracked data item. All mutable per-tick state is exclusively owned
/// here; nothing is shared across objects during evaluation.
#[derive(Debug, Clone)]
pub struct TrackedObject {
    pub id: u32,
    pub sensitivity: Sensitivity,
    pub trust: Trust,
    pub tier: Tier,
    pub anonymized: bool,
    /// Immutable base business value in [0, 1].
    pub business_value: f64,
    pub created_at: i64,
    pub last_access: i64,
    pub lifetime_accesses: u64,
    pub window: AccessWindow,
    pub risk: RiskSnapshot,
    /// Ground-truth keep label, for post-hoc evaluation only. The decision
    /// pipeline never reads it.
    pub keep_label: bool,
    /// Tick the object was deleted at; −1 while live.
    pub deleted_at: i64,
    /// Tick trust converged at; −1 until set, immutable afterwards.
    pub convergence_tick: i64,
    pub trust_history: TrustHistory,
}

impl TrackedObject {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        sensitivity: Sensitivity,
        initial_trust: f64,
        business_value: f64,
        created_at: i64,
        keep_label: bool,
        window_capacity: usize,
    ) -> Self {
        Self {
            id,
            sensitivity,
            trust: Trust::new(initial_trust),
            tier: Tier::Hot,
            anonymized: false,
            business_value: business_value.clamp(0.0, 1.0),
            created_at,
            last_access: created_at,
            lifetime_accesses: 0,
            window: AccessWindow::new(window_capacity),
            risk: RiskSnapshot::default(),
            keep_label,
            deleted_at: -1,
            convergence_tick: -1,
            trust_history: TrustHistory::new(),
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.tier == Tier::Deleted
    }

    /// Transition to the terminal Deleted tier, recording the tick.
    pub fn mark_deleted(&mut self, now: i64) {
        self.tier = Tier::Deleted;
        self.deleted_at = now;
    }

    pub fn age(&self, now: i64) -> i64 {
        now - self.created_at
    }
}
