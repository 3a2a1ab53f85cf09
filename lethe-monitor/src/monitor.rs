use lethe_core::config::MonitorConfig;
use lethe_core::model::{AccessEvent, Role, Sensitivity, TrackedObject};

/// Outcome of monitoring a single access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessOutcome {
    pub legitimate: bool,
    pub suspicious: bool,
    pub burst: bool,
}

/// Judges accesses and updates the target object's window statistics.
///
/// An access is legitimate only when the role policy allows it AND the
/// request score clears the threshold; the two gates are independent.
#[derive(Debug, Clone)]
pub struct AccessMonitor {
    request_score_threshold: f64,
}

impl AccessMonitor {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            request_score_threshold: config.request_score_threshold,
        }
    }

    /// Apply one event to its target: updates last-access time, the lifetime
    /// counter, and the sliding window.
    pub fn on_access(&self, object: &mut TrackedObject, event: &AccessEvent) -> AccessOutcome {
        object.last_access = event.time;
        object.lifetime_accesses += 1;

        let allowed = self.role_permits(event.role, object);
        let legitimate = allowed && event.request_score >= self.request_score_threshold;
        let suspicious = !legitimate;

        object.window.record(event.time, legitimate, suspicious);

        AccessOutcome {
            legitimate,
            suspicious,
            burst: object.window.burst_detected(event.time),
        }
    }

    /// Role policy: Admin always; Analyst for non-sensitive or anonymized
    /// objects; User for non-sensitive only; Service for non-sensitive and
    /// PII (its score gate is applied separately like every role's).
    pub fn role_permits(&self, role: Role, object: &TrackedObject) -> bool {
        match role {
            Role::Admin => true,
            Role::Analyst => !object.sensitivity.is_sensitive() || object.anonymized,
            Role::User => !object.sensitivity.is_sensitive(),
            Role::Service => matches!(
                object.sensitivity,
                Sensitivity::NonSensitive | Sensitivity::Pii
            ),
        }
    }
}
