use serde::{Deserialize, Serialize};

/// Requester role attached to an access event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Analyst,
    User,
    Service,
}

/// One access attempt against a tracked object. Immutable; consumed exactly
/// once by the monitoring step in the tick it is scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessEvent {
    pub time: i64,
    pub object_id: u32,
    pub role: Role,
    /// Legitimacy as judged by the event producer (workload side).
    pub legitimate: bool,
    /// Request quality score in [0, 1]; gated separately by the monitor.
    pub request_score: f64,
}
