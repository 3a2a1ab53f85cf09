/// Lethe system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sliding-window capacity for per-object access statistics.
pub const DEFAULT_ACCESS_WINDOW: usize = 20;

/// Trailing span (ticks, now-inclusive) examined by burst detection.
pub const BURST_SPAN: i64 = 3;

/// Minimum suspicious entries within [`BURST_SPAN`] to flag a burst.
pub const BURST_MIN_SUSPICIOUS: usize = 5;

/// Risk at or above this value sets the high-risk flag.
pub const HIGH_RISK_THRESHOLD: f64 = 0.70;

/// Number of trailing trust observations kept for convergence detection.
pub const TRUST_HISTORY_LEN: usize = 10;

/// Max−min band over a full trust history that counts as converged.
pub const DEFAULT_CONVERGENCE_BAND: f64 = 0.04;

/// Feature-vector dimension of the relevance model (bias included).
pub const RELEVANCE_DIM: usize = 9;

/// Evidence rows are flushed every this many ticks. Cadence only; decision
/// correctness never depends on it.
pub const EVIDENCE_FLUSH_INTERVAL: i64 = 10;
