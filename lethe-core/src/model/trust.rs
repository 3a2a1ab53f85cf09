use serde::{Deserialize, Serialize};
use std::fmt;

/// Trust score clamped to [0.0, 1.0].
/// A decaying scalar reputation estimate for a tracked object.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Trust(f64);

impl Trust {
    /// Create a new Trust, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Trust {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Trust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl From<f64> for Trust {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Trust> for f64 {
    fn from(t: Trust) -> Self {
        t.0
    }
}
