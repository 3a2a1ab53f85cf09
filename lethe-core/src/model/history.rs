use crate::constants::TRUST_HISTORY_LEN;

/// Fixed-size circular history of the last 10 trust values, used only for
/// convergence detection.
#[derive(Debug, Clone)]
pub struct TrustHistory {
    values: [f64; TRUST_HISTORY_LEN],
    len: usize,
    pos: usize,
}

impl TrustHistory {
    pub fn new() -> Self {
        Self {
            values: [0.0; TRUST_HISTORY_LEN],
            len: 0,
            pos: 0,
        }
    }

    /// Push one observation, overwriting the oldest once full.
    pub fn push(&mut self, value: f64) {
        self.values[self.pos] = value;
        self.pos = (self.pos + 1) % TRUST_HISTORY_LEN;
        if self.len < TRUST_HISTORY_LEN {
            self.len += 1;
        }
    }

    /// Whether all 10 slots have been observed at least once.
    pub fn is_full(&self) -> bool {
        self.len == TRUST_HISTORY_LEN
    }

    /// max − min over the values observed so far. 0.0 when empty.
    pub fn spread(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values[..self.len] {
            min = min.min(v);
            max = max.max(v);
        }
        max - min
    }
}

impl Default for TrustHistory {
    fn default() -> Self {
        Self::new()
    }
}
