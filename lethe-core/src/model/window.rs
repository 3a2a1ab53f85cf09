use crate::constants::{BURST_MIN_SUSPICIOUS, BURST_SPAN};

#[derive(Debug, Clone, Copy)]
struct WindowEntry {
    time: i64,
    legit: bool,
    suspicious: bool,
}

/// Bounded sliding window of recent access outcomes, owned by exactly one
/// tracked object.
///
/// Fixed-capacity ring buffer: no per-record allocation once full. Rates
/// divide running counts by the window *capacity* W, not the current
/// occupancy, so a partially filled window deliberately under-reports.
#[derive(Debug, Clone)]
pub struct AccessWindow {
    capacity: usize,
    entries: Vec<WindowEntry>,
    /// Index of the oldest entry once the ring is full.
    head: usize,
    legit_count: usize,
    suspicious_count: usize,
}

impl AccessWindow {
    /// Create an empty window with capacity `capacity` (W).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
            head: 0,
            legit_count: 0,
            suspicious_count: 0,
        }
    }

    /// Append one outcome, evicting the oldest entry when the window is full.
    pub fn record(&mut self, time: i64, legit: bool, suspicious: bool) {
        if self.entries.len() == self.capacity {
            let evicted = self.entries[self.head];
            if evicted.legit {
                self.legit_count -= 1;
            }
            if evicted.suspicious {
                self.suspicious_count -= 1;
            }
            self.entries[self.head] = WindowEntry {
                time,
                legit,
                suspicious,
            };
            self.head = (self.head + 1) % self.capacity;
        } else {
            self.entries.push(WindowEntry {
                time,
                legit,
                suspicious,
            });
        }
        if legit {
            self.legit_count += 1;
        }
        if suspicious {
            self.suspicious_count += 1;
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries currently held (≤ capacity).
    pub fn occupancy(&self) -> usize {
        self.entries.len()
    }

    pub fn legit_count(&self) -> usize {
        self.legit_count
    }

    pub fn suspicious_count(&self) -> usize {
        self.suspicious_count
    }

    /// Total entries / W.
    pub fn access_rate(&self) -> f64 {
        self.entries.len() as f64 / self.capacity as f64
    }

    /// Legitimate entries / W.
    pub fn legit_rate(&self) -> f64 {
        self.legit_count as f64 / self.capacity as f64
    }

    /// Suspicious entries / W.
    pub fn suspicious_rate(&self) -> f64 {
        self.suspicious_count as f64 / self.capacity as f64
    }

    /// True iff at least 5 suspicious entries fall within the now-inclusive
    /// trailing 3-tick span. Pure read; no eviction happens here.
    pub fn burst_detected(&self, now: i64) -> bool {
        let mut count = 0;
        for entry in &self.entries {
            if entry.suspicious && now - entry.time <= BURST_SPAN {
                count += 1;
                if count >= BURST_MIN_SUSPICIOUS {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_divide_by_capacity_not_occupancy() {
        let mut w = AccessWindow::new(20);
        for t in 0..3 {
            w.record(t, true, false);
        }
        // 3 of 20 slots filled, all legit: 0.15, never 1.0.
        assert!((w.legit_rate() - 0.15).abs() < 1e-12);
        assert!((w.access_rate() - 0.15).abs() < 1e-12);
        assert_eq!(w.suspicious_rate(), 0.0);
    }

    #[test]
    fn eviction_keeps_counts_consistent() {
        let mut w = AccessWindow::new(4);
        w.record(0, true, false);
        w.record(1, false, true);
        w.record(2, true, false);
        w.record(3, true, false);
        // Full. Next record evicts the t=0 legit entry.
        w.record(4, false, true);
        assert_eq!(w.occupancy(), 4);
        assert_eq!(w.legit_count(), 2);
        assert_eq!(w.suspicious_count(), 2);
        // Evict t=1 (suspicious).
        w.record(5, true, false);
        assert_eq!(w.legit_count(), 3);
        assert_eq!(w.suspicious_count(), 1);
    }

    #[test]
    fn burst_requires_five_suspicious_in_span() {
        let mut w = AccessWindow::new(20);
        for _ in 0..4 {
            w.record(10, false, true);
        }
        assert!(!w.burst_detected(10), "exactly 4 must not trigger");
        w.record(10, false, true);
        assert!(w.burst_detected(10), "exactly 5 must trigger");
    }

    #[test]
    fn burst_span_is_now_inclusive_three_ticks() {
        let mut w = AccessWindow::new(20);
        // 5 suspicious at t=7: still within span at now=10 (10-7 <= 3).
        for _ in 0..5 {
            w.record(7, false, true);
        }
        assert!(w.burst_detected(10));
        assert!(!w.burst_detected(11), "entries aged out of the span");
    }

    #[test]
    fn burst_ignores_legit_entries() {
        let mut w = AccessWindow::new(20);
        for _ in 0..10 {
            w.record(5, true, false);
        }
        assert!(!w.burst_detected(5));
    }
}
