use lethe_core::model::TrackedObject;

/// Push the current trust value into the object's rolling history and, once
/// the history is full and its spread fits inside `band`, record the
/// convergence tick. The tick is recorded at most once per object; later
/// fluctuation keeps updating the history but never the recorded tick.
pub fn observe(object: &mut TrackedObject, now: i64, band: f64) {
    object.trust_history.push(object.trust.value());

    if object.convergence_tick >= 0 {
        return;
    }
    if !object.trust_history.is_full() {
        return;
    }
    if object.trust_history.spread() <= band {
        object.convergence_tick = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lethe_core::constants::DEFAULT_CONVERGENCE_BAND;
    use lethe_core::model::{Sensitivity, Trust};

    fn object() -> TrackedObject {
        TrackedObject::new(0, Sensitivity::NonSensitive, 0.6, 0.5, 0, true, 20)
    }

    #[test]
    fn constant_trust_converges_on_tenth_observation() {
        let mut obj = object();
        for now in 1..=9 {
            observe(&mut obj, now, DEFAULT_CONVERGENCE_BAND);
            assert_eq!(obj.convergence_tick, -1, "converged early at {now}");
        }
        observe(&mut obj, 10, DEFAULT_CONVERGENCE_BAND);
        assert_eq!(obj.convergence_tick, 10);
    }

    #[test]
    fn convergence_tick_is_immutable_after_set() {
        let mut obj = object();
        for now in 1..=10 {
            observe(&mut obj, now, DEFAULT_CONVERGENCE_BAND);
        }
        assert_eq!(obj.convergence_tick, 10);

        // Wild swings afterwards must not reset it.
        for now in 11..=30 {
            obj.trust = Trust::new(if now % 2 == 0 { 0.1 } else { 0.9 });
            observe(&mut obj, now, DEFAULT_CONVERGENCE_BAND);
        }
        assert_eq!(obj.convergence_tick, 10);
    }

    #[test]
    fn wide_band_history_does_not_converge() {
        let mut obj = object();
        for now in 1..=20 {
            obj.trust = Trust::new(0.5 + 0.05 * (now % 2) as f64);
            observe(&mut obj, now, DEFAULT_CONVERGENCE_BAND);
        }
        assert_eq!(obj.convergence_tick, -1);
    }
}
