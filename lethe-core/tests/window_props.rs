use lethe_core::AccessWindow;
use proptest::prelude::*;

proptest! {
    /// Counts and rates stay consistent under arbitrary record sequences.
    #[test]
    fn window_invariants_hold(
        capacity in 1usize..64,
        entries in prop::collection::vec((0i64..500, any::<bool>()), 0..200),
    ) {
        let mut w = AccessWindow::new(capacity);
        for &(t, legit) in &entries {
            w.record(t, legit, !legit);
        }

        prop_assert!(w.occupancy() <= capacity);
        prop_assert_eq!(w.occupancy(), entries.len().min(capacity));
        prop_assert_eq!(w.legit_count() + w.suspicious_count(), w.occupancy());

        for rate in [w.access_rate(), w.legit_rate(), w.suspicious_rate()] {
            prop_assert!((0.0..=1.0).contains(&rate));
        }
        // Rates divide by capacity: a full window of one kind reaches 1.0,
        // anything else stays strictly below.
        prop_assert!(
            (w.legit_rate() - w.legit_count() as f64 / capacity as f64).abs() < 1e-12
        );
    }

    /// Burst detection never fires with fewer than 5 suspicious entries in
    /// the whole window.
    #[test]
    fn burst_needs_five_suspicious(
        times in prop::collection::vec(0i64..50, 0..4),
        now in 0i64..60,
    ) {
        let mut w = AccessWindow::new(20);
        for &t in &times {
            w.record(t, false, true);
        }
        prop_assert!(!w.burst_detected(now));
    }
}
