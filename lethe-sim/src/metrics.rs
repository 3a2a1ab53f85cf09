//! Aggregate run metrics, accumulated per tick after decisions and
//! summarized at end of run. The ground-truth keep label is consulted only
//! here, never by the decision pipeline.

use std::fmt;

use lethe_core::model::{Tier, TrackedObject};

fn tier_cost(tier: Tier) -> f64 {
    match tier {
        Tier::Hot => 1.0,
        Tier::Cold => 0.2,
        Tier::Deleted => 0.0,
    }
}

/// Receives the full population after each tick's decisions.
#[derive(Debug, Clone)]
pub struct MetricsAggregator {
    population: usize,
    duration: i64,
    baseline_storage_cost: f64,
    actual_storage_cost: f64,
    privacy_risk_exposure: f64,
    compliance_violations: u64,
}

impl MetricsAggregator {
    /// `duration` is the evaluated window (post-grace), reported in the
    /// summary.
    pub fn new(population: usize, duration: i64) -> Self {
        Self {
            population,
            duration,
            baseline_storage_cost: 0.0,
            actual_storage_cost: 0.0,
            privacy_risk_exposure: 0.0,
            compliance_violations: 0,
        }
    }

    pub fn on_tick(&mut self, objects: &[TrackedObject]) {
        // Baseline: every object kept Hot for the whole run.
        self.baseline_storage_cost += self.population as f64;

        for obj in objects {
            self.actual_storage_cost += tier_cost(obj.tier);

            if obj.sensitivity.is_sensitive() && obj.tier != Tier::Deleted {
                self.privacy_risk_exposure += obj.risk.risk;
            }
            if obj.risk.high_risk && obj.tier == Tier::Hot && !obj.anonymized {
                self.compliance_violations += 1;
            }
        }
    }

    pub fn summarize(&self, objects: &[TrackedObject]) -> RunSummary {
        let mut keep_true = 0u64;
        let mut keep_true_deleted = 0u64;
        let mut keep_false = 0u64;
        let mut keep_false_discarded = 0u64;
        let mut converged = 0u64;
        let mut convergence_tick_sum = 0i64;

        for obj in objects {
            if obj.keep_label {
                keep_true += 1;
                if obj.tier == Tier::Deleted {
                    keep_true_deleted += 1;
                }
            } else {
                keep_false += 1;
                if matches!(obj.tier, Tier::Cold | Tier::Deleted) {
                    keep_false_discarded += 1;
                }
            }
            if obj.convergence_tick >= 0 {
                converged += 1;
                convergence_tick_sum += obj.convergence_tick;
            }
        }

        let storage_cost_reduction = if self.baseline_storage_cost <= 0.0 {
            0.0
        } else {
            (1.0 - self.actual_storage_cost / self.baseline_storage_cost).max(0.0)
        };
        let false_deletion_rate = if keep_true == 0 {
            0.0
        } else {
            keep_true_deleted as f64 / keep_true as f64
        };
        let retention_efficiency = if keep_false == 0 {
            0.0
        } else {
            keep_false_discarded as f64 / keep_false as f64
        };
        let avg_convergence_tick = if converged == 0 {
            -1.0
        } else {
            convergence_tick_sum as f64 / converged as f64
        };

        RunSummary {
            duration: self.duration,
            storage_cost_reduction,
            privacy_risk_exposure: self.privacy_risk_exposure,
            compliance_violations: self.compliance_violations,
            avg_convergence_tick,
            converged_objects: converged,
            false_deletion_rate,
            retention_efficiency,
        }
    }
}

/// End-of-run summary.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub duration: i64,
    pub storage_cost_reduction: f64,
    pub privacy_risk_exposure: f64,
    pub compliance_violations: u64,
    /// −1.0 when no object converged.
    pub avg_convergence_tick: f64,
    pub converged_objects: u64,
    /// Deleted fraction of objects whose ground truth favored keeping.
    pub false_deletion_rate: f64,
    /// Archived-or-deleted fraction of objects whose ground truth favored
    /// discarding.
    pub retention_efficiency: f64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Metrics Summary")?;
        writeln!(f, " - Duration (ticks): {}", self.duration)?;
        writeln!(
            f,
            " - Storage cost reduction: {:.2}%",
            100.0 * self.storage_cost_reduction
        )?;
        writeln!(
            f,
            " - Privacy risk exposure (sum): {:.2}",
            self.privacy_risk_exposure
        )?;
        writeln!(
            f,
            " - Compliance violation incidents: {}",
            self.compliance_violations
        )?;
        writeln!(
            f,
            " - Trust convergence (avg tick, -1 if none): {:.2}",
            self.avg_convergence_tick
        )?;
        writeln!(f, " - Trust converged objects: {}", self.converged_objects)?;
        writeln!(f, " - False deletion rate: {:.4}", self.false_deletion_rate)?;
        writeln!(f, " - Retention efficiency: {:.4}", self.retention_efficiency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lethe_core::model::Sensitivity;

    fn object(id: u32, keep: bool) -> TrackedObject {
        TrackedObject::new(id, Sensitivity::NonSensitive, 0.7, 0.5, 0, keep, 20)
    }

    #[test]
    fn no_deletions_means_zero_false_deletion_rate() {
        let metrics = MetricsAggregator::new(2, 10);
        let objects = vec![object(0, true), object(1, true)];
        let summary = metrics.summarize(&objects);
        assert_eq!(summary.false_deletion_rate, 0.0);
        assert_eq!(summary.avg_convergence_tick, -1.0);
    }

    #[test]
    fn retention_efficiency_counts_discarded_keep_false() {
        let metrics = MetricsAggregator::new(3, 10);
        let mut a = object(0, false);
        a.tier = Tier::Cold;
        let mut b = object(1, false);
        b.mark_deleted(5);
        let c = object(2, false); // still Hot
        let summary = metrics.summarize(&[a, b, c]);
        assert!((summary.retention_efficiency - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn storage_reduction_reflects_tier_mix() {
        let mut metrics = MetricsAggregator::new(2, 1);
        let hot = object(0, true);
        let mut cold = object(1, false);
        cold.tier = Tier::Cold;
        metrics.on_tick(&[hot, cold]);
        let summary = metrics.summarize(&[]);
        // baseline 2.0, actual 1.2
        assert!((summary.storage_cost_reduction - 0.4).abs() < 1e-12);
    }

    #[test]
    fn violations_require_hot_high_risk_unanonymized() {
        let mut metrics = MetricsAggregator::new(1, 1);
        let mut obj = object(0, true);
        obj.risk.risk = 0.9;
        obj.risk.refresh_flag();
        metrics.on_tick(std::slice::from_ref(&obj));
        assert_eq!(metrics.summarize(&[]).compliance_violations, 1);

        obj.anonymized = true;
        metrics.on_tick(std::slice::from_ref(&obj));
        assert_eq!(metrics.summarize(&[]).compliance_violations, 1, "anonymized is compliant");
    }

    #[test]
    fn mean_convergence_over_converged_objects_only() {
        let metrics = MetricsAggregator::new(3, 10);
        let mut a = object(0, true);
        a.convergence_tick = 10;
        let mut b = object(1, true);
        b.convergence_tick = 20;
        let c = object(2, true);
        let summary = metrics.summarize(&[a, b, c]);
        assert_eq!(summary.converged_objects, 2);
        assert!((summary.avg_convergence_tick - 15.0).abs() < 1e-12);
    }
}
