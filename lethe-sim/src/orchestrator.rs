//! Per-tick driver: deliver the tick's events, then evaluate every object in
//! ascending-id order through risk, trust decay, convergence tracking,
//! relevance inference, and the retention decision, emitting one evidence
//! row per (tick, object).

use tracing::{debug, info};

use lethe_core::config::SimConfig;
use lethe_core::constants::EVIDENCE_FLUSH_INTERVAL;
use lethe_core::errors::LetheResult;
use lethe_core::model::{AccessEvent, DecisionRecord, TrackedObject};
use lethe_core::traits::{IEvidenceSink, IRelevancePredictor};
use lethe_decay::TrustDecayEngine;
use lethe_monitor::AccessMonitor;
use lethe_retention::RetentionController;
use lethe_risk::RiskAnalyzer;

use crate::metrics::{MetricsAggregator, RunSummary};

/// Owns the population and the pre-computed event table for one run. The
/// predictor is read-only after construction; the evidence sink is the only
/// I/O the loop performs.
pub struct Simulation<P, E> {
    config: SimConfig,
    objects: Vec<TrackedObject>,
    events_by_tick: Vec<Vec<AccessEvent>>,
    monitor: AccessMonitor,
    risk: RiskAnalyzer,
    decay: TrustDecayEngine,
    controller: RetentionController,
    predictor: P,
    evidence: E,
    metrics: MetricsAggregator,
}

impl<P, E> Simulation<P, E>
where
    P: IRelevancePredictor,
    E: IEvidenceSink,
{
    pub fn new(
        config: SimConfig,
        objects: Vec<TrackedObject>,
        events_by_tick: Vec<Vec<AccessEvent>>,
        predictor: P,
        evidence: E,
    ) -> Self {
        let evaluated = config.run.duration - config.decision.grace_period;
        let metrics = MetricsAggregator::new(objects.len(), evaluated);
        Self {
            monitor: AccessMonitor::new(&config.monitor),
            risk: RiskAnalyzer::new(config.risk.clone()),
            decay: TrustDecayEngine::new(config.decay.clone()),
            controller: RetentionController::new(config.decision.clone()),
            config,
            objects,
            events_by_tick,
            predictor,
            evidence,
            metrics,
        }
    }

    /// Run the evaluation loop. The first evaluated tick is the grace-period
    /// boundary itself; events scheduled before it are never delivered.
    pub fn run(&mut self) -> LetheResult<RunSummary> {
        let duration = self.config.run.duration;
        let step = self.config.run.tick;
        let mut now = self.config.decision.grace_period;

        info!(
            population = self.objects.len(),
            duration,
            first_tick = now,
            "starting run"
        );

        while now < duration {
            self.tick(now)?;
            now += step;
        }
        self.evidence.flush()?;

        let summary = self.metrics.summarize(&self.objects);
        info!(
            converged = summary.converged_objects,
            violations = summary.compliance_violations,
            "run complete"
        );
        Ok(summary)
    }

    fn tick(&mut self, now: i64) -> LetheResult<()> {
        self.deliver_events(now);

        let Self {
            objects,
            risk,
            decay,
            controller,
            predictor,
            evidence,
            config,
            ..
        } = self;

        for object in objects.iter_mut() {
            // Deleted objects keep receiving events and evidence rows, but
            // scoring stops: the decision just re-affirms the terminal state.
            let (predicted, decision) = if object.is_deleted() {
                (0.0, controller.decide(object, 0.0, now))
            } else {
                risk.update_risk(object, now);
                decay.update_trust(object, now);
                lethe_decay::observe(object, now, config.decay.convergence_band);
                let predicted = predictor.predict(object);
                (predicted, controller.decide(object, predicted, now))
            };

            let record =
                DecisionRecord::capture(now, object, predicted, decision.action, decision.reason);
            evidence.record(&record)?;
        }

        self.metrics.on_tick(&self.objects);

        if now % EVIDENCE_FLUSH_INTERVAL == 0 {
            self.evidence.flush()?;
        }
        Ok(())
    }

    /// Apply the tick's events through the monitor. Events whose target id
    /// is unknown are skipped.
    fn deliver_events(&mut self, now: i64) {
        let Some(events) = self.events_by_tick.get(now as usize) else {
            return;
        };
        for event in events {
            let Some(object) = self.objects.get_mut(event.object_id as usize) else {
                debug!(id = event.object_id, tick = now, "event for unknown object");
                continue;
            };
            self.monitor.on_access(object, event);
        }
    }

    pub fn objects(&self) -> &[TrackedObject] {
        &self.objects
    }
}
