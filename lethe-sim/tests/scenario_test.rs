//! End-to-end runs with a genuinely trained relevance model: a healthy
//! frequently-accessed population, and an abandoned sensitive one.

use lethe_core::config::SimConfig;
use lethe_core::model::{AccessEvent, Role, Sensitivity, Tier, TrackedObject};
use lethe_core::traits::NullEvidenceSink;
use lethe_relevance::train_synthetic;
use lethe_sim::{EvidenceLog, Simulation};

fn config(population: usize, duration: i64) -> SimConfig {
    let mut cfg = SimConfig::default();
    cfg.run.population = population;
    cfg.run.duration = duration;
    // Smaller training budget keeps the test fast; the learned ordering is
    // what matters, not the exact weights.
    cfg.model.samples = 4_000;
    cfg.model.epochs = 120;
    cfg
}

fn population(
    cfg: &SimConfig,
    sensitivity: Sensitivity,
    business_value: f64,
) -> Vec<TrackedObject> {
    (0..cfg.run.population)
        .map(|id| {
            TrackedObject::new(
                id as u32,
                sensitivity,
                0.7,
                business_value,
                0,
                business_value > 0.60,
                cfg.monitor.window_size,
            )
        })
        .collect()
}

fn steady_legit_events(cfg: &SimConfig) -> Vec<Vec<AccessEvent>> {
    (0..=cfg.run.duration)
        .map(|t| {
            (0..cfg.run.population)
                .map(|id| AccessEvent {
                    time: t,
                    object_id: id as u32,
                    role: Role::Admin,
                    legitimate: true,
                    request_score: 0.95,
                })
                .collect()
        })
        .collect()
}

#[test]
fn healthy_accessed_population_is_fully_retained() {
    let cfg = config(100, 120);
    let predictor = train_synthetic(&cfg.model);
    let objects = population(&cfg, Sensitivity::NonSensitive, 0.85);
    let events = steady_legit_events(&cfg);

    let mut sim = Simulation::new(cfg, objects, events, predictor, NullEvidenceSink);
    let summary = sim.run().unwrap();

    for obj in sim.objects() {
        assert_eq!(obj.tier, Tier::Hot, "object {} left the hot tier", obj.id);
        assert!(obj.trust.value() > 0.9, "trust {} did not build up", obj.trust);
    }
    assert_eq!(summary.false_deletion_rate, 0.0);
    assert_eq!(summary.compliance_violations, 0);
    assert!(
        summary.converged_objects as usize == sim.objects().len(),
        "steady workload should converge every object, got {}",
        summary.converged_objects
    );
}

#[test]
fn abandoned_sensitive_low_value_population_is_phased_out() {
    let cfg = config(50, 120);
    let predictor = train_synthetic(&cfg.model);
    let objects = population(&cfg, Sensitivity::Health, 0.10);
    let events = vec![Vec::new(); cfg.run.duration as usize + 1];

    let mut sim = Simulation::new(cfg, objects, events, predictor, NullEvidenceSink);
    let summary = sim.run().unwrap();

    for obj in sim.objects() {
        assert_ne!(
            obj.tier,
            Tier::Hot,
            "never-accessed low-value object {} must not stay hot",
            obj.id
        );
        assert!(obj.trust.value() < 0.4, "trust {} failed to decay", obj.trust);
    }
    // None of these objects was worth keeping; phasing them all out is a
    // perfect score.
    assert_eq!(summary.retention_efficiency, 1.0);
    assert!(summary.storage_cost_reduction > 0.0);
}

#[test]
fn evidence_log_captures_every_evaluated_tick() {
    let cfg = config(10, 40);
    let grace = cfg.decision.grace_period;
    let duration = cfg.run.duration;
    let predictor = train_synthetic(&cfg.model);
    let objects = population(&cfg, Sensitivity::NonSensitive, 0.85);
    let events = steady_legit_events(&cfg);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.csv");
    let evidence = EvidenceLog::create(&path, 10, false).unwrap();

    let mut sim = Simulation::new(cfg, objects, events, predictor, evidence);
    sim.run().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(EvidenceLog::header()));
    let rows = lines.count();
    let evaluated_ticks = (duration - grace) as usize;
    assert_eq!(rows, evaluated_ticks * 10, "one row per object per tick");

    // First data row belongs to the first evaluated tick.
    let first = text.lines().nth(1).unwrap();
    assert!(first.starts_with(&format!("{grace},0,")));
}
