use lethe_core::config::ModelConfig;
use lethe_core::model::{Sensitivity, TrackedObject};
use lethe_core::traits::IRelevancePredictor;
use lethe_relevance::train_synthetic;

/// Reduced training budget keeps these tests fast while preserving the
/// qualitative behavior of the full 50k-sample model.
fn reduced_config() -> ModelConfig {
    ModelConfig {
        samples: 4_000,
        epochs: 120,
        ..ModelConfig::default()
    }
}

fn hot_valuable_object() -> TrackedObject {
    let mut obj = TrackedObject::new(0, Sensitivity::NonSensitive, 0.9, 0.9, 0, true, 20);
    for t in 0..20 {
        obj.window.record(t, true, false);
    }
    obj.last_access = 19;
    obj.risk.risk = 0.10;
    obj.risk.anomaly_score = 0.0;
    obj
}

fn idle_suspicious_object() -> TrackedObject {
    let mut obj = TrackedObject::new(1, Sensitivity::Health, 0.15, 0.05, 0, false, 20);
    for _ in 0..8 {
        obj.window.record(0, false, true);
    }
    obj.risk.risk = 0.95;
    obj.risk.anomaly_score = 0.7;
    obj
}

#[test]
fn training_is_deterministic_for_fixed_seed() {
    let cfg = ModelConfig {
        samples: 500,
        epochs: 20,
        ..ModelConfig::default()
    };
    let a = train_synthetic(&cfg);
    let b = train_synthetic(&cfg);
    assert_eq!(a.weights(), b.weights());
}

#[test]
fn trained_model_ranks_hot_above_suspicious() {
    let model = train_synthetic(&reduced_config());
    let hot = model.predict(&hot_valuable_object());
    let idle = model.predict(&idle_suspicious_object());
    assert!(
        hot > idle,
        "hot/high-value object must outrank idle/suspicious: {hot} vs {idle}"
    );
}

#[test]
fn hot_object_predicts_relevant() {
    let model = train_synthetic(&reduced_config());
    let p = model.predict(&hot_valuable_object());
    assert!(p >= 0.5, "fully accessed high-value object scored {p}");
}

#[test]
fn predictions_stay_inside_clamp_band() {
    let model = train_synthetic(&ModelConfig {
        samples: 1_000,
        epochs: 40,
        ..ModelConfig::default()
    });
    for obj in [hot_valuable_object(), idle_suspicious_object()] {
        let p = model.predict(&obj);
        assert!((0.01..=0.99).contains(&p), "prediction out of band: {p}");
    }
}

#[test]
fn training_moves_weights_from_init() {
    let cfg = ModelConfig {
        samples: 1_000,
        epochs: 40,
        ..ModelConfig::default()
    };
    let trained = train_synthetic(&cfg);
    let untrained = lethe_relevance::RelevanceModel::new(cfg.init_seed);
    assert_ne!(trained.weights(), untrained.weights());
}
