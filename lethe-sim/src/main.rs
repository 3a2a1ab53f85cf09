use std::path::Path;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lethe_core::config::SimConfig;
use lethe_relevance::train_synthetic;
use lethe_sim::workload::{assign_profiles, build_population};
use lethe_sim::{EvidenceLog, Simulation, WorkloadGenerator};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = load_config()?;
    config.validate()?;
    info!(
        population = config.run.population,
        duration = config.run.duration,
        "lethe v{}",
        lethe_core::constants::VERSION
    );

    let predictor = train_synthetic(&config.model);

    let mut population_rng = StdRng::seed_from_u64(config.run.seed);
    let profiles = assign_profiles(&mut population_rng, config.run.population, &config);
    let objects = build_population(&mut population_rng, &profiles, &config);
    let events = WorkloadGenerator::new(config.clone()).generate(&objects, &profiles);

    let evidence = EvidenceLog::create(
        Path::new(&config.run.evidence_path),
        config.run.population,
        config.run.changed_only,
    )
    .with_context(|| format!("opening evidence log {}", config.run.evidence_path))?;

    let mut sim = Simulation::new(config, objects, events, predictor, evidence);
    let summary = sim.run()?;

    println!("{summary}");
    Ok(())
}

/// Built-in defaults, overridden by a TOML file given as the first argument.
fn load_config() -> anyhow::Result<SimConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            let config = SimConfig::from_toml_str(&text)
                .with_context(|| format!("parsing config {path}"))?;
            info!(path, "loaded config");
            Ok(config)
        }
        None => Ok(SimConfig::default()),
    }
}
