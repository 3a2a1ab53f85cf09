//! Configuration surface. Every constant the pipeline consumes is
//! overridable from a TOML file without code changes; defaults match the
//! documented baseline behavior. `validate` fails fast before any tick.

mod decay_config;
mod decision_config;
mod model_config;
mod monitor_config;
mod risk_config;
mod run_config;
mod workload_config;

pub use decay_config::DecayConfig;
pub use decision_config::DecisionConfig;
pub use model_config::ModelConfig;
pub use monitor_config::MonitorConfig;
pub use risk_config::RiskConfig;
pub use run_config::RunConfig;
pub use workload_config::WorkloadConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{LetheError, LetheResult};

/// Aggregate configuration for one simulation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub run: RunConfig,
    pub monitor: MonitorConfig,
    pub risk: RiskConfig,
    pub decay: DecayConfig,
    pub decision: DecisionConfig,
    pub model: ModelConfig,
    pub workload: WorkloadConfig,
}

impl SimConfig {
    /// Parse from a TOML document. Missing sections and fields fall back to
    /// their defaults.
    pub fn from_toml_str(s: &str) -> LetheResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reject configurations that would make the run meaningless before any
    /// tick executes.
    pub fn validate(&self) -> LetheResult<()> {
        fn unit(name: &str, v: f64) -> LetheResult<()> {
            if !(0.0..=1.0).contains(&v) {
                return Err(LetheError::config(format!("{name} must be in [0, 1], got {v}")));
            }
            Ok(())
        }

        if self.monitor.window_size == 0 {
            return Err(LetheError::config("monitor.window_size must be positive"));
        }
        if self.run.duration <= 0 {
            return Err(LetheError::config("run.duration must be positive"));
        }
        if self.run.tick <= 0 {
            return Err(LetheError::config("run.tick must be positive"));
        }
        if self.run.population == 0 {
            return Err(LetheError::config("run.population must be positive"));
        }
        if self.model.samples == 0 {
            return Err(LetheError::config("model.samples must be positive"));
        }
        if self.model.epochs == 0 {
            return Err(LetheError::config("model.epochs must be positive"));
        }
        if self.model.learning_rate <= 0.0 {
            return Err(LetheError::config("model.learning_rate must be positive"));
        }
        if self.decay.half_life <= 0 {
            return Err(LetheError::config("decay.half_life must be positive"));
        }
        if self.decision.grace_period < 0 {
            return Err(LetheError::config("decision.grace_period must be non-negative"));
        }
        if self.decision.cold_start_window < 0 {
            return Err(LetheError::config(
                "decision.cold_start_window must be non-negative",
            ));
        }

        unit("monitor.request_score_threshold", self.monitor.request_score_threshold)?;
        unit("decision.t_high", self.decision.t_high)?;
        unit("decision.t_mid", self.decision.t_mid)?;
        unit("decision.r_high", self.decision.r_high)?;
        unit("decision.r_mid", self.decision.r_mid)?;
        unit("decision.p_low", self.decision.p_low)?;
        unit("decision.p_mid", self.decision.p_mid)?;

        if self.decision.t_mid >= self.decision.t_high {
            return Err(LetheError::config("decision.t_mid must be below t_high"));
        }
        if self.decision.r_mid >= self.decision.r_high {
            return Err(LetheError::config("decision.r_mid must be below r_high"));
        }
        if self.decision.p_low >= self.decision.p_mid {
            return Err(LetheError::config("decision.p_low must be below p_mid"));
        }
        if self.workload.hot_fraction + self.workload.warm_fraction > 1.0 {
            return Err(LetheError::config(
                "workload.hot_fraction + warm_fraction must not exceed 1",
            ));
        }
        Ok(())
    }
}
