//! # lethe-relevance
//!
//! A 9-weight logistic regression predicting the probability that a tracked
//! object remains business-relevant. Trained once before the run by
//! full-batch gradient descent over synthetic labeled samples, then used
//! read-only for per-object inference.

pub mod features;
mod model;
mod synthetic;

pub use model::{sigmoid, RelevanceModel};
pub use synthetic::TrainingSet;

use lethe_core::config::ModelConfig;
use tracing::info;

/// Generate the synthetic training set and train a fresh model on it.
pub fn train_synthetic(config: &ModelConfig) -> RelevanceModel {
    info!(
        samples = config.samples,
        epochs = config.epochs,
        seed = config.train_seed,
        "training relevance model on synthetic samples"
    );
    let data = synthetic::generate(config);
    let mut model = RelevanceModel::new(config.init_seed);
    model.train(&data, config);
    info!(weights = ?model.weights(), "relevance model trained");
    model
}
