use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lethe_core::config::ModelConfig;
use lethe_core::model::TrackedObject;
use lethe_core::traits::IRelevancePredictor;

use crate::features::{self, DIM};
use crate::synthetic::TrainingSet;

/// Numerically stable sigmoid: branch on the sign of the logit so the
/// exponential argument is never positive.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        let ez = (-z).exp();
        1.0 / (1.0 + ez)
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}

/// Linear model over the 9 rescaled features.
///
/// Predictions are clamped to [0.01, 0.99] — a literal 0 or 1 is never
/// returned, on the inference path or inside the training loop.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceModel {
    weights: [f64; DIM],
}

impl RelevanceModel {
    /// Small random init: 9 draws of `(u − 0.5) · 0.02` from `init_seed`.
    pub fn new(init_seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(init_seed);
        let mut weights = [0.0; DIM];
        for w in weights.iter_mut() {
            *w = (rng.gen::<f64>() - 0.5) * 0.02;
        }
        Self { weights }
    }

    pub fn from_weights(weights: [f64; DIM]) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &[f64; DIM] {
        &self.weights
    }

    /// Predict from an already-rescaled feature vector.
    pub fn predict_features(&self, x: &[f64; DIM]) -> f64 {
        let mut z = 0.0;
        for (w, v) in self.weights.iter().zip(x) {
            z += w * v;
        }
        sigmoid(z).clamp(0.01, 0.99)
    }

    /// Full-batch gradient descent on the mean logistic loss with L2
    /// regularization. Each weight's per-epoch update is clipped to
    /// `step_clip` magnitude before being applied.
    pub fn train(&mut self, data: &TrainingSet, config: &ModelConfig) {
        let n = data.len();
        if n == 0 {
            return;
        }
        let scale = 1.0 / n as f64;

        for _epoch in 0..config.epochs {
            let mut grad = [0.0; DIM];
            for (x, &y) in data.features.iter().zip(&data.labels) {
                let p = self.predict_features(x);
                let err = p - f64::from(y);
                for (g, v) in grad.iter_mut().zip(x) {
                    *g += err * v;
                }
            }
            for (w, g) in self.weights.iter_mut().zip(&grad) {
                let regularized = g * scale + config.l2 * *w;
                let delta =
                    (config.learning_rate * regularized).clamp(-config.step_clip, config.step_clip);
                *w -= delta;
            }
        }
    }
}

impl IRelevancePredictor for RelevanceModel {
    fn predict(&self, object: &TrackedObject) -> f64 {
        self.predict_features(&features::from_object(object))
    }
}
