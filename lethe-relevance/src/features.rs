//! Feature extraction shared by training and inference. The rescale must be
//! applied identically on both paths.

use lethe_core::constants::RELEVANCE_DIM;
use lethe_core::model::TrackedObject;

/// Feature-vector dimension: bias + 8 observations.
pub const DIM: usize = RELEVANCE_DIM;

/// Map every non-bias feature from [0, 1] to [−1, 1] in place. All inputs
/// are unit-interval by construction; the shift improves conditioning.
pub fn rescale(features: &mut [f64; DIM]) {
    for v in features.iter_mut().skip(1) {
        *v = (*v - 0.5) * 2.0;
    }
}

/// Build the rescaled feature vector from live object state.
///
/// Order: bias, businessValue, accessRate, legitRate, suspiciousRate,
/// trust, sensitivity numeric, anomalyScore, risk.
pub fn from_object(object: &TrackedObject) -> [f64; DIM] {
    let mut f = [
        1.0,
        object.business_value,
        object.window.access_rate(),
        object.window.legit_rate(),
        object.window.suspicious_rate(),
        object.trust.value(),
        object.sensitivity.numeric(),
        object.risk.anomaly_score,
        object.risk.risk,
    ];
    rescale(&mut f);
    f
}
