//! Traits at the seams between the pipeline and its collaborators.

use crate::errors::LetheResult;
use crate::model::{DecisionRecord, TrackedObject};

/// Per-object relevance inference.
pub trait IRelevancePredictor: Send + Sync {
    /// Predicted probability in [0.01, 0.99] that the object remains
    /// business-relevant.
    fn predict(&self, object: &TrackedObject) -> f64;
}

/// Append-only audit-trail sink. Writes may be buffered; `flush` cadence is
/// an optimization, never a correctness requirement. I/O failure is fatal.
pub trait IEvidenceSink {
    fn record(&mut self, row: &DecisionRecord) -> LetheResult<()>;
    fn flush(&mut self) -> LetheResult<()>;
}

/// No-op sink for runs that do not keep an audit trail.
#[derive(Debug, Default)]
pub struct NullEvidenceSink;

impl IEvidenceSink for NullEvidenceSink {
    fn record(&mut self, _row: &DecisionRecord) -> LetheResult<()> {
        Ok(())
    }

    fn flush(&mut self) -> LetheResult<()> {
        Ok(())
    }
}
