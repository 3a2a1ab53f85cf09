//! Data model: the tracked object and everything it exclusively owns.

mod event;
mod history;
mod object;
mod record;
mod trust;
mod window;

pub use event::{AccessEvent, Role};
pub use history::TrustHistory;
pub use object::{RiskSnapshot, Sensitivity, Tier, TrackedObject};
pub use record::{Action, DecisionRecord, ReasonCode};
pub use trust::Trust;
pub use window::AccessWindow;
