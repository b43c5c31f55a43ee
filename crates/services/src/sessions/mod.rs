mod controller;
mod progress;
mod scored_run;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{AnswerOutcome, SessionController, SessionPhase};
pub use progress::SessionProgress;
pub use scored_run::{RunReport, ScoredRun, Verdict};
