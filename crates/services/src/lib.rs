#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use sessions as session;

pub use error::SessionError;

pub use sessions::{
    AnswerOutcome, RunReport, ScoredRun, SessionController, SessionPhase, SessionProgress,
    Verdict,
};
