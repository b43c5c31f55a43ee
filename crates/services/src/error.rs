//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::{DataLoadError, StorageError};

/// Errors emitted by session controllers.
///
/// The state-violation variants are returned without touching session state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no cases available for session")]
    Empty,
    #[error("session has not been initialized")]
    Uninitialized,
    #[error("session already completed")]
    Completed,
    #[error("current case has not been solved yet")]
    NotSolved,
    #[error("current case is already solved")]
    AlreadySolved,
    #[error("choice {choice} is out of range for {len} options")]
    ChoiceOutOfRange { choice: usize, len: usize },
    #[error("run still has {remaining} unanswered cases")]
    Unfinished { remaining: usize },
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
