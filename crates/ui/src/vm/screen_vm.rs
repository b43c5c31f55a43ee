use services::{SessionController, SessionError, SessionPhase};
use tracing::error;

use super::case_vm::{CaseVm, ProgressVm, map_case, map_progress};
use crate::views::ViewError;

/// Everything the game view needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Playing {
        progress: ProgressVm,
        case: CaseVm,
        solved: bool,
    },
    Complete {
        progress: ProgressVm,
    },
    Fatal {
        message: String,
    },
}

/// Build the current screen, initializing the session from saved progress if needed.
pub fn load_screen(session: &mut SessionController) -> ScreenVm {
    if session.phase() == SessionPhase::Uninitialized {
        if let Err(err) = session.initialize() {
            error!(error = %err, "could not start session");
            return ScreenVm::Fatal {
                message: err.to_string(),
            };
        }
    }

    let progress = map_progress(session.progress());
    let phase = session.phase();
    if phase == SessionPhase::Complete {
        return ScreenVm::Complete { progress };
    }

    match session.current_case() {
        Ok(case) => ScreenVm::Playing {
            progress,
            case: map_case(case),
            solved: phase == SessionPhase::CaseSolved,
        },
        Err(err) => ScreenVm::Fatal {
            message: err.to_string(),
        },
    }
}

fn view_error(err: &SessionError) -> ViewError {
    error!(error = %err, "session action failed");
    match err {
        SessionError::Storage(_) => ViewError::SaveFailed,
        _ => ViewError::Unknown,
    }
}

/// # Errors
///
/// Returns `ViewError` if the session rejects the choice.
pub fn submit_choice(session: &mut SessionController, choice: usize) -> Result<bool, ViewError> {
    session
        .submit_answer(choice)
        .map(|outcome| outcome.correct)
        .map_err(|err| view_error(&err))
}

/// # Errors
///
/// Returns `ViewError::SaveFailed` if the new position cannot be persisted.
pub fn advance_case(session: &mut SessionController) -> Result<(), ViewError> {
    session.advance().map(|_| ()).map_err(|err| view_error(&err))
}

/// # Errors
///
/// Returns `ViewError` if saved progress cannot be removed or a new playthrough cannot start.
pub fn restart_game(session: &mut SessionController) -> Result<(), ViewError> {
    session.restart().map(|_| ()).map_err(|err| view_error(&err))
}
