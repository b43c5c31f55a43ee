use std::sync::{Arc, Mutex};

use services::SessionController;

use crate::views::ViewError;
use crate::vm::{ScreenVm, advance_case, load_screen, restart_game, submit_choice};

pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<Mutex<SessionController>>;
}

/// Per-player handle to the one session controller, provided to every view.
#[derive(Clone)]
pub struct AppContext {
    session: Arc<Mutex<SessionController>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
        }
    }

    fn with_session<T>(
        &self,
        f: impl FnOnce(&mut SessionController) -> Result<T, ViewError>,
    ) -> Result<T, ViewError> {
        let mut guard = self.session.lock().map_err(|_| ViewError::Unknown)?;
        f(&mut *guard)
    }

    #[must_use]
    pub fn screen(&self) -> ScreenVm {
        self.with_session(|session| Ok(load_screen(session)))
            .unwrap_or_else(|err| ScreenVm::Fatal {
                message: err.message().to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `ViewError` if the session rejects the choice.
    pub fn submit(&self, choice: usize) -> Result<bool, ViewError> {
        self.with_session(|session| submit_choice(session, choice))
    }

    /// # Errors
    ///
    /// Returns `ViewError` if the case cannot be advanced past.
    pub fn advance(&self) -> Result<(), ViewError> {
        self.with_session(advance_case)
    }

    /// # Errors
    ///
    /// Returns `ViewError` if the game cannot be restarted.
    pub fn restart(&self) -> Result<(), ViewError> {
        self.with_session(restart_game)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
