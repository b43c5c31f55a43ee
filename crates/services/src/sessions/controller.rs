use std::fmt;
use std::sync::Arc;

use litter_core::model::{Case, Order, ProgressRecord};
use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::repository::{CaseRepository, ProgressStore};
use tracing::{debug, info, warn};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Where a resumable playthrough currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    InProgress,
    CaseSolved,
    Complete,
}

/// Result of submitting a choice for the current case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

struct Playthrough {
    order: Order,
    idx: usize,
    solved: bool,
}

/// Resumable playthrough over the case dataset.
///
/// The play order is shuffled once per playthrough and persisted immediately;
/// after that only `advance` writes, so a solved-but-not-advanced case is
/// replayed after a restart. Wrong answers are never recorded.
pub struct SessionController {
    case_repo: Arc<dyn CaseRepository>,
    progress_store: Arc<dyn ProgressStore>,
    rng: StdRng,
    cases: Option<Vec<Case>>,
    state: Option<Playthrough>,
}

impl SessionController {
    #[must_use]
    pub fn new(
        case_repo: Arc<dyn CaseRepository>,
        progress_store: Arc<dyn ProgressStore>,
    ) -> Self {
        Self {
            case_repo,
            progress_store,
            rng: StdRng::from_rng(&mut rand::rng()),
            cases: None,
            state: None,
        }
    }

    /// Use a deterministic shuffle source.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Load the dataset (once) and resume or start a playthrough.
    ///
    /// A stored record is adopted only when it fits the loaded dataset; anything
    /// else is replaced by a fresh shuffle which is persisted before returning.
    /// Calling this on an initialized session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::DataLoad` if the dataset cannot be loaded and
    /// `SessionError::Storage` if the fresh record cannot be persisted.
    pub fn initialize(&mut self) -> Result<SessionPhase, SessionError> {
        if self.state.is_some() {
            return Ok(self.phase());
        }

        let case_count = match &self.cases {
            Some(cases) => cases.len(),
            None => {
                let cases = self.case_repo.load()?;
                let count = cases.len();
                self.cases = Some(cases);
                count
            }
        };

        let playthrough = match self.progress_store.read() {
            Some(record) if record.fits(case_count) => {
                if record.is_finished() {
                    info!(total = case_count, "saved playthrough is already complete");
                } else {
                    info!(idx = record.idx, total = case_count, "resuming saved progress");
                }
                Playthrough {
                    order: record.order,
                    idx: record.idx,
                    solved: false,
                }
            }
            stored => {
                if let Some(record) = stored {
                    warn!(
                        saved_len = record.order.len(),
                        saved_idx = record.idx,
                        total = case_count,
                        "saved progress does not match dataset, starting over"
                    );
                }
                let record = ProgressRecord::fresh(Order::shuffled(case_count, &mut self.rng));
                self.progress_store.write(&record)?;
                info!(total = case_count, "started new playthrough");
                Playthrough {
                    order: record.order,
                    idx: 0,
                    solved: false,
                }
            }
        };

        self.state = Some(playthrough);
        Ok(self.phase())
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match &self.state {
            None => SessionPhase::Uninitialized,
            Some(state) if state.idx >= state.order.len() => SessionPhase::Complete,
            Some(state) if state.solved => SessionPhase::CaseSolved,
            Some(_) => SessionPhase::InProgress,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == SessionPhase::Complete
    }

    /// Position within the play order, if initialized.
    #[must_use]
    pub fn idx(&self) -> Option<usize> {
        self.state.as_ref().map(|state| state.idx)
    }

    #[must_use]
    pub fn order(&self) -> Option<&Order> {
        self.state.as_ref().map(|state| &state.order)
    }

    /// Number of cases in the loaded dataset (0 before the first load).
    #[must_use]
    pub fn total_cases(&self) -> usize {
        self.cases.as_ref().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::new(self.idx().unwrap_or(0), self.total_cases())
    }

    /// The case at the current position.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Uninitialized` before `initialize` and
    /// `SessionError::Completed` once every case has been advanced past.
    pub fn current_case(&self) -> Result<&Case, SessionError> {
        let (Some(state), Some(cases)) = (&self.state, &self.cases) else {
            return Err(SessionError::Uninitialized);
        };
        state
            .order
            .get(state.idx)
            .and_then(|case_index| cases.get(case_index))
            .ok_or(SessionError::Completed)
    }

    /// Check `choice` against the current case.
    ///
    /// A right answer marks the case solved but is not persisted; a wrong
    /// answer leaves everything as it was.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadySolved` if the case awaits `advance`,
    /// `SessionError::ChoiceOutOfRange` for an index past the options, and the
    /// `current_case` errors otherwise.
    pub fn submit_answer(&mut self, choice: usize) -> Result<AnswerOutcome, SessionError> {
        let case = self.current_case()?;
        let len = case.option_count();
        if choice >= len {
            return Err(SessionError::ChoiceOutOfRange { choice, len });
        }
        let correct = case.is_correct(choice);

        let state = self.state.as_mut().ok_or(SessionError::Uninitialized)?;
        if state.solved {
            return Err(SessionError::AlreadySolved);
        }
        if correct {
            state.solved = true;
        }
        debug!(idx = state.idx, choice, correct, "answer submitted");
        Ok(AnswerOutcome { correct })
    }

    /// Move past a solved case, persisting the new position before returning.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotSolved` unless the current case was just
    /// answered correctly, and `SessionError::Storage` if the write fails (the
    /// in-memory position is left unchanged in that case).
    pub fn advance(&mut self) -> Result<SessionPhase, SessionError> {
        match self.phase() {
            SessionPhase::CaseSolved => {}
            SessionPhase::Uninitialized => return Err(SessionError::Uninitialized),
            SessionPhase::Complete => return Err(SessionError::Completed),
            SessionPhase::InProgress => return Err(SessionError::NotSolved),
        }

        let state = self.state.as_mut().ok_or(SessionError::Uninitialized)?;
        let next = ProgressRecord::new(state.idx + 1, state.order.clone());
        self.progress_store.write(&next)?;

        state.idx = next.idx;
        state.solved = false;
        info!(idx = state.idx, total = state.order.len(), "advanced to next case");
        Ok(self.phase())
    }

    /// Delete saved progress and drop the in-memory playthrough.
    ///
    /// The loaded dataset is kept; call `initialize` to start over.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the saved record cannot be removed.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.progress_store.clear()?;
        self.state = None;
        info!("progress reset");
        Ok(())
    }

    /// `reset` followed by `initialize`: a brand-new shuffled playthrough.
    ///
    /// # Errors
    ///
    /// Propagates errors from `reset` and `initialize`.
    pub fn restart(&mut self) -> Result<SessionPhase, SessionError> {
        self.reset()?;
        self.initialize()
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("phase", &self.phase())
            .field("cases_len", &self.total_cases())
            .field("idx", &self.idx())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
