use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use litter_core::model::{Case, CaseError, ProgressRecord};
use thiserror::Error;

/// Errors surfaced while loading the case dataset.
///
/// Every variant is fatal for a playthrough: there is no retry and no partial dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataLoadError {
    #[error("case dataset not found at {path}")]
    Missing { path: PathBuf },

    #[error("could not read case dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("case dataset {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("case #{index} is invalid: {source}")]
    InvalidCase {
        index: usize,
        #[source]
        source: CaseError,
    },

    #[error("case dataset contains no cases")]
    Empty,
}

/// Errors surfaced by progress store adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Read-only source of the ordered case list.
pub trait CaseRepository: Send + Sync {
    /// Load every case, in dataset order.
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError` if the dataset is absent, unreadable, malformed,
    /// contains an invalid case, or is empty.
    fn load(&self) -> Result<Vec<Case>, DataLoadError>;
}

/// Durable home of the single `ProgressRecord`.
pub trait ProgressStore: Send + Sync {
    /// Return the persisted record, if any.
    ///
    /// Absent, unreadable, and structurally incomplete records all read as `None`.
    fn read(&self) -> Option<ProgressRecord>;

    /// Replace the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    fn write(&self, record: &ProgressRecord) -> Result<(), StorageError>;

    /// Remove the persisted record. Clearing an absent record succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if an existing record cannot be removed.
    fn clear(&self) -> Result<(), StorageError>;
}

//
// ─── IN-MEMORY ADAPTERS ────────────────────────────────────────────────────────
//

type LoadFailure = Arc<dyn Fn() -> DataLoadError + Send + Sync>;

/// Fixed case list, or a configured load failure, for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryCaseRepository {
    cases: Vec<Case>,
    failure: Option<LoadFailure>,
}

impl InMemoryCaseRepository {
    #[must_use]
    pub fn new(cases: Vec<Case>) -> Self {
        Self {
            cases,
            failure: None,
        }
    }

    /// Repository whose every `load` fails with the error built by `make_error`.
    #[must_use]
    pub fn failing(make_error: impl Fn() -> DataLoadError + Send + Sync + 'static) -> Self {
        Self {
            cases: Vec::new(),
            failure: Some(Arc::new(make_error)),
        }
    }
}

impl CaseRepository for InMemoryCaseRepository {
    fn load(&self) -> Result<Vec<Case>, DataLoadError> {
        if let Some(make_error) = &self.failure {
            return Err(make_error());
        }
        if self.cases.is_empty() {
            return Err(DataLoadError::Empty);
        }
        Ok(self.cases.clone())
    }
}

/// Progress held in memory; clones share the same slot.
#[derive(Clone, Default)]
pub struct InMemoryProgressStore {
    record: Arc<Mutex<Option<ProgressRecord>>>,
    writes: Arc<Mutex<usize>>,
}

impl InMemoryProgressStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a record, as if left by an earlier session.
    #[must_use]
    pub fn with_record(record: ProgressRecord) -> Self {
        let store = Self::new();
        if let Ok(mut guard) = store.record.lock() {
            *guard = Some(record);
        }
        store
    }

    /// Number of successful `write` calls.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.lock().map_or(0, |guard| *guard)
    }
}

impl ProgressStore for InMemoryProgressStore {
    fn read(&self) -> Option<ProgressRecord> {
        self.record.lock().ok().and_then(|guard| guard.clone())
    }

    fn write(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(record.clone());
        let mut writes = self
            .writes
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *writes += 1;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Aggregates the case repository and progress store behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub cases: Arc<dyn CaseRepository>,
    pub progress: Arc<dyn ProgressStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(cases: Vec<Case>) -> Self {
        Self {
            cases: Arc::new(InMemoryCaseRepository::new(cases)),
            progress: Arc::new(InMemoryProgressStore::new()),
        }
    }
}
