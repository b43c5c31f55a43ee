use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use litter_core::model::ProgressRecord;
use tracing::{debug, warn};

use super::mapping::{encode_progress, parse_progress};
use super::temp_path_for;
use crate::repository::{ProgressStore, StorageError};

/// Progress persisted as a small JSON file.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the target,
/// so an interrupted write leaves the previous record readable.
#[derive(Debug, Clone)]
pub struct JsonProgressStore {
    path: PathBuf,
}

impl JsonProgressStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn io_err(e: std::io::Error) -> StorageError {
    StorageError::Io(e.to_string())
}

impl ProgressStore for JsonProgressStore {
    fn read(&self) -> Option<ProgressRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved progress");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "saved progress unreadable, ignoring");
                return None;
            }
        };

        match parse_progress(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "saved progress corrupt, ignoring");
                None
            }
        }
    }

    fn write(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let data = encode_progress(record)?;
        let tmp = temp_path_for(&self.path);
        fs::write(&tmp, data).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        debug!(path = %self.path.display(), idx = record.idx, "progress saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "progress cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(e)),
        }
    }
}
