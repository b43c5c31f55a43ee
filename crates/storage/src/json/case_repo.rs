use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use litter_core::model::{Case, CaseDraft};
use tracing::info;

use super::mapping::validate_drafts;
use crate::repository::{CaseRepository, DataLoadError};

/// Case dataset stored as a JSON array of case records.
#[derive(Debug, Clone)]
pub struct JsonCaseRepository {
    path: PathBuf,
}

impl JsonCaseRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CaseRepository for JsonCaseRepository {
    fn load(&self) -> Result<Vec<Case>, DataLoadError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                DataLoadError::Missing {
                    path: self.path.clone(),
                }
            } else {
                DataLoadError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let drafts: Vec<CaseDraft> =
            serde_json::from_str(&raw).map_err(|source| DataLoadError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        let cases = validate_drafts(drafts)?;
        info!(path = %self.path.display(), count = cases.len(), "loaded case dataset");
        Ok(cases)
    }
}
