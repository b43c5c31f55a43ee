use litter_core::model::{Case, CaseDraft, Order, ProgressRecord};
use serde::{Deserialize, Serialize};

use crate::repository::{DataLoadError, StorageError};

/// On-disk shape of the progress file: `{"idx": 3, "order": [4, 0, 2, 1, 3]}`.
///
/// `order` is required; a file without it is structurally incomplete.
/// A missing `idx` defaults to the start of the playthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ProgressFile {
    #[serde(default)]
    pub idx: usize,
    pub order: Vec<usize>,
}

impl From<&ProgressRecord> for ProgressFile {
    fn from(record: &ProgressRecord) -> Self {
        Self {
            idx: record.idx,
            order: record.order.as_slice().to_vec(),
        }
    }
}

impl From<ProgressFile> for ProgressRecord {
    fn from(file: ProgressFile) -> Self {
        ProgressRecord::new(file.idx, Order::from_indices(file.order))
    }
}

pub(crate) fn parse_progress(raw: &str) -> Result<ProgressRecord, serde_json::Error> {
    serde_json::from_str::<ProgressFile>(raw).map(ProgressRecord::from)
}

pub(crate) fn encode_progress(record: &ProgressRecord) -> Result<Vec<u8>, StorageError> {
    serde_json::to_vec(&ProgressFile::from(record))
        .map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Validate every draft, failing on the first bad one with its position.
pub(crate) fn validate_drafts(drafts: Vec<CaseDraft>) -> Result<Vec<Case>, DataLoadError> {
    if drafts.is_empty() {
        return Err(DataLoadError::Empty);
    }
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate()
                .map_err(|source| DataLoadError::InvalidCase { index, source })
        })
        .collect()
}
