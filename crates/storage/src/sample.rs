//! Bundled starter dataset, written out by the `seed` command.

use std::fs;
use std::path::Path;

use crate::repository::StorageError;

pub const SAMPLE_CASES_JSON: &str = include_str!("../data/cases.json");

/// Outcome of writing the sample dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Written,
    AlreadyPresent,
}

/// Write the bundled dataset to `path`.
///
/// An existing file is left alone unless `overwrite` is set.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file or its parent directory cannot be written.
pub fn write_sample_dataset(path: &Path, overwrite: bool) -> Result<SeedOutcome, StorageError> {
    if path.exists() && !overwrite {
        return Ok(SeedOutcome::AlreadyPresent);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
    }
    fs::write(path, SAMPLE_CASES_JSON).map_err(|e| StorageError::Io(e.to_string()))?;
    Ok(SeedOutcome::Written)
}
