use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::repository::Storage;

mod case_repo;
mod mapping;
mod progress_repo;

pub use case_repo::JsonCaseRepository;
pub use progress_repo::JsonProgressStore;

impl Storage {
    /// Build a `Storage` backed by a JSON dataset and a JSON progress file.
    ///
    /// Nothing is touched on disk until the first load, read, or write.
    #[must_use]
    pub fn json(cases_path: impl Into<PathBuf>, progress_path: impl Into<PathBuf>) -> Self {
        Self {
            cases: Arc::new(JsonCaseRepository::new(cases_path)),
            progress: Arc::new(JsonProgressStore::new(progress_path)),
        }
    }
}

/// Sibling path used for write-then-rename replacement (`save.json` -> `save.json.tmp`).
pub(crate) fn temp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_keeps_the_original_name() {
        assert_eq!(
            temp_path_for(Path::new("dir/save_data.json")),
            PathBuf::from("dir/save_data.json.tmp")
        );
        assert_eq!(temp_path_for(Path::new("save")), PathBuf::from("save.tmp"));
    }
}
