#![forbid(unsafe_code)]

pub mod json;
pub mod repository;
pub mod sample;

pub use repository::{
    CaseRepository, DataLoadError, InMemoryCaseRepository, InMemoryProgressStore, ProgressStore,
    Storage, StorageError,
};
pub use sample::{SAMPLE_CASES_JSON, SeedOutcome, write_sample_dataset};
