use std::fs;
use std::sync::Arc;

use litter_core::model::{Case, CaseDraft, Order, ProgressRecord};
use services::{SessionController, SessionError, SessionPhase};
use storage::json::JsonProgressStore;
use storage::repository::{InMemoryCaseRepository, ProgressStore};
use tempfile::TempDir;

fn build_cases(corrects: &[usize]) -> Vec<Case> {
    corrects
        .iter()
        .enumerate()
        .map(|(id, &correct)| {
            CaseDraft {
                location: format!("Room {id}"),
                name: Some(format!("Case {id}")),
                camera: "camera".into(),
                evidence: vec!["clue".into()],
                options: vec!["A".into(), "B".into(), "C".into()],
                correct,
                wiki: "explained".into(),
            }
            .validate()
            .unwrap()
        })
        .collect()
}

fn controller(cases: Vec<Case>, store: &JsonProgressStore, seed: u64) -> SessionController {
    SessionController::new(
        Arc::new(InMemoryCaseRepository::new(cases)),
        Arc::new(store.clone()),
    )
    .with_seed(seed)
}

#[test]
fn three_case_playthrough_persists_every_advance() {
    let dir = TempDir::new().unwrap();
    let store = JsonProgressStore::new(dir.path().join("save_data.json"));
    let mut session = controller(build_cases(&[1, 0, 2]), &store, 2024);

    session.initialize().unwrap();
    let order = session.order().unwrap().clone();
    assert!(order.is_permutation_of(3));
    assert_eq!(session.idx(), Some(0));

    let correct = session.current_case().unwrap().correct();
    let wrong = (correct + 1) % 3;
    assert!(!session.submit_answer(wrong).unwrap().correct);
    assert!(!session.submit_answer(wrong).unwrap().correct);
    assert_eq!(session.idx(), Some(0));

    assert!(session.submit_answer(correct).unwrap().correct);
    assert_eq!(session.phase(), SessionPhase::CaseSolved);
    assert_eq!(session.advance().unwrap(), SessionPhase::InProgress);
    assert_eq!(store.read(), Some(ProgressRecord::new(1, order.clone())));

    for _ in 0..2 {
        let correct = session.current_case().unwrap().correct();
        session.submit_answer(correct).unwrap();
        session.advance().unwrap();
    }

    assert_eq!(session.phase(), SessionPhase::Complete);
    assert!(matches!(session.current_case(), Err(SessionError::Completed)));
    assert_eq!(store.read(), Some(ProgressRecord::new(3, order)));
}

#[test]
fn matching_save_is_resumed_without_reshuffle() {
    let dir = TempDir::new().unwrap();
    let store = JsonProgressStore::new(dir.path().join("save_data.json"));
    let saved = ProgressRecord::new(2, Order::from_indices(vec![3, 1, 0, 2]));
    store.write(&saved).unwrap();

    let mut session = controller(build_cases(&[0, 1, 2, 0]), &store, 1);
    session.initialize().unwrap();

    assert_eq!(session.idx(), Some(2));
    assert_eq!(session.order(), Some(&saved.order));
    assert_eq!(session.current_case().unwrap().location(), "Room 0");
}

#[test]
fn resume_then_restart_process_keeps_position() {
    let dir = TempDir::new().unwrap();
    let store = JsonProgressStore::new(dir.path().join("save_data.json"));

    let mut first = controller(build_cases(&[0, 1, 2]), &store, 5);
    first.initialize().unwrap();
    let correct = first.current_case().unwrap().correct();
    first.submit_answer(correct).unwrap();
    first.advance().unwrap();
    let order = first.order().unwrap().clone();
    drop(first);

    let mut second = controller(build_cases(&[0, 1, 2]), &store, 99);
    second.initialize().unwrap();
    assert_eq!(second.idx(), Some(1));
    assert_eq!(second.order(), Some(&order));
}

#[test]
fn solved_but_not_advanced_case_is_replayed_after_restart() {
    let dir = TempDir::new().unwrap();
    let store = JsonProgressStore::new(dir.path().join("save_data.json"));

    let mut first = controller(build_cases(&[0, 1]), &store, 5);
    first.initialize().unwrap();
    let correct = first.current_case().unwrap().correct();
    first.submit_answer(correct).unwrap();
    drop(first);

    let mut second = controller(build_cases(&[0, 1]), &store, 5);
    assert_eq!(second.initialize().unwrap(), SessionPhase::InProgress);
    assert_eq!(second.idx(), Some(0));
}

#[test]
fn length_mismatched_save_is_discarded() {
    let dir = TempDir::new().unwrap();
    let store = JsonProgressStore::new(dir.path().join("save_data.json"));
    store
        .write(&ProgressRecord::new(1, Order::from_indices(vec![1, 0])))
        .unwrap();

    let mut session = controller(build_cases(&[0, 1, 2]), &store, 8);
    session.initialize().unwrap();

    assert_eq!(session.idx(), Some(0));
    assert!(session.order().unwrap().is_permutation_of(3));
    let saved = store.read().unwrap();
    assert_eq!(saved.idx, 0);
    assert_eq!(saved.order.len(), 3);
}

#[test]
fn corrupt_save_self_heals() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("save_data.json");
    fs::write(&path, "{\"idx\": 4").unwrap();
    let store = JsonProgressStore::new(&path);

    let mut session = controller(build_cases(&[0, 1]), &store, 8);
    session.initialize().unwrap();

    assert_eq!(session.idx(), Some(0));
    assert_eq!(store.read().unwrap().order.len(), 2);
}

#[test]
fn finished_save_resumes_as_complete() {
    let dir = TempDir::new().unwrap();
    let store = JsonProgressStore::new(dir.path().join("save_data.json"));
    store
        .write(&ProgressRecord::new(2, Order::from_indices(vec![1, 0])))
        .unwrap();

    let mut session = controller(build_cases(&[0, 1]), &store, 8);
    assert_eq!(session.initialize().unwrap(), SessionPhase::Complete);
    assert!(matches!(session.current_case(), Err(SessionError::Completed)));
}

#[test]
fn reset_then_initialize_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("save_data.json");
    let store = JsonProgressStore::new(&path);

    let mut session = controller(build_cases(&[0, 1, 2]), &store, 8);
    session.initialize().unwrap();
    let correct = session.current_case().unwrap().correct();
    session.submit_answer(correct).unwrap();
    session.advance().unwrap();

    session.reset().unwrap();
    assert!(!path.exists());
    assert_eq!(session.phase(), SessionPhase::Uninitialized);

    session.initialize().unwrap();
    assert_eq!(session.idx(), Some(0));
    assert_eq!(store.read().unwrap().idx, 0);
}

#[test]
fn missing_dataset_is_fatal() {
    let dir = TempDir::new().unwrap();
    let store = JsonProgressStore::new(dir.path().join("save_data.json"));
    let mut session = SessionController::new(
        Arc::new(storage::json::JsonCaseRepository::new(dir.path().join("cases.json"))),
        Arc::new(store.clone()),
    );

    let err = session.initialize().unwrap_err();
    assert!(matches!(err, SessionError::DataLoad(_)));
    assert_eq!(session.phase(), SessionPhase::Uninitialized);
    assert_eq!(store.read(), None);
}
