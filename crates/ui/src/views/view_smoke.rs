use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use litter_core::model::{Case, CaseDraft};
use services::SessionController;
use storage::repository::{InMemoryCaseRepository, InMemoryProgressStore};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::GameView;

struct TestApp {
    session: Arc<Mutex<SessionController>>,
}

impl UiApp for TestApp {
    fn session(&self) -> Arc<Mutex<SessionController>> {
        Arc::clone(&self.session)
    }
}

fn build_case() -> Case {
    CaseDraft {
        location: "Under the fountain".into(),
        name: Some("The Hydration Protest".into()),
        camera: "Sibi stares at the fountain.".into(),
        evidence: vec!["a dry pellet".into(), "paw prints".into()],
        options: vec!["A. Too much water".into(), "B. Not enough water (√)".into()],
        correct: 1,
        wiki: "Cats distrust new water sources.".into(),
    }
    .validate()
    .unwrap()
}

fn build_context(cases: Vec<Case>) -> AppContext {
    let session = SessionController::new(
        Arc::new(InMemoryCaseRepository::new(cases)),
        Arc::new(InMemoryProgressStore::new()),
    )
    .with_seed(1);
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        session: Arc::new(Mutex::new(session)),
    });
    build_app_context(&app)
}

fn render(ctx: AppContext) -> String {
    let mut dom = VirtualDom::new(GameView).with_root_context(ctx);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn game_view_smoke_renders_current_case() {
    let html = render(build_context(vec![build_case()]));
    assert!(html.contains("Case file 1 / 1 (saved)"), "missing progress in {html}");
    assert!(html.contains("Scene: Under the fountain"), "missing location in {html}");
    assert!(html.contains("a dry pellet, paw prints"), "missing evidence in {html}");
    assert!(html.contains("2. Not enough water"), "missing option in {html}");
    assert!(!html.contains("(√)"), "answer marker leaked in {html}");
    assert!(html.contains("Destroy all files"), "missing reset in {html}");
}

#[test]
fn game_view_smoke_renders_solution_after_correct_answer() {
    let ctx = build_context(vec![build_case()]);
    let _ = ctx.screen();
    assert!(ctx.submit(1).unwrap());

    let html = render(ctx);
    assert!(html.contains("Case closed: The Hydration Protest"), "missing title in {html}");
    assert!(html.contains("Save and go to the next case"), "missing advance in {html}");
}

#[test]
fn game_view_smoke_renders_fatal_error() {
    let html = render(build_context(Vec::new()));
    assert!(html.contains("could not be opened"), "missing error in {html}");
    assert!(!html.contains("Destroy all files"), "reset offered on fatal screen in {html}");
}
