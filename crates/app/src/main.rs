use std::io;
use std::sync::{Arc, Mutex};

use console::Term;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ScoredRun, SessionController};
use storage::json::JsonCaseRepository;
use storage::repository::{CaseRepository, Storage};
use storage::{SeedOutcome, write_sample_dataset};
use tracing::info;
use ui::{App, UiApp, build_app_context};

mod config;
mod logging;
mod terminal;

use config::{Invocation, Paths, print_usage};
use terminal::Pacing;

struct DesktopApp {
    session: Arc<Mutex<SessionController>>,
}

impl UiApp for DesktopApp {
    fn session(&self) -> Arc<Mutex<SessionController>> {
        Arc::clone(&self.session)
    }
}

fn launch_ui(paths: &Paths) {
    info!(cases = %paths.cases.display(), save = %paths.save.display(), "launching ui");
    let storage = Storage::json(&paths.cases, &paths.save);
    let session = SessionController::new(storage.cases, storage.progress);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        session: Arc::new(Mutex::new(session)),
    });

    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Sibi's Fifty Messes")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn run_terminal(paths: &Paths) -> Result<(), Box<dyn std::error::Error>> {
    let cases = JsonCaseRepository::new(&paths.cases).load()?;
    let mut run = ScoredRun::new(cases)?;

    let mut term = Term::stdout();
    let pacing = if term.is_term() {
        Pacing::interactive()
    } else {
        Pacing::instant()
    };

    let stdin = io::stdin();
    terminal::play(&mut run, stdin.lock(), &mut term, pacing)?;
    Ok(())
}

fn seed(paths: &Paths, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    match write_sample_dataset(&paths.cases, force)? {
        SeedOutcome::Written => println!("wrote sample cases to {}", paths.cases.display()),
        SeedOutcome::AlreadyPresent => println!(
            "{} already exists; pass --force to overwrite",
            paths.cases.display()
        ),
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let invocation = config::parse(argv, |key| std::env::var(key).ok()).inspect_err(|_| {
        print_usage();
    })?;

    match invocation {
        Invocation::Help => {
            print_usage();
            Ok(())
        }
        Invocation::Ui(paths) => {
            launch_ui(&paths);
            Ok(())
        }
        Invocation::Terminal(paths) => run_terminal(&paths),
        Invocation::Seed { paths, force } => seed(&paths, force),
    }
}

fn main() {
    logging::init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
