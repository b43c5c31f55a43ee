mod case_vm;
mod screen_vm;

pub use case_vm::{CaseVm, OptionVm, ProgressVm, map_case, map_progress};
pub use screen_vm::{ScreenVm, advance_case, load_screen, restart_game, submit_choice};
