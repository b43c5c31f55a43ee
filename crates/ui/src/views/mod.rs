mod game;
mod state;

#[cfg(test)]
mod view_smoke;

pub use game::GameView;
pub use state::ViewError;
