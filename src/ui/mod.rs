//! Front ends for playing against the AI: a full-screen terminal UI and a
//! plain line-based loop.

mod app;
mod game_view;
pub mod text;

pub use app::App;
pub use text::TextGame;
