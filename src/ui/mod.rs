//! Front ends for playing against the computer: a ratatui terminal UI and a
//! plain line-based console loop.

mod app;
pub mod console;
mod game_view;

pub use app::App;
pub use console::run_console;
