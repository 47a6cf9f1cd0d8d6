//! Core Connect Four game logic: board representation, player types, the
//! turn state machine and the serializable view handed to front ends.

mod board;
mod player;
mod state;
mod view;

pub use board::{Board, Cell, LegalActions, Window, CENTER_COL, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use view::GameView;
