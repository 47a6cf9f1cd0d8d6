//! # Connect Four Minimax
//!
//! Connect Four against a computer opponent that chooses its moves with
//! depth-limited minimax search and alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, state machine, serializable view
//! - [`ai`]: Agent trait, position heuristic, minimax search
//! - [`ui`]: Terminal UI and plain console loop
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
