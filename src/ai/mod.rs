//! Computer opponent: the agent interface, the position heuristic and the
//! alpha-beta minimax search.

mod agent;
pub mod heuristic;
pub mod minimax;

pub use agent::Agent;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{MinimaxAgent, SearchConfig, SearchResult, SearchStats, WIN_SCORE};
