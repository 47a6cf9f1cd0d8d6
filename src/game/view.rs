use serde::{Deserialize, Serialize};

use super::{Cell, GameOutcome, GameState, LegalActions, Player};

/// Serializable snapshot of a game for whatever front end renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Grid rows listed top to bottom.
    pub rows: Vec<Vec<Cell>>,
    pub current_player: Player,
    pub outcome: GameOutcome,
    pub valid_columns: LegalActions,
}

impl GameView {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        GameView {
            rows: state.board().rows_top_down(),
            current_player: state.current_player(),
            outcome: state.outcome(),
            valid_columns: state.legal_actions(),
        }
    }
}
