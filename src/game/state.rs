use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Board, LegalActions, Player};
use crate::error::MoveError;

/// Outcome of a game. The three decided variants absorb: no further moves
/// are accepted once one is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_decided(self) -> bool {
        self != GameOutcome::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
}

impl GameState {
    /// Create initial game state with the human to move
    pub fn initial() -> Self {
        Self::with_first_player(Player::Human)
    }

    pub fn with_first_player(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            outcome: GameOutcome::InProgress,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> LegalActions {
        if self.is_terminal() {
            return LegalActions::new();
        }
        self.board.valid_columns()
    }

    /// Apply a move for the current player and return the new state
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move for the current player in place, returning the outcome
    /// after the move.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        let row = self.board.drop_piece(column, mover)?;

        if self.board.has_four_in_a_row(mover) {
            self.outcome = GameOutcome::Winner(mover);
        } else if self.board.valid_columns().is_empty() {
            self.outcome = GameOutcome::Draw;
        } else {
            self.current_player = mover.other();
        }

        if self.outcome.is_decided() {
            info!(player = mover.name(), row, column, outcome = ?self.outcome, "game decided");
        }

        Ok(self.outcome)
    }

    /// Play the human's move. Fails when the game is decided or when the
    /// computer is to move.
    pub fn apply_human_move(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.current_player != Player::Human {
            return Err(MoveError::OutOfTurn);
        }
        self.apply_move_mut(column)
    }

    /// Start a fresh game with `first` to move.
    pub fn reset(&mut self, first: Player) {
        *self = Self::with_first_player(first);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Human);
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Computer);
        assert_eq!(new_state.board().get(0, 3), Cell::Human);
        // Original untouched
        assert_eq!(state.board().get(0, 3), Cell::Empty);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Human builds the bottom row, computer stacks on top of it
        for col in 0..4 {
            state.apply_move_mut(col).unwrap();
            if col < 3 {
                state.apply_move_mut(col).unwrap();
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), GameOutcome::Winner(Player::Human));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_decided_game_absorbs_moves() {
        let mut state = GameState::initial();
        for col in [0, 6, 0, 6, 0, 6, 0] {
            state.apply_move_mut(col).unwrap();
        }
        assert_eq!(state.outcome(), GameOutcome::Winner(Player::Human));
        let before = *state.board();

        assert_eq!(state.apply_move_mut(1), Err(MoveError::GameOver));
        assert_eq!(state.apply_human_move(1), Err(MoveError::GameOver));
        assert_eq!(*state.board(), before);
    }

    #[test]
    fn test_human_move_errors_leave_board_unchanged() {
        let mut state = GameState::initial();
        assert_eq!(state.apply_human_move(7), Err(MoveError::InvalidColumn(7)));
        assert_eq!(state.current_player(), Player::Human);

        for _ in 0..6 {
            state.apply_move_mut(2).unwrap();
        }
        assert_eq!(state.apply_human_move(2), Err(MoveError::ColumnFull(2)));
        assert_eq!(state.current_player(), Player::Human);
    }

    #[test]
    fn test_human_move_out_of_turn() {
        let mut state = GameState::with_first_player(Player::Computer);
        assert_eq!(state.apply_human_move(3), Err(MoveError::OutOfTurn));
        state.apply_move_mut(3).unwrap();
        assert_eq!(state.apply_human_move(3), Ok(GameOutcome::InProgress));
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();

        // Fills the board as alternating stripes that flip every two rows,
        // leaving no four in a row anywhere.
        let pattern = [
            0, 1, 1, 0, 2, 3, 3, 2, 4, 5, 5, 4, 6, 0, 0, 6, 1, 2, 2, 1, 3, 4, 4, 3, 5, 6, 6, 5,
            0, 1, 1, 0, 2, 3, 3, 2, 4, 5, 5, 4, 6, 6,
        ];

        for &col in &pattern {
            assert!(!state.is_terminal(), "game ended early before column {col}");
            state.apply_move_mut(col).unwrap();
        }

        assert_eq!(state.outcome(), GameOutcome::Draw);
        assert!(state.board().valid_columns().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::initial();
        state.apply_move_mut(3).unwrap();
        state.reset(Player::Computer);
        assert_eq!(state.current_player(), Player::Computer);
        assert_eq!(*state.board(), Board::new());
    }
}
