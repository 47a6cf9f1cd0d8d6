use crate::game::GameState;

/// Interface a turn loop uses to ask a computer player for its move.
pub trait Agent {
    /// Select a column for the player to move. Never called on a decided game.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
