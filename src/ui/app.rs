use crate::ai::Agent;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::warn;

pub struct App {
    game_state: GameState,
    agent: Box<dyn Agent>,
    first_player: Player,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(agent: Box<dyn Agent>, first_player: Player) -> Self {
        let mut app = App {
            game_state: GameState::with_first_player(first_player),
            agent,
            first_player,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        };
        app.computer_turn();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let col = c as usize - '0' as usize;
                if col < COLS {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state.reset(self.first_player);
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
                self.computer_turn();
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column, then let the computer reply
    fn drop_piece(&mut self) {
        match self.game_state.apply_human_move(self.selected_column) {
            Ok(GameOutcome::InProgress) => self.computer_turn(),
            Ok(outcome) => self.announce(outcome),
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(format!("Invalid move: {err}"));
            }
        }
    }

    fn computer_turn(&mut self) {
        if self.game_state.is_terminal() || self.game_state.current_player() != Player::Computer {
            return;
        }

        let column = self.agent.select_action(&self.game_state);
        match self.game_state.apply_move_mut(column) {
            Ok(GameOutcome::InProgress) => {
                self.message = Some(format!("{} played column {column}", self.agent.name()));
            }
            Ok(outcome) => self.announce(outcome),
            Err(err) => {
                warn!(column, %err, "computer chose an illegal column");
                self.message = Some(format!("Computer error: {err}"));
            }
        }
    }

    fn announce(&mut self, outcome: GameOutcome) {
        self.message = Some(match outcome {
            GameOutcome::Winner(player) => format!("{} wins!", player.name()),
            GameOutcome::Draw => "It's a tie!".to_string(),
            GameOutcome::InProgress => return,
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let mode = format!("{} vs Human", self.agent.name());
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &mode,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MinimaxAgent;
    use crate::game::{Board, Cell};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(first: Player) -> App {
        App::new(Box::new(MinimaxAgent::with_seed(2, 4)), first)
    }

    #[test]
    fn computer_opens_when_it_moves_first() {
        let app = app(Player::Computer);
        assert_eq!(app.game_state.current_player(), Player::Human);
        let pieces = (0..COLS)
            .filter(|&col| app.game_state.board().get(0, col) == Cell::Computer)
            .count();
        assert_eq!(pieces, 1);
    }

    #[test]
    fn enter_drops_piece_and_computer_replies() {
        let mut app = app(Player::Human);
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.game_state.board().get(0, 2), Cell::Human);
        assert_eq!(app.game_state.current_player(), Player::Human);
        assert_eq!(app.game_state.board().valid_columns().len(), COLS);
        assert!(app.message.unwrap().starts_with("Minimax played column"));
    }

    #[test]
    fn selection_stays_on_board() {
        let mut app = app(Player::Human);
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.selected_column, COLS - 1);
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn full_column_reports_error() {
        let mut app = app(Player::Human);
        for _ in 0..6 {
            app.game_state.apply_move_mut(6).unwrap();
        }
        app.handle_key(key(KeyCode::Char('6')));
        assert_eq!(app.message.as_deref(), Some("Invalid move: column 6 is full"));
        assert_eq!(app.game_state.current_player(), Player::Human);
    }

    #[test]
    fn restart_and_quit() {
        let mut app = app(Player::Human);
        app.handle_key(key(KeyCode::Char('3')));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(*app.game_state.board(), Board::new());
        assert_eq!(app.message.as_deref(), Some("New game started!"));

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
