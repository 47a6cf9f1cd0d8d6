use crate::game::{Board, Player, Window, CENTER_COL, ROWS, WIN_LENGTH};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Default heuristic: a center-column bonus plus a score for every window.
///
/// Windows holding pieces from both players score nothing.
pub struct WindowHeuristic;

impl WindowHeuristic {
    pub const CENTER_WEIGHT: i64 = 3;
    pub const FOUR: i64 = 100;
    pub const OPEN_THREE: i64 = 5;
    pub const OPEN_TWO: i64 = 2;
    pub const OPPONENT_OPEN_THREE: i64 = -4;

    fn score_window(window: &Window, player: Player) -> i64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let own = window.iter().filter(|&&c| c == own_cell).count();
        let opp = window.iter().filter(|&&c| c == opp_cell).count();
        let empty = WIN_LENGTH - own - opp;

        let mut score = if own == 4 {
            Self::FOUR
        } else if own == 3 && empty == 1 {
            Self::OPEN_THREE
        } else if own == 2 && empty == 2 {
            Self::OPEN_TWO
        } else {
            0
        };

        if opp == 3 && empty == 1 {
            score += Self::OPPONENT_OPEN_THREE;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let own_cell = player.to_cell();

        let center = (0..ROWS)
            .filter(|&row| board.get(row, CENTER_COL) == own_cell)
            .count() as i64;

        let windows: i64 = board
            .windows()
            .map(|window| Self::score_window(&window, player))
            .sum();

        center * Self::CENTER_WEIGHT + windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_empty_board_is_zero() {
        let board = Board::new();
        let h = WindowHeuristic;
        assert_eq!(h.evaluate(&board, Player::Human), 0);
        assert_eq!(h.evaluate(&board, Player::Computer), 0);
    }

    #[test]
    fn heuristic_center_bonus_counts_own_pieces_only() {
        let h = WindowHeuristic;
        let board = Board::from_rows(&["...2...", "...1..."]);
        // One own center piece; the two-piece vertical window is mixed
        assert_eq!(h.evaluate(&board, Player::Computer), 3);
        assert_eq!(h.evaluate(&board, Player::Human), 3);
    }

    #[test]
    fn heuristic_center_preference() {
        let h = WindowHeuristic;
        let center = Board::from_rows(&["...2..."]);
        let edge = Board::from_rows(&["2......"]);
        assert!(h.evaluate(&center, Player::Computer) > h.evaluate(&edge, Player::Computer));
    }

    #[test]
    fn heuristic_open_three_and_two() {
        let h = WindowHeuristic;
        let board = Board::from_rows(&["222...."]);
        // [2,2,2,.] = 5, [2,2,.,.] = 2, [2,.,.,.] = 0
        assert_eq!(h.evaluate(&board, Player::Computer), 7);
    }

    #[test]
    fn heuristic_penalizes_opponent_open_three() {
        let h = WindowHeuristic;
        let board = Board::from_rows(&["111...."]);
        assert_eq!(h.evaluate(&board, Player::Computer), -4);
    }

    #[test]
    fn heuristic_four_in_a_row() {
        let h = WindowHeuristic;
        let board = Board::from_rows(&["2222..."]);
        // [2,2,2,2] = 100, [2,2,2,.] = 5, [2,2,.,.] = 2, [2,.,.,.] = 0, center = 3
        assert_eq!(h.evaluate(&board, Player::Computer), 110);
    }

    #[test]
    fn heuristic_mixed_windows_score_nothing() {
        let h = WindowHeuristic;
        let board = Board::from_rows(&["12....."]);
        assert_eq!(h.evaluate(&board, Player::Computer), 0);
        assert_eq!(h.evaluate(&board, Player::Human), 0);
    }

    #[test]
    fn heuristic_vertical_and_diagonal_windows() {
        let h = WindowHeuristic;
        let vertical = Board::from_rows(&["2......", "2......", "2......"]);
        // [2,2,2,.] = 5 and [2,2,.,.] = 2 up column 0
        assert_eq!(h.evaluate(&vertical, Player::Computer), 7);

        let diagonal = Board::from_rows(&["..2....", ".21....", "211...."]);
        assert_eq!(h.evaluate(&diagonal, Player::Computer), 7);
    }
}
