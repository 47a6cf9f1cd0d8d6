use std::fmt;

use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

/// Column used for the center-control bonus.
pub const CENTER_COL: usize = COLS / 2;

/// Legal columns in ascending order.
pub type LegalActions = Vec<usize>;

/// One contiguous run of `WIN_LENGTH` cells along a row, column or diagonal.
pub type Window = [Cell; WIN_LENGTH];

/// Row/column steps for the four window orientations: horizontal, vertical,
/// diagonal going up-right and diagonal going down-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => '1',
            Cell::Computer => '2',
        }
    }
}

/// The 6x7 grid. Row 0 is the bottom row; columns fill bottom-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom, row 5 is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column is playable iff it is in range and its top cell is empty.
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Lowest empty row in `col`, or `None` when the column is full.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Set a cell without any legality check. Callers validate the column
    /// and compute the row with [`Board::next_open_row`] first.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = player.to_cell();
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self.next_open_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.place(row, col, player);
        Ok(row)
    }

    /// All playable columns, ascending. Empty means the board is full.
    pub fn valid_columns(&self) -> LegalActions {
        (0..COLS).filter(|&col| self.is_valid_column(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_column(col))
    }

    /// Every window on the board, each visited exactly once per orientation.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        DIRECTIONS.iter().flat_map(move |&step| {
            (0..ROWS).flat_map(move |row| {
                (0..COLS).filter_map(move |col| self.window_at(row, col, step))
            })
        })
    }

    fn window_at(&self, row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<Window> {
        let reach = WIN_LENGTH as isize - 1;
        let end_row = row as isize + dr * reach;
        let end_col = col as isize + dc * reach;
        if !(0..ROWS as isize).contains(&end_row) || !(0..COLS as isize).contains(&end_col) {
            return None;
        }

        let mut window = [Cell::Empty; WIN_LENGTH];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = (row as isize + dr * i as isize) as usize;
            let c = (col as isize + dc * i as isize) as usize;
            *cell = self.cells[r][c];
        }
        Some(window)
    }

    /// True iff `player` owns four consecutive cells in any orientation.
    pub fn has_four_in_a_row(&self, player: Player) -> bool {
        let cell = player.to_cell();
        self.windows().any(|window| window.iter().all(|&c| c == cell))
    }

    /// The player holding four in a row, if any.
    pub fn winner(&self) -> Option<Player> {
        [Player::Human, Player::Computer]
            .into_iter()
            .find(|&player| self.has_four_in_a_row(player))
    }

    /// A board is terminal once either player has won or no column is playable.
    pub fn is_terminal(&self) -> bool {
        self.has_four_in_a_row(Player::Human)
            || self.has_four_in_a_row(Player::Computer)
            || self.is_full()
    }

    /// Rows from top to bottom, the order a front end draws them in.
    pub fn rows_top_down(&self) -> Vec<Vec<Cell>> {
        self.cells.iter().rev().map(|row| row.to_vec()).collect()
    }

    /// Build a board from text rows listed top to bottom, bottom-aligned:
    /// `.` empty, `1` human, `2` computer.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        assert!(rows.len() <= ROWS, "too many rows");
        let mut board = Board::new();
        for (i, line) in rows.iter().enumerate() {
            let row = rows.len() - 1 - i;
            assert_eq!(line.len(), COLS, "row {line:?} has wrong width");
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    '.' => Cell::Empty,
                    '1' => Cell::Human,
                    '2' => Cell::Computer,
                    other => panic!("unexpected cell {other:?}"),
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}
