use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::game::{Board, GameState, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Score of a won position for the computer; a lost one scores the negation.
pub const WIN_SCORE: i64 = 100_000_000_000_000;

/// Search depth used when nothing else is configured.
pub const DEFAULT_DEPTH: usize = 5;

/// Minimax search settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead.
    pub depth: usize,
    /// Seed for tie-break randomness. `None` seeds from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

/// Best column found at a node and the value backing it.
///
/// `column` is `None` only for decided positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub value: i64,
}

/// Counters for the most recent [`MinimaxAgent::compute_move`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Score of a decided board from the computer's side, `None` while play can
/// continue. The score is the same at every depth.
fn terminal_value(board: &Board) -> Option<i64> {
    if board.has_four_in_a_row(Player::Computer) {
        Some(WIN_SCORE)
    } else if board.has_four_in_a_row(Player::Human) {
        Some(-WIN_SCORE)
    } else if board.is_full() {
        Some(0)
    } else {
        None
    }
}

/// Depth-limited minimax agent with alpha-beta pruning. Always plays for
/// [`Player::Computer`], which is the maximizing side.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
    stats: SearchStats,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_rng(depth, StdRng::from_os_rng())
    }

    /// Agent whose tie-breaks are reproducible for a given seed.
    pub fn with_seed(depth: usize, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config.depth, seed),
            None => Self::new(config.depth),
        }
    }

    fn with_rng(depth: usize, rng: StdRng) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Choose the computer's column for `board`.
    ///
    /// A column that completes four in a row right away is played without
    /// searching, the lowest one if there are several. Every win scores the
    /// same, so a deeper search could otherwise see all columns tied once
    /// each of them leads to a forced win.
    ///
    /// # Panics
    ///
    /// If the board is already decided: the turn loop must check for a
    /// finished game before asking for a move.
    pub fn compute_move(&mut self, board: &Board) -> usize {
        assert!(
            !board.is_terminal(),
            "computer move requested on a decided board"
        );

        self.stats = SearchStats::default();
        if let Some(column) = winning_column(board) {
            debug!(column, "computer completes four in a row");
            return column;
        }

        let result = self.minimax(board, self.depth, i64::MIN, i64::MAX, true);
        let Some(column) = result.column else {
            unreachable!("search on an undecided board always yields a column");
        };

        debug!(
            column,
            value = result.value,
            nodes = self.stats.nodes,
            depth = self.depth,
            "computer move chosen"
        );
        column
    }

    /// Minimax with alpha-beta pruning. Values are always from the
    /// computer's side; `maximizing` is true on the computer's turn.
    ///
    /// Columns are scanned in ascending order and a later column only
    /// replaces the current best on a strictly better value. When every
    /// column was searched and all returned the same value, the column is
    /// drawn uniformly at random instead.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if let Some(value) = terminal_value(board) {
            return SearchResult {
                column: None,
                value,
            };
        }

        let legal = board.valid_columns();

        if depth == 0 {
            return SearchResult {
                column: Some(self.random_column(&legal)),
                value: self.heuristic.evaluate(board, Player::Computer),
            };
        }

        let mover = if maximizing {
            Player::Computer
        } else {
            Player::Human
        };
        let mut best = SearchResult {
            column: None,
            value: if maximizing { i64::MIN } else { i64::MAX },
        };
        let mut first_value = None;
        let mut all_tied = true;
        let mut pruned = false;

        for &col in &legal {
            let Some(row) = board.next_open_row(col) else {
                continue;
            };
            let mut child = *board;
            child.place(row, col, mover);

            // The bound being tightened is relaxed by one so a child equal to
            // the current best reports its exact value rather than a bound.
            let value = if maximizing {
                self.minimax(&child, depth - 1, alpha.saturating_sub(1), beta, false)
                    .value
            } else {
                self.minimax(&child, depth - 1, alpha, beta.saturating_add(1), true)
                    .value
            };

            match first_value {
                None => first_value = Some(value),
                Some(first) if first != value => all_tied = false,
                Some(_) => {}
            }

            let improves = if maximizing {
                value > best.value
            } else {
                value < best.value
            };
            if improves {
                best = SearchResult {
                    column: Some(col),
                    value,
                };
            }

            if maximizing {
                alpha = alpha.max(best.value);
            } else {
                beta = beta.min(best.value);
            }
            if alpha >= beta {
                pruned = true;
                break;
            }
        }

        if all_tied && !pruned && legal.len() > 1 {
            trace!(depth, value = best.value, "all columns tied");
            best.column = Some(self.random_column(&legal));
        }

        best
    }

    fn random_column(&mut self, legal: &[usize]) -> usize {
        legal[self.rng.random_range(0..legal.len())]
    }
}

/// Lowest column where the computer's piece would complete four in a row.
fn winning_column(board: &Board) -> Option<usize> {
    board.valid_columns().into_iter().find(|&col| {
        let mut child = *board;
        child.drop_piece(col, Player::Computer).is_ok()
            && child.has_four_in_a_row(Player::Computer)
    })
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        debug_assert_eq!(state.current_player(), Player::Computer);
        self.compute_move(state.board())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
