//! Averaged lookahead: every reply is expanded, nothing is pruned, and a
//! position's value is the mean of its children's values.

use crate::game::{is_winning_line, Board, Player, COLS};

use super::heuristic::{Heuristic, ThreatHeuristic};

/// Value of a line where the AI can complete four on its move.
pub const FORCED_WIN: f64 = 1.0;

/// Value of a line where the human can complete four on their move.
pub const FORCED_LOSS: f64 = -4.0;

/// Averaging search over a single heuristic.
///
/// Works on one private copy of the board per call, playing and undoing
/// moves in place, so the caller's board is never touched.
pub struct Search<'h> {
    heuristic: &'h dyn Heuristic,
    nodes: u64,
}

impl<'h> Search<'h> {
    pub fn new(heuristic: &'h dyn Heuristic) -> Self {
        Search { heuristic, nodes: 0 }
    }

    /// Positions visited since this search was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Estimate the value of `board` given that `just_moved` made the last
    /// move, looking `depth` plies ahead.
    pub fn value(&mut self, board: &Board, depth: usize, just_moved: Player) -> f64 {
        let mut scratch = *board;
        self.expand(&mut scratch, depth, just_moved)
    }

    fn expand(&mut self, board: &mut Board, depth: usize, just_moved: Player) -> f64 {
        self.nodes += 1;
        if depth == 0 {
            return self.heuristic.evaluate(board);
        }

        let to_move = just_moved.other();
        let mut total = 0.0;
        let mut expanded = 0usize;

        for col in 0..COLS {
            // Full columns are left out of the average.
            let Some(row) = board.drop_target(col) else {
                continue;
            };

            if is_winning_line(board, col, row, to_move) {
                return match to_move {
                    Player::O => FORCED_LOSS,
                    Player::X => FORCED_WIN,
                };
            }

            board.place(row, col, to_move.to_cell());
            total += self.expand(board, depth - 1, to_move);
            board.clear(row, col);
            expanded += 1;
        }

        if expanded == 0 {
            return self.heuristic.evaluate(board);
        }
        total / expanded as f64
    }
}

/// [`Search::value`] with the default [`ThreatHeuristic`].
pub fn search_value(board: &Board, depth: usize, just_moved: Player) -> f64 {
    Search::new(&ThreatHeuristic).value(board, depth, just_moved)
}
