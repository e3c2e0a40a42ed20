use log::debug;

use crate::game::{is_winning_line, Board, GameState, Player, COLS};

use super::agent::Agent;
use super::heuristic::{Heuristic, ThreatHeuristic};
use super::search::Search;

/// Score of a column that hands the human a win directly on top of the
/// AI's piece.
pub const TRAP_PENALTY: f64 = -10_000.0;

/// Score of a column that cannot be played at all.
pub const FULL_COLUMN_PENALTY: f64 = -100_000.0;

/// First column where dropping a `player` piece completes four.
pub fn winning_drop(board: &Board, player: Player) -> Option<usize> {
    (0..COLS).find(|&col| {
        board
            .drop_target(col)
            .is_some_and(|row| is_winning_line(board, col, row, player))
    })
}

/// Would an AI piece at (`row`, `col`) let the human win on the cell above it?
fn opens_win_above(board: &Board, col: usize, row: usize) -> bool {
    if row == 0 {
        return false;
    }
    let mut next = *board;
    next.place(row, col, Player::AI.to_cell());
    is_winning_line(&next, col, row - 1, Player::HUMAN)
}

/// Per-column scores for the AI, before any immediate win or block is
/// considered. Higher is better.
pub fn rank_columns_with(heuristic: &dyn Heuristic, board: &Board, depth: usize) -> [f64; COLS] {
    rank(heuristic, board, depth).0
}

/// Column scores and the number of positions searched to get them.
fn rank(heuristic: &dyn Heuristic, board: &Board, depth: usize) -> ([f64; COLS], u64) {
    let mut search = Search::new(heuristic);
    let mut scores = [0.0; COLS];

    for (col, score) in scores.iter_mut().enumerate() {
        let Some(row) = board.drop_target(col) else {
            *score = FULL_COLUMN_PENALTY;
            continue;
        };
        if opens_win_above(board, col, row) {
            *score = TRAP_PENALTY;
            continue;
        }

        let mut next = *board;
        next.place(row, col, Player::AI.to_cell());
        *score = search.value(&next, depth.saturating_sub(1), Player::HUMAN);
    }

    debug!(
        "column scores at depth {}: {:?} ({} nodes)",
        depth,
        scores,
        search.nodes()
    );
    (scores, search.nodes())
}

/// [`rank_columns_with`] using [`ThreatHeuristic`].
pub fn rank_columns(board: &Board, depth: usize) -> [f64; COLS] {
    rank_columns_with(&ThreatHeuristic, board, depth)
}

/// Pick the AI's column: win if possible, else block, else the best ranked
/// column (lowest index on ties).
///
/// The board must have at least one playable column.
pub fn choose_column_with(heuristic: &dyn Heuristic, board: &Board, depth: usize) -> usize {
    choose(heuristic, board, depth).0
}

/// The chosen column and how many positions were searched; immediate wins
/// and blocks search nothing.
fn choose(heuristic: &dyn Heuristic, board: &Board, depth: usize) -> (usize, u64) {
    if let Some(col) = winning_drop(board, Player::AI) {
        debug!("column {col} wins immediately");
        return (col, 0);
    }
    if let Some(col) = winning_drop(board, Player::HUMAN) {
        debug!("column {col} blocks a human win");
        return (col, 0);
    }

    let (scores, nodes) = rank(heuristic, board, depth);
    let mut best = 0;
    for col in 1..COLS {
        if scores[col] > scores[best] {
            best = col;
        }
    }
    (best, nodes)
}

/// [`choose_column_with`] using [`ThreatHeuristic`].
pub fn choose_column(board: &Board, depth: usize) -> usize {
    choose_column_with(&ThreatHeuristic, board, depth)
}

/// Agent driving the column policy at a fixed search depth.
///
/// The policy is written for [`Player::AI`]; when asked to move for the
/// other side it plays the color-swapped position instead.
pub struct HeuristicAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    last_nodes: u64,
}

impl HeuristicAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(ThreatHeuristic))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        HeuristicAgent {
            depth,
            heuristic,
            last_nodes: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Positions searched for the most recent move.
    pub fn last_nodes(&self) -> u64 {
        self.last_nodes
    }
}

impl Agent for HeuristicAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        assert!(!state.legal_actions().is_empty(), "No legal actions available");

        let board = if state.current_player() == Player::AI {
            *state.board()
        } else {
            state.board().swapped()
        };
        let (col, nodes) = choose(self.heuristic.as_ref(), &board, self.depth);
        self.last_nodes = nodes;
        col
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
