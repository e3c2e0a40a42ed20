use crate::game::{is_winning_line, Board, Cell, Player, BOTTOM_ROW, COLS, ROWS};

/// Per-row decay applied to a threat for each row it sits above the next
/// playable cell of its column.
pub const THREAT_DECAY: f64 = 0.8;

/// How much more a human threat counts than an AI threat of the same shape.
pub const DEFENSE_WEIGHT: f64 = 4.0;

/// Trait for scoring a board position.
///
/// Scores are always from the AI's point of view: positive favors
/// [`Player::AI`], negative favors [`Player::HUMAN`].
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board) -> f64;
}

/// Counts the empty cells that would complete a four for either side,
/// weighting each by how soon it can actually be played.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatHeuristic;

impl ThreatHeuristic {
    /// Weight of a threat on `row` in a column whose stack is `height` high.
    /// A threat sitting on the next playable cell weighs 1.
    fn weight(row: usize, height: usize) -> f64 {
        THREAT_DECAY.powi(BOTTOM_ROW as i32 - row as i32 - height as i32)
    }
}

impl Heuristic for ThreatHeuristic {
    fn evaluate(&self, board: &Board) -> f64 {
        let mut offense = 0.0;
        let mut defense = 0.0;

        for col in 0..COLS {
            let height = board.distance_from_bottom(col);
            for row in 0..ROWS {
                if board.get(row, col) != Cell::Empty {
                    continue;
                }
                let weight = Self::weight(row, height);
                if is_winning_line(board, col, row, Player::AI) {
                    offense += weight;
                }
                if is_winning_line(board, col, row, Player::HUMAN) {
                    defense += weight;
                }
            }
        }

        offense - DEFENSE_WEIGHT * defense
    }
}

/// Score `board` with [`ThreatHeuristic`].
pub fn rate_board(board: &Board) -> f64 {
    ThreatHeuristic.evaluate(board)
}
