//! Four-in-a-row detection around a single cell.

use super::board::{Board, COLS, ROWS};
use super::Player;

/// `(dx, dy)` axes: horizontal, vertical, and both diagonals.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// Returns true if a `player` piece at (`row`, `col`) would be part of a run
/// of four or more.
///
/// The cell's own content is not inspected, only its neighbours. This lets
/// callers ask "would dropping here win?" on an empty cell without touching
/// the board.
pub fn is_winning_line(board: &Board, col: usize, row: usize, player: Player) -> bool {
    AXES.iter().any(|&(dx, dy)| {
        let forward = run_length(board, col, row, dx, dy, player);
        let backward = run_length(board, col, row, -dx, -dy, player);
        forward + backward >= 3
    })
}

/// Consecutive `player` cells strictly beyond (`row`, `col`) along (`dx`, `dy`).
fn run_length(board: &Board, col: usize, row: usize, dx: isize, dy: isize, player: Player) -> usize {
    let cell = player.to_cell();
    let mut count = 0;
    let mut c = col as isize + dx;
    let mut r = row as isize + dy;
    while (0..COLS as isize).contains(&c)
        && (0..ROWS as isize).contains(&r)
        && board.get(r as usize, c as usize) == cell
    {
        count += 1;
        c += dx;
        r += dy;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Cell::X).unwrap();
        }
        assert!(is_winning_line(&board, 2, 5, Player::X));
        assert!(!is_winning_line(&board, 2, 5, Player::O));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::O).unwrap();
        }
        assert!(is_winning_line(&board, 3, 2, Player::O));
    }

    #[test]
    fn test_diagonal_up_win() {
        // `/` pattern ending at column 3.
        let mut board = Board::new();
        board.drop_piece(0, Cell::X).unwrap();

        board.drop_piece(1, Cell::O).unwrap();
        board.drop_piece(1, Cell::X).unwrap();

        board.drop_piece(2, Cell::O).unwrap();
        board.drop_piece(2, Cell::O).unwrap();
        board.drop_piece(2, Cell::X).unwrap();

        board.drop_piece(3, Cell::O).unwrap();
        board.drop_piece(3, Cell::O).unwrap();
        board.drop_piece(3, Cell::O).unwrap();
        let row = board.drop_piece(3, Cell::X).unwrap();

        assert!(is_winning_line(&board, 3, row, Player::X));
    }

    #[test]
    fn test_diagonal_down_win() {
        // `\` pattern ending at column 3.
        let mut board = Board::new();
        board.drop_piece(6, Cell::X).unwrap();

        board.drop_piece(5, Cell::O).unwrap();
        board.drop_piece(5, Cell::X).unwrap();

        board.drop_piece(4, Cell::O).unwrap();
        board.drop_piece(4, Cell::O).unwrap();
        board.drop_piece(4, Cell::X).unwrap();

        board.drop_piece(3, Cell::O).unwrap();
        board.drop_piece(3, Cell::O).unwrap();
        board.drop_piece(3, Cell::O).unwrap();
        let row = board.drop_piece(3, Cell::X).unwrap();

        assert!(is_winning_line(&board, 3, row, Player::X));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::X).unwrap();
        }
        assert!(!is_winning_line(&board, 1, 5, Player::X));
    }

    #[test]
    fn test_hypothetical_piece_on_empty_cell() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::O).unwrap();
        board.drop_piece(1, Cell::O).unwrap();
        board.drop_piece(3, Cell::O).unwrap();
        // The gap at column 2 completes the row for O only.
        assert_eq!(board.get(5, 2), Cell::Empty);
        assert!(is_winning_line(&board, 2, 5, Player::O));
        assert!(!is_winning_line(&board, 2, 5, Player::X));
        assert_eq!(board.get(5, 2), Cell::Empty);
    }

    #[test]
    fn test_run_stops_at_other_color() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::X).unwrap();
        board.drop_piece(1, Cell::X).unwrap();
        board.drop_piece(2, Cell::O).unwrap();
        board.drop_piece(4, Cell::X).unwrap();
        assert!(!is_winning_line(&board, 3, 5, Player::X));
    }

    /// Reference check: some 4-cell window through the cell whose other
    /// three cells all hold `player`.
    fn window_through(board: &Board, col: usize, row: usize, player: Player) -> bool {
        let cell = player.to_cell();
        AXES.iter().any(|&(dx, dy)| {
            (-3..=0).any(|start: isize| {
                (0..4).all(|i| {
                    let c = col as isize + (start + i) * dx;
                    let r = row as isize + (start + i) * dy;
                    if !(0..COLS as isize).contains(&c) || !(0..ROWS as isize).contains(&r) {
                        return false;
                    }
                    (c as usize == col && r as usize == row)
                        || board.get(r as usize, c as usize) == cell
                })
            })
        })
    }

    fn random_board(rng: &mut StdRng) -> Board {
        let mut board = Board::new();
        let pieces = rng.random_range(0..=ROWS * COLS);
        for _ in 0..pieces {
            let col = rng.random_range(0..COLS);
            let cell = if rng.random_bool(0.5) { Cell::X } else { Cell::O };
            let _ = board.drop_piece(col, cell);
        }
        board
    }

    #[test]
    fn test_matches_window_enumeration_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..300 {
            let board = random_board(&mut rng);
            for row in 0..ROWS {
                for col in 0..COLS {
                    for player in [Player::X, Player::O] {
                        assert_eq!(
                            is_winning_line(&board, col, row, player),
                            window_through(&board, col, row, player),
                            "mismatch at ({row}, {col}) for {player:?}\n{board}"
                        );
                    }
                }
            }
        }
    }
}
