use std::fmt;
use std::str::FromStr;

use super::state::MoveError;
use super::win::is_winning_line;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Index of the bottom row. Row 0 is the top.
pub const BOTTOM_ROW: usize = ROWS - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used by the text rendering and by [`Board::from_str`].
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    fn swapped(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::X => Cell::O,
            Cell::O => Cell::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 6 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 7")]
    RowLength { row: usize, len: usize },

    #[error("unexpected character '{ch}' in row {row}")]
    BadCell { row: usize, ch: char },

    #[error("floating piece in column {col} at row {row}")]
    Floating { row: usize, col: usize },
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Write a cell directly, bypassing gravity.
    ///
    /// The search uses this together with [`Board::clear`] to play and undo
    /// moves at a known drop target; everything else should go through
    /// [`Board::drop_piece`].
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Empty a cell previously written with [`Board::place`].
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    /// Number of filled cells stacked up from the bottom of `col`.
    pub fn distance_from_bottom(&self, col: usize) -> usize {
        (0..ROWS)
            .rev()
            .take_while(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Row the next piece dropped into `col` lands on, or `None` if the
    /// column is full.
    pub fn drop_target(&self, col: usize) -> Option<usize> {
        BOTTOM_ROW.checked_sub(self.distance_from_bottom(col))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.drop_target(col).ok_or(MoveError::ColumnFull)?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if the piece at (row, col) is part of a four-in-a-row
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        match self.get(row, col) {
            Cell::Empty => false,
            Cell::X => is_winning_line(self, col, row, super::Player::X),
            Cell::O => is_winning_line(self, col, row, super::Player::O),
        }
    }

    /// Same position with the colors of every piece exchanged.
    pub fn swapped(&self) -> Board {
        let mut board = *self;
        for row in board.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = cell.swapped();
            }
        }
        board
    }

    /// Number of non-empty cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
        writeln!(f, "{}", header.join(" "))?;
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses six lines of seven cells each (`-`, `X` or `O`, whitespace
/// ignored), top row first.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != COLS {
                return Err(BoardParseError::RowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                board.cells[row][col] = match ch {
                    '-' | '.' => Cell::Empty,
                    'X' | 'x' => Cell::X,
                    'O' | 'o' => Cell::O,
                    _ => return Err(BoardParseError::BadCell { row, ch }),
                };
            }
        }

        // Pieces must rest on the bottom or on another piece.
        for col in 0..COLS {
            for row in 0..BOTTOM_ROW {
                if board.cells[row][col] != Cell::Empty && board.cells[row + 1][col] == Cell::Empty {
                    return Err(BoardParseError::Floating { row, col });
                }
            }
        }

        Ok(board)
    }
}
