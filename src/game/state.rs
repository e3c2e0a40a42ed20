use super::{Board, Player, COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Why a column could not be played. [`Board::drop_piece`] reports the first
/// two; [`GameState`] adds `GameOver`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state; the human moves first.
    pub fn initial() -> Self {
        Self::new(Player::HUMAN)
    }

    /// Create an empty game where `first` moves first.
    pub fn new(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of pieces played so far.
    pub fn move_count(&self) -> usize {
        self.board.piece_count()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably, returning the row the piece landed on
    pub fn apply_move_mut(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())?;

        // Check for win
        if self.board.check_win(row, column) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(row)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
