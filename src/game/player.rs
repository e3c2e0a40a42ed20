use super::board::Cell;

/// `X` is the AI side, `O` the human side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The side played by the search AI.
    pub const AI: Player = Player::X;
    /// The side played by the human.
    pub const HUMAN: Player = Player::O;

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
    }

    #[test]
    fn test_roles() {
        assert_eq!(Player::AI, Player::X);
        assert_eq!(Player::HUMAN, Player::AI.other());
    }

    #[test]
    fn test_player_cell() {
        assert_eq!(Player::X.to_cell(), Cell::X);
        assert_eq!(Player::O.to_cell(), Cell::O);
    }
}
