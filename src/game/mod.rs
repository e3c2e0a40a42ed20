//! Core Connect Four game logic: board representation, win detection, player
//! types, and game state machine with immutable transitions.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, BoardParseError, Cell, BOTTOM_ROW, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
pub use win::is_winning_line;
