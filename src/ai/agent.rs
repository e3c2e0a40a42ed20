use crate::game::GameState;

/// Universal interface for anything that picks moves.
pub trait Agent {
    /// Select an action (column) given the current game state.
    ///
    /// Only called on non-terminal states, so at least one column is legal.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
