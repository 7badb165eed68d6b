use crate::game::GameState;

/// Universal interface for all AI agents.
pub trait Agent {
    /// Select a cell index given the current game state.
    /// When `training` is true, the agent may explore; otherwise it exploits.
    fn select_action(&mut self, state: &GameState, training: bool) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
