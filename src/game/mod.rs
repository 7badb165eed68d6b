//! Core ta-te-ti game logic: board representation, marks, and the game
//! state machine with immutable transitions.

mod board;
mod mark;
mod state;

pub use board::{Board, Cell, CELLS, WIN_LINES};
pub use mark::Mark;
pub use state::{GameOutcome, GameState, MoveError};
