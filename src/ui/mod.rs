//! Console front-end: board rendering, keypad input, and the interactive
//! agent-versus-human session.

mod board_text;
mod input;
mod session;

pub use board_text::{render_board, KEYPAD_HELP};
pub use input::{keypad_to_cell, parse_move};
pub use session::PlaySession;
