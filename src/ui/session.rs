use std::io::{self, BufRead, Write};

use crate::ai::Agent;
use crate::game::{GameOutcome, GameState, Mark, MoveError};

use super::board_text::{render_board, KEYPAD_HELP};
use super::input::parse_move;

/// Interactive console game: the agent (X) against a human (O), strictly
/// alternating, each side retried until its placement is accepted.
///
/// Generic over the input and output streams so sessions can be scripted in
/// tests.
pub struct PlaySession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlaySession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PlaySession { input, output }
    }

    /// Play one game to completion and return its outcome.
    pub fn run(&mut self, agent: &mut dyn Agent) -> io::Result<GameOutcome> {
        writeln!(self.output, "{}", KEYPAD_HELP)?;

        let mut state = GameState::initial();
        self.render(&state)?;

        let outcome = loop {
            self.agent_move(agent, &mut state)?;
            if let Some(outcome) = state.outcome() {
                break outcome;
            }
            self.render(&state)?;

            self.human_move(&mut state)?;
            if let Some(outcome) = state.outcome() {
                break outcome;
            }
            self.render(&state)?;
            writeln!(self.output, "-------------")?;
        };

        self.render(&state)?;
        match outcome {
            GameOutcome::Winner(mark) => writeln!(self.output, "{} wins!", mark.name())?,
            GameOutcome::Draw => writeln!(self.output, "It's a draw!")?,
        }
        Ok(outcome)
    }

    fn render(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(self.output, "{}", render_board(state.board()))
    }

    /// Ask the agent until it lands on a free cell.
    fn agent_move(&mut self, agent: &mut dyn Agent, state: &mut GameState) -> io::Result<()> {
        loop {
            let action = agent.select_action(state, false);
            match state.apply_move_mut(action, Mark::X) {
                Ok(()) => return Ok(()),
                Err(MoveError::Occupied) => continue,
                Err(err) => {
                    return Err(io::Error::other(format!(
                        "agent played an impossible move ({err:?})"
                    )));
                }
            }
        }
    }

    /// Prompt the human until a key lands on a free cell. Bad input is never
    /// fatal.
    fn human_move(&mut self, state: &mut GameState) -> io::Result<()> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the game ended",
                ));
            }

            let Some(cell) = parse_move(&line) else {
                writeln!(self.output, "Invalid move, use keys 1-9.")?;
                continue;
            };

            match state.apply_move_mut(cell, Mark::O) {
                Ok(()) => return Ok(()),
                Err(MoveError::Occupied) => {
                    writeln!(self.output, "That cell is taken.")?;
                }
                Err(err) => {
                    return Err(io::Error::other(format!(
                        "human move {cell} should have been playable ({err:?})"
                    )));
                }
            }
        }
    }
}
