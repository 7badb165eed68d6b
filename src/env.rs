//! Gym-style environment around the game state machine: flat observations,
//! a tunable reward table, and a seeded uniform-random opponent that replies
//! within the same step.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::EnvError;
use crate::game::{Board, Cell, GameOutcome, GameState, Mark, MoveError, CELLS};

/// Flat board observation: one integer per cell, `0` empty, `1` the agent's
/// mark (X), `2` the opponent's (O).
pub type Observation = [u8; CELLS];

/// Encode a board as the flat observation handed to the learning agent.
pub fn encode_observation(board: &Board) -> Observation {
    let mut obs = [0u8; CELLS];
    for (i, slot) in obs.iter_mut().enumerate() {
        *slot = match board.get(i) {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        };
    }
    obs
}

/// Reward shaping table. The magnitudes are tuning knobs, not game rules;
/// only the signs are checked at config load.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Reward for an accepted move that leaves the game open.
    pub step: f32,
    /// Reward when the agent completes a line.
    pub win: f32,
    /// Reward when the opponent completes a line.
    pub lose: f32,
    /// Reward when the board fills with no line.
    pub draw: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        RewardConfig {
            step: -1.0,
            win: 20.0,
            lose: -2.0,
            draw: -1.0,
        }
    }
}

impl RewardConfig {
    /// Reward for an accepted move that produced the given outcome.
    pub fn for_outcome(&self, outcome: Option<GameOutcome>) -> f32 {
        match outcome {
            None => self.step,
            Some(GameOutcome::Winner(Mark::X)) => self.win,
            Some(GameOutcome::Winner(Mark::O)) => self.lose,
            Some(GameOutcome::Draw) => self.draw,
        }
    }
}

/// Auxiliary per-step diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInfo {
    /// The agent's cell was already taken; the board did not change and the
    /// reward was forced to zero.
    pub rejected: bool,
}

/// What one environment step hands back to the learning agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: f32,
    pub done: bool,
    pub info: StepInfo,
}

/// The ta-te-ti environment. The agent always plays X; after each accepted
/// agent move that leaves the game open, the opponent immediately answers
/// with a uniformly random empty cell.
///
/// Randomness is owned and seedable so simulations stay reproducible.
pub struct TatetiEnv {
    state: GameState,
    rng: StdRng,
    rewards: RewardConfig,
}

impl TatetiEnv {
    pub fn new(rewards: RewardConfig) -> Self {
        TatetiEnv {
            state: GameState::initial(),
            rng: StdRng::from_os_rng(),
            rewards,
        }
    }

    /// Build an environment whose opponent draws from a fixed seed.
    pub fn from_seed(rewards: RewardConfig, seed: u64) -> Self {
        TatetiEnv {
            state: GameState::initial(),
            rng: StdRng::seed_from_u64(seed),
            rewards,
        }
    }

    /// Current game state, for policies that want more than the flat
    /// observation.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rewards(&self) -> &RewardConfig {
        &self.rewards
    }

    /// Clear the board and return the initial observation.
    pub fn reset(&mut self) -> Observation {
        self.state = GameState::initial();
        encode_observation(self.state.board())
    }

    /// Advance one step: apply the agent's action, then the opponent's reply
    /// when the move landed and the game is still open.
    ///
    /// An occupied target cell is not an error: the step reports
    /// `info.rejected`, a zero reward, and the unchanged board, and the
    /// caller is expected to retry with another action. The terminal flag
    /// always reflects the current outcome, even for rejected moves. An
    /// out-of-range action is a caller bug and fails loudly.
    pub fn step(&mut self, action: usize) -> Result<Step, EnvError> {
        let accepted = match self.state.apply_move_mut(action, Mark::X) {
            Ok(()) => true,
            // A finished board refuses placements until reset; treat the
            // attempt like any other rejected move.
            Err(MoveError::Occupied) | Err(MoveError::GameOver) => false,
            Err(MoveError::InvalidIndex) => return Err(EnvError::InvalidAction { action }),
        };

        if accepted && !self.state.is_terminal() {
            self.opponent_reply()?;
        }

        let reward = if accepted {
            self.rewards.for_outcome(self.state.outcome())
        } else {
            0.0
        };

        Ok(Step {
            observation: encode_observation(self.state.board()),
            reward,
            done: self.state.is_terminal(),
            info: StepInfo {
                rejected: !accepted,
            },
        })
    }

    /// Place the opponent's mark on a uniformly random empty cell.
    fn opponent_reply(&mut self) -> Result<(), EnvError> {
        let legal = self.state.legal_actions();
        if legal.is_empty() {
            return Err(EnvError::NoLegalMove);
        }
        let cell = legal[self.rng.random_range(0..legal.len())];
        // The cell came from legal_actions, so the placement cannot fail.
        self.state
            .apply_move_mut(cell, Mark::O)
            .map_err(|_| EnvError::NoLegalMove)
    }
}
