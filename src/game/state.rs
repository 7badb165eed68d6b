use super::{Board, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Mark),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    Occupied,
    InvalidIndex,
    GameOver,
}

/// Game state: the board plus its terminal classification. An explicit value
/// passed to and returned from every operation, never shared globally, so
/// independent games can run side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            outcome: None,
        }
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

    /// Get list of legal cells (empty, and only while the game is open)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, cell: usize, mark: Mark) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(cell, mark)?;
        Ok(next)
    }

    /// Apply a move in place.
    ///
    /// `Occupied` is the recoverable retry signal; `InvalidIndex` is a
    /// caller error; `GameOver` means the state must be reset before any
    /// further placement. None of the failures change the state.
    pub fn apply_move_mut(&mut self, cell: usize, mark: Mark) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.place(cell, mark.to_cell()).map_err(|e| match e {
            super::board::MoveError::Occupied => MoveError::Occupied,
            super::board::MoveError::InvalidIndex => MoveError::InvalidIndex,
        })?;

        // Only the mover's mark can have completed a line; a win on a full
        // board beats the draw.
        self.outcome = if self.board.has_win(mark.to_cell()) {
            Some(GameOutcome::Winner(mark))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(())
    }
}
