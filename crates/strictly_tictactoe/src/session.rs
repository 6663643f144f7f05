//! Game session: the board plus the mark to move.

use crate::rules::evaluate;
use crate::{Board, GameStatus, Mark, MoveError, Position, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// A tic-tac-toe session.
///
/// Sessions are immutable values. Every accepted move yields a new
/// session; the mark to move always matches the board's fill parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSession {
    board: Board,
    current_mark: Mark,
}

impl GameSession {
    /// Creates the initial session: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Number of accepted moves so far.
    pub fn filled(&self) -> usize {
        self.board.filled()
    }

    /// Derives the status from the board.
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    /// Places the current mark at `index`, reporting why a move is refused.
    #[instrument(skip(self), fields(current_mark = %self.current_mark))]
    pub fn try_place(&self, index: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;

        if self.status().is_terminal() {
            return Err(MoveError::GameOver);
        }

        if let Square::Occupied(_) = self.board.at(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let next = Self {
            board: self.board.with_mark(pos, self.current_mark),
            current_mark: self.current_mark.opponent(),
        };
        debug!(position = %pos, status = ?next.status(), "Move accepted");
        Ok(next)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a move for the current mark.
///
/// Moves on an occupied square, or after the game has ended, are ignored:
/// the session comes back unchanged. Only an index outside 0-8 is an error.
#[instrument(skip(session))]
pub fn apply_move(session: &GameSession, index: usize) -> Result<GameSession, MoveError> {
    match session.try_place(index) {
        Ok(next) => Ok(next),
        Err(MoveError::SquareOccupied(_) | MoveError::GameOver) => {
            debug!(index, "Move ignored");
            Ok(*session)
        }
        Err(e) => Err(e),
    }
}

/// Returns the initial session.
#[instrument]
pub fn reset() -> GameSession {
    GameSession::new()
}
