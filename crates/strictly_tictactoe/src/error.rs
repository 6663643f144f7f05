//! Move errors.

use crate::Position;

/// Error that can occur when placing a mark.
///
/// Only [`MoveError::InvalidIndex`] escapes [`apply_move`](crate::apply_move);
/// the other two are reported by the strict
/// [`GameSession::try_place`](crate::GameSession::try_place) and are
/// silently ignored otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
