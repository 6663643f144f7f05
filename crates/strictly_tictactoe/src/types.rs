//! Core domain types for tic-tac-toe.

use crate::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: placing a mark produces a new board and leaves the
/// original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at a position.
    pub fn at(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if the square at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.at(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Mark whose turn it is, derived from how many squares are filled.
    ///
    /// X moves on even counts, O on odd.
    pub fn next_mark(&self) -> Mark {
        if self.filled() % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    #[instrument(skip(self))]
    pub(crate) fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(mark);
        Self { squares }
    }
}

/// Status of a game, derived from its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; holds the mark to move.
    InProgress(Mark),
    /// Game ended with a completed line.
    Won(Mark),
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Won and Draw are terminal.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}
