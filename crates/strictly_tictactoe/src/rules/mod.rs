//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Status is always derived from the
//! board, never stored alongside it.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, check_winner, winning_line};

use crate::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the status of a board.
///
/// Lines are scanned rows first, then columns, then diagonals; the first
/// completed line decides the winner. A full board with no completed line
/// is a draw. Otherwise the game is in progress with the mark derived from
/// fill parity.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress(board.next_mark())
    }
}
