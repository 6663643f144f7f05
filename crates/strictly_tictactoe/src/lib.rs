//! Strictly Tic-Tac-Toe - pure game logic
//!
//! A two-player tic-tac-toe engine. Boards and sessions are values: a move
//! produces a new session and the status (in progress, won, draw) is always
//! derived from the board.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameStatus, Mark, apply_move, reset};
//!
//! let mut session = reset();
//! for index in [0, 4, 1, 3, 2] {
//!     session = apply_move(&session, index)?;
//! }
//! assert_eq!(session.status(), GameStatus::Won(Mark::X));
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
mod session;
mod types;

pub use error::MoveError;
pub use position::Position;
pub use rules::{Line, evaluate, winning_line};
pub use session::{GameSession, apply_move, reset};
pub use types::{Board, GameStatus, Mark, Square};
