//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// Three positions that win when held by one mark.
pub type Line = [Position; 3];

/// All winning lines in scan order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the mark holding it.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.at(a) {
            Square::Occupied(mark) if board.at(b) == board.at(a) && board.at(c) == board.at(a) => {
                Some((line, mark))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(positions: &[(Position, Mark)]) -> Board {
        let mut squares = [Square::Empty; 9];
        for (pos, mark) in positions {
            squares[pos.to_index()] = Square::Occupied(*mark);
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = place(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winning_line_diagonal() {
        let board = place(&[
            (Position::TopLeft, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomRight, Mark::O),
        ]);
        assert_eq!(
            winning_line(&board),
            Some((
                [Position::TopLeft, Position::Center, Position::BottomRight],
                Mark::O
            ))
        );
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = place(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_each_mark() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = place(&line.map(|pos| (pos, mark)));
                assert_eq!(winning_line(&board), Some((line, mark)));
            }
        }
    }
}
