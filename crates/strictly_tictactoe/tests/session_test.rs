//! Tests for game sessions: move application, alternation and terminal states.

use strictly_tictactoe::{
    Board, GameSession, GameStatus, Mark, MoveError, Position, Square, apply_move, evaluate,
    reset, rules::LINES,
};

fn play(moves: &[usize]) -> GameSession {
    moves
        .iter()
        .fold(reset(), |session, &index| apply_move(&session, index).expect("Index in range"))
}

#[test]
fn test_top_row_win() {
    let after_four = play(&[0, 4, 1, 3]);
    assert_eq!(after_four.status(), GameStatus::InProgress(Mark::X));

    let session = apply_move(&after_four, 2).expect("Index in range");
    let board = session.board();
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        assert_eq!(board.at(pos), Square::Occupied(Mark::X));
    }
    assert_eq!(session.status(), GameStatus::Won(Mark::X));
    assert_eq!(evaluate(board), GameStatus::Won(Mark::X));
}

#[test]
#[rustfmt::skip]
fn test_full_board_draw() {
    let session = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let expected = [
        Mark::X, Mark::O, Mark::X,
        Mark::X, Mark::O, Mark::O,
        Mark::O, Mark::X, Mark::X,
    ];
    for (square, mark) in session.board().squares().iter().zip(expected) {
        assert_eq!(*square, Square::Occupied(mark));
    }
    assert_eq!(session.status(), GameStatus::Draw);
}

#[test]
#[rustfmt::skip]
fn test_full_board_without_line_is_draw() {
    let marks = [
        Mark::X, Mark::O, Mark::X,
        Mark::O, Mark::X, Mark::O,
        Mark::O, Mark::X, Mark::O,
    ];
    let board = Board::from_squares(marks.map(Square::Occupied));
    assert_eq!(evaluate(&board), GameStatus::Draw);
}

#[test]
fn test_last_square_can_complete_a_line() {
    // X's ninth move fills the board and the main diagonal at once.
    let session = play(&[0, 1, 2, 3, 4, 5, 7, 6, 8]);
    assert_eq!(session.filled(), 9);
    assert_eq!(session.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_repeat_move_is_ignored() {
    let once = play(&[0]);
    let twice = apply_move(&once, 0).expect("Index in range");
    assert_eq!(twice, once);
    assert_eq!(twice.current_mark(), Mark::O);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let won = play(&[0, 4, 1, 3, 2]);
    for index in [5, 6, 7, 8] {
        assert_eq!(apply_move(&won, index), Ok(won));
    }
}

#[test]
fn test_moves_after_draw_are_ignored() {
    let drawn = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    for index in 0..9 {
        assert_eq!(apply_move(&drawn, index), Ok(drawn));
    }
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let session = play(&[4]);
    assert_eq!(apply_move(&session, 9), Err(MoveError::InvalidIndex(9)));
    assert_eq!(
        apply_move(&session, usize::MAX),
        Err(MoveError::InvalidIndex(usize::MAX))
    );
}

#[test]
fn test_out_of_range_index_is_an_error_after_game_over() {
    let won = play(&[0, 4, 1, 3, 2]);
    assert_eq!(apply_move(&won, 42), Err(MoveError::InvalidIndex(42)));
}

#[test]
fn test_reset_round_trip() {
    let session = play(&[4, 0, 8, 2]);
    assert_ne!(session, reset());
    let fresh = reset();
    assert_eq!(fresh, GameSession::new());
    assert_eq!(fresh.board(), &Board::new());
    assert_eq!(fresh.current_mark(), Mark::X);
    assert_eq!(play(&[4, 0, 8, 2]), session);
}

#[test]
fn test_session_serializes_board_and_mark() {
    let session = play(&[4]);
    let json = serde_json::to_value(session).expect("Serializable");
    assert_eq!(json["current_mark"], "O");
    assert_eq!(json["board"]["squares"][4]["Occupied"], "X");
    assert_eq!(json["board"]["squares"][0], "Empty");
}

/// Walks every reachable game and checks the invariants at each node.
fn explore(session: GameSession, accepted: usize, visited: &mut usize) {
    *visited += 1;

    // Strict alternation
    let expected = if accepted % 2 == 0 { Mark::X } else { Mark::O };
    assert_eq!(session.current_mark(), expected);
    assert_eq!(session.filled(), accepted);

    // Status agrees with a direct line check
    let board = session.board();
    let line_winner = LINES.into_iter().find_map(|line| {
        let marks = line.map(|pos| board.at(pos).mark());
        match marks {
            [Some(a), Some(b), Some(c)] if a == b && b == c => Some(a),
            _ => None,
        }
    });
    let status = evaluate(board);
    match line_winner {
        Some(mark) => assert_eq!(status, GameStatus::Won(mark)),
        None if accepted == 9 => assert_eq!(status, GameStatus::Draw),
        None => assert_eq!(status, GameStatus::InProgress(expected)),
    }

    for index in 0..9 {
        let next = apply_move(&session, index).expect("Index in range");
        let occupied = board.get(index) != Some(Square::Empty);
        if occupied || status.is_terminal() {
            assert_eq!(next, session);
        } else {
            assert_eq!(next.board().get(index), Some(Square::Occupied(expected)));
            explore(next, accepted + 1, visited);
        }
    }
}

#[test]
fn test_invariants_hold_over_every_reachable_game() {
    let mut visited = 0;
    explore(reset(), 0, &mut visited);
    // Nodes in the full tic-tac-toe game tree, root included.
    assert_eq!(visited, 549_946);
}
