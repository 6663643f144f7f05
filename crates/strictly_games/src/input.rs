//! Maps terminal events to intents.

use crate::ui::cell_at;
use crate::{Direction, Intent};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use strictly_tictactoe::Position;
use tracing::trace;

/// Translates any terminal event.
///
/// `area` is the full frame area last drawn, needed to hit-test clicks.
pub fn event_to_intent(event: &Event, area: Rect) -> Option<Intent> {
    let intent = match event {
        Event::Key(key) => key_to_intent(*key),
        Event::Mouse(mouse) => mouse_to_intent(*mouse, area),
        _ => None,
    };
    trace!(?event, ?intent, "Translated event");
    intent
}

/// Translates a key press.
pub fn key_to_intent(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('r') => Some(Intent::Reset),
        KeyCode::Char('t') => Some(Intent::ToggleTheme),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::SelectCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::CursorMove(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::CursorMove(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Intent::CursorMove(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Intent::CursorMove(Direction::Right)),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Intent::Move(d as usize - 1)),
        _ => None,
    }
}

/// Translates a left click on a board square.
pub fn mouse_to_intent(mouse: MouseEvent, area: Rect) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            cell_at(area, mouse.column, mouse.row).map(|pos| Intent::Move(pos.to_index()))
        }
        _ => None,
    }
}

/// Moves the cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
