//! User intents produced by the input layer.

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// Something the user asked for.
///
/// Every key press and mouse click becomes at most one intent, and every
/// intent is handled by [`App::dispatch`](crate::App::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place the current mark at a board index.
    Move(usize),
    /// Start a new game.
    Reset,
    /// Switch between light and dark themes.
    ToggleTheme,
    /// Move the board cursor.
    CursorMove(Direction),
    /// Place the current mark under the cursor.
    SelectCursor,
    /// Leave the application.
    Quit,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep processing events.
    Continue,
    /// Shut down.
    Exit,
}
