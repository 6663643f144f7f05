//! Application state and logic.

use crate::input::move_cursor;
use crate::{Flow, Intent, Theme};
use strictly_tictactoe::{GameSession, GameStatus, Position, apply_move, reset};
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// Owns the game session, the display theme and the board cursor.
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    theme: Theme,
    cursor: Position,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        Self {
            session: reset(),
            theme,
            cursor: Position::Center,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the derived game status.
    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    /// Gets the current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Sets the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether a square can still be played.
    pub fn is_enabled(&self, pos: Position) -> bool {
        self.playable().contains(&pos)
    }

    /// Squares that accept a move; none once the game is over.
    pub fn playable(&self) -> Vec<Position> {
        if self.status().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(self.session.board())
        }
    }

    /// Status readout for the current game.
    pub fn status_message(&self) -> String {
        match self.status() {
            GameStatus::InProgress(mark) => format!("Player {}'s turn", mark),
            GameStatus::Won(mark) => {
                format!("Player {} wins! Press 'r' to restart or 'q' to quit.", mark)
            }
            GameStatus::Draw => {
                "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string()
            }
        }
    }

    /// Applies one intent.
    #[instrument(skip(self), fields(status = ?self.status()))]
    pub fn dispatch(&mut self, intent: Intent) -> Flow {
        match intent {
            Intent::Move(index) => self.play(index),
            Intent::SelectCursor => self.play(self.cursor.to_index()),
            Intent::CursorMove(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Intent::Reset => {
                info!("Restarting game");
                self.session = reset();
                self.cursor = Position::Center;
            }
            Intent::ToggleTheme => {
                self.theme = self.theme.toggle();
                debug!(theme = %self.theme, "Theme toggled");
            }
            Intent::Quit => return Flow::Exit,
        }
        Flow::Continue
    }

    fn play(&mut self, index: usize) {
        match apply_move(&self.session, index) {
            Ok(next) if next == self.session => {
                debug!(index, "Move ignored");
            }
            Ok(next) => {
                self.session = next;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                info!(index, status = ?self.status(), "Move applied");
            }
            Err(e) => {
                warn!(error = %e, "Rejected move");
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
