//! Light and dark colour themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display theme for the whole screen.
///
/// Defaults to [`Theme::Light`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Toggles between `Light` and `Dark`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Colours used to render this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: Color::White,
                foreground: Color::Black,
                accent: Color::Blue,
                mark_x: Color::Blue,
                mark_o: Color::Red,
                muted: Color::Gray,
                cursor: Color::Yellow,
                highlight: Color::LightGreen,
            },
            Self::Dark => Palette {
                background: Color::Black,
                foreground: Color::White,
                accent: Color::Cyan,
                mark_x: Color::LightBlue,
                mark_o: Color::LightRed,
                muted: Color::DarkGray,
                cursor: Color::Yellow,
                highlight: Color::Green,
            },
        }
    }
}

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Default text.
    pub foreground: Color,
    /// Title and borders.
    pub accent: Color,
    /// X marks.
    pub mark_x: Color,
    /// O marks.
    pub mark_o: Color,
    /// Empty-square numbers and separators.
    pub muted: Color,
    /// Cursor background.
    pub cursor: Color,
    /// Winning line background.
    pub highlight: Color,
}
