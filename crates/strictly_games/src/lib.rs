//! Strictly Games - terminal front-end for tic-tac-toe
//!
//! Renders a [`strictly_tictactoe`] session with ratatui and turns key
//! presses and mouse clicks into [`Intent`]s.
//!
//! # Architecture
//!
//! - **Input**: terminal events → [`Intent`]
//! - **App**: [`App::dispatch`] applies one intent to the session, theme or cursor
//! - **UI**: stateless rendering of an [`App`]
//! - **Config**: TOML file plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
pub mod input;
mod intent;
mod theme;
pub mod ui;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use intent::{Direction, Flow, Intent};
pub use theme::{Palette, Theme};
