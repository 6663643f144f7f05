//! Strictly Games - terminal tic-tac-toe

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::Stdout;
use std::path::Path;
use strictly_games::{App, AppConfig, Flow, Theme, input, ui};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    }
    .with_overrides(cli.theme, cli.log_file);

    init_logging(config.log_file())?;
    info!(theme = %config.theme(), "Starting Strictly Games");

    run_tui(*config.theme())
}

/// Logs to a file so output doesn't interfere with the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Sets up the terminal, runs the game, and restores the terminal.
fn run_tui(theme: Theme) -> Result<()> {
    enable_raw_mode()?;

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal(&mut std::io::stdout())?;
            return Err(e);
        }
    };

    let res = run_app(&mut terminal, App::new(theme));

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves raw mode and the alternate screen; safe to call if setup stopped halfway.
fn restore_terminal(out: &mut impl std::io::Write) -> Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Draw, wait for one event, dispatch it.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            ui::draw(frame, &app);
        })?;

        let event = event::read()?;
        if let Some(intent) = input::event_to_intent(&event, area)
            && app.dispatch(intent) == Flow::Exit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
