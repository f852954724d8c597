//! Type Training - terminal front end.
//!
//! Renders the rival, the objective and the three options, and forwards key
//! presses to the game session.

#![warn(missing_docs)]

mod app;
mod cli;
mod ui;

use anyhow::{Context, Result};
use app::{App, Control};
use clap::Parser;
use cli::Cli;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use type_training::Session;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let session = match cli.seed {
        Some(seed) => Session::seeded(seed),
        None => Session::new(),
    };
    info!(seed = ?cli.seed, "Starting Type Training");

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, App::new(session));
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "Terminal loop failed");
    }
    result
}

/// Routes tracing output to a file. Without one, logging stays off because
/// the terminal belongs to the UI.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            info!(score = app.session().score(), "Leaving game");
            return Ok(());
        }
    }
}
