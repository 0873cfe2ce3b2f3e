//! Terminal Minesweeper runner (default binary).
//!
//! Full-screen crossterm UI by default, line-mode text play with `--text`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_minesweeper::app::{self, App};
use tui_minesweeper::config::{Args, Config, Mode};
use tui_minesweeper::input::HELP_TEXT;
use tui_minesweeper::repl;
use tui_minesweeper::term::{GameView, GlyphSet, TerminalRenderer, TerminalTooSmall, Viewport};

fn main() -> ExitCode {
    let config = Config::from_args(Args::parse());

    if let Some(path) = &config.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Error: cannot open log file {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    }

    let game = match config.new_game() {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        width = config.width,
        height = config.height,
        mines = config.mines,
        "starting"
    );

    let result = match config.mode {
        Mode::Text => repl::run(game, io::stdin().lock(), &mut io::stdout().lock()),
        Mode::FullScreen => {
            let view = GameView::default()
                .with_glyphs(GlyphSet::for_emoji(config.emoji))
                .with_help(HELP_TEXT);
            run_full_screen(App::new(game, view))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.downcast_ref::<TerminalTooSmall>().is_some() => {
            tracing::warn!("{e}");
            eprintln!("{e}");
            eprintln!("Please make your terminal larger or the board smaller and restart the game");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_full_screen(mut app: App) -> Result<()> {
    // Refuse before touching the terminal mode.
    let (w, h) = crossterm::terminal::size()?;
    app.view()
        .check_fits(app.game().width(), app.game().height(), Viewport::new(w, h))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = app::run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}
