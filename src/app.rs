//! Full-screen application: state plus the crossterm event loop.
//!
//! The loop polls for input with a [`POLL_MS`] timeout and redraws every
//! iteration so the status clock keeps moving; the diffing renderer only
//! writes cells that actually changed.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::{Game, GameSnapshot};
use crate::input::{handle_key_event, should_quit, Cursor};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, TerminalTooSmall, Viewport};
use crate::types::{GameAction, POLL_MS};

pub struct App {
    game: Game,
    cursor: Cursor,
    view: GameView,
    snap: GameSnapshot,
    fb: FrameBuffer,
}

impl App {
    pub fn new(game: Game, view: GameView) -> Self {
        Self {
            game,
            cursor: Cursor::default(),
            view,
            snap: GameSnapshot::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Apply one player action.
    /// Returns true if the cursor or the game changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let (x, y) = (self.cursor.x, self.cursor.y);
        match action {
            GameAction::Restart => {
                self.game = self.game.fresh();
                self.cursor = Cursor::default();
                tracing::info!("game restarted");
                true
            }
            GameAction::Reveal => self.game.reveal(x, y),
            GameAction::Flag => self.game.flag(x, y),
            GameAction::GroupReveal => self.game.group_reveal(x, y),
            movement => self
                .cursor
                .apply(movement, self.game.width(), self.game.height()),
        }
    }

    /// Render the current state for `viewport`.
    pub fn frame(&mut self, viewport: Viewport) -> Result<&mut FrameBuffer, TerminalTooSmall> {
        self.view
            .check_fits(self.game.width(), self.game.height(), viewport)?;
        self.game.snapshot_into(&mut self.snap);
        self.view.render_into(
            &self.snap,
            (self.cursor.x, self.cursor.y),
            viewport,
            &mut self.fb,
        );
        Ok(&mut self.fb)
    }
}

/// Drive `app` until the player quits or the terminal becomes too small.
pub fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let timeout = Duration::from_millis(POLL_MS);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size()?;
        let fb = app.frame(Viewport::new(w, h))?;
        term.draw_swap(fb)?;

        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    app.apply(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
