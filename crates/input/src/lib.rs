//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and keeps the board
//! cursor, which wraps around the edges so every coordinate handed to the
//! engine is in range.

pub mod cursor;
pub mod map;

pub use tui_minesweeper_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit, HELP_TEXT};
