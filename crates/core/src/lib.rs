//! Core game logic module - pure and testable
//!
//! This module contains the Minesweeper rules and state. It has **zero
//! dependencies** on terminal I/O, so it can be driven by the full-screen UI,
//! the line-mode fallback, tests and benchmarks alike.
//!
//! # Module Structure
//!
//! - [`grid`]: W x H minefield stored as three parallel flat arrays
//! - [`game`]: the engine - reveal, flag, group reveal, win/lose, timing
//! - [`layout`]: uniform mine placement that keeps the first reveal safe
//! - [`snapshot`]: owned view of the state for renderers
//! - [`text`]: the fixed plain-text board form (`Display for Game`)
//! - [`error`]: configuration validation
//!
//! # Game Rules
//!
//! - **Safe first move**: mines are placed on the first reveal, never under it
//! - **Flood fill**: revealing a zero opens its connected zero region plus the
//!   numbered border, iteratively (no recursion depth limit on 100x100 boards)
//! - **Group reveal**: a revealed number whose flagged neighbours match its
//!   value reveals all its other neighbours
//! - **Win**: exactly `mine_count` flags, every one of them on a mine
//! - **Loss**: revealing a mine
//!
//! Either ending exposes the whole board and freezes the clock.
//!
//! # Example
//!
//! ```
//! use tui_minesweeper_core::Game;
//! use tui_minesweeper_types::Outcome;
//!
//! let mut game = Game::with_mines(4, 4, &[(3, 3)]).unwrap();
//!
//! // A corner far from the only mine opens everything else.
//! game.reveal(0, 0);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//!
//! game.flag(3, 3);
//! assert_eq!(game.outcome(), Outcome::Won);
//! ```

pub mod error;
pub mod game;
pub mod grid;
pub mod layout;
pub mod snapshot;
pub mod text;

pub use tui_minesweeper_types as types;

// Re-export commonly used types for convenience
pub use error::{validate_config, ConfigError, GameError, Result};
pub use game::Game;
pub use grid::Grid;
pub use snapshot::GameSnapshot;
pub use text::cell_char;
