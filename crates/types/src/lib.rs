//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, line-mode fallback).
//!
//! # Board Limits
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_DIMENSION` | 2 | Smallest accepted width/height |
//! | `MAX_DIMENSION` | 100 | Largest accepted width/height |
//! | `DEFAULT_WIDTH` | 10 | Width used when none is given |
//! | `DEFAULT_HEIGHT` | 10 | Height used when none is given |
//! | `DEFAULT_MINES` | 10 | Mine count used when none is given |
//!
//! A mine count must satisfy `0 < mines < width * height`, so at least one
//! cell is always safe for the first reveal.
//!
//! # Cell Values
//!
//! Each board cell holds an `i8`: [`MINE`] (`-1`) or the number of mines among
//! its (up to) 8 neighbours, `0..=8`.
//!
//! # Examples
//!
//! ```
//! use tui_minesweeper_types::{GameAction, Outcome, CellState, MINE};
//!
//! // Parse game action (case-insensitive)
//! let action = GameAction::from_str("groupReveal").unwrap();
//! assert_eq!(action, GameAction::GroupReveal);
//!
//! // Outcome helpers
//! assert!(!Outcome::InProgress.is_over());
//! assert!(Outcome::Lost.is_over());
//!
//! // Cell state
//! let cell = CellState { value: MINE, revealed: true, flagged: false };
//! assert!(cell.is_mine());
//! ```

/// Smallest accepted board width/height
pub const MIN_DIMENSION: usize = 2;

/// Largest accepted board width/height
pub const MAX_DIMENSION: usize = 100;

/// Default board width
pub const DEFAULT_WIDTH: usize = 10;

/// Default board height
pub const DEFAULT_HEIGHT: usize = 10;

/// Default mine count
pub const DEFAULT_MINES: usize = 10;

/// Board value marking a mine
pub const MINE: i8 = -1;

/// Input poll timeout in milliseconds; also the status clock refresh rate.
pub const POLL_MS: u64 = 50;

/// Terminal state of a game
///
/// A game starts `InProgress` and moves to `Won` or `Lost` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Whether the game has ended (won or lost)
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_minesweeper_types::Outcome;
    ///
    /// assert_eq!(Outcome::InProgress.as_str(), "in_progress");
    /// assert_eq!(Outcome::Won.as_str(), "won");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "in_progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

/// Read-only view of one grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellState {
    /// [`MINE`] or the adjacent mine count
    pub value: i8,
    pub revealed: bool,
    pub flagged: bool,
}

impl CellState {
    pub fn is_mine(&self) -> bool {
        self.value == MINE
    }
}

/// Player actions dispatched by the input layer
///
/// Movement actions only affect the cursor; the remaining actions call into
/// the engine at the cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move cursor one row up (wraps)
    MoveUp,
    /// Move cursor one row down (wraps)
    MoveDown,
    /// Move cursor one column left (wraps)
    MoveLeft,
    /// Move cursor one column right (wraps)
    MoveRight,
    /// Jump to the top row
    Top,
    /// Jump to the bottom row
    Bottom,
    /// Jump to the leftmost column
    LineStart,
    /// Jump to the rightmost column
    LineEnd,
    /// Reveal the cell under the cursor
    Reveal,
    /// Toggle the flag under the cursor
    Flag,
    /// Reveal all neighbours of a satisfied number
    GroupReveal,
    /// Start a fresh game with the same parameters
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_minesweeper_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("FLAG"), Some(GameAction::Flag));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "top" => Some(GameAction::Top),
            "bottom" => Some(GameAction::Bottom),
            "linestart" => Some(GameAction::LineStart),
            "lineend" => Some(GameAction::LineEnd),
            "reveal" => Some(GameAction::Reveal),
            "flag" => Some(GameAction::Flag),
            "groupreveal" => Some(GameAction::GroupReveal),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Top => "top",
            GameAction::Bottom => "bottom",
            GameAction::LineStart => "lineStart",
            GameAction::LineEnd => "lineEnd",
            GameAction::Reveal => "reveal",
            GameAction::Flag => "flag",
            GameAction::GroupReveal => "groupReveal",
            GameAction::Restart => "restart",
        }
    }

    /// Whether this action only moves the cursor
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            GameAction::MoveUp
                | GameAction::MoveDown
                | GameAction::MoveLeft
                | GameAction::MoveRight
                | GameAction::Top
                | GameAction::Bottom
                | GameAction::LineStart
                | GameAction::LineEnd
        )
    }
}
