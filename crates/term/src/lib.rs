//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout frameworks and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Diff consecutive frames so the once-per-poll clock refresh stays cheap
//! - Handle double-width emoji glyphs without breaking column alignment

pub mod fb;
pub mod game_view;
pub mod glyphs;
pub mod renderer;

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, TerminalTooSmall, Viewport};
pub use glyphs::{Glyph, GlyphSet};
pub use renderer::{encode_diff_into, encode_full_into, Span, TerminalRenderer};
