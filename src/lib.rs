//! Terminal Minesweeper (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_minesweeper::{core,input,term,types}` and adds the
//! application layer: configuration, the full-screen event loop and the
//! line-mode text fallback.

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_input as input;
pub use tui_minesweeper_term as term;
pub use tui_minesweeper_types as types;

pub mod app;
pub mod config;
pub mod repl;
