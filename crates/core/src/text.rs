//! Plain-text board rendering
//!
//! The fixed textual form used by the line-mode fallback and by tests:
//!
//! ```text
//!   0 1 2 3
//! 0 _ _ ? _
//! 1 1 2 _ _
//! 2     1 _
//! 3     1 *
//! ```
//!
//! `_` hidden, `?` flagged, blank for a revealed zero, `*` for a revealed
//! mine, the digit otherwise. Before the first reveal the board renders as
//! `No board available.`

use std::fmt;

use crate::game::Game;
use crate::types::CellState;

pub const HIDDEN_CHAR: char = '_';
pub const FLAG_CHAR: char = '?';
pub const MINE_CHAR: char = '*';
pub const NO_BOARD: &str = "No board available.";

/// Text glyph for one cell
pub fn cell_char(cell: CellState) -> char {
    if cell.flagged {
        FLAG_CHAR
    } else if !cell.revealed {
        HIDDEN_CHAR
    } else if cell.is_mine() {
        MINE_CHAR
    } else if cell.value == 0 {
        ' '
    } else {
        char::from(b'0' + cell.value as u8)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_started() {
            return f.write_str(NO_BOARD);
        }

        let grid = self.grid();
        f.write_str(" ")?;
        for x in 0..grid.width() {
            write!(f, " {}", x)?;
        }
        for y in 0..grid.height() {
            write!(f, "\n{}", y)?;
            for x in 0..grid.width() {
                let index = y * grid.width() + x;
                write!(f, " {}", cell_char(grid.cell(index)))?;
            }
        }
        Ok(())
    }
}
