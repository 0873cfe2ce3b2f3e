//! Grid module - the W x H minefield
//!
//! Three parallel flat arrays share one row-major index (`y * width + x`):
//! the board values (mine marker or neighbour count), the revealed mask and
//! the flagged mask. Flat storage keeps neighbour scans cache friendly and lets
//! the engine work purely in indices.

use arrayvec::ArrayVec;

use crate::types::{CellState, MINE};

/// Offsets of the 8-neighbourhood, row by row.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    board: Vec<i8>,
    revealed: Vec<bool>,
    flagged: Vec<bool>,
    /// Number of `true` entries in `flagged`.
    flags: usize,
}

impl Grid {
    /// Create an empty grid: no mines, nothing revealed or flagged
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            board: vec![0; len],
            revealed: vec![false; len],
            flagged: vec![false; len],
            flags: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.board.len()
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    /// Calculate flat index from (x, y) coordinates
    /// Returns None if out of bounds
    #[inline(always)]
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Convert a flat index back to (x, y)
    #[inline(always)]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// In-bounds indices of the 8 cells around `index`
    pub fn neighbors(&self, index: usize) -> ArrayVec<usize, 8> {
        let (x, y) = self.coords(index);
        let mut out = ArrayVec::new();
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if let Some(n) = self.index(nx, ny) {
                out.push(n);
            }
        }
        out
    }

    pub fn value(&self, index: usize) -> i8 {
        self.board[index]
    }

    pub fn is_mine(&self, index: usize) -> bool {
        self.board[index] == MINE
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed[index]
    }

    pub fn is_flagged(&self, index: usize) -> bool {
        self.flagged[index]
    }

    pub fn cell(&self, index: usize) -> CellState {
        CellState {
            value: self.board[index],
            revealed: self.revealed[index],
            flagged: self.flagged[index],
        }
    }

    /// Number of flagged cells
    pub fn flag_count(&self) -> usize {
        self.flags
    }

    /// Number of cells holding a mine
    pub fn mine_count(&self) -> usize {
        self.board.iter().filter(|&&v| v == MINE).count()
    }

    pub fn board(&self) -> &[i8] {
        &self.board
    }

    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    pub fn flagged(&self) -> &[bool] {
        &self.flagged
    }

    /// Count mines among the neighbours of `index`
    pub fn adjacent_mines(&self, index: usize) -> usize {
        self.neighbors(index)
            .iter()
            .filter(|&&n| self.is_mine(n))
            .count()
    }

    /// Count flags among the neighbours of `index`
    pub fn adjacent_flags(&self, index: usize) -> usize {
        self.neighbors(index)
            .iter()
            .filter(|&&n| self.flagged[n])
            .count()
    }

    /// Place mines at `mines` and recompute every neighbour count.
    ///
    /// Two passes: all mines are marked before any count is taken, so counts
    /// only ever see the final layout.
    pub fn plant(&mut self, mines: &[usize]) {
        self.board.fill(0);
        for &index in mines {
            self.board[index] = MINE;
        }
        for index in 0..self.board.len() {
            if self.board[index] != MINE {
                self.board[index] = self.adjacent_mines(index) as i8;
            }
        }
    }

    pub(crate) fn set_revealed(&mut self, index: usize) {
        self.revealed[index] = true;
    }

    /// Flip the flag at `index`
    /// Returns the new flag state
    pub(crate) fn toggle_flag(&mut self, index: usize) -> bool {
        let flagged = !self.flagged[index];
        self.flagged[index] = flagged;
        if flagged {
            self.flags += 1;
        } else {
            self.flags -= 1;
        }
        flagged
    }

    pub(crate) fn reveal_all(&mut self) {
        self.revealed.fill(true);
    }
}
