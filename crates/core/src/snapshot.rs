use std::time::Duration;

use crate::types::{CellState, Outcome};

/// Owned copy of everything a renderer reads after an engine call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub mine_count: usize,
    /// Row-major, `y * width + x`.
    pub cells: Vec<CellState>,
    pub outcome: Outcome,
    pub started: bool,
    pub elapsed: Duration,
    pub remaining_mines: i32,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Option<CellState> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.mine_count = 0;
        self.cells.clear();
        self.outcome = Outcome::InProgress;
        self.started = false;
        self.elapsed = Duration::ZERO;
        self.remaining_mines = 0;
    }
}
