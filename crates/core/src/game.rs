//! Game module - the Minesweeper engine
//!
//! Owns the [`Grid`] plus lifecycle and timing. Mines are placed lazily on the
//! first reveal so the opening move is always safe. A game ends (won or lost)
//! exactly once; after that every cell is revealed and all mutating calls are
//! no-ops. Callers construct a new `Game` to play again.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{validate_config, ConfigError, Result};
use crate::grid::Grid;
use crate::layout::random_mines;
use crate::snapshot::GameSnapshot;
use crate::types::{CellState, Outcome};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    mine_count: usize,
    /// Mines are on the board (first reveal happened, or a fixed layout was given).
    planted: bool,
    /// First reveal happened; the clock is running or stopped.
    started: bool,
    start_time: Option<Instant>,
    end_time: Option<Instant>,
    outcome: Outcome,
    rng: StdRng,
}

impl Game {
    /// Create a new game, seeding mine placement from OS entropy
    pub fn new(width: usize, height: usize, mine_count: usize) -> Result<Self> {
        Self::with_rng(width, height, mine_count, StdRng::from_os_rng())
    }

    /// Create a new game with a reproducible mine layout
    pub fn with_seed(width: usize, height: usize, mine_count: usize, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, mine_count, StdRng::seed_from_u64(seed))
    }

    /// Create a game whose mines sit at the given `(x, y)` positions.
    ///
    /// Duplicate positions count once. The first reveal only starts the clock;
    /// it does not move any mine, so revealing a mine first loses immediately.
    pub fn with_mines(width: usize, height: usize, mines: &[(usize, usize)]) -> Result<Self> {
        // Dimensions first; the mine count is checked once duplicates are gone.
        validate_config(width, height, 1)?;
        let mut grid = Grid::new(width, height);
        let mut indices = Vec::with_capacity(mines.len());
        for &(x, y) in mines {
            let index = grid
                .index(x, y)
                .ok_or(ConfigError::MineOutOfBounds(x, y))?;
            indices.push(index);
        }
        indices.sort_unstable();
        indices.dedup();

        let mut game = Self::with_rng(width, height, indices.len(), StdRng::seed_from_u64(0))?;
        grid.plant(&indices);
        game.grid = grid;
        game.planted = true;
        Ok(game)
    }

    fn with_rng(width: usize, height: usize, mine_count: usize, rng: StdRng) -> Result<Self> {
        validate_config(width, height, mine_count)?;
        Ok(Self {
            grid: Grid::new(width, height),
            mine_count,
            planted: false,
            started: false,
            start_time: None,
            end_time: None,
            outcome: Outcome::InProgress,
            rng,
        })
    }

    /// A new, unstarted game with the same dimensions and mine count.
    ///
    /// Used for restarts: a finished game is never reset in place.
    pub fn fresh(&self) -> Self {
        Self {
            grid: Grid::new(self.width(), self.height()),
            mine_count: self.mine_count,
            planted: false,
            started: false,
            start_time: None,
            end_time: None,
            outcome: Outcome::InProgress,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of flagged cells
    pub fn flag_count(&self) -> usize {
        self.grid.flag_count()
    }

    /// Mines left to flag; negative when more cells are flagged than there are mines
    pub fn remaining_mines(&self) -> i32 {
        self.mine_count as i32 - self.grid.flag_count() as i32
    }

    /// Time since the first reveal, frozen once the game ends
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// State of the cell at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the board.
    pub fn cell_state(&self, x: usize, y: usize) -> CellState {
        self.grid.cell(self.checked_index(x, y))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.width();
        out.height = self.height();
        out.mine_count = self.mine_count;
        out.cells.clear();
        out.cells
            .extend((0..self.grid.len()).map(|index| self.grid.cell(index)));
        out.outcome = self.outcome;
        out.started = self.started;
        out.elapsed = self.elapsed();
        out.remaining_mines = self.remaining_mines();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Reveal the cell at (x, y)
    ///
    /// The first call places the mines (never at (x, y)) and starts the clock.
    /// Revealed or flagged cells are left alone. A mine ends the game as lost;
    /// a zero flood-fills its connected region and numbered border.
    /// Returns true if anything changed.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the board.
    pub fn reveal(&mut self, x: usize, y: usize) -> bool {
        let index = self.checked_index(x, y);
        self.reveal_index(index)
    }

    /// Toggle the flag at (x, y); revealed cells cannot be flagged
    /// Returns true if the flag changed.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the board.
    pub fn flag(&mut self, x: usize, y: usize) -> bool {
        let index = self.checked_index(x, y);
        if self.is_over() || self.grid.is_revealed(index) {
            return false;
        }

        let flagged = self.grid.toggle_flag(index);
        tracing::debug!(x, y, flagged, flags = self.grid.flag_count(), "flag toggled");
        self.check_win();
        true
    }

    /// Reveal every neighbour of a revealed number once the neighbouring flag
    /// count matches it (a chord).
    ///
    /// Each neighbour is revealed with full [`Game::reveal`] semantics, so a
    /// misplaced flag can make the chord hit a mine.
    /// Returns true if anything changed.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the board.
    pub fn group_reveal(&mut self, x: usize, y: usize) -> bool {
        let index = self.checked_index(x, y);
        if self.is_over() || !self.grid.is_revealed(index) {
            return false;
        }
        // Mines carry a negative value and never satisfy a chord.
        let Ok(value) = usize::try_from(self.grid.value(index)) else {
            return false;
        };
        if self.grid.adjacent_flags(index) != value {
            return false;
        }

        tracing::debug!(x, y, "group reveal");
        let mut changed = false;
        for neighbor in self.grid.neighbors(index) {
            if self.is_over() {
                break;
            }
            changed |= self.reveal_index(neighbor);
        }
        changed
    }

    fn reveal_index(&mut self, index: usize) -> bool {
        if self.is_over() {
            return false;
        }

        let mut changed = false;
        if !self.started {
            self.start(index);
            changed = true;
            if self.is_over() {
                return true;
            }
        }

        if self.grid.is_revealed(index) || self.grid.is_flagged(index) {
            return changed;
        }

        if self.grid.is_mine(index) {
            let (x, y) = self.grid.coords(index);
            tracing::debug!(x, y, "mine revealed");
            self.grid.set_revealed(index);
            self.finish(Outcome::Lost);
            return true;
        }

        let opened = self.flood_reveal(index);
        let (x, y) = self.grid.coords(index);
        tracing::debug!(x, y, opened, "revealed");
        self.check_win();
        true
    }

    /// Reveal `start` and, through zeros, its connected region.
    ///
    /// Cells are marked revealed before they are pushed, so each one enters
    /// the stack at most once. Neighbours of a zero are never mines.
    fn flood_reveal(&mut self, start: usize) -> usize {
        let mut stack = vec![start];
        self.grid.set_revealed(start);
        let mut opened = 1;

        while let Some(index) = stack.pop() {
            if self.grid.value(index) != 0 {
                continue;
            }
            for neighbor in self.grid.neighbors(index) {
                if self.grid.is_revealed(neighbor) || self.grid.is_flagged(neighbor) {
                    continue;
                }
                self.grid.set_revealed(neighbor);
                opened += 1;
                stack.push(neighbor);
            }
        }

        opened
    }

    /// Deferred board generation on the first reveal.
    fn start(&mut self, safe: usize) {
        if !self.planted {
            let mines = random_mines(&mut self.rng, self.grid.len(), self.mine_count, safe);
            self.grid.plant(&mines);
            self.planted = true;
        }
        self.started = true;
        self.start_time = Some(Instant::now());

        let (x, y) = self.grid.coords(safe);
        tracing::info!(
            width = self.width(),
            height = self.height(),
            mines = self.mine_count,
            x,
            y,
            "board generated"
        );

        // Flags placed before the first reveal may already cover every mine.
        self.check_win();
    }

    /// All flags sit on mines and their number equals the mine count.
    fn is_won(&self) -> bool {
        self.grid.flag_count() == self.mine_count
            && self
                .grid
                .flagged()
                .iter()
                .enumerate()
                .all(|(index, &flagged)| !flagged || self.grid.is_mine(index))
    }

    fn check_win(&mut self) {
        if self.started && !self.is_over() && self.is_won() {
            self.finish(Outcome::Won);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.end_time = Some(Instant::now());
        self.outcome = outcome;
        self.grid.reveal_all();
        tracing::info!(
            outcome = outcome.as_str(),
            elapsed_ms = self.elapsed().as_millis() as u64,
            "game over"
        );
    }

    fn checked_index(&self, x: usize, y: usize) -> usize {
        match self.grid.index(x, y) {
            Some(index) => index,
            None => panic!(
                "cell ({}, {}) is outside the {}x{} board",
                x,
                y,
                self.width(),
                self.height()
            ),
        }
    }
}
