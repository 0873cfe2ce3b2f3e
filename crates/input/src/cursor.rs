//! Board cursor with wrap-around movement.

use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Apply a movement action on a `width` x `height` board.
    ///
    /// Steps wrap modulo the board size. Returns false for non-movement
    /// actions, which leave the cursor untouched.
    pub fn apply(&mut self, action: GameAction, width: usize, height: usize) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        match action {
            GameAction::MoveUp => self.y = (self.y + height - 1) % height,
            GameAction::MoveDown => self.y = (self.y + 1) % height,
            GameAction::MoveLeft => self.x = (self.x + width - 1) % width,
            GameAction::MoveRight => self.x = (self.x + 1) % width,
            GameAction::Top => self.y = 0,
            GameAction::Bottom => self.y = height - 1,
            GameAction::LineStart => self.x = 0,
            GameAction::LineEnd => self.x = width - 1,
            _ => return false,
        }
        true
    }
}
