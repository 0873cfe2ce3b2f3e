//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use thiserror::Error;

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::glyphs::{Glyph, GlyphSet};
use crate::types::{CellState, Outcome};

/// Terminal columns per board cell: left marker, two glyph columns, right marker.
pub const CELL_W: u16 = 4;

/// Columns reserved for the status panel (and help text) right of the board.
pub const PANEL_W: u16 = 48;

/// Rows used by the status panel before the help text starts.
const PANEL_STATUS_ROWS: u16 = 8;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether `need` fits inside this viewport.
    pub fn contains(&self, need: Viewport) -> bool {
        self.width >= need.width && self.height >= need.height
    }
}

/// The terminal cannot hold the board and its status panel.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error(
    "terminal is {}x{} but the board needs at least {}x{}",
    .have.width, .have.height, .need.width, .need.height
)]
pub struct TerminalTooSmall {
    pub have: Viewport,
    pub need: Viewport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the Minesweeper board.
pub struct GameView {
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    glyphs: GlyphSet,
    help: &'static [&'static str],
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_h: 1,
            anchor_y: AnchorY::Center,
            glyphs: GlyphSet::default(),
            help: &[],
        }
    }
}

impl GameView {
    pub fn new(cell_h: u16) -> Self {
        Self {
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Key reference lines printed under the status panel.
    pub fn with_help(mut self, help: &'static [&'static str]) -> Self {
        self.help = help;
        self
    }

    /// Smallest viewport that holds a `width` x `height` board plus the panel.
    pub fn required_size(&self, width: usize, height: usize) -> Viewport {
        let (frame_w, frame_h) = self.frame_size(width, height);
        Viewport::new(
            frame_w.saturating_add(2).saturating_add(PANEL_W),
            self.block_height(frame_h),
        )
    }

    /// Rows shared by the board frame and the side panel, which start on the same row.
    fn block_height(&self, frame_h: u16) -> u16 {
        let panel_h = PANEL_STATUS_ROWS.saturating_add(self.help.len() as u16);
        frame_h.max(panel_h)
    }

    pub fn check_fits(
        &self,
        width: usize,
        height: usize,
        viewport: Viewport,
    ) -> Result<(), TerminalTooSmall> {
        let need = self.required_size(width, height);
        if viewport.contains(need) {
            Ok(())
        } else {
            Err(TerminalTooSmall {
                have: viewport,
                need,
            })
        }
    }

    fn frame_size(&self, width: usize, height: usize) -> (u16, u16) {
        let board_px_w = (width as u16).saturating_mul(CELL_W);
        let board_px_h = (height as u16).saturating_mul(self.cell_h);
        (board_px_w.saturating_add(2), board_px_h.saturating_add(2))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: (usize, usize),
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.width, snap.height);
        let total_w = frame_w.saturating_add(2).saturating_add(PANEL_W);
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(self.block_height(frame_h)) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            ..CellStyle::default()
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        // Background for play area.
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            bg,
        );

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..snap.height {
            for x in 0..snap.width {
                if let Some(cell) = snap.cell(x, y) {
                    self.draw_cell(fb, start_x, start_y, x as u16, y as u16, cell);
                }
            }
        }

        if cursor.0 < snap.width && cursor.1 < snap.height {
            self.draw_cursor(fb, start_x, start_y, cursor.0 as u16, cursor.1 as u16);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: (usize, usize),
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Top-left terminal position of board cell (x, y).
    fn cell_origin(&self, start_x: u16, start_y: u16, x: u16, y: u16) -> (u16, u16) {
        (
            start_x + 1 + x * CELL_W,
            start_y + 1 + y * self.cell_h + (self.cell_h - 1) / 2,
        )
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        cell: CellState,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        let base = CellStyle {
            bg: Rgb::new(30, 30, 40),
            ..CellStyle::default()
        };

        let (glyph, style) = if cell.flagged {
            (
                self.glyphs.flag,
                CellStyle {
                    fg: Rgb::new(255, 90, 90),
                    bold: true,
                    reverse: matches!(self.glyphs.flag, Glyph::Narrow(_)),
                    ..base
                },
            )
        } else if !cell.revealed {
            (
                self.glyphs.hidden,
                CellStyle {
                    fg: Rgb::new(110, 110, 120),
                    dim: true,
                    ..base
                },
            )
        } else if cell.is_mine() {
            (
                self.glyphs.mine,
                CellStyle {
                    fg: Rgb::new(255, 255, 255),
                    bold: true,
                    ..base
                },
            )
        } else if cell.value == 0 {
            (Glyph::Narrow(' '), base)
        } else {
            (
                Glyph::Narrow(char::from(b'0' + cell.value as u8)),
                CellStyle {
                    fg: number_color(cell.value),
                    bold: true,
                    ..base
                },
            )
        };

        match glyph {
            Glyph::Narrow(ch) => fb.put_char(px + 1, py, ch, style),
            Glyph::Wide(ch) => fb.put_wide(px + 1, py, ch, style),
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        let style = CellStyle {
            fg: Rgb::new(255, 220, 80),
            bg: Rgb::new(30, 30, 40),
            bold: true,
            ..CellStyle::default()
        };
        let (left, right) = self.glyphs.cursor;
        fb.put_char(px, py, left, style);
        fb.put_char(px + CELL_W - 1, py, right, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        if snap.started {
            let secs = snap.elapsed.as_secs_f64();
            fb.put_fmt(panel_x, y, format_args!("{secs:.1}"), value);
        } else {
            fb.put_str(panel_x, y, "-", value);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MINES", label);
        y = y.saturating_add(1);
        fb.put_fmt(panel_x, y, format_args!("{}", snap.remaining_mines), value);
        y = y.saturating_add(2);

        let banner = match snap.outcome {
            Outcome::InProgress => None,
            Outcome::Won => Some(("You Won!", Rgb::new(100, 220, 120))),
            Outcome::Lost => Some(("You Lost", Rgb::new(230, 80, 80))),
        };
        if let Some((text, fg)) = banner {
            let style = CellStyle {
                fg,
                bold: true,
                ..CellStyle::default()
            };
            fb.put_str(panel_x, y, text, style);
        }
        y = y.saturating_add(2);

        let dim = CellStyle {
            dim: true,
            ..value
        };
        for line in self.help {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }
}

/// Classic per-count colours.
fn number_color(value: i8) -> Rgb {
    match value {
        1 => Rgb::new(90, 140, 255),
        2 => Rgb::new(90, 200, 90),
        3 => Rgb::new(230, 80, 80),
        4 => Rgb::new(160, 110, 240),
        5 => Rgb::new(200, 110, 60),
        6 => Rgb::new(70, 200, 200),
        7 => Rgb::new(230, 230, 230),
        _ => Rgb::new(150, 150, 150),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;

    #[test]
    fn required_size_accounts_for_panel_and_help() {
        const HELP: &[&str] = &["a", "b", "c"];
        let view = GameView::default().with_help(HELP);
        // 10 cells * 4 cols + border 2, gap 2, panel.
        assert_eq!(
            view.required_size(10, 10),
            Viewport::new(42 + 2 + PANEL_W, 12)
        );
        // Short boards are limited by the panel height.
        assert_eq!(view.required_size(3, 2).height, PANEL_STATUS_ROWS + 3);
    }

    #[test]
    fn check_fits_reports_sizes() {
        let view = GameView::default();
        let err = view
            .check_fits(100, 100, Viewport::new(80, 24))
            .unwrap_err();
        assert_eq!(err.have, Viewport::new(80, 24));
        assert_eq!(err.need, view.required_size(100, 100));
        assert!(err.to_string().starts_with("terminal is 80x24"));
    }

    #[test]
    fn centered_view_shows_all_help_at_required_size() {
        const HELP: &[&str] = &["one", "two", "three", "four", "five", "last line"];
        let snap = Game::new(10, 4, 1).unwrap().snapshot();
        let view = GameView::default().with_help(HELP);
        let vp = view.required_size(10, 4);
        assert!(view.check_fits(10, 4, vp).is_ok());

        let fb = view.render(&snap, (0, 0), vp);
        assert!(fb.row_text(vp.height - 1).contains("last line"));
        // Board and panel share the top row.
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    }

    #[test]
    fn taller_cells_center_glyph_rows() {
        let view = GameView::new(3);
        assert_eq!(view.cell_origin(0, 0, 0, 0), (1, 2));
        assert_eq!(view.cell_origin(0, 0, 1, 1), (5, 5));
    }

    #[test]
    fn hidden_board_draws_hidden_glyphs() {
        let snap = Game::new(3, 3, 1).unwrap().snapshot();
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let vp = view.required_size(3, 3);
        let fb = view.render(&snap, (0, 0), vp);

        assert_eq!(fb.get(2, 1).unwrap().ch, '#');
        assert_eq!(fb.get(6, 1).unwrap().ch, '#');
        assert_eq!(fb.get(1, 1).unwrap().ch, '>');
        assert_eq!(fb.get(4, 1).unwrap().ch, '<');
    }
}
