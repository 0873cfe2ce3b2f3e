//! Terminal output for framebuffers.
//!
//! Frames go out as horizontal spans of cells. A full redraw sends every row;
//! later frames send only the spans that differ from what is on screen. A wide
//! glyph and its continuation column always travel in the same span, so the
//! encoder never has to reposition inside one.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Cells `x..x + len` of row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows; `None` forces a full redraw.
    shown: Option<FrameBuffer>,
    spans: Vec<Span>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            spans: Vec::new(),
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        queue!(
            self.buf,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.flush()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        queue!(
            self.buf,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget the on-screen frame, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then hand back the previously shown buffer in its place.
    ///
    /// Keeping one buffer on each side avoids cloning a frame per draw.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let shown = match self.shown.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.spans, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush()?;

        self.shown = Some(std::mem::replace(fb, shown));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Clear the screen and encode every row of `fb`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    let rows = (0..fb.height()).map(|y| Span {
        x: 0,
        y,
        len: fb.width(),
    });
    encode_spans(fb, rows, out)
}

/// Encode only what changed between two frames of the same size.
///
/// `spans` is scratch space, reused across calls.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    spans: &mut Vec<Span>,
    out: &mut Vec<u8>,
) -> Result<()> {
    dirty_spans(prev, next, spans);
    if spans.is_empty() {
        return Ok(());
    }
    encode_spans(next, spans.iter().copied(), out)
}

/// Collect the changed spans of `next`, coalescing adjacent changed cells.
fn dirty_spans(prev: &FrameBuffer, next: &FrameBuffer, spans: &mut Vec<Span>) {
    spans.clear();
    let w = next.width() as usize;
    if w == 0 {
        return;
    }

    let rows = prev.cells().chunks(w).zip(next.cells().chunks(w));
    for (y, (old, new)) in rows.enumerate() {
        let mut x = 0;
        while x < w {
            if old[x] == new[x] {
                x += 1;
                continue;
            }
            let mut start = x;
            while x < w && old[x] != new[x] {
                x += 1;
            }
            // Keep wide glyphs whole.
            if start > 0 && new[start].is_continuation() {
                start -= 1;
            }
            if x < w && new[x].is_continuation() {
                x += 1;
            }
            spans.push(Span {
                x: start as u16,
                y: y as u16,
                len: (x - start) as u16,
            });
        }
    }
}

fn encode_spans(
    fb: &FrameBuffer,
    spans: impl Iterator<Item = Span>,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut pen: Option<CellStyle> = None;
    for span in spans {
        queue!(out, cursor::MoveTo(span.x, span.y))?;
        for x in span.x..span.x.saturating_add(span.len) {
            let Some(cell) = fb.get(x, span.y) else {
                break;
            };
            // The terminal already advanced past it with the wide glyph.
            if cell.is_continuation() {
                continue;
            }
            if pen != Some(cell.style) {
                set_style(out, cell.style)?;
                pen = Some(cell.style);
            }
            queue!(out, Print(cell.ch))?;
        }
    }
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// SGR reset clears colours too, so it goes first.
fn set_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetColors(Colors::new(style.fg.into(), style.bg.into()))
    )?;
    let attrs = [
        (style.bold, Attribute::Bold),
        (style.dim, Attribute::Dim),
        (style.reverse, Attribute::Reverse),
    ];
    for (_, attr) in attrs.into_iter().filter(|(on, _)| *on) {
        queue!(out, SetAttribute(attr))?;
    }
    Ok(())
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}
