//! Glyph sets for the board: emoji for capable terminals, plain ASCII otherwise.

/// How a glyph is drawn into the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// One terminal column.
    Narrow(char),
    /// Two terminal columns (emoji).
    Wide(char),
}

impl Glyph {
    pub fn ch(&self) -> char {
        match *self {
            Glyph::Narrow(ch) | Glyph::Wide(ch) => ch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub flag: Glyph,
    pub mine: Glyph,
    pub hidden: Glyph,
    /// Markers drawn left and right of the cell under the cursor.
    pub cursor: (char, char),
}

impl GlyphSet {
    pub fn emoji() -> Self {
        Self {
            flag: Glyph::Wide('🚩'),
            mine: Glyph::Wide('💣'),
            hidden: Glyph::Narrow('#'),
            cursor: ('>', '<'),
        }
    }

    pub fn plain() -> Self {
        Self {
            flag: Glyph::Narrow('?'),
            mine: Glyph::Narrow('*'),
            hidden: Glyph::Narrow('#'),
            cursor: ('-', '-'),
        }
    }

    /// Pick the set for the `--disable-emoji` flag.
    pub fn for_emoji(enabled: bool) -> Self {
        if enabled {
            Self::emoji()
        } else {
            Self::plain()
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::emoji()
    }
}
