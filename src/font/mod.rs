//! Fixed-width bitmap fonts
//!
//! A glyph is 5 columns of 8 rows. Each column is one byte; bit `j` lights
//! row `j` (bit 0 is the top row).

mod glcd;

/// Columns per glyph
pub const GLYPH_WIDTH: usize = 5;

/// Rows per glyph (bits per column byte)
pub const GLYPH_HEIGHT: i32 = 8;

/// Horizontal pixels consumed per character: glyph columns plus one padding column
pub const ADVANCE: i32 = GLYPH_WIDTH as i32 + 1;

/// Column-major 5x8 bitmap
pub type Glyph = [u8; GLYPH_WIDTH];

/// Read-only glyph table indexed by character code
#[derive(Debug, Clone, Copy)]
pub struct Font {
    glyphs: &'static [Glyph],
}

impl Font {
    /// Wrap a glyph table. The table must hold at least one glyph.
    pub const fn new(glyphs: &'static [Glyph]) -> Self {
        assert!(!glyphs.is_empty(), "font needs at least one glyph");
        Self { glyphs }
    }

    /// Number of character codes this font covers
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for `code`. Codes past the end of the table are clamped to
    /// the last glyph.
    #[inline]
    pub fn glyph(&self, code: u8) -> &Glyph {
        let idx = usize::from(code).min(self.glyphs.len() - 1);
        &self.glyphs[idx]
    }
}

/// Built-in 256-glyph font
pub static GLCD: Font = Font::new(&glcd::GLYPHS);
