//! Rasterizer trait for converting a frame to terminal cells

use super::caps::UnicodeLevel;
use super::color::Color;
use super::frame::FrameBuffer;

/// A single terminal cell with foreground and background colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledCell {
    /// Character to display
    pub ch: char,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

impl Default for StyledCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
        }
    }
}

/// A line of styled cells
#[derive(Debug, Clone, Default)]
pub struct StyledLine {
    pub cells: Vec<StyledCell>,
}

impl StyledLine {
    /// Plain characters of the line, colors dropped
    pub fn text(&self) -> String {
        self.cells.iter().map(|cell| cell.ch).collect()
    }
}

/// Trait for rasterizers that convert a frame to terminal output
pub trait Rasterizer: Send + Sync {
    /// Convert frame to styled lines, top to bottom
    fn rasterize(&self, frame: &FrameBuffer) -> Vec<StyledLine>;

    /// LED pixels packed into one terminal cell (horizontal, vertical)
    fn resolution_multiplier(&self) -> (u32, u32);

    /// Name of this rasterizer
    fn name(&self) -> &'static str;
}

/// Select the rasterizer for given Unicode support
pub fn select_rasterizer(level: UnicodeLevel) -> Box<dyn Rasterizer> {
    use super::ascii::AsciiRasterizer;
    use super::halfblock::HalfBlockRasterizer;

    match level {
        UnicodeLevel::HalfBlock => Box::new(HalfBlockRasterizer::new()),
        UnicodeLevel::Ascii => Box::new(AsciiRasterizer::new()),
    }
}
