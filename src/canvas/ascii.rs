//! ASCII rasterizer for terminals without a UTF-8 locale

use super::canvas::Canvas;
use super::color::Color;
use super::frame::FrameBuffer;
use super::rasterizer::{Rasterizer, StyledCell, StyledLine};

/// One `#` per lit LED, one space per dark LED
#[derive(Debug, Default)]
pub struct AsciiRasterizer;

impl AsciiRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for AsciiRasterizer {
    fn rasterize(&self, frame: &FrameBuffer) -> Vec<StyledLine> {
        (0..frame.height())
            .map(|y| StyledLine {
                cells: (0..frame.width())
                    .map(|x| match frame.get_pixel(x, y) {
                        Some(color) if !color.is_black() => StyledCell {
                            ch: '#',
                            fg: color,
                            bg: Color::BLACK,
                        },
                        _ => StyledCell::default(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn resolution_multiplier(&self) -> (u32, u32) {
        (1, 1)
    }

    fn name(&self) -> &'static str {
        "Ascii"
    }
}
