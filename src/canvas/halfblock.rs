//! `HalfBlock` rasterizer - ▀▄█ characters, two LED rows per terminal row
//!
//! - ▀ (upper half block): top = fg, bottom = bg
//! - ▄ (lower half block): top = bg, bottom = fg
//! - █ (full block): both = fg
//! - ' ' (space): both dark

use super::canvas::Canvas;
use super::color::Color;
use super::frame::FrameBuffer;
use super::rasterizer::{Rasterizer, StyledCell, StyledLine};

/// Half-block rasterizer
///
/// Maps LEDs 1:1 horizontally and 2:1 vertically, no resampling.
/// An odd last row is paired with an unlit row.
#[derive(Debug, Default)]
pub struct HalfBlockRasterizer;

impl HalfBlockRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Select the half-block character and colors for a top/bottom LED pair
    fn select_halfblock(top: Color, bot: Color) -> StyledCell {
        if top == bot {
            if top.is_black() {
                return StyledCell {
                    ch: ' ',
                    fg: Color::BLACK,
                    bg: Color::BLACK,
                };
            }
            return StyledCell {
                ch: '█',
                fg: top,
                bg: Color::BLACK,
            };
        }

        // The brighter LED takes the glyph's foreground
        if top.luminance() >= bot.luminance() {
            StyledCell {
                ch: '▀',
                fg: top,
                bg: bot,
            }
        } else {
            StyledCell {
                ch: '▄',
                fg: bot,
                bg: top,
            }
        }
    }
}

impl Rasterizer for HalfBlockRasterizer {
    fn rasterize(&self, frame: &FrameBuffer) -> Vec<StyledLine> {
        let width = frame.width();
        let height = frame.height();
        let mut lines = Vec::with_capacity(usize::try_from((height + 1) / 2).unwrap_or(0));

        for y in (0..height).step_by(2) {
            let cells = (0..width)
                .map(|x| {
                    let top = frame.get_pixel(x, y).unwrap_or(Color::BLACK);
                    let bot = frame.get_pixel(x, y + 1).unwrap_or(Color::BLACK);
                    Self::select_halfblock(top, bot)
                })
                .collect();
            lines.push(StyledLine { cells });
        }

        lines
    }

    fn resolution_multiplier(&self) -> (u32, u32) {
        (1, 2)
    }

    fn name(&self) -> &'static str {
        "HalfBlock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halfblock_pairs() {
        let off = Color::BLACK;
        let on = Color::WHITE;
        assert_eq!(HalfBlockRasterizer::select_halfblock(off, off).ch, ' ');
        assert_eq!(HalfBlockRasterizer::select_halfblock(on, on).ch, '█');
        assert_eq!(HalfBlockRasterizer::select_halfblock(on, off).ch, '▀');
        assert_eq!(HalfBlockRasterizer::select_halfblock(off, on).ch, '▄');
    }

    #[test]
    fn test_rasterize_frame() {
        let mut frame = FrameBuffer::new(3, 3);
        frame.set_pixel(0, 0, Color::RED);
        frame.set_pixel(1, 1, Color::GREEN);
        frame.set_pixel(2, 2, Color::BLUE);

        let lines = HalfBlockRasterizer::new().rasterize(&frame);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "▀▄ ");
        assert_eq!(lines[1].text(), "  ▀");
        assert_eq!(lines[0].cells[0].fg, Color::RED);
        assert_eq!(lines[0].cells[1].fg, Color::GREEN);
        assert_eq!(lines[1].cells[2].fg, Color::BLUE);
    }
}
