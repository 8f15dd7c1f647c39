//! Bitmap text rasterizer
//!
//! Draws byte strings with a fixed 5x8 font, one `set_pixel` per lit bit.
//! The cursor is bumped one column *before* each glyph column is drawn, so
//! the first lit column of a glyph at origin `x` lands on `x + 1`. After the
//! five columns the cursor skips one more padding column: every character
//! consumes exactly [`ADVANCE`] pixels whatever its bitmap.
//!
//! No bounds checking happens here; the canvas drops off-surface pixels.

use crate::canvas::{Canvas, Color};
use crate::font::{Font, ADVANCE, GLCD, GLYPH_HEIGHT};

/// Color used by [`draw_text`]
pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;

/// Draw `text` in opaque white with the built-in font.
///
/// Returns the cursor x after the last character.
pub fn draw_text<C>(canvas: &mut C, x: i32, y: i32, text: impl AsRef<[u8]>) -> i32
where
    C: Canvas + ?Sized,
{
    draw_text_with_font(canvas, &GLCD, x, y, text, DEFAULT_TEXT_COLOR)
}

/// Draw `text` in `color` with the built-in font.
pub fn draw_text_colored<C>(
    canvas: &mut C,
    x: i32,
    y: i32,
    text: impl AsRef<[u8]>,
    color: Color,
) -> i32
where
    C: Canvas + ?Sized,
{
    draw_text_with_font(canvas, &GLCD, x, y, text, color)
}

/// Draw `text` with an explicit font.
///
/// Each byte is looked up in `font` as-is; there is no UTF-8 decoding, so a
/// multi-byte character renders as one glyph per byte.
pub fn draw_text_with_font<C>(
    canvas: &mut C,
    font: &Font,
    x: i32,
    y: i32,
    text: impl AsRef<[u8]>,
    color: Color,
) -> i32
where
    C: Canvas + ?Sized,
{
    let mut cursor = x;

    for &code in text.as_ref() {
        for &column in font.glyph(code) {
            cursor = cursor.saturating_add(1);
            for row in 0..GLYPH_HEIGHT {
                if (column >> row) & 1 == 1 {
                    canvas.set_pixel(cursor, y.saturating_add(row), color);
                }
            }
        }
        // padding column
        cursor = cursor.saturating_add(1);
    }

    cursor
}

/// Horizontal pixels consumed by `len` characters
pub fn text_width(len: usize) -> i32 {
    i32::try_from(len).map_or(i32::MAX, |n| n.saturating_mul(ADVANCE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FrameBuffer;

    #[test]
    fn test_draw_one_on_frame() {
        let mut frame = FrameBuffer::new(16, 8);
        let end = draw_text(&mut frame, 0, 0, "1");
        assert_eq!(end, 6);
        // '1' = [0x00, 0x42, 0x7F, 0x40, 0x00]; stem is column 2 -> x = 3
        for row in 0..7 {
            assert_eq!(frame.get_pixel(3, row), Some(Color::WHITE));
        }
        assert_eq!(frame.get_pixel(3, 7), Some(Color::BLACK));
        assert_eq!(frame.lit_pixels(), 10);
    }

    #[test]
    fn test_colored_text() {
        let mut frame = FrameBuffer::new(16, 8);
        draw_text_colored(&mut frame, 0, 0, "-", Color::GREEN);
        // '-' lights row 3 across all five columns
        for x in 1..=5 {
            assert_eq!(frame.get_pixel(x, 3), Some(Color::GREEN));
        }
        assert_eq!(frame.lit_pixels(), 5);
    }

    #[test]
    fn test_clipped_text_does_not_panic() {
        let mut frame = FrameBuffer::new(4, 4);
        let end = draw_text(&mut frame, -3, -2, "0,0");
        assert_eq!(end, -3 + 18);
        assert!(frame.lit_pixels() > 0);

        let end = draw_text(&mut frame, i32::MAX - 2, i32::MAX, "88");
        assert_eq!(end, i32::MAX);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(0), 0);
        assert_eq!(text_width(3), 18);
        assert_eq!(text_width(usize::MAX), i32::MAX);
    }
}
