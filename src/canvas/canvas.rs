//! Pixel-addressable drawing surface

use super::color::Color;

/// Anything an LED panel (or an emulation of one) can be drawn through.
///
/// Coordinates are signed so callers never have to bounds-check:
/// implementations silently drop pixels that fall outside the surface.
pub trait Canvas {
    /// Width in pixels
    fn width(&self) -> i32;

    /// Height in pixels
    fn height(&self) -> i32;

    /// Set one pixel; out-of-range coordinates are ignored
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Set every pixel to `color`
    fn fill(&mut self, color: Color);

    /// Turn every pixel off
    fn clear(&mut self) {
        self.fill(Color::BLACK);
    }
}
