//! In-memory frame buffer backing every matrix driver

use super::canvas::Canvas;
use super::color::Color;

/// Row-major RGB frame for a chain of panels
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    /// Set on every write, cleared once a driver has presented the frame
    dirty: bool,
}

impl FrameBuffer {
    /// Create a black frame with given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; size],
            dirty: true,
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Get pixel at coordinates
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Get raw pixel data
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Number of pixels that are not black
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|c| !c.is_black()).count()
    }

    /// Check if the frame changed since the last present
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark frame as presented
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl Canvas for FrameBuffer {
    fn width(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    fn height(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
            self.dirty = true;
        }
    }

    fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
        self.dirty = true;
    }
}
