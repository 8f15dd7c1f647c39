//! Terminal capability detection
//!
//! Decides how the emulated panel is drawn:
//! - UTF-8 locale: half blocks ▀▄█, two LED rows per terminal row
//! - anything else: one ASCII cell per LED

use std::env;

/// Unicode graphics level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnicodeLevel {
    /// Half-block characters ▀▄ - 1x2 per cell with 2 colors
    #[default]
    HalfBlock,
    /// ASCII only - no Unicode graphics
    Ascii,
}

/// Terminal capabilities
#[derive(Debug, Clone)]
pub struct TerminalCaps {
    /// Terminal columns
    pub cols: u16,
    /// Terminal rows
    pub rows: u16,
    /// Unicode graphics level
    pub unicode: UnicodeLevel,
}

impl Default for TerminalCaps {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            unicode: UnicodeLevel::HalfBlock,
        }
    }
}

impl TerminalCaps {
    /// Detect terminal capabilities
    pub fn detect() -> Self {
        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        Self {
            cols,
            rows,
            unicode: detect_unicode_level(
                &env::var("LANG").unwrap_or_default(),
                &env::var("LC_ALL").unwrap_or_default(),
            ),
        }
    }

    /// Whether a `width` x `height` LED frame, packed `per_cell` LEDs to a
    /// cell, fits on screen with one line left for status
    pub fn fits(&self, width: u32, height: u32, per_cell: (u32, u32)) -> bool {
        let cols = width.div_ceil(per_cell.0.max(1));
        let rows = height.div_ceil(per_cell.1.max(1));
        cols <= u32::from(self.cols) && rows < u32::from(self.rows)
    }
}

/// Detect Unicode graphics level from locale variables
pub fn detect_unicode_level(lang: &str, lc_all: &str) -> UnicodeLevel {
    if lang.to_uppercase().contains("UTF") || lc_all.to_uppercase().contains("UTF") {
        UnicodeLevel::HalfBlock
    } else {
        UnicodeLevel::Ascii
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_caps() {
        let caps = TerminalCaps::default();
        assert_eq!(caps.cols, 80);
        assert_eq!(caps.rows, 24);
    }

    #[test]
    fn test_unicode_level_from_locale() {
        assert_eq!(detect_unicode_level("en_US.UTF-8", ""), UnicodeLevel::HalfBlock);
        assert_eq!(detect_unicode_level("C", "pt_BR.utf8"), UnicodeLevel::HalfBlock);
        assert_eq!(detect_unicode_level("C", ""), UnicodeLevel::Ascii);
    }

    #[test]
    fn test_fits() {
        let caps = TerminalCaps::default();
        assert!(caps.fits(64, 32, (1, 2)));
        assert!(caps.fits(80, 46, (1, 2)));
        assert!(!caps.fits(80, 47, (1, 2)));
        assert!(!caps.fits(81, 2, (1, 2)));
        assert!(!caps.fits(32, 32, (1, 1)));
    }
}
