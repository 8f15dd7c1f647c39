//! 24-bit LED colors

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::DisplayError;

/// RGB color with 8-bit channels, as the panel drivers take it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from hex color (e.g., 0xFF0000 for red)
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// An unlit LED
    #[inline]
    pub const fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Scale every channel by a brightness percentage (clamped to 100)
    #[inline]
    pub fn scaled(&self, percent: u8) -> Self {
        let percent = u16::from(percent.min(100));
        let scale = |c: u8| ((u16::from(c) * percent) / 100) as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Compute luminance (perceived brightness, 0.0 - 1.0)
    #[inline]
    pub fn luminance(&self) -> f32 {
        (0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b))
            / 255.0
    }

    /// Convert to ratatui Color
    #[inline]
    pub fn to_ratatui(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = DisplayError;

    /// Accepts `R,G,B` (decimal channels) or `#RRGGBB`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DisplayError::InvalidColor(s.to_string());
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(invalid());
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            return Ok(Self::from_hex(value));
        }

        let channels = trimmed
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = DisplayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex(0xFF0000), Color::RED);
        assert_eq!(Color::from_hex(0x00_80_FF), Color::rgb(0, 128, 255));
    }

    #[rstest]
    #[case("255,255,255", Color::WHITE)]
    #[case(" 10, 20 ,30 ", Color::rgb(10, 20, 30))]
    #[case("#00ff00", Color::GREEN)]
    #[case("#0000FF", Color::BLUE)]
    fn test_parse_valid(#[case] input: &str, #[case] expected: Color) {
        assert_eq!(input.parse::<Color>().ok(), Some(expected));
    }

    #[rstest]
    #[case("256,0,0")]
    #[case("1,2")]
    #[case("1,2,3,4")]
    #[case("#fff")]
    #[case("#gggggg")]
    #[case("")]
    fn test_parse_invalid(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Color>(),
            Err(DisplayError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_scaled_brightness() {
        assert_eq!(Color::WHITE.scaled(100), Color::WHITE);
        assert_eq!(Color::WHITE.scaled(50), Color::rgb(127, 127, 127));
        assert_eq!(Color::WHITE.scaled(0), Color::BLACK);
        // Over 100% never brightens
        assert_eq!(Color::rgb(10, 20, 30).scaled(200), Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let color = Color::rgb(1, 22, 133);
        assert_eq!(color.to_string().parse::<Color>().ok(), Some(color));
    }
}
