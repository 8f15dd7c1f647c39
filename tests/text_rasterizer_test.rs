//! Integration tests for the bitmap text rasterizer.
//!
//! A recording canvas captures every `set_pixel` call so the exact sequence
//! of writes can be checked, not just the final image.

use std::collections::BTreeSet;

use rstest::rstest;

use led_display_test::font::{Font, Glyph, ADVANCE, GLCD};
use led_display_test::text::text_width;
use led_display_test::{draw_text, draw_text_colored, draw_text_with_font, Canvas, Color};

/// Canvas that accepts any coordinate and remembers every call
#[derive(Default)]
struct RecordingCanvas {
    calls: Vec<(i32, i32, Color)>,
}

impl RecordingCanvas {
    fn points(&self) -> BTreeSet<(i32, i32)> {
        self.calls.iter().map(|&(x, y, _)| (x, y)).collect()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> i32 {
        i32::MAX
    }

    fn height(&self) -> i32 {
        i32::MAX
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.calls.push((x, y, color));
    }

    fn fill(&mut self, _color: Color) {}
}

/// Code 0 is blank, code 1 lights only its first column
static FIRST_COLUMN: [Glyph; 2] = [[0x00; 5], [0xFF, 0x00, 0x00, 0x00, 0x00]];

fn lit_bits(text: &[u8]) -> usize {
    text.iter()
        .flat_map(|&c| GLCD.glyph(c).iter())
        .map(|col| col.count_ones() as usize)
        .sum()
}

// ==================== Advance ====================

#[rstest]
#[case("")]
#[case("0")]
#[case("0,0")]
#[case("    ")]
#[case("Hello, panel!")]
fn test_advance_is_six_per_character(#[case] text: &str) {
    let mut canvas = RecordingCanvas::default();
    let end = draw_text(&mut canvas, 10, 3, text);
    assert_eq!(end - 10, text_width(text.len()));
    assert_eq!(end - 10, ADVANCE * i32::try_from(text.len()).expect("short text"));
}

#[test]
fn test_one_call_per_lit_bit() {
    let text = b"0,0 Ag~";
    let mut canvas = RecordingCanvas::default();
    draw_text(&mut canvas, 0, 0, text);
    assert_eq!(canvas.calls.len(), lit_bits(text));
    assert!(canvas.calls.len() <= text.len() * 5 * 8);
}

// ==================== Blank input ====================

#[test]
fn test_empty_string_draws_nothing() {
    let mut canvas = RecordingCanvas::default();
    let end = draw_text(&mut canvas, -7, 42, "");
    assert_eq!(end, -7);
    assert!(canvas.calls.is_empty());
}

#[test]
fn test_space_draws_nothing_but_advances() {
    let mut canvas = RecordingCanvas::default();
    let end = draw_text(&mut canvas, 0, 0, " ");
    assert_eq!(end, 6);
    assert!(canvas.calls.is_empty());

    // "1 1": the second '1' is the first one shifted by two advances
    let mut spaced = RecordingCanvas::default();
    draw_text(&mut spaced, 0, 0, "1 1");
    let mut single = RecordingCanvas::default();
    draw_text(&mut single, 12, 0, "1");
    let second_half: BTreeSet<_> = spaced.points().into_iter().filter(|&(x, _)| x >= 12).collect();
    assert_eq!(second_half, single.points());
}

// ==================== Pixel placement ====================

#[test]
fn test_first_column_lands_one_right_of_origin() {
    let font = Font::new(&FIRST_COLUMN);
    let mut canvas = RecordingCanvas::default();
    draw_text_with_font(&mut canvas, &font, 0, 0, [1u8], Color::WHITE);

    let expected: Vec<(i32, i32, Color)> = (0..8).map(|y| (1, y, Color::WHITE)).collect();
    assert_eq!(canvas.calls, expected);
}

#[test]
fn test_second_character_starts_at_origin_plus_seven() {
    let font = Font::new(&FIRST_COLUMN);
    let mut canvas = RecordingCanvas::default();
    let end = draw_text_with_font(&mut canvas, &font, 5, 0, [1u8, 1u8], Color::WHITE);

    let columns: BTreeSet<i32> = canvas.calls.iter().map(|&(x, _, _)| x).collect();
    assert_eq!(columns, BTreeSet::from([6, 12]));
    assert_eq!(end, 5 + 12);
}

#[test]
fn test_rows_follow_bit_order() {
    // column 2 of '1' is 0x7F: rows 0..=6
    let mut canvas = RecordingCanvas::default();
    draw_text(&mut canvas, 0, 100, "1");
    let stem: Vec<i32> = canvas
        .calls
        .iter()
        .filter(|&&(x, _, _)| x == 3)
        .map(|&(_, y, _)| y)
        .collect();
    assert_eq!(stem, (100..107).collect::<Vec<_>>());
}

#[test]
fn test_translation_invariance() {
    let mut a = RecordingCanvas::default();
    let mut b = RecordingCanvas::default();
    draw_text(&mut a, 0, 0, "12,34");
    draw_text(&mut b, -40, 17, "12,34");

    let shifted: Vec<(i32, i32)> = a.calls.iter().map(|&(x, y, _)| (x - 40, y + 17)).collect();
    let other: Vec<(i32, i32)> = b.calls.iter().map(|&(x, y, _)| (x, y)).collect();
    assert_eq!(shifted, other);
}

#[test]
fn test_color_is_passed_through() {
    let mut canvas = RecordingCanvas::default();
    let color = Color::rgb(12, 34, 56);
    draw_text_colored(&mut canvas, 0, 0, "#", color);
    assert!(!canvas.calls.is_empty());
    assert!(canvas.calls.iter().all(|&(_, _, c)| c == color));
}

#[test]
fn test_default_color_is_white() {
    let mut canvas = RecordingCanvas::default();
    draw_text(&mut canvas, 0, 0, "W");
    assert!(canvas.calls.iter().all(|&(_, _, c)| c == Color::WHITE));
}

// ==================== Byte handling ====================

#[test]
fn test_bytes_are_not_decoded() {
    // "é" is two bytes in UTF-8 and renders as two glyphs
    let mut canvas = RecordingCanvas::default();
    let end = draw_text(&mut canvas, 0, 0, "é");
    assert_eq!(end, 12);
    assert_eq!(canvas.calls.len(), lit_bits("é".as_bytes()));
}

#[test]
fn test_high_codes_render_without_panicking() {
    let all: Vec<u8> = (0..=u8::MAX).collect();
    let mut canvas = RecordingCanvas::default();
    let end = draw_text(&mut canvas, 0, 0, &all);
    assert_eq!(end, 256 * 6);
    assert_eq!(canvas.calls.len(), lit_bits(&all));
}

#[test]
fn test_repeated_calls_leave_no_state() {
    let mut first = RecordingCanvas::default();
    draw_text(&mut first, 3, 3, "0,0");

    let mut canvas = RecordingCanvas::default();
    draw_text(&mut canvas, 50, 50, "junk");
    canvas.calls.clear();
    draw_text(&mut canvas, 3, 3, "0,0");

    assert_eq!(canvas.calls, first.calls);
}
