//! # LED Display Test
//!
//! Diagnostic for LED matrix chains: prints each panel's grid position in a
//! 5x8 bitmap font at the panel's top-left corner, then idles until Ctrl-C
//! and blanks the matrix on the way out.

pub mod app;
pub mod canvas;
pub mod config;
pub mod errors;
pub mod font;
pub mod grid;
pub mod lifecycle;
pub mod matrix;
pub mod text;

pub use canvas::{Canvas, Color, FrameBuffer};
pub use errors::{DisplayError, Result};
pub use text::{draw_text, draw_text_colored, draw_text_with_font};
