//! # Canvas - pixel surface and terminal panel emulation
//!
//! ```text
//!    draw_text / label_panels
//!               │  set_pixel(x, y, color)
//!               ▼
//!    ┌─────────────────────┐
//!    │     FrameBuffer     │  (i32 coords, RGB, drops out-of-range)
//!    └──────────┬──────────┘
//!               │
//!       ┌───────┴────────┐
//!       ▼                ▼
//! ┌───────────┐    ┌───────────┐
//! │ HalfBlock │    │   Ascii   │
//! │   ▀▄█     │    │   # . #   │
//! └───────────┘    └───────────┘
//! ```

mod ascii;
mod canvas;
mod caps;
mod color;
mod frame;
mod halfblock;
mod rasterizer;

pub use ascii::AsciiRasterizer;
pub use canvas::Canvas;
pub use caps::{detect_unicode_level, TerminalCaps, UnicodeLevel};
pub use color::Color;
pub use frame::FrameBuffer;
pub use halfblock::HalfBlockRasterizer;
pub use rasterizer::{select_rasterizer, Rasterizer, StyledCell, StyledLine};
