//! Frame-buffer-only driver, for CI and machines without a panel

use tracing::{debug, info};

use super::MatrixDriver;
use crate::canvas::{AsciiRasterizer, Canvas, FrameBuffer, Rasterizer, StyledLine};
use crate::config::MatrixOptions;
use crate::errors::Result;

/// Keeps the frame in memory and logs each new frame.
///
/// With no panel to look at, the status goes to stderr as a plain line so
/// the operator sees the quit hint whatever the log level.
#[derive(Debug)]
pub struct HeadlessMatrix {
    frame: FrameBuffer,
    /// Frames actually pushed (clean presents are skipped)
    presented: usize,
    status: Option<String>,
}

impl HeadlessMatrix {
    pub fn new(options: &MatrixOptions) -> Self {
        Self {
            frame: FrameBuffer::new(options.width(), options.height()),
            presented: 0,
            status: None,
        }
    }

    /// Number of frames presented so far
    pub fn frames_presented(&self) -> usize {
        self.presented
    }

    /// Last status announced on stderr
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Current frame as ASCII art, one line per LED row
    pub fn snapshot(&self) -> String {
        AsciiRasterizer::new()
            .rasterize(&self.frame)
            .iter()
            .map(StyledLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl MatrixDriver for HeadlessMatrix {
    fn canvas(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    fn present(&mut self) -> Result<()> {
        if !self.frame.is_dirty() {
            return Ok(());
        }

        self.presented += 1;
        info!(
            frame = self.presented,
            lit = self.frame.lit_pixels(),
            "Presented frame"
        );
        debug!("\n{}", self.snapshot());
        self.frame.mark_clean();
        Ok(())
    }

    fn set_status(&mut self, status: &str) {
        if self.status.as_deref() == Some(status) {
            return;
        }
        for part in status.split(" · ") {
            eprintln!(" {part}");
        }
        self.status = Some(status.to_string());
    }

    fn shutdown(mut self: Box<Self>) -> Result<()> {
        self.frame.clear();
        self.present()?;
        info!("Headless matrix released");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "headless"
    }
}
