//! Matrix drivers
//!
//! A driver owns the frame buffer for the whole chain and knows how to show
//! it. Callers draw through [`MatrixDriver::canvas`], push the frame with
//! [`MatrixDriver::present`], and must hand the driver back through
//! [`MatrixDriver::shutdown`] before exiting so the panel is left dark.

mod headless;
mod terminal;

pub use headless::HeadlessMatrix;
pub use terminal::TerminalMatrix;

use tracing::info;

use crate::canvas::FrameBuffer;
use crate::config::{Backend, MatrixOptions};
use crate::errors::Result;

/// A ready-to-draw LED matrix
pub trait MatrixDriver {
    /// Drawing surface covering every panel in the chain
    fn canvas(&mut self) -> &mut FrameBuffer;

    /// Show the current frame
    fn present(&mut self) -> Result<()>;

    /// Short operator hint, shown wherever the driver can reach the operator
    fn set_status(&mut self, status: &str);

    /// Blank the panel and release the device
    fn shutdown(self: Box<Self>) -> Result<()>;

    /// Name of this driver
    fn name(&self) -> &'static str;
}

/// Bring up the driver for `backend` with the given geometry
pub fn create_matrix(options: &MatrixOptions, backend: Backend) -> Result<Box<dyn MatrixDriver>> {
    let driver: Box<dyn MatrixDriver> = match backend {
        Backend::Terminal => Box::new(TerminalMatrix::new(options)?),
        Backend::Headless => Box::new(HeadlessMatrix::new(options)),
    };

    info!(
        driver = driver.name(),
        width = options.width(),
        height = options.height(),
        brightness = options.brightness,
        "Matrix ready"
    );
    Ok(driver)
}
