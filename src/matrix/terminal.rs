//! Terminal panel emulation
//!
//! Draws the frame buffer on the alternate screen, one styled cell per LED
//! (or per LED pair with half blocks). Raw mode stays off so Ctrl-C still
//! reaches the process as SIGINT.
//!
//! Critical: installs a panic hook that restores the terminal.
//!
//! The binary turns its stderr logging off while this backend shares a
//! terminal with it; with stderr redirected the logs are kept.

use std::io::{self, stdout, Stdout};
use std::panic;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use tracing::{info, warn};

use super::MatrixDriver;
use crate::canvas::{
    select_rasterizer, Canvas, FrameBuffer, Rasterizer, StyledLine, TerminalCaps,
};
use crate::config::MatrixOptions;
use crate::errors::{DisplayError, Result};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Install panic hook that restores the terminal before showing panic info.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

/// Leave the alternate screen and show the cursor again
fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen, Show)
}

/// Convert rasterized rows to ratatui lines, dimmed to `brightness` percent
fn to_lines(rows: &[StyledLine], brightness: u8) -> Vec<Line<'static>> {
    rows.iter()
        .map(|row| {
            Line::from(
                row.cells
                    .iter()
                    .map(|cell| {
                        Span::styled(
                            cell.ch.to_string(),
                            Style::default()
                                .fg(cell.fg.scaled(brightness).to_ratatui())
                                .bg(cell.bg.scaled(brightness).to_ratatui()),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// LED matrix drawn in the terminal
pub struct TerminalMatrix {
    frame: FrameBuffer,
    terminal: Tui,
    rasterizer: Box<dyn Rasterizer>,
    brightness: u8,
    status: String,
    restored: bool,
}

impl TerminalMatrix {
    /// Enter the alternate screen and prepare an empty frame.
    ///
    /// Fails when stdout is not a terminal.
    pub fn new(options: &MatrixOptions) -> Result<Self> {
        if !stdout().is_tty() {
            return Err(DisplayError::MatrixInit(
                "stdout is not a terminal, use --led-backend headless".to_string(),
            ));
        }

        let caps = TerminalCaps::detect();
        let rasterizer = select_rasterizer(caps.unicode);
        let (width, height) = (options.width(), options.height());

        if !caps.fits(width, height, rasterizer.resolution_multiplier()) {
            warn!(
                cols = caps.cols,
                rows = caps.rows,
                "Terminal too small for a {width}x{height} matrix, output will be clipped"
            );
        }

        install_panic_hook();
        execute!(stdout(), EnterAlternateScreen, Hide)
            .map_err(|e| DisplayError::MatrixInit(format!("cannot set up terminal: {e}")))?;

        let terminal = match Terminal::new(CrosstermBackend::new(stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = restore();
                return Err(DisplayError::MatrixInit(format!("cannot open terminal: {e}")));
            }
        };

        info!(rasterizer = rasterizer.name(), "Terminal matrix initialized");

        Ok(Self {
            frame: FrameBuffer::new(width, height),
            terminal,
            rasterizer,
            brightness: options.brightness,
            status: String::new(),
            restored: false,
        })
    }
}

impl MatrixDriver for TerminalMatrix {
    fn canvas(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    fn present(&mut self) -> Result<()> {
        let lines = to_lines(&self.rasterizer.rasterize(&self.frame), self.brightness);
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let status = self.status.clone();

        self.terminal.draw(|f| {
            let [panel_area, status_area, _] = Layout::vertical([
                Constraint::Length(height),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(f.area());

            f.render_widget(Paragraph::new(lines), panel_area);
            f.render_widget(
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM)),
                status_area,
            );
        })?;

        self.frame.mark_clean();
        Ok(())
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn shutdown(mut self: Box<Self>) -> Result<()> {
        self.frame.clear();
        self.status.clear();
        let presented = self.present();

        self.restored = true;
        restore()?;
        info!("Terminal matrix released");
        presented
    }

    fn name(&self) -> &'static str {
        "terminal"
    }
}

impl Drop for TerminalMatrix {
    fn drop(&mut self) {
        if !self.restored {
            let _ = restore();
        }
    }
}
