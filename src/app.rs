//! Program flow: label the panels, wait for Ctrl-C, blank the matrix

use std::future::Future;
use std::io;

use tracing::{info, warn};

use crate::config::Settings;
use crate::errors::Result;
use crate::grid::{label_panels, PanelGrid};
use crate::lifecycle::{
    finish_interrupt_handler, idle_until_stopped, watch_for_interrupt, StopFlag,
};
use crate::matrix::{create_matrix, MatrixDriver};

const QUIT_HINT: &str = "Press Ctrl-C to quit...";

/// Run the display test until interrupted
pub async fn run(settings: Settings) -> Result<()> {
    let matrix = create_matrix(&settings.matrix, settings.runtime.backend)?;
    run_on(matrix, &settings, StopFlag::new(), Some(tokio::signal::ctrl_c())).await
}

/// Drive an already-created matrix.
///
/// `interrupt` resolves when the user asks to quit; its error is returned
/// once the matrix is blanked. Without it, only `stop` ends the idle loop.
/// The matrix is shut down even when drawing or idling fails.
pub async fn run_on<L>(
    mut matrix: Box<dyn MatrixDriver>,
    settings: &Settings,
    stop: StopFlag,
    interrupt: Option<L>,
) -> Result<()>
where
    L: Future<Output = io::Result<()>> + Send + 'static,
{
    let outcome = draw_and_wait(matrix.as_mut(), settings, stop, interrupt).await;

    let teardown = matrix.shutdown();
    if let Err(e) = &teardown {
        warn!("Matrix teardown failed: {e}");
    }
    outcome.and(teardown)
}

async fn draw_and_wait<L>(
    matrix: &mut dyn MatrixDriver,
    settings: &Settings,
    stop: StopFlag,
    interrupt: Option<L>,
) -> Result<()>
where
    L: Future<Output = io::Result<()>> + Send + 'static,
{
    let grid = PanelGrid::single();
    info!(rows = grid.rows, cols = grid.cols, "Panel grid");

    let labelled = label_panels(matrix.canvas(), &grid, settings.runtime.text_color);
    matrix.set_status(&format!(
        "grid rows: {} / grid cols: {} · {} panel(s) labelled · {QUIT_HINT}",
        grid.rows, grid.cols, labelled
    ));
    matrix.present()?;

    let handler = interrupt.map(|listener| watch_for_interrupt(stop.clone(), listener));
    info!("{QUIT_HINT}");

    let idled =
        idle_until_stopped(&stop, settings.runtime.poll_interval, || matrix.present()).await;

    let listened = match handler {
        Some(handler) => finish_interrupt_handler(handler).await,
        None => Ok(()),
    };
    let ticks = idled?;
    listened?;
    info!(ticks, "Stopping");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Ready;
    use std::time::Duration;

    use crate::canvas::{Canvas, Color, FrameBuffer};
    use crate::config::{Backend, MatrixOptions, RuntimeOptions};
    use crate::errors::DisplayError;
    use std::sync::{Arc, Mutex};

    /// Records what the app did to it, for inspection after shutdown
    #[derive(Default)]
    struct Log {
        presents: usize,
        lit_at_first_present: usize,
        status: String,
        lit_at_shutdown: Option<usize>,
    }

    struct FakeMatrix {
        frame: FrameBuffer,
        log: Arc<Mutex<Log>>,
        fail_present_after: Option<usize>,
    }

    impl MatrixDriver for FakeMatrix {
        fn canvas(&mut self) -> &mut FrameBuffer {
            &mut self.frame
        }

        fn present(&mut self) -> Result<()> {
            let mut log = self.log.lock().expect("log lock");
            if self.fail_present_after.is_some_and(|n| log.presents >= n) {
                return Err(DisplayError::MatrixInit("panel gone".to_string()));
            }
            if log.presents == 0 {
                log.lit_at_first_present = self.frame.lit_pixels();
            }
            log.presents += 1;
            Ok(())
        }

        fn set_status(&mut self, status: &str) {
            self.log.lock().expect("log lock").status = status.to_string();
        }

        fn shutdown(mut self: Box<Self>) -> Result<()> {
            self.frame.clear();
            self.log.lock().expect("log lock").lit_at_shutdown = Some(self.frame.lit_pixels());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "fake"
        }
    }

    fn settings() -> Settings {
        Settings {
            matrix: MatrixOptions::default(),
            runtime: RuntimeOptions {
                backend: Backend::Headless,
                text_color: Color::GREEN,
                poll_interval: Duration::from_millis(2),
            },
        }
    }

    /// No interrupt source: only the stop flag ends the run
    const NO_INTERRUPT: Option<Ready<io::Result<()>>> = None;

    fn fake(fail_present_after: Option<usize>) -> (Box<dyn MatrixDriver>, Arc<Mutex<Log>>) {
        let log = Arc::new(Mutex::new(Log::default()));
        let matrix = FakeMatrix {
            frame: FrameBuffer::new(32, 32),
            log: Arc::clone(&log),
            fail_present_after,
        };
        (Box::new(matrix), log)
    }

    #[tokio::test]
    async fn test_labels_then_clears_on_stop() {
        let (matrix, log) = fake(None);
        let stop = StopFlag::new();
        let writer = stop.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            writer.stop();
        });

        run_on(matrix, &settings(), stop, NO_INTERRUPT).await.expect("run");

        let log = log.lock().expect("log lock");
        assert!(log.presents >= 1);
        assert!(log.lit_at_first_present > 0);
        assert!(log.status.contains("grid rows: 1 / grid cols: 1"));
        assert!(log.status.contains(QUIT_HINT));
        assert_eq!(log.lit_at_shutdown, Some(0));
    }

    #[tokio::test]
    async fn test_shutdown_runs_after_failure() {
        let (matrix, log) = fake(Some(1));
        let result = run_on(matrix, &settings(), StopFlag::new(), NO_INTERRUPT).await;

        assert!(matches!(result, Err(DisplayError::MatrixInit(_))));
        assert_eq!(log.lock().expect("log lock").lit_at_shutdown, Some(0));
    }

    #[tokio::test]
    async fn test_headless_end_to_end() {
        let settings = settings();
        let matrix = create_matrix(&settings.matrix, Backend::Headless).expect("headless");
        let stop = StopFlag::new();
        stop.stop();
        run_on(matrix, &settings, stop, NO_INTERRUPT).await.expect("run");
    }

    #[tokio::test]
    async fn test_listener_failure_is_reported_after_blanking() {
        let (matrix, log) = fake(None);
        let listener = std::future::ready(Err::<(), _>(io::Error::other("signals unavailable")));

        let result = run_on(matrix, &settings(), StopFlag::new(), Some(listener)).await;

        assert!(
            matches!(&result, Err(DisplayError::Signal(m)) if m.contains("signals unavailable")),
            "unexpected outcome: {result:?}"
        );
        assert_eq!(log.lock().expect("log lock").lit_at_shutdown, Some(0));
    }

    #[tokio::test]
    async fn test_interrupt_ends_run_cleanly() {
        let (matrix, log) = fake(None);
        let listener = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<(), io::Error>(())
        };

        run_on(matrix, &settings(), StopFlag::new(), Some(listener))
            .await
            .expect("run");

        assert_eq!(log.lock().expect("log lock").lit_at_shutdown, Some(0));
    }
}
