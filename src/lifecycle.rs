//! Ctrl-C handling and the idle loop
//!
//! The interrupt task is the only writer of the [`StopFlag`]; the idle loop
//! is its only reader. The task's own result carries listener failures back
//! to the caller.

use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::errors::{DisplayError, Result};

/// Shared "stop requested" flag, false until an interrupt arrives
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the idle loop to finish
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether a stop has been requested
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Spawn a task that sets `flag` once `listener` resolves, normally
/// [`tokio::signal::ctrl_c`].
///
/// If the listener fails, the flag is still set so the idle loop ends, and
/// the task yields [`DisplayError::Signal`] for the caller to report.
pub fn watch_for_interrupt<L>(flag: StopFlag, listener: L) -> JoinHandle<Result<()>>
where
    L: Future<Output = io::Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        let outcome = match listener.await {
            Ok(()) => {
                info!("Interrupt received, stopping");
                Ok(())
            }
            Err(e) => {
                error!("Failed to listen for Ctrl-C: {e}");
                Err(DisplayError::Signal(e.to_string()))
            }
        };
        flag.stop();
        outcome
    })
}

/// Stop the interrupt task and return what it reported.
///
/// A task still waiting for Ctrl-C is cancelled and counts as success.
pub async fn finish_interrupt_handler(handler: JoinHandle<Result<()>>) -> Result<()> {
    handler.abort();
    match handler.await {
        Ok(outcome) => outcome,
        Err(e) if e.is_cancelled() => Ok(()),
        Err(e) => Err(DisplayError::Signal(e.to_string())),
    }
}

/// Sleep in `interval` steps until `flag` is set, calling `on_tick` after
/// each wake-up that did not observe a stop.
///
/// Returns the number of ticks.
pub async fn idle_until_stopped<F>(
    flag: &StopFlag,
    interval: Duration,
    mut on_tick: F,
) -> Result<u64>
where
    F: FnMut() -> Result<()>,
{
    let mut ticks = 0;
    while !flag.is_stopped() {
        tokio::time::sleep(interval).await;
        if flag.is_stopped() {
            break;
        }
        on_tick()?;
        ticks += 1;
    }
    debug!(ticks, "Idle loop finished");
    Ok(ticks)
}
