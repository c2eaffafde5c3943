//! Cancellable rotation timer for the premium carousel.
//!
//! The carousel advances one position every tick and pauses while the
//! viewer hovers. Pausing fully tears down the interval task and
//! resuming establishes exactly one new task, so rapid pause/resume
//! toggling can never stack intervals or double-apply a tick.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Time between carousel advances.
pub const TICK_INTERVAL: Duration = Duration::from_secs(7);

/// Drives a monotonically increasing tick counter on a fixed interval.
///
/// The current window is derived from the tick with
/// [`rotation_window`](super::rotation_window); the timer itself knows
/// nothing about listings.
pub struct RotationTimer {
    interval: Duration,
    tick: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl RotationTimer {
    /// Creates a stopped timer with the standard 7 second interval.
    pub fn new() -> Self {
        Self::with_interval(TICK_INTERVAL)
    }

    /// Creates a stopped timer with a custom interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            tick: Arc::new(AtomicU64::new(0)),
            handle: None,
        }
    }

    /// Starts ticking. Any previously running interval is torn down
    /// first, so calling `start` repeatedly leaves exactly one task.
    pub fn start(&mut self) {
        self.pause();

        let tick = Arc::clone(&self.tick);
        let interval = self.interval;
        self.handle = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                tick.fetch_add(1, Ordering::SeqCst);
            }
        }));
    }

    /// Stops ticking. The tick counter keeps its value so a resume
    /// continues from the same position.
    pub fn pause(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Resumes ticking after a pause. No-op while already running.
    pub fn resume(&mut self) {
        if !self.is_running() {
            self.start();
        }
    }

    /// Whether an interval task is currently live.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// The number of ticks applied so far.
    pub fn current_tick(&self) -> u64 {
        self.tick.load(Ordering::SeqCst)
    }

    /// Manually advances one position (the carousel's "next" control).
    pub fn advance(&self) {
        self.tick.fetch_add(1, Ordering::SeqCst);
    }

    /// Manually steps back one position, saturating at zero.
    pub fn rewind(&self) {
        let _ = self
            .tick
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |t| t.checked_sub(1));
    }
}

impl Default for RotationTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.pause();
    }
}
