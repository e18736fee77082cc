//! Cooperative cancellation for a running simulation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop flag.  Clone it, hand the clone to another thread or to an
/// observer, and call [`stop`](Self::stop) to end the run.
///
/// The flag is only checked between ticks, so a tick in progress always
/// completes.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the run to end before the next tick.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
