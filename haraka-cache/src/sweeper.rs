//! Periodic background sweep of expired entries.
//!
//! `get` only removes expired entries it happens to touch; the sweeper is
//! what keeps entries that are never re-read from accumulating. The sweep
//! is owned by whoever spawns it: it starts explicitly and stops
//! explicitly, so tests and shutdown paths stay in control.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::ResponseCache;

/// Handle to a running background sweeper.
///
/// The sweep task runs until [`SweeperHandle::stop`] is called. Dropping
/// the handle does not stop the task; shutdown paths must call `stop`.
pub struct SweeperHandle {
    handle: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stops the sweeper.
    pub fn stop(self) {
        self.handle.abort();
    }

    /// Returns true once the sweep task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns a background task that sweeps `cache` every `interval`.
///
/// The first tick fires immediately; subsequent ticks follow `interval`.
/// Must be called from within a tokio runtime.
pub fn spawn_sweeper(cache: Arc<ResponseCache>, interval: Duration) -> SweeperHandle {
    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);

        loop {
            ticker.tick().await;

            let removed = cache.cleanup();
            if removed > 0 {
                debug!(
                    removed,
                    interval_ms = interval.as_millis() as u64,
                    "sweep removed expired entries"
                );
            }
        }
    });

    SweeperHandle { handle }
}

impl ResponseCache {
    /// Spawns a sweeper for this cache using the configured sweep interval.
    pub fn start_sweeper(self: &Arc<Self>) -> SweeperHandle {
        let interval = Duration::from_millis(self.config().sweep_interval_ms);
        spawn_sweeper(Arc::clone(self), interval)
    }
}
