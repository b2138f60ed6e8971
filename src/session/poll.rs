//! Background price polling.
//!
//! Mirrors the mounted-view lifecycle: the poll starts with an immediate
//! fetch, ticks on a fixed period, and stops when the handle is dropped.
//! Each tick spawns its own fetch task, so there is no overlap prevention:
//! if a request is still outstanding when the next tick fires, both run and
//! the last response to commit wins (whole-table replacement). In-flight
//! requests are not aborted when the poll stops.

use super::WalletSession;
use tokio::task::JoinHandle;

/// Handle for the background price poll. Dropping it stops the poll.
pub struct PollHandle {
    handle: JoinHandle<()>,
}

impl PollHandle {
    /// Stop the poll explicitly.
    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl WalletSession {
    /// Start the recurring price poll.
    ///
    /// The first fetch fires immediately, then every configured period.
    pub fn spawn_price_poll(&self) -> PollHandle {
        let session = self.clone();
        let period = self.poll_interval;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let session = session.clone();
                tokio::spawn(async move {
                    session.refresh_prices().await;
                });
            }
        });

        PollHandle { handle }
    }
}
