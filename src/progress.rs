// src/progress.rs
use tracing::info;

/// Lightweight progress reporting used by the scrape phases.
/// Frontends implement this to surface status to users.
pub trait Progress: Send {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One unit (shard or lobbyist id) completed.
    fn item_done(&mut self, _key: &str) {}

    /// One unit failed; `reason` is already human readable.
    fn item_failed(&mut self, _key: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards progress to the tracing subscriber.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.failed = 0;
    }

    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }

    fn item_done(&mut self, _key: &str) {
        self.done += 1;
    }

    // The failure itself is logged where it happens; only count it here.
    fn item_failed(&mut self, _key: &str, _reason: &str) {
        self.failed += 1;
    }

    fn finish(&mut self) {
        info!(
            total = self.total,
            done = self.done,
            failed = self.failed,
            "Phase finished"
        );
    }
}
