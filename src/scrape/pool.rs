// src/scrape/pool.rs
//! Bounded task pool.
//!
//! Every submitted future gets its own task, but only `workers` of them run
//! their body at once (a semaphore permit is taken before the body starts).
//! Outcomes come back over a channel owned by the pool, so tasks never touch
//! shared state; the caller merges after `drain`.

use std::future::Future;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use tokio::sync::{Semaphore, mpsc};
use tokio_util::task::TaskTracker;
use tracing::error;

pub struct Pool<T> {
    submitter: Submitter<T>,
    results: mpsc::UnboundedReceiver<T>,
}

/// Handle for enqueueing work, including from inside a running task.
/// Must not be kept alive outside the pool's tasks across `drain`, or the
/// drain never sees the channel close.
pub struct Submitter<T> {
    permits: Arc<Semaphore>,
    tracker: TaskTracker,
    results: mpsc::UnboundedSender<T>,
    submitted: Arc<AtomicUsize>,
}

impl<T> Clone for Submitter<T> {
    fn clone(&self) -> Self {
        Self {
            permits: Arc::clone(&self.permits),
            tracker: self.tracker.clone(),
            results: self.results.clone(),
            submitted: Arc::clone(&self.submitted),
        }
    }
}

impl<T: Send + 'static> Submitter<T> {
    pub fn submit<F>(&self, task: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let permits = Arc::clone(&self.permits);
        let results = self.results.clone();
        self.submitted.fetch_add(1, Ordering::Relaxed);

        self.tracker.spawn(async move {
            // Only fails once the semaphore is closed, which we never do.
            let Ok(_permit) = permits.acquire_owned().await else { return };
            let outcome = task.await;
            let _ = results.send(outcome);
        });
    }
}

impl<T: Send + 'static> Pool<T> {
    pub fn new(workers: usize) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            submitter: Submitter {
                permits: Arc::new(Semaphore::new(workers.max(1))),
                tracker: TaskTracker::new(),
                results: tx,
                submitted: Arc::new(AtomicUsize::new(0)),
            },
            results: rx,
        }
    }

    pub fn submit<F>(&self, task: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        self.submitter.submit(task);
    }

    pub fn submitter(&self) -> Submitter<T> {
        self.submitter.clone()
    }

    /// Wait for every task, including ones submitted by running tasks.
    pub async fn drain(self) -> Vec<T> {
        self.drain_with(|_| {}).await
    }

    /// Like `drain`, calling `each` as outcomes arrive (completion order).
    pub async fn drain_with(self, mut each: impl FnMut(&T)) -> Vec<T> {
        let Pool { submitter, mut results } = self;
        let tracker = submitter.tracker.clone();
        let submitted = Arc::clone(&submitter.submitted);
        drop(submitter);
        tracker.close();

        // Closes once the last task (and with it the last sender) is gone.
        let mut out = Vec::new();
        while let Some(outcome) = results.recv().await {
            each(&outcome);
            out.push(outcome);
        }
        tracker.wait().await;

        let lost = submitted.load(Ordering::Relaxed).saturating_sub(out.len());
        if lost > 0 {
            error!(lost, "Tasks ended without an outcome (panicked)");
        }
        out
    }
}
