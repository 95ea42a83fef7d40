//! Fixed-size worker pool over a blocking task queue
//!
//! Each worker loops "pop-or-block, execute, repeat" until the queue reports
//! end-of-stream. Tasks run under `catch_unwind` so one panicking task
//! cannot permanently shrink pool capacity; panics are counted and logged.
//!
//! Dropping the pool stops the queue in draining mode and joins every
//! worker: already-queued tasks run to completion first, and no worker
//! outlives the pool. [`force_stop`](ThreadPool::force_stop) abandons queued
//! tasks instead.

use crate::error::{PoolError, RejectedTask};
use crate::sync::queue::{BlockingQueue, StopMode};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info};

/// A unit of work for the pool
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Statistics collected across all workers
#[derive(Debug, Default)]
pub struct PoolStats {
    /// Tasks executed to completion
    pub tasks_executed: AtomicU64,

    /// Tasks that panicked (worker survived)
    pub tasks_panicked: AtomicU64,
}

impl PoolStats {
    fn record_executed(&self) {
        self.tasks_executed.fetch_add(1, Ordering::Relaxed);
    }

    fn record_panicked(&self) {
        self.tasks_panicked.fetch_add(1, Ordering::Relaxed);
    }

    /// Tasks executed to completion
    pub fn executed(&self) -> u64 {
        self.tasks_executed.load(Ordering::Relaxed)
    }

    /// Tasks that panicked
    pub fn panicked(&self) -> u64 {
        self.tasks_panicked.load(Ordering::Relaxed)
    }
}

/// Fixed set of worker threads sharing one blocking task queue
pub struct ThreadPool {
    queue: Arc<BlockingQueue<Task>>,
    workers: Vec<JoinHandle<()>>,
    worker_count: usize,
    stats: Arc<PoolStats>,
}

impl ThreadPool {
    /// Spawn a pool with `worker_count` workers.
    ///
    /// Workers start immediately and block on the shared queue until work
    /// arrives or the queue is stopped.
    pub fn new(worker_count: usize) -> Result<Self, PoolError> {
        let queue = Arc::new(BlockingQueue::new());
        let stats = Arc::new(PoolStats::default());
        let mut workers = Vec::with_capacity(worker_count);

        for id in 0..worker_count {
            let queue = Arc::clone(&queue);
            let stats = Arc::clone(&stats);

            let handle = thread::Builder::new()
                .name(format!("walker-{}", id))
                .spawn(move || worker_loop(id, &queue, &stats))
                .map_err(|e| PoolError::SpawnFailed {
                    id,
                    reason: e.to_string(),
                })?;

            workers.push(handle);
        }

        info!(workers = worker_count, "Worker pool started");

        Ok(Self {
            queue,
            workers,
            worker_count,
            stats,
        })
    }

    /// Spawn a pool sized by [`default_workers`](crate::config::default_workers)
    pub fn with_default_size() -> Result<Self, PoolError> {
        Self::new(crate::config::default_workers())
    }

    /// Enqueue a task for execution by some worker.
    ///
    /// Fails with [`RejectedTask`] once the pool is shutting down; the task
    /// is dropped in that case, never executed.
    pub fn push<F>(&self, task: F) -> Result<(), RejectedTask>
    where
        F: FnOnce() + Send + 'static,
    {
        self.queue.push(Box::new(task)).map_err(|_| RejectedTask)
    }

    /// Number of worker threads in the pool
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Pool-wide execution statistics
    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }

    /// Abandon queued tasks and release all workers as soon as their
    /// current task finishes. In-flight tasks are not interrupted.
    pub fn force_stop(&self) {
        self.queue.stop(StopMode::Force);
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        // Draining stop: queued tasks still run unless force_stop came first
        self.queue.stop(StopMode::Drain);
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
        debug!(
            executed = self.stats.executed(),
            panicked = self.stats.panicked(),
            "Worker pool shut down"
        );
    }
}

/// Main worker loop: `None` from the queue means the stream has ended
fn worker_loop(id: usize, queue: &BlockingQueue<Task>, stats: &PoolStats) {
    debug!(worker = id, "Worker starting");

    while let Some(task) = queue.pop() {
        match panic::catch_unwind(AssertUnwindSafe(task)) {
            Ok(()) => stats.record_executed(),
            Err(_) => {
                stats.record_panicked();
                error!(worker = id, "Task panicked; worker continues");
            }
        }
    }

    debug!(worker = id, "Worker shutting down");
}
