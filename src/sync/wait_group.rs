//! Counting rendezvous for outstanding units of work
//!
//! A [`WaitGroup`] lets a coordinator block until N completions have been
//! reported. The traversal arms one per BFS level with the chunk count, has
//! every chunk task call [`done`] on completion, and [`wait`]s before
//! advancing to the next level.
//!
//! Single-use in spirit: re-arming one after it reaches zero races against
//! waiters observing the zero, so build a fresh one per round instead.
//!
//! [`done`]: WaitGroup::done
//! [`wait`]: WaitGroup::wait

use crate::sync::guarded::Guarded;
use parking_lot::Condvar;

#[derive(Debug, Default)]
struct Counts {
    /// Completions still outstanding
    count: usize,
    /// Threads currently blocked in `wait`
    waiters: usize,
}

/// Counting barrier releasing all waiters when its counter reaches zero
#[derive(Debug, Default)]
pub struct WaitGroup {
    counts: Guarded<Counts>,
    released: Condvar,
}

impl WaitGroup {
    /// Create a wait group with a zero counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wait group pre-armed with `count` expected completions
    pub fn with_count(count: usize) -> Self {
        Self {
            counts: Guarded::new(Counts { count, waiters: 0 }),
            released: Condvar::new(),
        }
    }

    /// Register `n` additional expected completions.
    ///
    /// The caller must ensure every `add` happens-before the matching `done`
    /// calls become possible; no internal ordering is enforced.
    pub fn add(&self, n: usize) {
        self.counts.lock().count += n;
    }

    /// Report one completion, waking all waiters when the counter hits zero.
    ///
    /// # Panics
    ///
    /// Panics if called more times than completions were registered; a
    /// negative counter is a caller contract violation, not a recoverable
    /// state.
    pub fn done(&self) {
        let mut counts = self.counts.lock();
        assert!(counts.count > 0, "WaitGroup::done called with a zero counter");
        counts.count -= 1;
        if counts.count == 0 && counts.waiters > 0 {
            self.released.notify_all();
        }
    }

    /// Block until the counter reaches zero.
    ///
    /// Returns immediately if the counter is already zero; concurrent
    /// waiters all release together.
    pub fn wait(&self) {
        let mut counts = self.counts.lock();
        counts.waiters += 1;
        counts.wait_while(&self.released, |c| c.count > 0);
        counts.waiters -= 1;
    }
}
