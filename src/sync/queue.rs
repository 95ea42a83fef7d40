//! Unbounded blocking FIFO queue with a tri-state shutdown lifecycle
//!
//! The queue is created open and can move exactly once to one of two
//! terminal states:
//!
//! - **Draining**: no new pushes; already-queued items still pop in FIFO
//!   order, then `pop` reports end-of-stream.
//! - **ForceStopped**: every blocked and future `pop` returns `None`
//!   immediately, queued items are abandoned.
//!
//! State and items live in one [`Guarded`] unit so a waiter always observes
//! the state transition and the wake-up together. `None` from [`pop`] is the
//! signal a worker loop uses to terminate cleanly.
//!
//! [`pop`]: BlockingQueue::pop

use crate::sync::guarded::Guarded;
use parking_lot::Condvar;
use std::collections::VecDeque;
use std::fmt;

/// Queue lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueState {
    /// Accepting pushes and pops
    Open,
    /// No new pushes; queued items still drain
    Draining,
    /// Abandon queued items; all pops return immediately
    ForceStopped,
}

/// How to stop a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopMode {
    /// Finish everything already queued, then signal end-of-stream
    #[default]
    Drain,
    /// Release all consumers immediately, abandoning queued items
    Force,
}

/// Error returned by [`BlockingQueue::push`] when the queue no longer
/// accepts work. Carries the rejected item back to the caller.
pub struct PushError<T>(pub T);

impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PushError(..)")
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pushing into a stopped queue")
    }
}

impl<T> std::error::Error for PushError<T> {}

struct Shared<T> {
    state: QueueState,
    items: VecDeque<T>,
}

/// Unbounded FIFO queue with blocking pop and tri-state shutdown
pub struct BlockingQueue<T> {
    shared: Guarded<Shared<T>>,
    waiter: Condvar,
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BlockingQueue<T> {
    /// Create an open, empty queue
    pub fn new() -> Self {
        Self {
            shared: Guarded::new(Shared {
                state: QueueState::Open,
                items: VecDeque::new(),
            }),
            waiter: Condvar::new(),
        }
    }

    /// Enqueue an item and wake one waiter.
    ///
    /// Fails once the queue has been stopped in either mode; the rejected
    /// item is handed back inside the error.
    pub fn push(&self, item: T) -> Result<(), PushError<T>> {
        let mut shared = self.shared.lock();
        if shared.state != QueueState::Open {
            return Err(PushError(item));
        }
        shared.items.push_back(item);
        self.waiter.notify_one();
        Ok(())
    }

    /// Move the queue to a terminal state and wake all waiters.
    ///
    /// Terminal states are one-way: once the queue has left `Open`, later
    /// calls (same mode or not) leave the state unchanged. Safe to call any
    /// number of times.
    pub fn stop(&self, mode: StopMode) {
        let mut shared = self.shared.lock();
        if shared.state == QueueState::Open {
            shared.state = match mode {
                StopMode::Drain => QueueState::Draining,
                StopMode::Force => QueueState::ForceStopped,
            };
        }
        self.waiter.notify_all();
    }

    /// Block until an item is available or the queue has been stopped.
    ///
    /// Returns `None` immediately when force-stopped, regardless of queued
    /// items. When draining, returns remaining items in FIFO order and then
    /// `None` forever. `None` means "stop looping" to a consumer.
    pub fn pop(&self) -> Option<T> {
        let mut shared = self.shared.lock();
        shared.wait_while(&self.waiter, |s| {
            s.state == QueueState::Open && s.items.is_empty()
        });

        if shared.state == QueueState::ForceStopped {
            return None;
        }

        shared.items.pop_front()
    }

    /// Number of items currently queued
    pub fn len(&self) -> usize {
        self.shared.lock().items.len()
    }

    /// Check whether the queue is currently empty
    pub fn is_empty(&self) -> bool {
        self.shared.lock().items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_fifo_order() {
        let queue = BlockingQueue::new();
        for i in 0..5 {
            queue.push(i).unwrap();
        }
        for i in 0..5 {
            assert_eq!(queue.pop(), Some(i));
        }
    }

    #[test]
    fn test_push_after_drain_rejected() {
        let queue = BlockingQueue::new();
        queue.push(1).unwrap();
        queue.stop(StopMode::Drain);

        let rejected = queue.push(2).unwrap_err();
        assert_eq!(rejected.0, 2);
    }

    #[test]
    fn test_drain_pops_remaining_then_none() {
        let queue = BlockingQueue::new();
        queue.push("a").unwrap();
        queue.push("b").unwrap();
        queue.stop(StopMode::Drain);

        assert_eq!(queue.pop(), Some("a"));
        assert_eq!(queue.pop(), Some("b"));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_force_stop_abandons_items() {
        let queue = BlockingQueue::new();
        queue.push(1).unwrap();
        queue.push(2).unwrap();
        queue.stop(StopMode::Force);

        assert_eq!(queue.pop(), None);
        assert_eq!(queue.len(), 2); // logically abandoned, never returned
    }

    #[test]
    fn test_stop_is_idempotent() {
        let queue = BlockingQueue::new();
        queue.push(7).unwrap();
        queue.stop(StopMode::Drain);
        queue.stop(StopMode::Drain);

        assert_eq!(queue.pop(), Some(7));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_terminal_state_is_one_way() {
        let queue = BlockingQueue::new();
        queue.push(7).unwrap();
        queue.stop(StopMode::Drain);
        // Force after drain must not discard the already-queued item
        queue.stop(StopMode::Force);

        assert_eq!(queue.pop(), Some(7));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_blocked_pop_wakes_on_push() {
        let queue = Arc::new(BlockingQueue::new());
        let consumer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.pop())
        };

        thread::sleep(Duration::from_millis(50));
        queue.push(42).unwrap();

        assert_eq!(consumer.join().unwrap(), Some(42));
    }

    #[test]
    fn test_blocked_pops_release_on_force_stop() {
        let queue = Arc::new(BlockingQueue::<i32>::new());
        let consumers: Vec<_> = (0..4)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || queue.pop())
            })
            .collect();

        thread::sleep(Duration::from_millis(50));
        queue.stop(StopMode::Force);

        for consumer in consumers {
            assert_eq!(consumer.join().unwrap(), None);
        }
    }
}
