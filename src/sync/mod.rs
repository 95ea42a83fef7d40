//! Concurrency toolkit for the parallel walker
//!
//! Four small primitives that compose into the traversal engine:
//!
//! ```text
//!                  ┌─────────────────────────┐
//!                  │       ParallelBfs       │
//!                  │  - one WaitGroup/level  │
//!                  │  - one Guarded frontier │
//!                  └───────────┬─────────────┘
//!                              │ chunk tasks
//!                              ▼
//!                  ┌─────────────────────────┐
//!                  │       ThreadPool        │
//!                  │  N workers, one queue   │
//!                  └───────────┬─────────────┘
//!                              │ pop-or-block
//!                              ▼
//!                  ┌─────────────────────────┐
//!                  │   BlockingQueue<Task>   │
//!                  │  Open/Draining/Forced   │
//!                  └─────────────────────────┘
//! ```
//!
//! [`Guarded`] binds a value to its lock so unsynchronized access is
//! impossible; [`BlockingQueue`] adds a tri-state shutdown lifecycle on top
//! of it; [`ThreadPool`] owns the queue and a fixed set of workers;
//! [`WaitGroup`] is the counting rendezvous the traversal uses to close out
//! each level.

pub mod guarded;
pub mod pool;
pub mod queue;
pub mod wait_group;

pub use guarded::{Guard, Guarded};
pub use pool::{PoolStats, Task, ThreadPool};
pub use queue::{BlockingQueue, PushError, StopMode};
pub use wait_group::WaitGroup;
