//! graph-walker - Level-Synchronous Parallel BFS
//!
//! A small concurrency toolkit and a demonstration consumer: breadth-first
//! search over an adjacency-list graph, parallelized level by level across a
//! fixed pool of worker threads.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        ParallelBfs                              │
//! │   per level: chunk frontier → dispatch → wait → swap            │
//! │  ┌──────────────┐   ┌──────────────────┐   ┌────────────────┐   │
//! │  │  WaitGroup   │   │ Guarded<Vec<_>>  │   │ visited marks  │   │
//! │  │ (one/level)  │   │ (next frontier)  │   │ (CachePadded   │   │
//! │  └──────────────┘   └──────────────────┘   │  AtomicBool)   │   │
//! │                                            └────────────────┘   │
//! └─────────────────────────────┬───────────────────────────────────┘
//!                               │ one task per chunk
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        ThreadPool                               │
//! │  ┌─────────┐  ┌─────────┐  ┌─────────┐         ┌─────────┐      │
//! │  │Worker 1 │  │Worker 2 │  │Worker 3 │  ...    │Worker N │      │
//! │  └────┬────┘  └────┬────┘  └────┬────┘         └────┬────┘      │
//! │       └────────────┴──────┬─────┴────────────────────┘          │
//! │                           ▼                                     │
//! │            ┌──────────────────────────┐                         │
//! │            │   BlockingQueue<Task>    │                         │
//! │            │  Open/Draining/Forced    │                         │
//! │            └──────────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pool and its queue are long-lived and shared across traversals;
//! levels are strictly sequential, so every level-k+1 task observes all
//! level-k visited-mark claims.
//!
//! # Example
//!
//! ```
//! use graph_walker::{Graph, ParallelBfs, ThreadPool};
//! use std::sync::Arc;
//!
//! let mut graph = Graph::new(4);
//! graph.add_edge(0, 1);
//! graph.add_edge(0, 2);
//! graph.add_edge(1, 3);
//!
//! let pool = Arc::new(ThreadPool::new(4)?);
//! let bfs = ParallelBfs::new(Arc::new(graph), pool);
//! let result = bfs.run(0);
//!
//! assert_eq!(result.reached(), vec![0, 1, 2, 3]);
//! assert_eq!(result.level(3), Some(2));
//! # Ok::<(), graph_walker::PoolError>(())
//! ```

pub mod bfs;
pub mod config;
pub mod error;
pub mod graph;
pub mod sync;

pub use bfs::ParallelBfs;
pub use config::{CliArgs, WalkConfig};
pub use error::{PoolError, RejectedTask, Result, WalkerError};
pub use graph::{BfsResult, Graph};
pub use sync::{BlockingQueue, Guarded, StopMode, ThreadPool, WaitGroup};
