//! Error types for graph-walker
//!
//! This module defines the error hierarchy that covers:
//! - Configuration and CLI errors
//! - Graph loading errors
//! - Worker pool errors
//!
//! Design philosophy:
//! - Use thiserror for structured error types in library code
//! - Rejected operations (push to a stopped queue, task on a stopping pool)
//!   are reported as status results the caller must check, never panics
//! - Out-of-range graph inputs are silent no-ops at the boundary, not errors

use std::path::PathBuf;
use thiserror::Error;

/// Convenience result type for graph-walker operations
pub type Result<T> = std::result::Result<T, WalkerError>;

/// Top-level error type for the graph-walker application
#[derive(Error, Debug)]
pub enum WalkerError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Graph loading errors
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Worker pool errors
    #[error("Pool error: {0}")]
    Pool(#[from] PoolError),

    /// I/O errors (edge-list file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Worker count outside the accepted range
    #[error("Invalid worker count {requested} (must be 1..={max})")]
    InvalidWorkerCount { requested: usize, max: usize },
}

/// Errors produced while loading a graph from an edge list
#[derive(Error, Debug)]
pub enum GraphError {
    /// Edge-list file did not start with a vertex count
    #[error("Edge list '{path}' is missing a vertex count header")]
    MissingVertexCount { path: PathBuf },

    /// A line of the edge list could not be parsed
    #[error("Failed to parse edge list line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Worker pool errors
#[derive(Error, Debug)]
pub enum PoolError {
    /// Failed to spawn a worker thread
    #[error("Failed to spawn worker {id}: {reason}")]
    SpawnFailed { id: usize, reason: String },
}

/// A task was rejected because the pool's queue is no longer accepting work.
///
/// Returned by [`ThreadPool::push`](crate::sync::ThreadPool::push) instead of
/// silently discarding the task; callers decide whether to give up or run
/// the work inline.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Task rejected: worker pool is shutting down")]
pub struct RejectedTask;
