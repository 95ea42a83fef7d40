//! Configuration types for graph-walker
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation
//! - Worker-count resolution (env override, hardware concurrency fallback)

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Maximum reasonable worker count
pub const MAX_WORKERS: usize = 512;

/// Environment variable overriding the default worker count.
///
/// Read once at first use; invalid or non-positive values fall back to the
/// hardware concurrency hint.
pub const WORKERS_ENV: &str = "GRAPH_WALKER_THREADS";

static DEFAULT_WORKERS: LazyLock<usize> = LazyLock::new(|| {
    if let Ok(raw) = std::env::var(WORKERS_ENV) {
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => {
                tracing::info!(workers = n, source = WORKERS_ENV, "Using worker count from environment");
                return n;
            }
            _ => {
                tracing::warn!(value = %raw, "Ignoring invalid {WORKERS_ENV}");
            }
        }
    }
    num_cpus::get()
});

/// Default number of worker threads: `GRAPH_WALKER_THREADS` if set and
/// positive, otherwise the number of logical CPUs.
pub fn default_workers() -> usize {
    *DEFAULT_WORKERS
}

/// Parallel BFS runner over edge-list graphs
#[derive(Parser, Debug, Clone)]
#[command(
    name = "graph-walker",
    version,
    about = "Level-synchronous parallel BFS over an adjacency-list graph",
    after_help = "EXAMPLES:\n    \
        graph-walker edges.txt\n    \
        graph-walker edges.txt -s 42 -w 8\n    \
        graph-walker edges.txt --sequential   # reference BFS, no pool"
)]
pub struct CliArgs {
    /// Edge-list file (first line: vertex count; then one 'src dest' pair per line)
    #[arg(value_name = "EDGE_LIST")]
    pub input: PathBuf,

    /// Start vertex for the traversal
    #[arg(short = 's', long, default_value = "0", value_name = "VERTEX")]
    pub start: usize,

    /// Number of worker threads
    #[arg(
        short = 'w',
        long,
        default_value_t = default_workers(),
        value_name = "NUM"
    )]
    pub workers: usize,

    /// Run the sequential reference BFS instead of the parallel one
    #[arg(long)]
    pub sequential: bool,

    /// Verbose output (per-level trace of the traversal)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Edge-list input path
    pub input: PathBuf,

    /// Start vertex
    pub start: usize,

    /// Worker thread count (validated positive, bounded)
    pub worker_count: usize,

    /// Use the sequential reference BFS
    pub sequential: bool,
}

impl WalkConfig {
    /// Validate CLI arguments and build a runtime configuration
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        if args.workers == 0 || args.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount {
                requested: args.workers,
                max: MAX_WORKERS,
            });
        }

        Ok(Self {
            input: args.input,
            start: args.start,
            worker_count: args.workers,
            sequential: args.sequential,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(workers: usize) -> CliArgs {
        CliArgs {
            input: PathBuf::from("edges.txt"),
            start: 0,
            workers,
            sequential: false,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_worker_count() {
        let config = WalkConfig::from_args(args(4)).unwrap();
        assert_eq!(config.worker_count, 4);
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(matches!(
            WalkConfig::from_args(args(0)),
            Err(ConfigError::InvalidWorkerCount { requested: 0, .. })
        ));
    }

    #[test]
    fn test_excessive_workers_rejected() {
        assert!(WalkConfig::from_args(args(MAX_WORKERS + 1)).is_err());
    }

    #[test]
    fn test_default_workers_positive() {
        assert!(default_workers() > 0);
    }
}
