//! graph-walker - Level-Synchronous Parallel BFS
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use graph_walker::config::{CliArgs, WalkConfig};
use graph_walker::{Graph, ParallelBfs, ThreadPool};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();

    setup_logging(args.verbose)?;

    let config = WalkConfig::from_args(args).context("Invalid configuration")?;

    let graph = Graph::from_edge_list(&config.input)
        .with_context(|| format!("Failed to load '{}'", config.input.display()))?;

    info!(
        vertices = graph.vertex_count(),
        start = config.start,
        workers = config.worker_count,
        "Graph loaded"
    );

    let started = Instant::now();
    let result = if config.sequential {
        graph.bfs(config.start)
    } else {
        run_parallel(&config, graph)?
    };
    let elapsed = started.elapsed();

    println!(
        "Reached {} vertices (depth {}) from vertex {} in {:.3}s",
        result.reached_count(),
        result.depth().map_or_else(|| "-".into(), |d| d.to_string()),
        config.start,
        elapsed.as_secs_f64()
    );

    Ok(())
}

fn run_parallel(config: &WalkConfig, graph: Graph) -> Result<graph_walker::BfsResult> {
    let pool = Arc::new(
        ThreadPool::new(config.worker_count).context("Failed to start worker pool")?,
    );

    // Interrupt abandons queued chunks; in-flight chunks finish first
    let pool_for_signal = Arc::clone(&pool);
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupt received, shutting down...");
        pool_for_signal.force_stop();
    })
    .context("Failed to set signal handler")?;

    let bfs = ParallelBfs::new(Arc::new(graph), pool);
    Ok(bfs.run(config.start))
}

/// Setup tracing subscriber with env filter
fn setup_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
