//! Level-synchronous parallel BFS
//!
//! The traversal is the only active orchestrator: per level it partitions
//! the current frontier into contiguous chunks (one per worker, rounded up),
//! submits one task per chunk to the shared [`ThreadPool`], and waits on a
//! per-level [`WaitGroup`] before reading the merged next frontier.
//!
//! Duplicate suppression is a single atomic claim per vertex: the task that
//! flips a visited mark from unclaimed to claimed owns the right to add that
//! vertex to the next frontier. Marks are cache-line padded so claims on
//! different vertices never contend on the same line.
//!
//! Relaxed ordering on the marks is sufficient: the wait-group handoff at
//! the end of each level gives every level-k+1 task a happens-before edge to
//! all level-k claims.

use crate::graph::{BfsResult, Graph};
use crate::sync::{Guarded, ThreadPool, WaitGroup};
use crossbeam_utils::CachePadded;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Per-vertex visited marks, one padded flag per vertex
type VisitedMarks = Vec<CachePadded<AtomicBool>>;

/// Parallel BFS runner bound to a graph and a shared worker pool.
///
/// The pool is passed in explicitly rather than reached through a process
/// global, so lifecycle and shutdown ordering stay in the caller's hands.
/// One pool serves any number of traversals, sequentially or from multiple
/// coordinator threads.
pub struct ParallelBfs {
    graph: Arc<Graph>,
    pool: Arc<ThreadPool>,
}

impl ParallelBfs {
    /// Bind a traversal runner to a graph and worker pool
    pub fn new(graph: Arc<Graph>, pool: Arc<ThreadPool>) -> Self {
        Self { graph, pool }
    }

    /// Run a breadth-first traversal from `start_vertex`.
    ///
    /// Returns the level at which each vertex was first reached. The
    /// reached set and per-vertex levels are deterministic for a given
    /// graph and start; only intra-level discovery order varies between
    /// runs. An out-of-range start is a no-op: no marks are set and no
    /// tasks are submitted.
    pub fn run(&self, start_vertex: usize) -> BfsResult {
        let vertex_count = self.graph.vertex_count();
        let mut result = BfsResult::unreached(vertex_count);
        if start_vertex >= vertex_count {
            debug!(start = start_vertex, vertices = vertex_count, "Start vertex out of range");
            return result;
        }

        let visited: Arc<VisitedMarks> = Arc::new(
            (0..vertex_count)
                .map(|_| CachePadded::new(AtomicBool::new(false)))
                .collect(),
        );
        visited[start_vertex].store(true, Ordering::Relaxed);

        let mut frontier = Arc::new(vec![start_vertex]);
        let mut level = 0u32;
        result.levels[start_vertex] = Some(0);

        while !frontier.is_empty() {
            let next = self.expand_level(&frontier, &visited, level);

            level += 1;
            for &vertex in &next {
                result.levels[vertex] = Some(level);
            }
            frontier = Arc::new(next);
        }

        info!(
            start = start_vertex,
            reached = result.reached_count(),
            depth = result.depth().unwrap_or(0),
            "Traversal complete"
        );

        result
    }

    /// Expand one frontier into the next: chunk, dispatch, rendezvous.
    fn expand_level(
        &self,
        frontier: &Arc<Vec<usize>>,
        visited: &Arc<VisitedMarks>,
        level: u32,
    ) -> Vec<usize> {
        let chunk_size = frontier.len().div_ceil(self.pool.worker_count().max(1));
        let chunk_count = frontier.len().div_ceil(chunk_size);

        debug!(
            level,
            frontier = frontier.len(),
            chunks = chunk_count,
            "Expanding level"
        );

        // Pre-armed with the chunk count; single-use, one per level
        let wait_group = Arc::new(WaitGroup::with_count(chunk_count));
        let next = Arc::new(Guarded::new(Vec::new()));

        for chunk_start in (0..frontier.len()).step_by(chunk_size) {
            let chunk_end = (chunk_start + chunk_size).min(frontier.len());

            let graph = Arc::clone(&self.graph);
            let frontier = Arc::clone(frontier);
            let visited = Arc::clone(visited);
            let next = Arc::clone(&next);
            let task_wait_group = Arc::clone(&wait_group);

            let submitted = self.pool.push(move || {
                expand_chunk(&graph, &frontier[chunk_start..chunk_end], &visited, &next);
                task_wait_group.done();
            });

            if submitted.is_err() {
                // Pool is shutting down; settle the rendezvous ourselves so
                // the wait below cannot hang. The traversal ends short.
                warn!(level, chunk_start, "Chunk rejected by stopping pool");
                wait_group.done();
            }
        }

        wait_group.wait();

        let next_frontier = std::mem::take(&mut *next.lock());
        next_frontier
    }
}

/// Process one contiguous chunk of the frontier: claim unvisited neighbors,
/// then merge the local finds into the shared next frontier in one locked
/// append.
fn expand_chunk(
    graph: &Graph,
    chunk: &[usize],
    visited: &VisitedMarks,
    next: &Guarded<Vec<usize>>,
) {
    let mut local_next = Vec::new();

    for &vertex in chunk {
        for &neighbor in graph.neighbors(vertex) {
            let claimed = visited[neighbor]
                .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok();
            if claimed {
                local_next.push(neighbor);
            }
        }
    }

    if !local_next.is_empty() {
        next.lock().extend_from_slice(&local_next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Arc<Graph> {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 3);
        Arc::new(graph)
    }

    fn pool(workers: usize) -> Arc<ThreadPool> {
        Arc::new(ThreadPool::new(workers).unwrap())
    }

    #[test]
    fn test_diamond_levels() {
        let bfs = ParallelBfs::new(diamond(), pool(2));
        let result = bfs.run(0);

        assert_eq!(result.level(0), Some(0));
        assert_eq!(result.level(1), Some(1));
        assert_eq!(result.level(2), Some(1));
        assert_eq!(result.level(3), Some(2));
    }

    #[test]
    fn test_out_of_range_start_submits_nothing() {
        let pool = pool(2);
        let bfs = ParallelBfs::new(Arc::new(Graph::new(10)), Arc::clone(&pool));

        let result = bfs.run(99);
        assert_eq!(result.reached_count(), 0);
        assert_eq!(pool.stats().executed(), 0);
    }

    #[test]
    fn test_isolated_start_terminates_at_level_zero() {
        let mut graph = Graph::new(5);
        graph.add_edge(1, 2);

        let bfs = ParallelBfs::new(Arc::new(graph), pool(2));
        let result = bfs.run(0);

        assert_eq!(result.reached(), vec![0]);
        assert_eq!(result.depth(), Some(0));
    }

    #[test]
    fn test_self_loops_and_cycles_visit_once() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 0);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 0);

        let bfs = ParallelBfs::new(Arc::new(graph), pool(4));
        let result = bfs.run(0);

        assert_eq!(result.reached(), vec![0, 1, 2]);
        assert_eq!(result.level(0), Some(0));
        assert_eq!(result.level(2), Some(2));
    }

    #[test]
    fn test_matches_sequential_reference() {
        // Deterministic sparse graph with cross links and unreachable tail
        let mut graph = Graph::new(200);
        for v in 0..150 {
            graph.add_edge(v, (v * 7 + 3) % 150);
            graph.add_edge(v, (v + 1) % 150);
        }

        let graph = Arc::new(graph);
        let expected = graph.bfs(0);

        for workers in [1, 2, 8] {
            let bfs = ParallelBfs::new(Arc::clone(&graph), pool(workers));
            let result = bfs.run(0);
            assert_eq!(result, expected, "workers = {}", workers);
        }
    }

    #[test]
    fn test_shared_pool_across_traversals() {
        let pool = pool(2);
        let graph = diamond();

        let bfs = ParallelBfs::new(Arc::clone(&graph), Arc::clone(&pool));
        let first = bfs.run(0);
        let second = bfs.run(1);

        assert_eq!(first.reached(), vec![0, 1, 2, 3]);
        assert_eq!(second.reached(), vec![1, 3]);
    }
}
