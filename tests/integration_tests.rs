//! Integration tests for graph-walker
//!
//! These exercise the full stack: edge-list loading, the shared worker
//! pool, and parallel traversals checked against the sequential reference.

use graph_walker::{Graph, ParallelBfs, ThreadPool};
use std::io::Write;
use std::sync::Arc;

fn diamond() -> Graph {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1);
    graph.add_edge(0, 2);
    graph.add_edge(1, 3);
    graph
}

#[test]
fn test_diamond_scenario_one_and_four_workers() {
    let graph = Arc::new(diamond());

    for workers in [1, 4] {
        let pool = Arc::new(ThreadPool::new(workers).unwrap());
        let bfs = ParallelBfs::new(Arc::clone(&graph), pool);
        let result = bfs.run(0);

        assert_eq!(result.reached(), vec![0, 1, 2, 3], "workers = {}", workers);
        assert_eq!(result.level(0), Some(0));
        assert_eq!(result.level(1), Some(1));
        assert_eq!(result.level(2), Some(1));
        assert_eq!(result.level(3), Some(2));
    }
}

#[test]
fn test_parallel_matches_sequential_across_worker_counts() {
    // Layered graph with shortcuts, a cycle back to the root, and an
    // unreachable component at the top of the id range
    let mut graph = Graph::new(500);
    for v in 0..400 {
        graph.add_edge(v, (v + 1) % 400);
        graph.add_edge(v, (v * 13 + 7) % 400);
        if v % 17 == 0 {
            graph.add_edge(v, 0);
        }
    }
    for v in 400..499 {
        graph.add_edge(v, v + 1);
    }

    let graph = Arc::new(graph);
    let expected = graph.bfs(3);

    for workers in [1, 2, 4, 16] {
        let pool = Arc::new(ThreadPool::new(workers).unwrap());
        let bfs = ParallelBfs::new(Arc::clone(&graph), pool);
        let result = bfs.run(3);

        assert_eq!(
            result.reached(),
            expected.reached(),
            "reached set diverged at workers = {}",
            workers
        );
        assert_eq!(result, expected, "levels diverged at workers = {}", workers);
    }
}

#[test]
fn test_out_of_range_start_is_noop() {
    let pool = Arc::new(ThreadPool::new(4).unwrap());
    let bfs = ParallelBfs::new(Arc::new(Graph::new(10)), Arc::clone(&pool));

    let result = bfs.run(99);

    assert_eq!(result.reached_count(), 0);
    assert_eq!(pool.stats().executed(), 0, "no task should be submitted");
}

#[test]
fn test_self_loop_edge_dedup() {
    let mut graph = Graph::new(6);
    graph.add_edge(5, 5);
    graph.add_edge(5, 5);

    assert_eq!(graph.neighbors(5), &[5]);
}

#[test]
fn test_end_to_end_from_edge_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# diamond plus an unreachable vertex").unwrap();
    writeln!(file, "5").unwrap();
    writeln!(file, "0 1").unwrap();
    writeln!(file, "0 2").unwrap();
    writeln!(file, "1 3").unwrap();
    writeln!(file, "9 0").unwrap(); // out of range, silently dropped

    let graph = Arc::new(Graph::from_edge_list(file.path()).unwrap());
    let pool = Arc::new(ThreadPool::new(2).unwrap());
    let result = ParallelBfs::new(graph, pool).run(0);

    assert_eq!(result.reached(), vec![0, 1, 2, 3]);
    assert!(!result.is_reached(4));
}

#[test]
fn test_one_pool_many_traversals() {
    let pool = Arc::new(ThreadPool::new(4).unwrap());
    let graph = Arc::new(diamond());
    let bfs = ParallelBfs::new(Arc::clone(&graph), Arc::clone(&pool));

    for _ in 0..20 {
        assert_eq!(bfs.run(0).reached_count(), 4);
        assert_eq!(bfs.run(2).reached(), vec![2]);
    }
}

#[test]
fn test_traversal_after_force_stop_reaches_only_start() {
    let pool = Arc::new(ThreadPool::new(2).unwrap());
    pool.force_stop();

    let bfs = ParallelBfs::new(Arc::new(diamond()), pool);
    let result = bfs.run(0);

    // Chunk tasks are rejected by the stopped pool, so the traversal ends
    // after the start vertex without hanging.
    assert_eq!(result.reached(), vec![0]);
}
