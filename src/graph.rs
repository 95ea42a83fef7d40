//! Adjacency-list graph and the sequential BFS baseline
//!
//! The graph is a vertex count plus one ordered, duplicate-free neighbor
//! list per vertex. Out-of-range endpoints and repeated edges are silently
//! ignored at the boundary, matching the permissive loader contract. The
//! graph is immutable during any traversal.

use crate::error::{GraphError, Result};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

/// Directed adjacency-list graph with `usize` vertex ids
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Outgoing neighbors of `vertex`, in insertion order
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// Add the directed edge `src -> dest`.
    ///
    /// Silently ignored if either endpoint is out of range; adding an
    /// existing edge is a no-op.
    pub fn add_edge(&mut self, src: usize, dest: usize) {
        if src >= self.adjacency.len() || dest >= self.adjacency.len() {
            return;
        }
        let neighbors = &mut self.adjacency[src];
        if !neighbors.contains(&dest) {
            neighbors.push(dest);
        }
    }

    /// Load a graph from an edge-list file.
    ///
    /// The first non-comment line is the vertex count; every following line
    /// is a `src dest` pair. Blank lines and lines starting with `#` are
    /// skipped. Out-of-range pairs parse fine and are dropped by
    /// [`add_edge`](Graph::add_edge).
    pub fn from_edge_list(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let mut graph: Option<Graph> = None;

        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match graph {
                None => {
                    let vertex_count =
                        line.parse::<usize>().map_err(|e| GraphError::Parse {
                            line: idx + 1,
                            reason: format!("invalid vertex count '{}': {}", line, e),
                        })?;
                    graph = Some(Graph::new(vertex_count));
                }
                Some(ref mut graph) => {
                    let mut fields = line.split_whitespace();
                    let (src, dest) = match (fields.next(), fields.next(), fields.next()) {
                        (Some(src), Some(dest), None) => (src, dest),
                        _ => {
                            return Err(GraphError::Parse {
                                line: idx + 1,
                                reason: format!("expected 'src dest', got '{}'", line),
                            }
                            .into())
                        }
                    };
                    let parse = |field: &str| {
                        field.parse::<usize>().map_err(|e| GraphError::Parse {
                            line: idx + 1,
                            reason: format!("invalid vertex id '{}': {}", field, e),
                        })
                    };
                    graph.add_edge(parse(src)?, parse(dest)?);
                }
            }
        }

        graph.ok_or_else(|| {
            GraphError::MissingVertexCount {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    /// Sequential reference BFS from `start_vertex`.
    ///
    /// An out-of-range start is a no-op and returns an empty result.
    pub fn bfs(&self, start_vertex: usize) -> BfsResult {
        let mut result = BfsResult::unreached(self.vertex_count());
        if start_vertex >= self.vertex_count() {
            return result;
        }

        let mut queue = VecDeque::new();
        result.levels[start_vertex] = Some(0);
        queue.push_back(start_vertex);

        while let Some(vertex) = queue.pop_front() {
            let next_level = result.levels[vertex].map(|l| l + 1);
            for &neighbor in self.neighbors(vertex) {
                if result.levels[neighbor].is_none() {
                    result.levels[neighbor] = next_level;
                    queue.push_back(neighbor);
                }
            }
        }

        result
    }
}

/// Outcome of a traversal: the level (distance from the start) at which
/// each vertex was first reached, `None` for unreached vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsResult {
    /// Per-vertex discovery level, indexed by vertex id
    pub levels: Vec<Option<u32>>,
}

impl BfsResult {
    /// Result with every vertex unreached
    pub(crate) fn unreached(vertex_count: usize) -> Self {
        Self {
            levels: vec![None; vertex_count],
        }
    }

    /// Whether `vertex` was reached
    pub fn is_reached(&self, vertex: usize) -> bool {
        self.levels.get(vertex).is_some_and(|l| l.is_some())
    }

    /// Level at which `vertex` was first reached
    pub fn level(&self, vertex: usize) -> Option<u32> {
        self.levels.get(vertex).copied().flatten()
    }

    /// Reached vertices in ascending id order
    pub fn reached(&self) -> Vec<usize> {
        self.levels
            .iter()
            .enumerate()
            .filter_map(|(v, l)| l.map(|_| v))
            .collect()
    }

    /// Number of reached vertices
    pub fn reached_count(&self) -> usize {
        self.levels.iter().filter(|l| l.is_some()).count()
    }

    /// Deepest level reached, `None` if nothing was reached
    pub fn depth(&self) -> Option<u32> {
        self.levels.iter().flatten().copied().max()
    }
}
