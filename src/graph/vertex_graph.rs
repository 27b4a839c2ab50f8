//! A directed adjacency-set graph over a dense vertex id space.
//!
//! Vertices are plain `usize` ids used directly as indices into the adjacency
//! table, so there are no per-vertex allocations beyond the neighbor sets. Each
//! neighbor set preserves insertion order, which makes every traversal
//! deterministic: neighbors are always considered in the order their edges were
//! added.
//!
//! Vertices can be added but never removed. Edges can be added and removed freely.
//! Self-loops are rejected.

use std::collections::VecDeque;

use indexmap::IndexSet;
use serde::Serialize;

use super::access::visited::VisitedSet;
use super::error::{GraphError, GraphResult};
use crate::invariant::{invariant_assert_msg, invariant_assert_with};

/// Number of vertices created by [`VertexGraph::new`].
pub const DEFAULT_VERTEX_COUNT: usize = 100;

/// A directed graph over the vertex ids `[0, N)`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Grows the id space when needed |
/// | `add_edge` | \(O(1)\) expected | Hash-set insert |
/// | `remove_edge` | \(O(\text{out-degree})\) | Order-preserving removal |
/// | `iterative_dfs` / `iterative_bfs` | \(O(n + m)\) | |
/// | `shortest_path` | \(O(n + m)\) | Unweighted, BFS based |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexGraph {
    adjacency: Vec<Option<IndexSet<usize>>>,
    vertex_count: usize,
    edge_count: usize,
}

impl VertexGraph {
    /// Creates a graph with [`DEFAULT_VERTEX_COUNT`] vertices and no edges.
    pub fn new() -> Self {
        Self::with_vertices(DEFAULT_VERTEX_COUNT)
    }

    /// Creates a graph with vertices `0..vertex_count` and no edges.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            adjacency: (0..vertex_count).map(|_| Some(IndexSet::new())).collect(),
            vertex_count,
            edge_count: 0,
        }
    }

    /// Adds vertex `id`.
    ///
    /// Returns `false` if the vertex already exists. An id at or past the current
    /// bound grows the id space to `id + 1`; the ids skipped over stay absent until
    /// they are added themselves.
    pub fn add_vertex(&mut self, id: usize) -> bool {
        if self.has_vertex(id) {
            return false;
        }
        if id >= self.adjacency.len() {
            let Some(bound) = id.checked_add(1) else {
                debug_event!(vertex = id, "vertex id exhausts the id space");
                return false;
            };
            self.adjacency.resize_with(bound, || None);
        }
        self.adjacency[id] = Some(IndexSet::new());
        self.vertex_count += 1;
        trace_event!(vertex = id, bound = self.adjacency.len(), "vertex added");
        true
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// Returns `false` for a self-loop or when either endpoint is not a vertex.
    /// Adding an edge that already exists returns `true` without counting it twice.
    pub fn add_edge(&mut self, from: usize, to: usize) -> bool {
        self.insert_edge(from, to, false)
    }

    /// Adds both `from -> to` and `to -> from`.
    ///
    /// Each direction is counted as its own edge. Rejection rules match
    /// [`VertexGraph::add_edge`].
    pub fn add_undirected_edge(&mut self, from: usize, to: usize) -> bool {
        self.insert_edge(from, to, true)
    }

    /// Removes the directed edge `from -> to`.
    ///
    /// The reverse edge is left untouched, even if both were added together by
    /// [`VertexGraph::add_undirected_edge`]. Returns `false` if the edge did not exist.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let removed = self
            .slot_mut(from)
            .is_some_and(|nbrs| nbrs.shift_remove(&to));
        if removed {
            self.edge_count -= 1;
            trace_event!(from, to, edges = self.edge_count, "edge removed");
            self.debug_check(from, "remove_edge");
        }
        removed
    }

    /// Returns the exclusive upper bound of the vertex id space.
    pub fn vertex_bound(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if `id` is a vertex of the graph.
    pub fn has_vertex(&self, id: usize) -> bool {
        self.slot(id).is_some()
    }

    /// Returns `true` if the directed edge `from -> to` exists.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.slot(from).is_some_and(|nbrs| nbrs.contains(&to))
    }

    /// Returns the out-neighbors of `vertex` in edge insertion order.
    ///
    /// Yields nothing if `vertex` is not part of the graph.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.slot(vertex).into_iter().flatten().copied()
    }

    /// Returns the out-degree of `vertex`, or zero if it is not part of the graph.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.slot(vertex).map_or(0, IndexSet::len)
    }

    /// Depth-first traversal from `start` using an explicit stack.
    ///
    /// A vertex may be pushed several times before it is first popped; only that
    /// first pop records it. Neighbors are pushed in insertion order, so the most
    /// recently added neighbor is explored first.
    ///
    /// # Errors
    /// Returns an error if `start` is not a vertex of the graph.
    pub fn iterative_dfs(&self, start: usize) -> GraphResult<Vec<usize>> {
        self.validate(start)?;

        let mut visited = VisitedSet::new(self.adjacency.len());
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(vertex) = stack.pop() {
            if !visited.try_visit(vertex) {
                continue;
            }
            order.push(vertex);
            stack.extend(self.neighbors(vertex).filter(|&n| !visited.is_visited(n)));
        }

        debug_event!(start, visited = order.len(), bound = visited.len(), "dfs complete");
        Ok(order)
    }

    /// Breadth-first traversal from `start`, returning vertices in level order.
    ///
    /// Vertices are marked visited when enqueued, so each is enqueued at most once.
    ///
    /// # Errors
    /// Returns an error if `start` is not a vertex of the graph.
    pub fn iterative_bfs(&self, start: usize) -> GraphResult<Vec<usize>> {
        self.validate(start)?;

        let mut visited = VisitedSet::new(self.adjacency.len());
        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        visited.try_visit(start);
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for neighbor in self.neighbors(vertex) {
                if visited.try_visit(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        debug_event!(start, visited = order.len(), "bfs complete");
        Ok(order)
    }

    /// Fewest-hop path from `source` to `target`, both ends included.
    ///
    /// Returns an empty path when `target` is unreachable. `source == target` also
    /// yields an empty path: the walk back from the target never reaches a vertex
    /// with a recorded predecessor.
    ///
    /// # Errors
    /// Returns an error if either endpoint is not a vertex of the graph.
    pub fn shortest_path(&self, source: usize, target: usize) -> GraphResult<Vec<usize>> {
        self.validate(source)?;
        self.validate(target)?;

        let mut visited = VisitedSet::new(self.adjacency.len());
        let mut prev: Vec<Option<usize>> = vec![None; self.adjacency.len()];
        let mut queue = VecDeque::new();
        visited.try_visit(source);
        queue.push_back(source);

        'search: while let Some(vertex) = queue.pop_front() {
            for neighbor in self.neighbors(vertex) {
                if visited.try_visit(neighbor) {
                    prev[neighbor] = Some(vertex);
                    if neighbor == target {
                        break 'search;
                    }
                    queue.push_back(neighbor);
                }
            }
        }

        let mut path = vec![target];
        let mut at = target;
        while let Some(p) = prev[at] {
            path.push(p);
            at = p;
        }
        path.reverse();

        if path.len() > 1 && path[0] == source {
            Ok(path)
        } else {
            debug_event!(source, target, explored = visited.count(), "no path");
            Ok(Vec::new())
        }
    }

    /// Computes basic graph statistics over the present vertices.
    #[allow(clippy::cast_precision_loss)]
    pub fn statistics(&self) -> GraphStatistics {
        let mut degrees: Vec<usize> = self
            .adjacency
            .iter()
            .flatten()
            .map(IndexSet::len)
            .collect();
        degrees.sort_unstable();

        let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => (0, 0),
        };
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };

        GraphStatistics {
            vertex_count: self.vertex_count,
            edge_count: self.edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree: if self.vertex_count == 0 {
                0.0
            } else {
                self.edge_count as f64 / self.vertex_count as f64
            },
        }
    }

    fn insert_edge(&mut self, from: usize, to: usize, undirected: bool) -> bool {
        if from == to || !self.has_vertex(from) || !self.has_vertex(to) {
            debug_event!(from, to, undirected, "edge rejected");
            return false;
        }

        self.link(from, to);
        self.debug_check(from, "add_edge");
        if undirected {
            self.link(to, from);
            self.debug_check(to, "add_edge");
        }
        true
    }

    fn link(&mut self, from: usize, to: usize) {
        invariant_assert_msg(from != to, "self-loop reached link");
        if let Some(nbrs) = self.slot_mut(from) {
            if nbrs.insert(to) {
                self.edge_count += 1;
                trace_event!(from, to, edges = self.edge_count, "edge added");
            }
        }
    }

    fn validate(&self, vertex: usize) -> GraphResult<()> {
        match self.adjacency.get(vertex) {
            Some(Some(_)) => Ok(()),
            Some(None) => {
                debug_event!(vertex, "unknown vertex");
                Err(GraphError::UnknownVertex { vertex })
            }
            None => {
                debug_event!(vertex, bound = self.adjacency.len(), "vertex out of bounds");
                Err(GraphError::VertexOutOfBounds {
                    vertex,
                    bound: self.adjacency.len(),
                })
            }
        }
    }

    #[inline]
    fn slot(&self, vertex: usize) -> Option<&IndexSet<usize>> {
        self.adjacency.get(vertex).and_then(Option::as_ref)
    }

    #[inline]
    fn slot_mut(&mut self, vertex: usize) -> Option<&mut IndexSet<usize>> {
        self.adjacency.get_mut(vertex).and_then(Option::as_mut)
    }

    fn debug_check(&self, vertex: usize, op: &str) {
        invariant_assert_with(
            || {
                self.neighbors(vertex)
                    .all(|v| v != vertex && self.has_vertex(v))
            },
            op,
        );
    }
}

impl Default for VertexGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// Minimum out-degree over all vertices.
    pub min_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_degree: usize,
    /// Median out-degree over all vertices.
    pub median_degree: usize,
    /// Average out-degree \(= m/n\).
    pub average_degree: f64,
}
