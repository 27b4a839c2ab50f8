//! # `trellis` - Index-Tracked Heaps and Dense Vertex Graphs
//!
//! Two single-threaded, in-memory data structures whose operations keep their
//! internal indexes consistent after every mutation:
//!
//! - [`IndexedMinHeap`]: a binary min-heap with a reverse index from value to the
//!   slots holding it, giving \(O(\log n)\) removal of *any* stored value and
//!   \(O(1)\) membership tests.
//! - [`VertexGraph`]: a directed graph over dense `usize` vertex ids with
//!   insertion-ordered adjacency sets, iterative DFS/BFS, and BFS-based
//!   unweighted shortest paths.
//!
//! Neither type synchronises internally. Share one across threads by wrapping the
//! whole structure in a single lock; individual operations must not interleave.
//!
//! ## Logging
//!
//! With the default `tracing` feature, structural mutations emit `trace` events and
//! rejected requests emit `debug` events. The library never installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use trellis::{IndexedMinHeap, VertexGraph};
//!
//! let mut heap: IndexedMinHeap<i32> = [5, 3, 8, 1].into_iter().collect();
//! assert_eq!(heap.remove(&3), Some(3));
//! assert_eq!(heap.poll(), Some(1));
//!
//! let mut graph = VertexGraph::with_vertices(4);
//! graph.add_edge(0, 1);
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 3);
//! assert_eq!(graph.iterative_bfs(0).unwrap(), vec![0, 1, 2, 3]);
//! assert_eq!(graph.shortest_path(0, 3).unwrap(), vec![0, 1, 2, 3]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;
mod invariant;

pub mod collections;
pub mod graph;

pub use collections::{HeapRow, IndexedMinHeap};
pub use graph::{GraphError, GraphResult, GraphStatistics, VertexGraph};
