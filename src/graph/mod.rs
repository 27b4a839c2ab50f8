//! Dense-id graphs and their traversals.
//!
//! - `vertex_graph`: insertion-ordered adjacency-set graph with iterative DFS/BFS
//!   and unweighted shortest paths
//! - `error`: failures reported by traversal and path queries

pub mod error;
pub mod vertex_graph;
pub(crate) mod access;

pub use error::{GraphError, GraphResult};
pub use vertex_graph::{GraphStatistics, VertexGraph, DEFAULT_VERTEX_COUNT};
