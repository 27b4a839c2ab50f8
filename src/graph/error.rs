//! Errors reported by graph queries.

use thiserror::Error;

/// Failure of a traversal or path query.
///
/// Edge mutations never produce these; they report rejection through their
/// `bool` return value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The vertex id lies outside the graph's id space `[0, bound)`.
    #[error("vertex {vertex} out of bounds for a graph of {bound} vertex ids")]
    VertexOutOfBounds {
        /// Offending vertex id.
        vertex: usize,
        /// Current exclusive upper bound of the id space.
        bound: usize,
    },
    /// The vertex id is inside the bound but was never added to the graph.
    #[error("vertex {vertex} has not been added to the graph")]
    UnknownVertex {
        /// Offending vertex id.
        vertex: usize,
    },
}

/// Convenience alias for graph query results.
pub type GraphResult<T> = Result<T, GraphError>;
