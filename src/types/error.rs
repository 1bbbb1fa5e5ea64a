//! Error types for the wayfind library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the wayfind library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge with this ordered key (or its mirror, on undirected graphs)
    /// already exists.
    #[error("Edge from {from} to {to} already exists")]
    DuplicateEdge { from: VertexId, to: VertexId },

    /// Query against a vertex that has never appeared in any edge.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    /// An undirected graph holds an edge record without a matching mirror.
    #[error("Undirected invariant violated: edge from {from} to {to} has no equal-weight mirror")]
    InvariantViolation { from: VertexId, to: VertexId },

    /// Search was asked to start from a vertex absent from the graph.
    #[error("Search start vertex {0} is not in the graph")]
    StartVertexNotFound(VertexId),
}

/// Convenience result type for wayfind operations.
pub type GraphResult<T> = Result<T, GraphError>;
