//! The core edge struct.

use serde::Serialize;

use super::{VertexId, DEFAULT_WEIGHT};

/// A directed, weighted connection between two vertices.
///
/// Undirected backends represent one logical edge as two stored records,
/// one per direction, with equal weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Source vertex.
    pub from: VertexId,
    /// Destination vertex.
    pub to: VertexId,
    /// Edge weight.
    pub weight: f64,
}

impl Edge {
    /// Create a new weighted edge.
    pub fn new(from: VertexId, to: VertexId, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Create an edge with the default weight of 1.
    pub fn unweighted(from: VertexId, to: VertexId) -> Self {
        Self {
            from,
            to,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// The ordered endpoint pair identifying this record.
    pub fn key(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }

    /// The same edge walked in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}
