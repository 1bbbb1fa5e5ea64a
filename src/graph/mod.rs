//! Storage backends implementing the shared graph contract.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod edge_list;

pub use adjacency_list::{
    AdjacencyListGraph, DirectedAdjacencyListGraph, UndirectedAdjacencyListGraph,
};
pub use adjacency_matrix::{
    AdjacencyMatrixGraph, DirectedAdjacencyMatrixGraph, UndirectedAdjacencyMatrixGraph,
};
pub use edge_list::{DirectedEdgeListGraph, EdgeListGraph, UndirectedEdgeListGraph};

use std::collections::{HashMap, HashSet};

use crate::types::{Edge, GraphError, GraphResult, VertexId, DEFAULT_WEIGHT};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Directed {}
    impl Sealed for super::Undirected {}
}

/// Storage-independent directedness strategy.
///
/// Backends are generic over this trait; the two marker types below are the
/// only implementors. An undirected backend materializes every edge as two
/// stored records, one per direction, and treats `(u, v)` and `(v, u)` as
/// the same key for duplicate detection.
pub trait Directedness: sealed::Sealed {
    /// Whether `add_edge` also stores the mirror record.
    const MIRRORS: bool;
}

/// Marker for directed graphs: one stored record per edge.
#[derive(Debug)]
pub enum Directed {}

/// Marker for undirected graphs: a record and its mirror per edge.
#[derive(Debug)]
pub enum Undirected {}

impl Directedness for Directed {
    const MIRRORS: bool = false;
}

impl Directedness for Undirected {
    const MIRRORS: bool = true;
}

/// The polymorphic contract every storage backend implements.
///
/// The search engine consumes graphs exclusively through this trait and never
/// inspects backend internals. All returned collections are owned copies;
/// callers cannot mutate backend state through them.
///
/// Backends diverge in one documented place: `edges_from` / `edges_to` on a
/// vertex that has never appeared in any edge fail with
/// [`GraphError::VertexNotFound`] on the edge-list and adjacency-list
/// backends, while the adjacency-matrix backend returns an empty result.
/// Callers must not assume uniform failure behavior across backends.
pub trait Graph {
    /// All vertices that participate in at least one edge. No ordering
    /// guarantee.
    fn vertices(&self) -> HashSet<VertexId>;

    /// All stored directed edge records. For undirected graphs this includes
    /// both directions of every logical edge. No ordering guarantee.
    fn edges(&self) -> Vec<Edge>;

    /// Insert a directed edge record; undirected backends atomically insert
    /// the mirror record too. Fails with [`GraphError::DuplicateEdge`] if the
    /// ordered pair (or, for undirected graphs, either ordering) already
    /// exists, leaving the graph unmodified.
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> GraphResult<()>;

    /// All edges whose source is `vertex`.
    fn edges_from(&self, vertex: VertexId) -> GraphResult<Vec<Edge>>;

    /// All edges whose destination is `vertex`.
    fn edges_to(&self, vertex: VertexId) -> GraphResult<Vec<Edge>>;

    /// Insert an edge with the default weight of 1.
    fn add_unweighted_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Vertices reachable from `vertex` in one hop, with edge weights.
    fn children_of(&self, vertex: VertexId) -> GraphResult<Vec<(VertexId, f64)>> {
        Ok(self
            .edges_from(vertex)?
            .into_iter()
            .map(|e| (e.to, e.weight))
            .collect())
    }

    /// Vertices that reach `vertex` in one hop, with edge weights.
    fn parents_of(&self, vertex: VertexId) -> GraphResult<Vec<(VertexId, f64)>> {
        Ok(self
            .edges_to(vertex)?
            .into_iter()
            .map(|e| (e.from, e.weight))
            .collect())
    }

    /// Whether `vertex` participates in at least one edge.
    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices().contains(&vertex)
    }
}

/// Check that a set of stored records is perfectly mirrored: every record
/// `(u, v, w)` with `u != v` is matched by exactly one `(v, u)` record of
/// equal weight, and no ordered pair occurs more than once. Self-loops count
/// as their own mirror.
///
/// Shared by the edge-list and adjacency-list validators; the matrix backend
/// checks its grid against its transpose instead.
pub(crate) fn validate_mirrored(records: &[Edge]) -> GraphResult<()> {
    let mut weights_by_key: HashMap<(VertexId, VertexId), Vec<f64>> = HashMap::new();
    for edge in records {
        weights_by_key.entry(edge.key()).or_default().push(edge.weight);
    }

    for edge in records {
        if edge.is_self_loop() {
            continue;
        }
        let forward_unique = weights_by_key[&edge.key()].len() == 1;
        let mirrored = matches!(
            weights_by_key.get(&(edge.to, edge.from)),
            Some(reverse) if reverse.len() == 1 && reverse[0] == edge.weight
        );
        if !forward_unique || !mirrored {
            return Err(GraphError::InvariantViolation {
                from: edge.from,
                to: edge.to,
            });
        }
    }
    Ok(())
}
