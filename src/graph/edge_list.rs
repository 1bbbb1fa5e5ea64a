//! Edge-list storage backend.

use std::collections::HashSet;
use std::marker::PhantomData;

use crate::types::{Edge, GraphError, GraphResult, VertexId};

use super::{validate_mirrored, Directed, Directedness, Graph, Undirected};

/// Graph stored as a flat list of edge records, with a parallel set of
/// ordered endpoint pairs for O(1) duplicate detection.
///
/// Cheapest to populate, O(E) for every neighbor query.
pub struct EdgeListGraph<D: Directedness> {
    records: Vec<Edge>,
    keys: HashSet<(VertexId, VertexId)>,
    _directedness: PhantomData<D>,
}

/// Edge-list graph storing one record per edge.
pub type DirectedEdgeListGraph = EdgeListGraph<Directed>;

/// Edge-list graph storing a record and its mirror per edge.
pub type UndirectedEdgeListGraph = EdgeListGraph<Undirected>;

impl<D: Directedness> EdgeListGraph<D> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            keys: HashSet::new(),
            _directedness: PhantomData,
        }
    }

    /// Number of stored edge records (both directions count separately on
    /// undirected graphs).
    pub fn edge_count(&self) -> usize {
        self.records.len()
    }

    fn check_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        if self.keys.iter().any(|&(u, v)| u == vertex || v == vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(vertex))
        }
    }
}

impl<D: Directedness> Default for EdgeListGraph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Directedness> Graph for EdgeListGraph<D> {
    fn vertices(&self) -> HashSet<VertexId> {
        self.keys.iter().flat_map(|&(u, v)| [u, v]).collect()
    }

    fn edges(&self) -> Vec<Edge> {
        self.records.clone()
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> GraphResult<()> {
        if self.keys.contains(&(from, to)) || (D::MIRRORS && self.keys.contains(&(to, from))) {
            return Err(GraphError::DuplicateEdge { from, to });
        }

        let edge = Edge::new(from, to, weight);
        self.records.push(edge);
        self.keys.insert(edge.key());
        if D::MIRRORS && !edge.is_self_loop() {
            self.records.push(edge.reversed());
            self.keys.insert((to, from));
        }
        Ok(())
    }

    fn edges_from(&self, vertex: VertexId) -> GraphResult<Vec<Edge>> {
        self.check_vertex(vertex)?;
        Ok(self
            .records
            .iter()
            .filter(|e| e.from == vertex)
            .copied()
            .collect())
    }

    fn edges_to(&self, vertex: VertexId) -> GraphResult<Vec<Edge>> {
        self.check_vertex(vertex)?;
        Ok(self
            .records
            .iter()
            .filter(|e| e.to == vertex)
            .copied()
            .collect())
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.keys.iter().any(|&(u, v)| u == vertex || v == vertex)
    }
}

impl UndirectedEdgeListGraph {
    /// Check that every stored record has its equal-weight mirror.
    ///
    /// On-demand consistency check; `add_edge` already maintains the
    /// invariant, so a failure here means the backend was corrupted.
    pub fn validate_undirectedness(&self) -> GraphResult<()> {
        validate_mirrored(&self.records)
    }
}
