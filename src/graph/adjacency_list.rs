//! Adjacency-list storage backend.

use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;

use crate::types::{Edge, GraphError, GraphResult, VertexId};

use super::{validate_mirrored, Directed, Directedness, Graph, Undirected};

/// Graph stored as per-vertex neighbor sequences.
///
/// A reverse adjacency map is maintained alongside the forward one so that
/// incoming-edge queries are O(degree) as well, not an O(E) scan.
pub struct AdjacencyListGraph<D: Directedness> {
    outgoing: HashMap<VertexId, Vec<(VertexId, f64)>>,
    incoming: HashMap<VertexId, Vec<(VertexId, f64)>>,
    keys: HashSet<(VertexId, VertexId)>,
    _directedness: PhantomData<D>,
}

/// Adjacency-list graph storing one record per edge.
pub type DirectedAdjacencyListGraph = AdjacencyListGraph<Directed>;

/// Adjacency-list graph storing a record and its mirror per edge.
pub type UndirectedAdjacencyListGraph = AdjacencyListGraph<Undirected>;

impl<D: Directedness> AdjacencyListGraph<D> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
            keys: HashSet::new(),
            _directedness: PhantomData,
        }
    }

    /// Number of stored edge records (both directions count separately on
    /// undirected graphs).
    pub fn edge_count(&self) -> usize {
        self.keys.len()
    }

    /// Number of outgoing edges at `vertex`.
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.outgoing.get(&vertex).map_or(0, Vec::len)
    }

    /// Number of incoming edges at `vertex`.
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.incoming.get(&vertex).map_or(0, Vec::len)
    }

    fn insert_record(&mut self, from: VertexId, to: VertexId, weight: f64) {
        self.outgoing.entry(from).or_default().push((to, weight));
        self.incoming.entry(to).or_default().push((from, weight));
        self.keys.insert((from, to));
    }

    fn check_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        if self.outgoing.contains_key(&vertex) || self.incoming.contains_key(&vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(vertex))
        }
    }
}

impl<D: Directedness> Default for AdjacencyListGraph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Directedness> Graph for AdjacencyListGraph<D> {
    fn vertices(&self) -> HashSet<VertexId> {
        self.outgoing
            .keys()
            .chain(self.incoming.keys())
            .copied()
            .collect()
    }

    fn edges(&self) -> Vec<Edge> {
        self.outgoing
            .iter()
            .flat_map(|(&from, neighbors)| {
                neighbors
                    .iter()
                    .map(move |&(to, weight)| Edge::new(from, to, weight))
            })
            .collect()
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> GraphResult<()> {
        if self.keys.contains(&(from, to)) || (D::MIRRORS && self.keys.contains(&(to, from))) {
            return Err(GraphError::DuplicateEdge { from, to });
        }

        self.insert_record(from, to, weight);
        if D::MIRRORS && from != to {
            self.insert_record(to, from, weight);
        }
        Ok(())
    }

    fn edges_from(&self, vertex: VertexId) -> GraphResult<Vec<Edge>> {
        self.check_vertex(vertex)?;
        Ok(self
            .outgoing
            .get(&vertex)
            .into_iter()
            .flatten()
            .map(|&(to, weight)| Edge::new(vertex, to, weight))
            .collect())
    }

    fn edges_to(&self, vertex: VertexId) -> GraphResult<Vec<Edge>> {
        self.check_vertex(vertex)?;
        Ok(self
            .incoming
            .get(&vertex)
            .into_iter()
            .flatten()
            .map(|&(from, weight)| Edge::new(from, vertex, weight))
            .collect())
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.outgoing.contains_key(&vertex) || self.incoming.contains_key(&vertex)
    }
}

impl UndirectedAdjacencyListGraph {
    /// Check that every stored record has its equal-weight mirror.
    ///
    /// On-demand consistency check; `add_edge` already maintains the
    /// invariant, so a failure here means the backend was corrupted.
    pub fn validate_undirectedness(&self) -> GraphResult<()> {
        validate_mirrored(&self.edges())
    }
}
