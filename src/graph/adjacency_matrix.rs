//! Adjacency-matrix storage backend.

use std::collections::HashSet;
use std::marker::PhantomData;

use crate::types::{Edge, GraphError, GraphResult, VertexId};

use super::{Directed, Directedness, Graph, Undirected};

/// Graph stored as a square weight grid indexed by vertex id, grown on
/// demand.
///
/// A presence set of ordered pairs rides alongside the grid: it gives O(1)
/// duplicate detection and distinguishes a legitimate zero-weight edge from
/// an absent cell, which both read as `0.0` from the grid itself.
///
/// O(V) neighbor queries and O(V²) space; growing to a new maximum vertex id
/// copies the existing grid into a larger zero-initialized one, preserving
/// all prior entries by position.
///
/// Unlike the list-backed variants, neighbor queries on a vertex that has
/// never appeared in any edge return an empty result instead of failing.
pub struct AdjacencyMatrixGraph<D: Directedness> {
    weights: Vec<Vec<f64>>,
    present: HashSet<(VertexId, VertexId)>,
    _directedness: PhantomData<D>,
}

/// Adjacency-matrix graph storing one cell per edge.
pub type DirectedAdjacencyMatrixGraph = AdjacencyMatrixGraph<Directed>;

/// Adjacency-matrix graph storing a cell and its mirror per edge.
pub type UndirectedAdjacencyMatrixGraph = AdjacencyMatrixGraph<Undirected>;

impl<D: Directedness> AdjacencyMatrixGraph<D> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            weights: Vec::new(),
            present: HashSet::new(),
            _directedness: PhantomData,
        }
    }

    /// Current side length of the grid. One past the largest vertex id seen.
    pub fn capacity(&self) -> usize {
        self.weights.len()
    }

    /// Number of stored edge records (both directions count separately on
    /// undirected graphs).
    pub fn edge_count(&self) -> usize {
        self.present.len()
    }

    fn grow_to(&mut self, side: usize) {
        if side <= self.weights.len() {
            return;
        }
        for row in &mut self.weights {
            row.resize(side, 0.0);
        }
        while self.weights.len() < side {
            self.weights.push(vec![0.0; side]);
        }
    }

    fn set_cell(&mut self, from: VertexId, to: VertexId, weight: f64) {
        self.weights[from as usize][to as usize] = weight;
        self.present.insert((from, to));
    }
}

impl<D: Directedness> Default for AdjacencyMatrixGraph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Directedness> Graph for AdjacencyMatrixGraph<D> {
    fn vertices(&self) -> HashSet<VertexId> {
        self.present.iter().flat_map(|&(u, v)| [u, v]).collect()
    }

    fn edges(&self) -> Vec<Edge> {
        self.present
            .iter()
            .map(|&(from, to)| Edge::new(from, to, self.weights[from as usize][to as usize]))
            .collect()
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> GraphResult<()> {
        if self.present.contains(&(from, to)) || (D::MIRRORS && self.present.contains(&(to, from)))
        {
            return Err(GraphError::DuplicateEdge { from, to });
        }

        self.grow_to(from.max(to) as usize + 1);
        self.set_cell(from, to, weight);
        if D::MIRRORS && from != to {
            self.set_cell(to, from, weight);
        }
        Ok(())
    }

    fn edges_from(&self, vertex: VertexId) -> GraphResult<Vec<Edge>> {
        let side = self.capacity() as VertexId;
        Ok((0..side)
            .filter(|&to| self.present.contains(&(vertex, to)))
            .map(|to| Edge::new(vertex, to, self.weights[vertex as usize][to as usize]))
            .collect())
    }

    fn edges_to(&self, vertex: VertexId) -> GraphResult<Vec<Edge>> {
        let side = self.capacity() as VertexId;
        Ok((0..side)
            .filter(|&from| self.present.contains(&(from, vertex)))
            .map(|from| Edge::new(from, vertex, self.weights[from as usize][vertex as usize]))
            .collect())
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.present
            .iter()
            .any(|&(u, v)| u == vertex || v == vertex)
    }
}

impl UndirectedAdjacencyMatrixGraph {
    /// Check that the grid equals its transpose weight-for-weight and that
    /// the presence set is symmetric.
    ///
    /// On-demand consistency check; `add_edge` already maintains the
    /// invariant, so a failure here means the backend was corrupted.
    pub fn validate_undirectedness(&self) -> GraphResult<()> {
        for &(from, to) in &self.present {
            if !self.present.contains(&(to, from)) {
                return Err(GraphError::InvariantViolation { from, to });
            }
        }
        for row in 0..self.weights.len() {
            for col in 0..row {
                if self.weights[row][col] != self.weights[col][row] {
                    return Err(GraphError::InvariantViolation {
                        from: row as VertexId,
                        to: col as VertexId,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_catches_asymmetric_presence() {
        let mut graph = UndirectedAdjacencyMatrixGraph::new();
        graph.add_edge(0, 1, 2.0).unwrap();

        // Plant a cell behind the API's back, without its mirror.
        graph.grow_to(4);
        graph.set_cell(2, 3, 1.0);

        let err = graph.validate_undirectedness().unwrap_err();
        assert_eq!(err, GraphError::InvariantViolation { from: 2, to: 3 });
    }

    #[test]
    fn validator_catches_transpose_mismatch() {
        let mut graph = UndirectedAdjacencyMatrixGraph::new();
        graph.add_edge(0, 1, 2.0).unwrap();

        // Corrupt one direction's weight.
        graph.weights[1][0] = 9.0;

        assert!(graph.validate_undirectedness().is_err());
    }

    #[test]
    fn zero_weight_edge_is_present() {
        let mut graph = DirectedAdjacencyMatrixGraph::new();
        graph.add_edge(0, 1, 0.0).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges_from(0).unwrap(), vec![Edge::new(0, 1, 0.0)]);
        // The duplicate check sees the zero-weight cell as occupied.
        assert!(graph.add_edge(0, 1, 5.0).is_err());
    }

    #[test]
    fn absent_vertex_queries_are_empty() {
        let graph = DirectedAdjacencyMatrixGraph::new();
        assert!(graph.edges_from(42).unwrap().is_empty());
        assert!(graph.edges_to(42).unwrap().is_empty());
    }
}
