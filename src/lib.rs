//! wayfind — weighted-graph storage backends with pluggable goal-directed
//! search.
//!
//! Three interchangeable storage representations (edge list, adjacency list,
//! adjacency matrix), each in directed and undirected form, implement one
//! shared [`Graph`](graph::Graph) contract; a frontier-based search engine
//! consumes that contract to walk a graph from a start vertex to a goal with
//! exchangeable expansion orders (breadth-first, depth-first, cheapest-first).

pub mod graph;
pub mod search;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    AdjacencyListGraph, AdjacencyMatrixGraph, Directed, DirectedAdjacencyListGraph,
    DirectedAdjacencyMatrixGraph, DirectedEdgeListGraph, Directedness, EdgeListGraph, Graph,
    Undirected, UndirectedAdjacencyListGraph, UndirectedAdjacencyMatrixGraph,
    UndirectedEdgeListGraph,
};
pub use search::{
    is_reachable, search, FifoFrontier, Frontier, LifoFrontier, Path, PriorityFrontier, Search,
    SearchOutcome, SearchState, Strategy, TreeVertex,
};
pub use types::{Edge, GraphError, GraphResult, VertexId, DEFAULT_WEIGHT};
