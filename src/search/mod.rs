//! Goal-directed search over any [`Graph`](crate::graph::Graph) backend.

pub mod engine;
pub mod frontier;

pub use engine::{
    is_reachable, search, Path, Search, SearchOutcome, SearchState, Strategy, TreeVertex,
};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
