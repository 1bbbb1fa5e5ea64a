//! The frontier-based search engine.

use std::collections::{HashMap, HashSet};

use log::debug;
use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, VertexId};

use super::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};

/// Which stock frontier drives the expansion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    /// FIFO frontier; finds goals in fewest-hop order.
    BreadthFirst,
    /// LIFO frontier; dives along one branch before backtracking.
    DepthFirst,
    /// Cost-priority frontier; finds the lowest-total-weight path.
    CheapestFirst,
}

impl Strategy {
    fn frontier(self) -> Box<dyn Frontier> {
        match self {
            Strategy::BreadthFirst => Box::new(FifoFrontier::new()),
            Strategy::DepthFirst => Box::new(LifoFrontier::new()),
            Strategy::CheapestFirst => Box::new(PriorityFrontier::new()),
        }
    }
}

/// A walk from the start vertex to a goal vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    /// Vertex sequence, start first, goal last.
    pub vertices: Vec<VertexId>,
    /// Sum of the traversed edge weights.
    pub total_weight: f64,
}

impl Path {
    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// A node in the search's discovery tree, with an explicit children list.
///
/// Owned by the search engine, not by any graph backend: the tree reflects
/// which vertex first (or most cheaply) led to which, not graph adjacency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeVertex {
    /// The graph vertex this tree node stands for.
    pub id: VertexId,
    /// Vertices whose recorded predecessor is this one, ascending by id.
    pub children: Vec<TreeVertex>,
}

/// The observable state after one engine transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// The frontier still holds vertices; keep stepping.
    InProgress,
    /// A popped vertex satisfied the goal predicate. Terminal.
    GoalFound(Path),
    /// The frontier emptied without reaching the goal. Terminal.
    Exhausted,
}

/// Terminal result of a completed search.
///
/// An unreachable goal is not an error; it is the `Exhausted` outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SearchOutcome {
    /// The goal was reached; here is the path to it.
    GoalFound(Path),
    /// Every reachable vertex was expanded without satisfying the goal.
    Exhausted,
}

impl SearchOutcome {
    /// The path, if the goal was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::GoalFound(path) => Some(path),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// One in-flight search: exclusively owns its frontier, visited set,
/// predecessor map, and cost map, and drops them all when it goes out of
/// scope.
///
/// The graph is only ever queried through [`Graph::edges_from`]; the engine
/// holds no references into backend internals.
///
/// Callers needing bounded execution drive [`step`](Search::step) themselves
/// and stop whenever they choose; [`run`](Search::run) drives to the first
/// terminal state.
pub struct Search<'g, P> {
    graph: &'g dyn Graph,
    goal: P,
    frontier: Box<dyn Frontier>,
    start: VertexId,
    visited: HashSet<VertexId>,
    predecessors: HashMap<VertexId, VertexId>,
    costs: HashMap<VertexId, f64>,
    expanded: usize,
}

impl<'g, P> Search<'g, P>
where
    P: Fn(VertexId) -> bool,
{
    /// Set up a search from `start` for any vertex satisfying `goal`.
    ///
    /// Fails with [`GraphError::StartVertexNotFound`] before any traversal
    /// if `start` does not participate in the graph.
    pub fn new(
        graph: &'g dyn Graph,
        start: VertexId,
        goal: P,
        strategy: Strategy,
    ) -> GraphResult<Self> {
        if !graph.contains_vertex(start) {
            return Err(GraphError::StartVertexNotFound(start));
        }

        let mut frontier = strategy.frontier();
        frontier.push(start, 0.0);

        let mut costs = HashMap::new();
        costs.insert(start, 0.0);

        Ok(Self {
            graph,
            goal,
            frontier,
            start,
            visited: HashSet::new(),
            predecessors: HashMap::new(),
            costs,
            expanded: 0,
        })
    }

    /// Perform one transition: pop the next vertex per the active frontier,
    /// goal-check it, and otherwise expand its outgoing edges.
    ///
    /// A neighbor is (re)pushed whenever its tentative cost from the start
    /// strictly improves; with the priority frontier this is the lazy form of
    /// decrease-key, and superseded frontier entries are skipped when popped.
    pub fn step(&mut self) -> SearchState {
        let Some(current) = self.frontier.pop() else {
            debug!(
                "frontier exhausted after expanding {} vertices",
                self.expanded
            );
            return SearchState::Exhausted;
        };

        if self.visited.contains(&current) {
            // Superseded entry from a cost improvement.
            return SearchState::InProgress;
        }

        if (self.goal)(current) {
            let path = self.reconstruct(current);
            debug!(
                "goal {} reached: {} hops, total weight {}",
                current,
                path.hops(),
                path.total_weight
            );
            return SearchState::GoalFound(path);
        }

        self.visited.insert(current);
        self.expanded += 1;

        let current_cost = self.costs.get(&current).copied().unwrap_or(0.0);
        // Discovered vertices always exist in the graph, so the list-backed
        // backends cannot report them missing here.
        let outgoing = self.graph.edges_from(current).unwrap_or_default();
        for edge in outgoing {
            if self.visited.contains(&edge.to) {
                continue;
            }
            let tentative = current_cost + edge.weight;
            let improved = match self.costs.get(&edge.to) {
                None => true,
                Some(&known) => tentative < known,
            };
            if improved {
                self.costs.insert(edge.to, tentative);
                self.predecessors.insert(edge.to, current);
                self.frontier.push(edge.to, tentative);
            }
        }

        SearchState::InProgress
    }

    /// Drive [`step`](Search::step) to the first terminal state.
    pub fn run(&mut self) -> SearchOutcome {
        loop {
            match self.step() {
                SearchState::InProgress => continue,
                SearchState::GoalFound(path) => return SearchOutcome::GoalFound(path),
                SearchState::Exhausted => return SearchOutcome::Exhausted,
            }
        }
    }

    /// Number of vertices expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// The discovery tree rooted at the start vertex: each discovered vertex
    /// hangs under its recorded predecessor, children in ascending id order.
    pub fn expansion_tree(&self) -> TreeVertex {
        let mut children_of: HashMap<VertexId, Vec<VertexId>> = HashMap::new();
        for (&child, &parent) in &self.predecessors {
            children_of.entry(parent).or_default().push(child);
        }
        for children in children_of.values_mut() {
            children.sort_unstable();
        }
        build_tree(self.start, &children_of)
    }

    fn reconstruct(&self, goal: VertexId) -> Path {
        let mut vertices = vec![goal];
        let mut current = goal;
        while let Some(&previous) = self.predecessors.get(&current) {
            vertices.push(previous);
            current = previous;
        }
        vertices.reverse();

        Path {
            total_weight: self.costs.get(&goal).copied().unwrap_or(0.0),
            vertices,
        }
    }
}

fn build_tree(id: VertexId, children_of: &HashMap<VertexId, Vec<VertexId>>) -> TreeVertex {
    let children = children_of
        .get(&id)
        .map(|ids| ids.iter().map(|&c| build_tree(c, children_of)).collect())
        .unwrap_or_default();
    TreeVertex { id, children }
}

/// Explore `graph` from `start` until a vertex satisfying `goal` is popped,
/// expanding in the order `strategy` dictates.
///
/// Returns `Err` only for malformed input (absent start vertex); a goal that
/// is simply unreachable yields `Ok(SearchOutcome::Exhausted)`.
pub fn search<P>(
    graph: &dyn Graph,
    start: VertexId,
    goal: P,
    strategy: Strategy,
) -> GraphResult<SearchOutcome>
where
    P: Fn(VertexId) -> bool,
{
    let mut search = Search::new(graph, start, goal, strategy)?;
    Ok(search.run())
}

/// Whether any path leads from `from` to `to`.
pub fn is_reachable(graph: &dyn Graph, from: VertexId, to: VertexId) -> GraphResult<bool> {
    let outcome = search(graph, from, |v| v == to, Strategy::BreadthFirst)?;
    Ok(outcome.path().is_some())
}
