//! Graph algorithms over the capability contract.
//!
//! Every entry point takes any [`Graph`](crate::Graph), builds a
//! [`GraphAdapter`](crate::GraphAdapter) once, and allocates its own working
//! state. Nothing is cached between calls.
//!
//! # Available Algorithms
//!
//! ## Single Source
//!
//! - [`astar`] - Best-first search towards one goal
//! - [`breadth_first_search`] - Fewest-edges path, A* with unit costs
//! - [`dijkstra`] - Shortest paths from one source, non-negative costs
//! - [`bellman_ford`] - Shortest paths from one source with negative-cycle detection
//! - [`depth_first_search`] - Any path to a goal
//!
//! ## All Pairs
//!
//! - [`floyd_warshall`] - Dense all-pairs search with equal-cost path enumeration
//! - [`johnson`] - Sparse all-pairs search tolerating negative edges
//!
//! ## Structure
//!
//! - [`tarjan`] / [`condensation`] - Strongly connected components
//! - [`dominators`] / [`post_dominators`] - Dominator sets by fixed point
//! - [`connected_components`] - Weakly connected components
//!
//! ## Spanning Trees
//!
//! - [`prim`] / [`kruskal`] - Minimum spanning forests
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Negative Costs |
//! |-----------|-----------------|----------------|
//! | A* / Dijkstra | O((V + E) log V) | No |
//! | Bellman-Ford | O(V E) | Yes |
//! | Floyd-Warshall | O(V³) | Yes |
//! | Johnson | O(V E log V) | Yes |
//! | Tarjan | O(V + E) | n/a |
//! | Prim | O(V E) | Yes |
//! | Kruskal | O(E log E) | Yes |

mod astar;
mod bellman_ford;
mod dijkstra;
mod dominators;
mod floyd_warshall;
mod johnson;
mod mst;
mod scc;
mod traversal;

pub use astar::{astar, breadth_first_search, AStarResult};
pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use dominators::{dominators, post_dominators, DominatorSets};
pub use floyd_warshall::{floyd_warshall, floyd_warshall_with_config, AllShortestPaths};
pub use johnson::{johnson, JohnsonPaths};
pub use mst::{kruskal, prim};
pub use scc::{condensation, tarjan, Condensation};
pub use traversal::{connected_components, depth_first_search, is_path, path_cost};

use rustc_hash::FxHashMap;

use crate::graph::{NodeId, INFINITE_COST};

/// A route through a graph together with its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Visited nodes, origin first and destination last
    pub nodes: Vec<NodeId>,
    /// Summed cost of the traversed edges
    pub cost: f64,
}

impl Path {
    /// Creates a path from its nodes and total cost.
    #[must_use]
    pub fn new(nodes: Vec<NodeId>, cost: f64) -> Self {
        Path { nodes, cost }
    }

    /// Returns the number of edges on the path.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Returns the first node, if the path is not empty.
    #[must_use]
    pub fn origin(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Returns the last node, if the path is not empty.
    #[must_use]
    pub fn destination(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }
}

/// Shortest paths from one source to every reachable node.
///
/// Produced by [`dijkstra`], [`bellman_ford`] and, per source, by [`johnson`].
/// Unreachable nodes have no entry: [`ShortestPaths::path_to`] returns `None`
/// and [`ShortestPaths::cost_to`] returns [`INFINITE_COST`] for them.
///
/// Paths are stored as a predecessor tree and rebuilt on request.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: NodeId,
    pub(crate) predecessors: FxHashMap<NodeId, NodeId>,
    pub(crate) costs: FxHashMap<NodeId, f64>,
}

impl ShortestPaths {
    pub(crate) fn from_parts(
        source: NodeId,
        predecessors: FxHashMap<NodeId, NodeId>,
        costs: FxHashMap<NodeId, f64>,
    ) -> Self {
        ShortestPaths {
            source,
            predecessors,
            costs,
        }
    }

    /// Returns the node the search started from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the cheapest route from the source to `target`, or `None` if
    /// `target` was not reached.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.costs.contains_key(&target) {
            return None;
        }
        rebuild_path(&self.predecessors, self.source, target)
    }

    /// Returns the cost of the cheapest route to `target`, or
    /// [`INFINITE_COST`] if `target` was not reached.
    #[must_use]
    pub fn cost_to(&self, target: NodeId) -> f64 {
        self.costs.get(&target).copied().unwrap_or(INFINITE_COST)
    }

    /// Returns `true` if `target` was reached.
    #[must_use]
    pub fn reaches(&self, target: NodeId) -> bool {
        self.costs.contains_key(&target)
    }

    /// Returns the cost of every reached node.
    #[must_use]
    pub fn costs(&self) -> &FxHashMap<NodeId, f64> {
        &self.costs
    }

    /// Materializes the route to every reached node.
    #[must_use]
    pub fn paths(&self) -> FxHashMap<NodeId, Vec<NodeId>> {
        self.costs
            .keys()
            .filter_map(|&node| self.path_to(node).map(|path| (node, path)))
            .collect()
    }

    /// Returns the reached nodes in ascending id order.
    #[must_use]
    pub fn reached(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.costs.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Returns the number of reached nodes, the source included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns `true` if not even the source was reached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

/// Walks a predecessor map back from `goal` to `start` and returns the route
/// in forward order.
///
/// Returns `None` if the chain breaks or loops before reaching `start`.
pub(crate) fn rebuild_path(
    predecessors: &FxHashMap<NodeId, NodeId>,
    start: NodeId,
    goal: NodeId,
) -> Option<Vec<NodeId>> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        if path.len() > predecessors.len() + 1 {
            return None;
        }
        current = *predecessors.get(&current)?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}
