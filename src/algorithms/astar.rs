//! A* search and breadth-first search.
//!
//! A* expands nodes in order of `g + h`, where `g` is the cost accumulated
//! from the start and `h` the heuristic estimate to the goal. With an
//! admissible heuristic the first time the goal is popped its cost is
//! optimal. With the null heuristic the search degenerates into Dijkstra
//! stopped at the goal, and with unit costs on top of that into BFS.

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::{
    algorithms::{rebuild_path, Path},
    graph::{null_heuristic, uniform_cost, CostFn, Graph, GraphAdapter, HeuristicFn, NodeId},
    utils::{HeapEntry, IndexedMinHeap},
};

/// Outcome of an [`astar`] search.
#[derive(Debug, Clone, PartialEq)]
pub struct AStarResult {
    /// The cheapest path found, or `None` if the goal is unreachable
    pub path: Option<Path>,
    /// Number of nodes popped from the open set, the goal included
    pub expanded: usize,
}

impl AStarResult {
    /// Returns the cost of the path, or `0` if no path was found.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.path.as_ref().map_or(0.0, |path| path.cost)
    }

    /// Returns `true` if the goal was reached.
    #[must_use]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Finds the cheapest path from `start` to `goal` using A*.
///
/// `cost` and `heuristic` override the graph's own [`Coster`](crate::Coster)
/// and [`HeuristicCoster`](crate::HeuristicCoster). For an optimal result
/// the heuristic must be admissible and edge costs non-negative. An
/// unreachable goal is not an error: the result carries no path and the
/// number of nodes expanded before the open set ran dry.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{astar, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0)]);
/// let result = astar(NodeId::new(0), NodeId::new(1), &graph, None, None);
///
/// let path = result.path.expect("path");
/// assert_eq!(path.nodes, vec![NodeId::new(0), NodeId::new(1)]);
/// assert_eq!(path.cost, 1.0);
/// ```
pub fn astar<G>(
    start: NodeId,
    goal: NodeId,
    graph: &G,
    cost: Option<CostFn<'_>>,
    heuristic: Option<HeuristicFn<'_>>,
) -> AStarResult
where
    G: Graph + ?Sized,
{
    if !graph.has_node(start) || !graph.has_node(goal) {
        return AStarResult {
            path: None,
            expanded: 0,
        };
    }

    let adapter = GraphAdapter::new(graph, cost, heuristic);
    let mut closed: FxHashMap<NodeId, f64> = FxHashMap::default();
    let mut predecessors: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut open = IndexedMinHeap::new();
    let mut expanded = 0;

    open.push(HeapEntry::new(start, 0.0, adapter.heuristic(start, goal)));

    while let Some(current) = open.pop() {
        expanded += 1;

        if current.node == goal {
            debug!("astar {start} -> {goal}: reached at cost {} after {expanded} expansions", current.g);
            let path = rebuild_path(&predecessors, start, goal).map(|nodes| Path::new(nodes, current.g));
            return AStarResult { path, expanded };
        }

        closed.insert(current.node, current.g);

        for succ in adapter.successors(current.node) {
            if closed.contains_key(&succ) {
                continue;
            }
            let Some(weight) = adapter.weight(current.node, succ) else {
                continue;
            };
            let g = current.g + weight;

            match open.find(succ) {
                Some(existing) if g < existing.g => {
                    trace!("astar: {succ} improved to {g} via {}", current.node);
                    predecessors.insert(succ, current.node);
                    open.fix(succ, g, g + adapter.heuristic(succ, goal));
                }
                Some(_) => {}
                None => {
                    predecessors.insert(succ, current.node);
                    open.push(HeapEntry::new(succ, g, g + adapter.heuristic(succ, goal)));
                }
            }
        }
    }

    debug!("astar {start} -> {goal}: unreachable after {expanded} expansions");
    AStarResult {
        path: None,
        expanded,
    }
}

/// Finds a path from `start` to `goal` with the fewest edges.
///
/// Runs [`astar`] with unit edge costs and the null heuristic, ignoring any
/// cost the graph itself provides. Returns the path, if any, and the number
/// of nodes visited.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{breadth_first_search, UndirectedGraph, NodeId};
///
/// let graph = UndirectedGraph::from_weighted_edges([
///     (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (0, 3, 100.0),
/// ]);
/// let (path, _visited) = breadth_first_search(NodeId::new(0), NodeId::new(3), &graph);
/// assert_eq!(path, Some(vec![NodeId::new(0), NodeId::new(3)]));
/// ```
pub fn breadth_first_search<G>(start: NodeId, goal: NodeId, graph: &G) -> (Option<Vec<NodeId>>, usize)
where
    G: Graph + ?Sized,
{
    let unit: CostFn<'_> = &uniform_cost;
    let none: HeuristicFn<'_> = &null_heuristic;
    let result = astar(start, goal, graph, Some(unit), Some(none));
    (result.path.map(|path| path.nodes), result.expanded)
}
