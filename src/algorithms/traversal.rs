//! Depth-first search and path utilities.
//!
//! # Algorithms
//!
//! - [`depth_first_search`] - Iterative DFS returning the first path found to a goal
//! - [`is_path`] - Checks that consecutive nodes are joined by edges
//! - [`path_cost`] - Sums edge costs along a path
//! - [`connected_components`] - Weakly connected components

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    algorithms::rebuild_path,
    graph::{CostFn, Graph, GraphAdapter, NodeId, INFINITE_COST},
    utils::DisjointSet,
};

/// Finds some path from `start` to `goal` by depth-first search.
///
/// The search uses an explicit stack, so deep graphs cannot overflow the call
/// stack. Successors are explored in the order the graph reports them. The
/// returned path is the first one discovered, not necessarily the shortest.
///
/// Returns `None` if `goal` is unreachable or either endpoint is not in the
/// graph.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{depth_first_search, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]);
/// let path = depth_first_search(NodeId::new(0), NodeId::new(2), &graph);
///
/// assert_eq!(path, Some(vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]));
/// ```
pub fn depth_first_search<G>(start: NodeId, goal: NodeId, graph: &G) -> Option<Vec<NodeId>>
where
    G: Graph + ?Sized,
{
    if !graph.has_node(start) || !graph.has_node(goal) {
        return None;
    }

    let adapter = GraphAdapter::new(graph, None, None);
    let mut closed: FxHashSet<NodeId> = FxHashSet::default();
    let mut predecessors: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !closed.insert(current) {
            continue;
        }
        if current == goal {
            debug!("dfs {start} -> {goal}: found after closing {} nodes", closed.len());
            return rebuild_path(&predecessors, start, goal);
        }

        // Reverse so the first successor is explored first
        for succ in adapter.successors(current).into_iter().rev() {
            if closed.contains(&succ) {
                continue;
            }
            predecessors.insert(succ, current);
            stack.push(succ);
        }
    }

    None
}

/// Returns `true` if `path` is a walk in `graph`.
///
/// Every consecutive pair must be joined by an edge (`edge_to` for directed
/// graphs, `edge_between` otherwise). The empty path is trivially valid and a
/// single-node path is valid if that node is in the graph.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{is_path, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 2, 1.0)]);
///
/// assert!(is_path(&[NodeId::new(0), NodeId::new(1), NodeId::new(2)], &graph));
/// assert!(!is_path(&[NodeId::new(2), NodeId::new(1)], &graph));
/// assert!(is_path(&[], &graph));
/// ```
pub fn is_path<G>(path: &[NodeId], graph: &G) -> bool
where
    G: Graph + ?Sized,
{
    match path {
        [] => true,
        [only] => graph.has_node(*only),
        _ => {
            let adapter = GraphAdapter::new(graph, None, None);
            path.windows(2).all(|pair| adapter.is_successor(pair[0], pair[1]))
        }
    }
}

/// Returns the summed edge cost along `path`.
///
/// Paths with fewer than two nodes cost `0`. A missing edge makes the whole
/// path cost [`INFINITE_COST`].
pub fn path_cost<G>(path: &[NodeId], graph: &G, cost: Option<CostFn<'_>>) -> f64
where
    G: Graph + ?Sized,
{
    if path.len() < 2 {
        return 0.0;
    }
    let adapter = GraphAdapter::new(graph, cost, None);
    let mut total = 0.0;
    for pair in path.windows(2) {
        let Some(edge) = adapter.edge_to(pair[0], pair[1]) else {
            return INFINITE_COST;
        };
        total += adapter.cost(edge);
    }
    total
}

/// Groups the nodes into weakly connected components.
///
/// Edge direction is ignored. Each component is sorted by id and the
/// components are ordered by their smallest member.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{connected_components, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (2, 1, 1.0), (3, 4, 1.0)]);
/// let components = connected_components(&graph);
///
/// assert_eq!(components.len(), 2);
/// assert_eq!(components[1], vec![NodeId::new(3), NodeId::new(4)]);
/// ```
pub fn connected_components<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: Graph + ?Sized,
{
    let adapter = GraphAdapter::new(graph, None, None);
    let mut sets = DisjointSet::new();
    for &node in adapter.nodes() {
        sets.make_set(node);
    }
    for &node in adapter.nodes() {
        for succ in adapter.successors(node) {
            sets.union(node, succ);
        }
    }

    let mut groups: FxHashMap<NodeId, Vec<NodeId>> = FxHashMap::default();
    for &node in adapter.nodes() {
        if let Some(root) = sets.find(node) {
            groups.entry(root).or_default().push(node);
        }
    }

    let mut components: Vec<Vec<NodeId>> = groups
        .into_values()
        .map(|mut members| {
            members.sort_unstable();
            members
        })
        .collect();
    components.sort_unstable_by_key(|members| members[0]);
    components
}
