//! Dijkstra's single-source shortest paths.

use log::debug;
use rustc_hash::FxHashMap;

use crate::{
    algorithms::ShortestPaths,
    graph::{CostFn, Graph, GraphAdapter, NodeId},
    utils::{HeapEntry, IndexedMinHeap},
};

/// Computes the cheapest path from `source` to every reachable node.
///
/// Runs the A* loop without a goal and with the null heuristic until the open
/// set is empty. Edge costs must be non-negative; negative costs are not
/// detected and give incorrect results (use [`bellman_ford`](crate::bellman_ford)
/// for those). A `source` outside the graph yields an empty result.
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graphalgo::{dijkstra, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges([(0, 1, 4.0), (0, 2, 1.0), (2, 1, 1.0)]);
/// let paths = dijkstra(NodeId::new(0), &graph, None);
///
/// assert_eq!(paths.cost_to(NodeId::new(1)), 2.0);
/// assert_eq!(
///     paths.path_to(NodeId::new(1)),
///     Some(vec![NodeId::new(0), NodeId::new(2), NodeId::new(1)])
/// );
/// ```
pub fn dijkstra<G>(source: NodeId, graph: &G, cost: Option<CostFn<'_>>) -> ShortestPaths
where
    G: Graph + ?Sized,
{
    let mut predecessors: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut settled: FxHashMap<NodeId, f64> = FxHashMap::default();
    if !graph.has_node(source) {
        return ShortestPaths::from_parts(source, predecessors, settled);
    }

    let adapter = GraphAdapter::new(graph, cost, None);
    let mut open = IndexedMinHeap::new();
    open.push(HeapEntry::new(source, 0.0, 0.0));

    while let Some(current) = open.pop() {
        settled.insert(current.node, current.g);

        for succ in adapter.successors(current.node) {
            if settled.contains_key(&succ) {
                continue;
            }
            let Some(weight) = adapter.weight(current.node, succ) else {
                continue;
            };
            let g = current.g + weight;

            match open.find(succ) {
                Some(existing) if g < existing.g => {
                    predecessors.insert(succ, current.node);
                    open.fix(succ, g, g);
                }
                Some(_) => {}
                None => {
                    predecessors.insert(succ, current.node);
                    open.push(HeapEntry::new(succ, g, g));
                }
            }
        }
    }

    debug!(
        "dijkstra from {source}: settled {} of {} nodes",
        settled.len(),
        adapter.nodes().len()
    );
    ShortestPaths::from_parts(source, predecessors, settled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, Edge, UndirectedGraph, INFINITE_COST};

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_costs_and_paths() {
        let graph = DirectedGraph::from_weighted_edges([
            (0, 1, 7.0),
            (0, 2, 9.0),
            (0, 5, 14.0),
            (1, 2, 10.0),
            (1, 3, 15.0),
            (2, 3, 11.0),
            (2, 5, 2.0),
            (3, 4, 6.0),
            (5, 4, 9.0),
        ]);
        let paths = dijkstra(n(0), &graph, None);

        assert_eq!(paths.cost_to(n(0)), 0.0);
        assert_eq!(paths.cost_to(n(1)), 7.0);
        assert_eq!(paths.cost_to(n(2)), 9.0);
        assert_eq!(paths.cost_to(n(3)), 20.0);
        assert_eq!(paths.cost_to(n(4)), 20.0);
        assert_eq!(paths.cost_to(n(5)), 11.0);
        assert_eq!(paths.path_to(n(4)), Some(vec![n(0), n(2), n(5), n(4)]));
        assert_eq!(paths.path_to(n(0)), Some(vec![n(0)]));
    }

    #[test]
    fn test_unreachable_nodes_are_absent() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (2, 0, 1.0)]);
        let paths = dijkstra(n(0), &graph, None);

        assert_eq!(paths.len(), 2);
        assert!(!paths.reaches(n(2)));
        assert_eq!(paths.cost_to(n(2)), INFINITE_COST);
        assert_eq!(paths.path_to(n(2)), None);
    }

    #[test]
    fn test_source_not_in_graph() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0)]);
        let paths = dijkstra(n(5), &graph, None);
        assert!(paths.is_empty());
        assert_eq!(paths.source(), n(5));
    }

    #[test]
    fn test_undirected_graph() {
        let graph = UndirectedGraph::from_weighted_edges([(0, 1, 2.0), (1, 2, 2.0)]);
        let paths = dijkstra(n(2), &graph, None);

        assert_eq!(paths.cost_to(n(0)), 4.0);
        assert_eq!(paths.path_to(n(0)), Some(vec![n(2), n(1), n(0)]));
    }

    #[test]
    fn test_cost_override() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 2, 1.0), (0, 2, 3.0)]);
        let hop = |_: Edge| 1.0;
        let paths = dijkstra(n(0), &graph, Some(&hop));

        assert_eq!(paths.cost_to(n(2)), 1.0);
        assert_eq!(paths.path_to(n(2)), Some(vec![n(0), n(2)]));
    }
}
