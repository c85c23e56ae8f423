//! Bellman-Ford single-source shortest paths with negative-cycle detection.

use log::{debug, trace, warn};
use rustc_hash::FxHashMap;

use crate::{
    algorithms::ShortestPaths,
    graph::{CostFn, Graph, GraphAdapter, NodeId},
    Error, Result,
};

/// Computes the cheapest path from `source` to every reachable node,
/// tolerating negative edge costs.
///
/// Relaxes the outgoing edges of every node with a known cost for at most
/// `|V| - 1` passes, stopping early once a pass changes nothing. One more
/// sweep follows: if any edge still relaxes, a negative cycle is reachable
/// from `source`.
///
/// # Errors
///
/// Returns [`Error::NegativeCycle`] if a cycle with negative total cost is
/// reachable from `source`. No partial result is returned in that case.
/// Negative cycles that `source` cannot reach do not affect the result.
///
/// # Complexity
///
/// - Time: O(V E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graphalgo::{bellman_ford, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges([(0, 1, 4.0), (0, 2, 5.0), (2, 1, -3.0)]);
/// let paths = bellman_ford(NodeId::new(0), &graph, None)?;
///
/// assert_eq!(paths.cost_to(NodeId::new(1)), 2.0);
/// # Ok::<(), graphalgo::Error>(())
/// ```
pub fn bellman_ford<G>(source: NodeId, graph: &G, cost: Option<CostFn<'_>>) -> Result<ShortestPaths>
where
    G: Graph + ?Sized,
{
    let mut predecessors: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut costs: FxHashMap<NodeId, f64> = FxHashMap::default();
    if !graph.has_node(source) {
        return Ok(ShortestPaths::from_parts(source, predecessors, costs));
    }

    let adapter = GraphAdapter::new(graph, cost, None);
    let nodes = adapter.nodes();
    costs.insert(source, 0.0);

    let mut passes = 0;
    for _ in 1..nodes.len() {
        passes += 1;
        let mut changed = false;
        for &node in nodes {
            let Some(&base) = costs.get(&node) else {
                continue;
            };
            for succ in adapter.successors(node) {
                let Some(weight) = adapter.weight(node, succ) else {
                    continue;
                };
                let candidate = base + weight;
                if costs.get(&succ).map_or(true, |&known| candidate < known) {
                    trace!("bellman-ford: {succ} relaxed to {candidate} via {node}");
                    costs.insert(succ, candidate);
                    predecessors.insert(succ, node);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    for &node in nodes {
        let Some(&base) = costs.get(&node) else {
            continue;
        };
        for succ in adapter.successors(node) {
            let Some(weight) = adapter.weight(node, succ) else {
                continue;
            };
            let still_relaxes = costs
                .get(&succ)
                .map_or(true, |&known| base + weight < known);
            if still_relaxes {
                warn!("bellman-ford from {source}: negative cycle through {node} -> {succ}");
                return Err(Error::NegativeCycle);
            }
        }
    }

    debug!(
        "bellman-ford from {source}: reached {} nodes in {passes} passes",
        costs.len()
    );
    Ok(ShortestPaths::from_parts(source, predecessors, costs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::dijkstra,
        graph::{DirectedGraph, UndirectedGraph},
    };

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_negative_edge_without_cycle() {
        let graph = DirectedGraph::from_weighted_edges([
            (0, 1, 6.0),
            (0, 2, 7.0),
            (1, 2, 8.0),
            (1, 3, 5.0),
            (1, 4, -4.0),
            (2, 3, -3.0),
            (2, 4, 9.0),
            (3, 1, -2.0),
            (4, 0, 2.0),
            (4, 3, 7.0),
        ]);
        let paths = bellman_ford(n(0), &graph, None).unwrap();

        assert_eq!(paths.cost_to(n(1)), 2.0);
        assert_eq!(paths.cost_to(n(2)), 7.0);
        assert_eq!(paths.cost_to(n(3)), 4.0);
        assert_eq!(paths.cost_to(n(4)), -2.0);
        assert_eq!(paths.path_to(n(4)), Some(vec![n(0), n(2), n(3), n(1), n(4)]));
    }

    #[test]
    fn test_matches_dijkstra_on_non_negative_costs() {
        let graph = DirectedGraph::from_weighted_edges([
            (0, 1, 2.0),
            (1, 2, 2.0),
            (0, 2, 5.0),
            (2, 3, 1.0),
            (1, 3, 4.0),
        ]);
        let bf = bellman_ford(n(0), &graph, None).unwrap();
        let dj = dijkstra(n(0), &graph, None);

        for node in 0..4 {
            assert_eq!(bf.cost_to(n(node)), dj.cost_to(n(node)));
        }
    }

    #[test]
    fn test_reachable_negative_cycle() {
        let graph = DirectedGraph::from_weighted_edges([
            (0, 1, 1.0),
            (1, 2, -1.0),
            (2, 3, -1.0),
            (3, 1, -1.0),
        ]);
        assert_eq!(bellman_ford(n(0), &graph, None), Err(Error::NegativeCycle));
    }

    #[test]
    fn test_negative_self_loop() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 1, -0.5)]);
        assert_eq!(bellman_ford(n(0), &graph, None), Err(Error::NegativeCycle));
    }

    #[test]
    fn test_unreachable_negative_cycle_is_ignored() {
        let graph = DirectedGraph::from_weighted_edges([
            (0, 1, 1.0),
            (2, 3, -1.0),
            (3, 2, -1.0),
        ]);
        let paths = bellman_ford(n(0), &graph, None).unwrap();

        assert_eq!(paths.len(), 2);
        assert!(!paths.reaches(n(2)));
    }

    #[test]
    fn test_negative_undirected_edge_is_a_cycle() {
        let graph = UndirectedGraph::from_weighted_edges([(0, 1, -1.0)]);
        assert_eq!(bellman_ford(n(0), &graph, None), Err(Error::NegativeCycle));
    }

    #[test]
    fn test_zero_cost_cycle_is_fine() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 2, 0.0), (2, 1, 0.0)]);
        let paths = bellman_ford(n(0), &graph, None).unwrap();
        assert_eq!(paths.cost_to(n(2)), 1.0);
    }

    #[test]
    fn test_single_node() {
        let mut graph = DirectedGraph::new();
        let only = graph.new_node();
        let paths = bellman_ford(only, &graph, None).unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths.path_to(only), Some(vec![only]));
    }
}
