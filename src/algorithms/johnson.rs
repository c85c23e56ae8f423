//! Johnson's all-pairs shortest paths for sparse graphs with negative edges.
//!
//! The algorithm turns a graph with negative edge costs (but no negative
//! cycle) into one with non-negative costs that has the same shortest paths,
//! then runs Dijkstra from every node:
//!
//! 1. Copy the graph into a [`DirectedGraph`] working copy, leaving out edges
//!    whose cost is [`INFINITE_COST`]
//! 2. Add a synthetic node with a zero-cost edge to every node
//! 3. Run Bellman-Ford from the synthetic node, giving a potential `h(v)`
//! 4. Reweight every edge as `w(u, v) + h(u) - h(v)`, which is non-negative
//! 5. Drop the synthetic node
//! 6. Run Dijkstra from every node and map each cost back with
//!    `cost - h(source) + h(target)`
//!
//! Costs returned by [`JohnsonPaths`] are always in terms of the original
//! edge weights.

use log::debug;
use rustc_hash::FxHashMap;

use crate::{
    algorithms::{bellman_ford, dijkstra, Path, ShortestPaths},
    graph::{
        copy_directed_graph_with_cost, CostFn, Coster, DirectedGraph, Edge, EdgeListGraph, Graph,
        GraphAdapter, MutableDirectedGraph, NodeId, INFINITE_COST,
    },
    Error, Result,
};

/// Result of [`johnson`]: one [`ShortestPaths`] tree per source node.
#[derive(Debug, Clone, PartialEq)]
pub struct JohnsonPaths {
    trees: FxHashMap<NodeId, ShortestPaths>,
}

impl JohnsonPaths {
    /// Returns the shortest paths starting at `source`.
    #[must_use]
    pub fn from_source(&self, source: NodeId) -> Option<&ShortestPaths> {
        self.trees.get(&source)
    }

    /// Returns the cheapest path from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if `from` is not a node of the graph
    /// - [`Error::NoPath`] if `to` is unreachable from `from`
    pub fn path(&self, from: NodeId, to: NodeId) -> Result<Path> {
        let tree = self.trees.get(&from).ok_or(Error::NodeNotFound(from))?;
        let nodes = tree.path_to(to).ok_or(Error::NoPath { from, to })?;
        Ok(Path::new(nodes, tree.cost_to(to)))
    }

    /// Returns the cheapest cost from `from` to `to`, or [`INFINITE_COST`]
    /// if there is no path.
    #[must_use]
    pub fn cost(&self, from: NodeId, to: NodeId) -> f64 {
        self.trees
            .get(&from)
            .map_or(INFINITE_COST, |tree| tree.cost_to(to))
    }

    /// Returns the per-source costs as nested maps.
    #[must_use]
    pub fn costs(&self) -> FxHashMap<NodeId, FxHashMap<NodeId, f64>> {
        self.trees
            .iter()
            .map(|(&source, tree)| (source, tree.costs().clone()))
            .collect()
    }

    /// Returns the per-source paths as nested maps.
    #[must_use]
    pub fn paths(&self) -> FxHashMap<NodeId, FxHashMap<NodeId, Vec<NodeId>>> {
        self.trees
            .iter()
            .map(|(&source, tree)| (source, tree.paths()))
            .collect()
    }

    /// Returns the number of source nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Returns `true` if the graph had no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

/// Computes shortest paths between every pair of nodes, tolerating negative
/// edge costs.
///
/// Node ids need not be dense. Symmetric graphs are treated as directed with
/// both directions of each edge, so any negative undirected edge is a
/// negative cycle.
///
/// # Errors
///
/// Returns [`Error::NegativeCycle`] if the graph contains a cycle with
/// negative total cost anywhere. No partial result is returned.
///
/// # Complexity
///
/// - Time: O(V E log V)
/// - Space: O(V²) for the result
///
/// # Examples
///
/// ```rust
/// use graphalgo::{johnson, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges([(0, 1, 3.0), (1, 2, -2.0), (0, 2, 2.0)]);
/// let paths = johnson(&graph, None)?;
///
/// assert_eq!(paths.cost(NodeId::new(0), NodeId::new(2)), 1.0);
/// # Ok::<(), graphalgo::Error>(())
/// ```
pub fn johnson<G>(graph: &G, cost: Option<CostFn<'_>>) -> Result<JohnsonPaths>
where
    G: Graph + ?Sized,
{
    let adapter = GraphAdapter::new(graph, cost, None);

    let mut working = DirectedGraph::new();
    copy_directed_graph_with_cost(&mut working, graph, cost);

    let anchor = working.next_node_id();
    for &node in adapter.nodes() {
        working.add_directed_edge(Edge::new(anchor, node), 0.0);
    }
    let potential = bellman_ford(anchor, &working, None)?;
    working.remove_node(anchor);

    let h = |node: NodeId| potential.cost_to(node);
    let mut reweighted = DirectedGraph::new();
    for &node in adapter.nodes() {
        reweighted.add_node(node);
    }
    for edge in working.edge_list() {
        let weight = working.cost(edge);
        reweighted.add_directed_edge(edge, weight + h(edge.head()) - h(edge.tail()));
    }

    let mut trees = FxHashMap::default();
    for &source in adapter.nodes() {
        let mut tree = dijkstra(source, &reweighted, None);
        for (&target, cost) in &mut tree.costs {
            *cost = *cost - h(source) + h(target);
        }
        trees.insert(source, tree);
    }

    debug!(
        "johnson: {} sources over {} reweighted edges",
        trees.len(),
        reweighted.edge_count()
    );
    Ok(JohnsonPaths { trees })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UndirectedGraph;

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_costs_are_in_original_terms() {
        let graph = DirectedGraph::from_weighted_edges([
            (0, 1, -5.0),
            (0, 2, 2.0),
            (0, 3, 3.0),
            (1, 2, 4.0),
            (2, 3, 1.0),
        ]);
        let paths = johnson(&graph, None).unwrap();

        assert_eq!(paths.cost(n(0), n(1)), -5.0);
        assert_eq!(paths.cost(n(0), n(2)), -1.0);
        assert_eq!(paths.cost(n(0), n(3)), 0.0);
        assert_eq!(paths.cost(n(1), n(3)), 5.0);
        assert_eq!(paths.cost(n(3), n(0)), INFINITE_COST);

        let path = paths.path(n(0), n(3)).unwrap();
        assert_eq!(path.nodes, vec![n(0), n(1), n(2), n(3)]);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn test_matches_bellman_ford_per_source() {
        let graph = DirectedGraph::from_weighted_edges([
            (0, 1, 2.0),
            (1, 2, -1.0),
            (2, 0, 4.0),
            (2, 3, 2.0),
            (3, 1, -0.5),
            (4, 3, 1.0),
        ]);
        let paths = johnson(&graph, None).unwrap();

        for source in 0..5 {
            let reference = bellman_ford(n(source), &graph, None).unwrap();
            for target in 0..5 {
                let expected = reference.cost_to(n(target));
                let actual = paths.cost(n(source), n(target));
                if expected.is_infinite() {
                    assert!(actual.is_infinite());
                } else {
                    assert!((expected - actual).abs() < 1e-9, "{source}->{target}");
                }
            }
        }
    }

    #[test]
    fn test_negative_cycle() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 2, -3.0), (2, 0, 1.0)]);
        assert_eq!(johnson(&graph, None), Err(Error::NegativeCycle));
    }

    #[test]
    fn test_unreachable_negative_cycle_still_fails() {
        // Every node hangs off the synthetic source, so no cycle is out of reach
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (2, 3, -1.0), (3, 2, -1.0)]);
        assert_eq!(johnson(&graph, None), Err(Error::NegativeCycle));
    }

    #[test]
    fn test_sparse_ids() {
        let graph = DirectedGraph::from_weighted_edges([(10, 30, 2.0), (30, 20, -1.0)]);
        let paths = johnson(&graph, None).unwrap();

        assert_eq!(paths.len(), 3);
        assert_eq!(paths.cost(n(10), n(20)), 1.0);
        assert_eq!(
            paths.path(n(10), n(20)).unwrap().nodes,
            vec![n(10), n(30), n(20)]
        );
    }

    #[test]
    fn test_query_errors() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0)]);
        let paths = johnson(&graph, None).unwrap();

        assert_eq!(paths.path(n(5), n(0)), Err(Error::NodeNotFound(n(5))));
        assert_eq!(
            paths.path(n(1), n(0)),
            Err(Error::NoPath { from: n(1), to: n(0) })
        );
        assert!(paths.from_source(n(0)).is_some());
    }

    #[test]
    fn test_undirected_input() {
        let graph = UndirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 2, 2.0)]);
        let paths = johnson(&graph, None).unwrap();

        assert_eq!(paths.cost(n(2), n(0)), 3.0);
        assert_eq!(paths.costs()[&n(0)].len(), 3);
        assert_eq!(paths.paths()[&n(1)][&n(2)], vec![n(1), n(2)]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = DirectedGraph::new();
        let paths = johnson(&graph, None).unwrap();
        assert!(paths.is_empty());
    }
}
