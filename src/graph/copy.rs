//! Structural copies between graph representations.
//!
//! Both functions copy every node of `src`, then every edge reachable through
//! the source's resolved traversal. Edge costs are taken from the source's
//! [`Coster`](crate::Coster) when it has one and default to
//! [`uniform_cost`](crate::uniform_cost) otherwise. Edges whose cost resolves
//! to [`INFINITE_COST`](crate::INFINITE_COST) count as absent and are not
//! copied. Existing content of `dst` is kept; copied edges overwrite edges with
//! the same endpoints.

use crate::graph::{CostFn, Edge, Graph, GraphAdapter, MutableDirectedGraph, MutableGraph};

/// Copies `src` into the directed graph `dst`.
///
/// A symmetric source yields both directions of each of its edges.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{copy_directed_graph, DirectedGraph, Graph, UndirectedGraph};
///
/// let src = UndirectedGraph::from_weighted_edges([(0, 1, 2.0)]);
/// let mut dst = DirectedGraph::new();
/// copy_directed_graph(&mut dst, &src);
///
/// assert_eq!(dst.node_count(), 2);
/// assert_eq!(dst.edge_count(), 2);
/// ```
pub fn copy_directed_graph<D, S>(dst: &mut D, src: &S)
where
    D: MutableDirectedGraph + ?Sized,
    S: Graph + ?Sized,
{
    copy_directed_graph_with_cost(dst, src, None);
}

/// Copies `src` into the directed graph `dst`, pricing edges with `cost`
/// instead of the source's own costs when given.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{copy_directed_graph_with_cost, DirectedGraph, Edge, NodeId};
///
/// let src = DirectedGraph::from_weighted_edges([(0, 1, 2.0), (1, 2, 3.0)]);
/// let tenfold = |e: Edge| src.edge_weight(e).unwrap_or(f64::INFINITY) * 10.0;
/// let mut dst = DirectedGraph::new();
/// copy_directed_graph_with_cost(&mut dst, &src, Some(&tenfold));
///
/// assert_eq!(dst.edge_weight(Edge::new(NodeId::new(1), NodeId::new(2))), Some(30.0));
/// ```
pub fn copy_directed_graph_with_cost<D, S>(dst: &mut D, src: &S, cost: Option<CostFn<'_>>)
where
    D: MutableDirectedGraph + ?Sized,
    S: Graph + ?Sized,
{
    let adapter = GraphAdapter::new(src, cost, None);
    for &node in adapter.nodes() {
        dst.add_node(node);
    }
    for &node in adapter.nodes() {
        for succ in adapter.successors(node) {
            if let Some(weight) = adapter.weight(node, succ) {
                dst.add_directed_edge(Edge::new(node, succ), weight);
            }
        }
    }
}

/// Copies `src` into the undirected graph `dst`.
///
/// A directed source has each of its edges flattened into an undirected one;
/// when both directions exist, the one visited last decides the cost.
pub fn copy_undirected_graph<D, S>(dst: &mut D, src: &S)
where
    D: MutableGraph + ?Sized,
    S: Graph + ?Sized,
{
    let adapter = GraphAdapter::new(src, None, None);
    for &node in adapter.nodes() {
        dst.add_node(node);
    }
    for &node in adapter.nodes() {
        for succ in adapter.successors(node) {
            if let Some(weight) = adapter.weight(node, succ) {
                dst.add_undirected_edge(Edge::new(node, succ), weight);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Directed, DirectedGraph, NodeId, Symmetric, UndirectedGraph};

    #[test]
    fn test_copy_directed_preserves_structure() {
        let mut src = DirectedGraph::from_weighted_edges([(0, 1, 1.5), (1, 2, -2.0)]);
        MutableDirectedGraph::add_node(&mut src, NodeId::new(5));

        let mut dst = DirectedGraph::new();
        copy_directed_graph(&mut dst, &src);

        assert_eq!(dst, src);
    }

    #[test]
    fn test_copy_directed_from_undirected() {
        let src = UndirectedGraph::from_weighted_edges([(0, 1, 3.0)]);
        let mut dst = DirectedGraph::new();
        copy_directed_graph(&mut dst, &src);

        assert_eq!(dst.successors(NodeId::new(1)), vec![NodeId::new(0)]);
        assert_eq!(
            dst.edge_weight(Edge::new(NodeId::new(1), NodeId::new(0))),
            Some(3.0)
        );
    }

    #[test]
    fn test_copy_undirected_from_directed() {
        let src = DirectedGraph::from_weighted_edges([(0, 1, 4.0), (2, 1, 1.0)]);
        let mut dst = UndirectedGraph::new();
        copy_undirected_graph(&mut dst, &src);

        assert_eq!(dst.edge_count(), 2);
        assert_eq!(
            dst.neighbors(NodeId::new(1)),
            vec![NodeId::new(0), NodeId::new(2)]
        );
        assert_eq!(
            dst.edge_weight(Edge::new(NodeId::new(1), NodeId::new(0))),
            Some(4.0)
        );
    }

    #[test]
    fn test_copy_with_cost_override_drops_hidden_edges() {
        let src = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 2, 1.0)]);
        let hide_second = |e: Edge| {
            if e.head() == NodeId::new(1) {
                f64::INFINITY
            } else {
                5.0
            }
        };
        let mut dst = DirectedGraph::new();
        copy_directed_graph_with_cost(&mut dst, &src, Some(&hide_second));

        assert_eq!(dst.node_count(), 3);
        assert_eq!(dst.edge_count(), 1);
        assert_eq!(
            dst.edge_weight(Edge::new(NodeId::new(0), NodeId::new(1))),
            Some(5.0)
        );
    }

    #[test]
    fn test_copy_keeps_isolated_nodes() {
        let mut src = UndirectedGraph::new();
        MutableGraph::add_node(&mut src, NodeId::new(3));

        let mut dst = UndirectedGraph::new();
        copy_undirected_graph(&mut dst, &src);

        assert!(dst.has_node(NodeId::new(3)));
        assert_eq!(dst.edge_count(), 0);
    }
}
