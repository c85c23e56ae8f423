//! One-shot capability resolution for graph algorithms.
//!
//! Every algorithm entry point builds a [`GraphAdapter`] exactly once. The
//! adapter asks the graph which capabilities it exposes and freezes the answer
//! into a fixed set of closures, so the hot loops of the algorithms only ever
//! call through those closures and never re-inspect the graph.
//!
//! # Resolution Rules
//!
//! | Concern | Precedence |
//! |---------|------------|
//! | Traversal | [`Directed`](crate::Directed) > [`Symmetric`](crate::Symmetric) (neighbors serve as both successors and predecessors) > no edges |
//! | Edge lookup | `edge_to` for directed graphs, `edge_between` otherwise |
//! | Cost | explicit argument > graph's [`Coster`](crate::Coster) > [`uniform_cost`] |
//! | Heuristic | explicit argument > graph's [`HeuristicCoster`](crate::HeuristicCoster) > [`null_heuristic`] |

use log::trace;

use crate::graph::{CostFn, Edge, Graph, HeuristicFn, NodeId};

/// Cost sentinel meaning "there is no edge" or "no path exists".
pub const INFINITE_COST: f64 = f64::INFINITY;

/// Cost function charging `1` for every existing edge.
///
/// Missing edges never reach a cost function in this crate; lookups that find
/// no edge are charged [`INFINITE_COST`] by the adapter.
#[must_use]
pub fn uniform_cost(_edge: Edge) -> f64 {
    1.0
}

/// Heuristic that always estimates `0`, turning A* into Dijkstra.
#[must_use]
pub fn null_heuristic(_node: NodeId, _goal: NodeId) -> f64 {
    0.0
}

type NodesFn<'g> = Box<dyn Fn(NodeId) -> Vec<NodeId> + 'g>;
type EdgeLookupFn<'g> = Box<dyn Fn(NodeId, NodeId) -> Option<Edge> + 'g>;
type EdgeCostFn<'g> = Box<dyn Fn(Edge) -> f64 + 'g>;
type EstimateFn<'g> = Box<dyn Fn(NodeId, NodeId) -> f64 + 'g>;

/// The resolved traversal, cost and heuristic functions of one graph.
///
/// The adapter borrows the graph for `'g`; the graph must not be mutated while
/// the adapter (and therefore the algorithm using it) is alive.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{DirectedGraph, GraphAdapter, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges([(0, 1, 2.5), (1, 2, 1.0)]);
/// let adapter = GraphAdapter::new(&graph, None, None);
///
/// assert!(adapter.is_directed());
/// assert_eq!(adapter.successors(NodeId::new(0)), vec![NodeId::new(1)]);
/// assert_eq!(adapter.edge_cost(NodeId::new(0), NodeId::new(1)), 2.5);
/// assert!(adapter.edge_cost(NodeId::new(1), NodeId::new(0)).is_infinite());
/// ```
pub struct GraphAdapter<'g> {
    nodes: Vec<NodeId>,
    directed: bool,
    successors: NodesFn<'g>,
    predecessors: NodesFn<'g>,
    edge_to: EdgeLookupFn<'g>,
    cost: EdgeCostFn<'g>,
    heuristic: EstimateFn<'g>,
}

impl<'g> GraphAdapter<'g> {
    /// Resolves the capabilities of `graph`.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph to adapt
    /// * `cost` - Optional cost override
    /// * `heuristic` - Optional heuristic override
    pub fn new<G>(graph: &'g G, cost: Option<CostFn<'g>>, heuristic: Option<HeuristicFn<'g>>) -> Self
    where
        G: Graph + ?Sized,
    {
        let nodes = graph.node_list();

        let directed_view = graph.as_directed();
        let symmetric_view = match directed_view {
            Some(_) => None,
            None => graph.as_symmetric(),
        };
        if directed_view.is_none() && symmetric_view.is_none() {
            trace!("graph exposes no traversal capability, treating it as edgeless");
        }

        let successors: NodesFn<'g> = match (directed_view, symmetric_view) {
            (Some(d), _) => Box::new(move |n| d.successors(n)),
            (None, Some(s)) => Box::new(move |n| s.neighbors(n)),
            (None, None) => Box::new(|_| Vec::new()),
        };
        let predecessors: NodesFn<'g> = match (directed_view, symmetric_view) {
            (Some(d), _) => Box::new(move |n| d.predecessors(n)),
            (None, Some(s)) => Box::new(move |n| s.neighbors(n)),
            (None, None) => Box::new(|_| Vec::new()),
        };
        let edge_to: EdgeLookupFn<'g> = match (directed_view, symmetric_view) {
            (Some(d), _) => Box::new(move |u, v| d.edge_to(u, v)),
            (None, Some(s)) => Box::new(move |u, v| s.edge_between(u, v)),
            (None, None) => Box::new(|_, _| None),
        };
        let directed = directed_view.is_some();

        let cost: EdgeCostFn<'g> = match (cost, graph.as_coster()) {
            (Some(explicit), _) => Box::new(explicit),
            (None, Some(coster)) => Box::new(move |e| coster.cost(e)),
            (None, None) => Box::new(uniform_cost),
        };

        let heuristic: EstimateFn<'g> = match (heuristic, graph.as_heuristic_coster()) {
            (Some(explicit), _) => Box::new(explicit),
            (None, Some(estimator)) => Box::new(move |n, goal| estimator.heuristic_cost(n, goal)),
            (None, None) => Box::new(null_heuristic),
        };

        GraphAdapter {
            nodes,
            directed,
            successors,
            predecessors,
            edge_to,
            cost,
            heuristic,
        }
    }

    /// Returns the node list captured when the adapter was built.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Returns `true` if traversal was resolved through the directed capability.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the successors of `node` (neighbors for symmetric graphs).
    #[must_use]
    pub fn successors(&self, node: NodeId) -> Vec<NodeId> {
        (self.successors)(node)
    }

    /// Returns the predecessors of `node` (neighbors for symmetric graphs).
    #[must_use]
    pub fn predecessors(&self, node: NodeId) -> Vec<NodeId> {
        (self.predecessors)(node)
    }

    /// Looks up the edge `from -> to` through the resolved edge lookup.
    #[must_use]
    pub fn edge_to(&self, from: NodeId, to: NodeId) -> Option<Edge> {
        (self.edge_to)(from, to)
    }

    /// Returns `true` if `candidate` is a successor of `node`.
    #[must_use]
    pub fn is_successor(&self, node: NodeId, candidate: NodeId) -> bool {
        self.edge_to(node, candidate).is_some()
    }

    /// Returns `true` if `candidate` is a predecessor of `node`.
    #[must_use]
    pub fn is_predecessor(&self, node: NodeId, candidate: NodeId) -> bool {
        self.edge_to(candidate, node).is_some()
    }

    /// Returns `true` if an edge joins `node` and `candidate` in either direction.
    #[must_use]
    pub fn is_neighbor(&self, node: NodeId, candidate: NodeId) -> bool {
        self.is_successor(node, candidate) || self.is_predecessor(node, candidate)
    }

    /// Returns the resolved cost of `edge`.
    #[must_use]
    pub fn cost(&self, edge: Edge) -> f64 {
        (self.cost)(edge)
    }

    /// Returns the cost of moving from `from` to `to`, or [`INFINITE_COST`]
    /// if no such edge exists.
    #[must_use]
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> f64 {
        self.edge_to(from, to)
            .map_or(INFINITE_COST, |edge| self.cost(edge))
    }

    /// Returns the cost of the edge `from -> to` if it can be traversed.
    ///
    /// `None` when no such edge exists or when its resolved cost is
    /// [`INFINITE_COST`] (or NaN), which a cost function uses to hide an edge.
    /// Every relaxation loop goes through this lookup.
    #[must_use]
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let cost = self.cost(self.edge_to(from, to)?);
        (cost < INFINITE_COST).then_some(cost)
    }

    /// Returns the resolved heuristic estimate from `node` to `goal`.
    #[must_use]
    pub fn heuristic(&self, node: NodeId, goal: NodeId) -> f64 {
        (self.heuristic)(node, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, UndirectedGraph};

    #[test]
    fn test_directed_resolution() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 3.0), (2, 1, 1.0)]);
        let adapter = GraphAdapter::new(&graph, None, None);

        assert!(adapter.is_directed());
        assert_eq!(adapter.successors(NodeId::new(0)), vec![NodeId::new(1)]);
        assert_eq!(
            adapter.predecessors(NodeId::new(1)),
            vec![NodeId::new(0), NodeId::new(2)]
        );
        assert!(adapter.is_successor(NodeId::new(0), NodeId::new(1)));
        assert!(!adapter.is_successor(NodeId::new(1), NodeId::new(0)));
        assert!(adapter.is_predecessor(NodeId::new(1), NodeId::new(2)));
        assert!(adapter.is_neighbor(NodeId::new(1), NodeId::new(0)));
    }

    #[test]
    fn test_symmetric_fallback() {
        let graph = UndirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 2, 1.0)]);
        let adapter = GraphAdapter::new(&graph, None, None);

        assert!(!adapter.is_directed());
        assert_eq!(
            adapter.successors(NodeId::new(1)),
            adapter.predecessors(NodeId::new(1))
        );
        assert!(adapter.is_successor(NodeId::new(1), NodeId::new(0)));
        assert!(adapter.is_successor(NodeId::new(0), NodeId::new(1)));
    }

    #[test]
    fn test_weight_hides_infinite_edges() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 2.0), (1, 2, 1.0)]);
        let hide_first = |e: Edge| {
            if e.head() == NodeId::new(0) {
                INFINITE_COST
            } else {
                1.0
            }
        };
        let adapter = GraphAdapter::new(&graph, Some(&hide_first), None);

        assert_eq!(adapter.weight(NodeId::new(0), NodeId::new(1)), None);
        assert_eq!(adapter.weight(NodeId::new(1), NodeId::new(2)), Some(1.0));
        assert_eq!(adapter.weight(NodeId::new(2), NodeId::new(0)), None);
        assert!(adapter.is_successor(NodeId::new(0), NodeId::new(1)));
    }

    #[test]
    fn test_cost_precedence() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 7.0)]);
        let edge = Edge::new(NodeId::new(0), NodeId::new(1));

        let from_graph = GraphAdapter::new(&graph, None, None);
        assert_eq!(from_graph.cost(edge), 7.0);

        let doubled = |e: Edge| graph.edge_weight(e).unwrap_or(INFINITE_COST) * 2.0;
        let explicit = GraphAdapter::new(&graph, Some(&doubled), None);
        assert_eq!(explicit.cost(edge), 14.0);
    }

    #[test]
    fn test_uniform_cost_without_coster() {
        struct Line;
        impl Graph for Line {
            fn node_list(&self) -> Vec<NodeId> {
                vec![NodeId::new(0), NodeId::new(1)]
            }
            fn has_node(&self, node: NodeId) -> bool {
                node.index() < 2
            }
            fn as_directed(&self) -> Option<&dyn crate::graph::Directed> {
                Some(self)
            }
        }
        impl crate::graph::Directed for Line {
            fn successors(&self, node: NodeId) -> Vec<NodeId> {
                if node.index() == 0 {
                    vec![NodeId::new(1)]
                } else {
                    Vec::new()
                }
            }
            fn predecessors(&self, node: NodeId) -> Vec<NodeId> {
                if node.index() == 1 {
                    vec![NodeId::new(0)]
                } else {
                    Vec::new()
                }
            }
            fn edge_to(&self, from: NodeId, to: NodeId) -> Option<Edge> {
                (from.index() == 0 && to.index() == 1).then(|| Edge::new(from, to))
            }
        }

        let adapter = GraphAdapter::new(&Line, None, None);
        assert_eq!(adapter.edge_cost(NodeId::new(0), NodeId::new(1)), 1.0);
        assert_eq!(adapter.edge_cost(NodeId::new(1), NodeId::new(0)), INFINITE_COST);
        assert_eq!(adapter.heuristic(NodeId::new(0), NodeId::new(1)), 0.0);
    }

    #[test]
    fn test_explicit_heuristic() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0)]);
        let estimate = |n: NodeId, goal: NodeId| (goal.index() as f64 - n.index() as f64).abs();
        let adapter = GraphAdapter::new(&graph, None, Some(&estimate));

        assert_eq!(adapter.heuristic(NodeId::new(0), NodeId::new(4)), 4.0);
    }

    #[test]
    fn test_no_traversal_capability() {
        struct Points;
        impl Graph for Points {
            fn node_list(&self) -> Vec<NodeId> {
                vec![NodeId::new(0), NodeId::new(1)]
            }
            fn has_node(&self, node: NodeId) -> bool {
                node.index() < 2
            }
        }

        let adapter = GraphAdapter::new(&Points, None, None);
        assert_eq!(adapter.nodes().len(), 2);
        assert!(adapter.successors(NodeId::new(0)).is_empty());
        assert!(adapter.edge_to(NodeId::new(0), NodeId::new(1)).is_none());
    }
}
