//! Capability traits that make up the graph contract.
//!
//! Algorithms in this crate never depend on a concrete graph type. They accept
//! anything implementing [`Graph`] and discover, once per call, which optional
//! capabilities the value exposes. The capability queries on [`Graph`]
//! (`as_directed`, `as_symmetric`, `as_coster`, `as_heuristic_coster`) return
//! trait objects, so a graph opts into a capability simply by overriding the
//! matching query to return `Some(self)`.
//!
//! # Architecture
//!
//! - [`Graph`] - Required: node enumeration plus the capability queries
//! - [`Directed`] - Successors, predecessors and directed edge lookup
//! - [`Symmetric`] - Neighbors and undirected edge lookup
//! - [`Coster`] / [`HeuristicCoster`] - Graph-provided edge cost and heuristic
//! - [`EdgeListGraph`] - Edge enumeration (Prim, Kruskal)
//! - [`MutableGraph`] / [`MutableDirectedGraph`] - Destinations for copies and
//!   spanning trees
//! - [`Crunch`] - Compaction into a dense id space (Floyd-Warshall)
//!
//! # Minimal Requirements
//!
//! Each trait requires only what its consumers use. A graph that implements
//! neither [`Directed`] nor [`Symmetric`] is still a valid input; it simply
//! behaves as if it had no edges.

use crate::graph::{Edge, NodeId};

/// An explicit edge cost override, taking precedence over a graph's [`Coster`].
pub type CostFn<'a> = &'a dyn Fn(Edge) -> f64;

/// An explicit heuristic override, taking precedence over a graph's
/// [`HeuristicCoster`]. Called as `heuristic(node, goal)`.
pub type HeuristicFn<'a> = &'a dyn Fn(NodeId, NodeId) -> f64;

/// The base capability every graph provides.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{Graph, NodeId};
///
/// struct Isolated(usize);
///
/// impl Graph for Isolated {
///     fn node_list(&self) -> Vec<NodeId> {
///         (0..self.0).map(NodeId::new).collect()
///     }
///
///     fn has_node(&self, node: NodeId) -> bool {
///         node.index() < self.0
///     }
/// }
///
/// let graph = Isolated(3);
/// assert_eq!(graph.node_count(), 3);
/// assert!(graph.as_directed().is_none());
/// ```
pub trait Graph {
    /// Returns every node of the graph.
    fn node_list(&self) -> Vec<NodeId>;

    /// Returns `true` if the node belongs to the graph.
    fn has_node(&self, node: NodeId) -> bool;

    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize {
        self.node_list().len()
    }

    /// Exposes directed traversal, if the graph supports it.
    fn as_directed(&self) -> Option<&dyn Directed> {
        None
    }

    /// Exposes symmetric (undirected) traversal, if the graph supports it.
    fn as_symmetric(&self) -> Option<&dyn Symmetric> {
        None
    }

    /// Exposes the graph's own edge cost, if it has one.
    fn as_coster(&self) -> Option<&dyn Coster> {
        None
    }

    /// Exposes the graph's own heuristic, if it has one.
    fn as_heuristic_coster(&self) -> Option<&dyn HeuristicCoster> {
        None
    }
}

/// Directed traversal: distinct forward and backward adjacency.
pub trait Directed: Graph {
    /// Returns the nodes reachable over one outgoing edge of `node`.
    fn successors(&self, node: NodeId) -> Vec<NodeId>;

    /// Returns the nodes with an outgoing edge into `node`.
    fn predecessors(&self, node: NodeId) -> Vec<NodeId>;

    /// Returns the edge `from -> to`, or `None` if there is none.
    fn edge_to(&self, from: NodeId, to: NodeId) -> Option<Edge>;
}

/// Symmetric traversal: adjacency without a direction.
pub trait Symmetric: Graph {
    /// Returns every node sharing an edge with `node`.
    fn neighbors(&self, node: NodeId) -> Vec<NodeId>;

    /// Returns the edge joining `a` and `b` in either order, or `None`.
    fn edge_between(&self, a: NodeId, b: NodeId) -> Option<Edge>;
}

/// A graph that knows the cost of its own edges.
///
/// Implementations must return the same value for repeated calls with the same
/// edge for the duration of one algorithm invocation.
pub trait Coster {
    /// Returns the cost of traversing `edge`.
    fn cost(&self, edge: Edge) -> f64;
}

/// A graph that can estimate the remaining cost between two nodes.
///
/// For A* to return optimal paths the estimate must be admissible, that is it
/// must never exceed the true remaining cost.
pub trait HeuristicCoster {
    /// Returns the estimated cost from `node` to `goal`.
    fn heuristic_cost(&self, node: NodeId, goal: NodeId) -> f64;
}

/// A graph that can enumerate all of its edges.
///
/// Symmetric graphs report each undirected edge exactly once.
pub trait EdgeListGraph: Graph {
    /// Returns every edge of the graph.
    fn edge_list(&self) -> Vec<Edge>;
}

/// A symmetric graph that can be grown in place.
pub trait MutableGraph: Graph {
    /// Adds `node` if it is not already present.
    fn add_node(&mut self, node: NodeId);

    /// Adds an undirected edge with the given cost, inserting missing endpoints.
    fn add_undirected_edge(&mut self, edge: Edge, cost: f64);

    /// Returns an id that is not used by any node of the graph.
    fn next_node_id(&self) -> NodeId;
}

/// A directed graph that can be grown in place.
pub trait MutableDirectedGraph: Graph {
    /// Adds `node` if it is not already present.
    fn add_node(&mut self, node: NodeId);

    /// Adds the edge `head -> tail` with the given cost, inserting missing
    /// endpoints.
    fn add_directed_edge(&mut self, edge: Edge, cost: f64);

    /// Returns an id that is not used by any node of the graph.
    fn next_node_id(&self) -> NodeId;
}

/// A graph that can be finalized into a dense, index-addressable id space.
pub trait Crunch {
    /// Relabels the nodes into `0..node_count`, keeping their relative order.
    ///
    /// Returns, for every new index, the id the node had before crunching.
    /// A graph that is already dense is left untouched and the identity
    /// mapping is returned.
    fn crunch(&mut self) -> Vec<NodeId>;
}
