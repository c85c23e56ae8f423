//! Weighted directed graph storage.
//!
//! [`DirectedGraph`] is the reference implementation of the directed side of
//! the capability contract. It is used as the working copy inside Johnson's
//! algorithm, as a destination for [`copy_directed_graph`](crate::copy_directed_graph),
//! and as the fixture type throughout the tests.
//!
//! Adjacency is kept in ordered maps in both directions, so node, successor and
//! predecessor enumeration is always in ascending id order. This makes every
//! algorithm run over a `DirectedGraph` fully deterministic.

use std::collections::BTreeMap;

use crate::graph::{
    Coster, Crunch, Directed, Edge, EdgeListGraph, Graph, MutableDirectedGraph, NodeId,
    INFINITE_COST,
};

/// A directed graph with one `f64` cost per edge.
///
/// Node ids are arbitrary; they do not have to be dense. Parallel edges are
/// not supported: adding an edge that already exists replaces its cost.
///
/// # Thread Safety
///
/// `DirectedGraph` is [`Send`] and [`Sync`]. Build it single-threaded, then
/// share it immutably; the algorithms never mutate their input.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{Directed, DirectedGraph, Edge, Graph, MutableDirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// let a = graph.new_node();
/// let b = graph.new_node();
/// graph.add_directed_edge(Edge::new(a, b), 2.0);
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.successors(a), vec![b]);
/// assert_eq!(graph.predecessors(b), vec![a]);
/// assert_eq!(graph.edge_weight(Edge::new(a, b)), Some(2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectedGraph {
    /// Outgoing edges per node, with their cost
    successors: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
    /// Incoming edges per node, with their cost
    predecessors: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
}

impl DirectedGraph {
    /// Creates a new empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(head, tail, cost)` triples.
    ///
    /// Endpoints are added as needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphalgo::{DirectedGraph, Graph};
    ///
    /// let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 2, 4.0)]);
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_weighted_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut graph = Self::new();
        for (head, tail, cost) in edges {
            graph.add_directed_edge(Edge::new(NodeId::new(head), NodeId::new(tail)), cost);
        }
        graph
    }

    /// Adds a node with the next free id and returns that id.
    pub fn new_node(&mut self) -> NodeId {
        let id = self.next_node_id();
        MutableDirectedGraph::add_node(self, id);
        id
    }

    /// Removes a node together with every edge touching it.
    ///
    /// Returns `true` if the node existed.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        let Some(outgoing) = self.successors.remove(&node) else {
            return false;
        };
        let incoming = self.predecessors.remove(&node).unwrap_or_default();

        for succ in outgoing.keys() {
            if let Some(preds) = self.predecessors.get_mut(succ) {
                preds.remove(&node);
            }
        }
        for pred in incoming.keys() {
            if let Some(succs) = self.successors.get_mut(pred) {
                succs.remove(&node);
            }
        }
        true
    }

    /// Removes the edge `head -> tail`, returning its cost if it existed.
    pub fn remove_edge(&mut self, edge: Edge) -> Option<f64> {
        let cost = self.successors.get_mut(&edge.head())?.remove(&edge.tail())?;
        if let Some(preds) = self.predecessors.get_mut(&edge.tail()) {
            preds.remove(&edge.head());
        }
        Some(cost)
    }

    /// Returns the stored cost of `edge`, or `None` if the edge does not exist.
    #[must_use]
    pub fn edge_weight(&self, edge: Edge) -> Option<f64> {
        self.successors
            .get(&edge.head())
            .and_then(|succs| succs.get(&edge.tail()))
            .copied()
    }

    /// Returns `true` if the edge `head -> tail` exists.
    #[must_use]
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.edge_weight(edge).is_some()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.values().map(BTreeMap::len).sum()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Returns the number of outgoing edges of `node`.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.successors.get(&node).map_or(0, BTreeMap::len)
    }

    /// Returns the number of incoming edges of `node`.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.predecessors.get(&node).map_or(0, BTreeMap::len)
    }
}

impl Graph for DirectedGraph {
    fn node_list(&self) -> Vec<NodeId> {
        self.successors.keys().copied().collect()
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.successors.contains_key(&node)
    }

    fn node_count(&self) -> usize {
        self.successors.len()
    }

    fn as_directed(&self) -> Option<&dyn Directed> {
        Some(self)
    }

    fn as_coster(&self) -> Option<&dyn Coster> {
        Some(self)
    }
}

impl Directed for DirectedGraph {
    fn successors(&self, node: NodeId) -> Vec<NodeId> {
        self.successors
            .get(&node)
            .map(|succs| succs.keys().copied().collect())
            .unwrap_or_default()
    }

    fn predecessors(&self, node: NodeId) -> Vec<NodeId> {
        self.predecessors
            .get(&node)
            .map(|preds| preds.keys().copied().collect())
            .unwrap_or_default()
    }

    fn edge_to(&self, from: NodeId, to: NodeId) -> Option<Edge> {
        let edge = Edge::new(from, to);
        self.contains_edge(edge).then_some(edge)
    }
}

impl Coster for DirectedGraph {
    fn cost(&self, edge: Edge) -> f64 {
        self.edge_weight(edge).unwrap_or(INFINITE_COST)
    }
}

impl EdgeListGraph for DirectedGraph {
    fn edge_list(&self) -> Vec<Edge> {
        self.successors
            .iter()
            .flat_map(|(&head, succs)| succs.keys().map(move |&tail| Edge::new(head, tail)))
            .collect()
    }
}

impl MutableDirectedGraph for DirectedGraph {
    fn add_node(&mut self, node: NodeId) {
        self.successors.entry(node).or_default();
        self.predecessors.entry(node).or_default();
    }

    fn add_directed_edge(&mut self, edge: Edge, cost: f64) {
        MutableDirectedGraph::add_node(self, edge.head());
        MutableDirectedGraph::add_node(self, edge.tail());

        self.successors
            .entry(edge.head())
            .or_default()
            .insert(edge.tail(), cost);
        self.predecessors
            .entry(edge.tail())
            .or_default()
            .insert(edge.head(), cost);
    }

    fn next_node_id(&self) -> NodeId {
        self.successors
            .keys()
            .next_back()
            .map_or(NodeId::new(0), |last| NodeId::new(last.index() + 1))
    }
}

impl Crunch for DirectedGraph {
    fn crunch(&mut self) -> Vec<NodeId> {
        let original: Vec<NodeId> = self.successors.keys().copied().collect();
        let already_dense = original
            .iter()
            .enumerate()
            .all(|(idx, node)| node.index() == idx);
        if already_dense {
            return original;
        }

        let relabel: BTreeMap<NodeId, NodeId> = original
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, NodeId::new(idx)))
            .collect();

        let mut crunched = DirectedGraph::new();
        for &node in &original {
            MutableDirectedGraph::add_node(&mut crunched, relabel[&node]);
        }
        for (head, succs) in &self.successors {
            for (tail, &cost) in succs {
                crunched.add_directed_edge(Edge::new(relabel[head], relabel[tail]), cost);
            }
        }

        *self = crunched;
        original
    }
}
