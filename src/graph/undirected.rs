//! Weighted undirected graph storage.
//!
//! [`UndirectedGraph`] is the symmetric counterpart of
//! [`DirectedGraph`](crate::DirectedGraph). Each edge is stored once per
//! endpoint so neighbor enumeration is a single map lookup, and costs are
//! always looked up symmetrically.

use std::collections::BTreeMap;

use crate::graph::{
    Coster, Crunch, Edge, EdgeListGraph, Graph, MutableGraph, NodeId, Symmetric, INFINITE_COST,
};

/// An undirected graph with one `f64` cost per edge.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{Edge, Graph, NodeId, Symmetric, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_weighted_edges([(0, 1, 2.0), (1, 2, 3.0)]);
///
/// assert_eq!(graph.neighbors(NodeId::new(1)), vec![NodeId::new(0), NodeId::new(2)]);
/// assert_eq!(graph.edge_weight(Edge::new(NodeId::new(1), NodeId::new(0))), Some(2.0));
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UndirectedGraph {
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
}

impl UndirectedGraph {
    /// Creates a new empty undirected graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(a, b, cost)` triples.
    pub fn from_weighted_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut graph = Self::new();
        for (a, b, cost) in edges {
            graph.add_undirected_edge(Edge::new(NodeId::new(a), NodeId::new(b)), cost);
        }
        graph
    }

    /// Adds a node with the next free id and returns that id.
    pub fn new_node(&mut self) -> NodeId {
        let id = self.next_node_id();
        MutableGraph::add_node(self, id);
        id
    }

    /// Removes a node together with every edge touching it.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        let Some(neighbors) = self.adjacency.remove(&node) else {
            return false;
        };
        for neighbor in neighbors.keys() {
            if let Some(adjacent) = self.adjacency.get_mut(neighbor) {
                adjacent.remove(&node);
            }
        }
        true
    }

    /// Removes the edge joining the endpoints of `edge`, returning its cost.
    pub fn remove_edge(&mut self, edge: Edge) -> Option<f64> {
        let cost = self.adjacency.get_mut(&edge.head())?.remove(&edge.tail())?;
        if let Some(adjacent) = self.adjacency.get_mut(&edge.tail()) {
            adjacent.remove(&edge.head());
        }
        Some(cost)
    }

    /// Returns the stored cost of the edge joining the endpoints of `edge`,
    /// in either order.
    #[must_use]
    pub fn edge_weight(&self, edge: Edge) -> Option<f64> {
        self.adjacency
            .get(&edge.head())
            .and_then(|adjacent| adjacent.get(&edge.tail()))
            .copied()
    }

    /// Returns the number of undirected edges; self-loops count once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(node, adjacent)| adjacent.keys().filter(|&other| other >= node).count())
            .sum()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the number of edges touching `node`.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map_or(0, BTreeMap::len)
    }
}

impl Graph for UndirectedGraph {
    fn node_list(&self) -> Vec<NodeId> {
        self.adjacency.keys().copied().collect()
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn as_symmetric(&self) -> Option<&dyn Symmetric> {
        Some(self)
    }

    fn as_coster(&self) -> Option<&dyn Coster> {
        Some(self)
    }
}

impl Symmetric for UndirectedGraph {
    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.adjacency
            .get(&node)
            .map(|adjacent| adjacent.keys().copied().collect())
            .unwrap_or_default()
    }

    fn edge_between(&self, a: NodeId, b: NodeId) -> Option<Edge> {
        let edge = Edge::new(a, b);
        self.edge_weight(edge).map(|_| edge)
    }
}

impl Coster for UndirectedGraph {
    fn cost(&self, edge: Edge) -> f64 {
        self.edge_weight(edge).unwrap_or(INFINITE_COST)
    }
}

impl EdgeListGraph for UndirectedGraph {
    fn edge_list(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .flat_map(|(&node, adjacent)| {
                adjacent
                    .keys()
                    .filter(move |&&other| other >= node)
                    .map(move |&other| Edge::new(node, other))
            })
            .collect()
    }
}

impl MutableGraph for UndirectedGraph {
    fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    fn add_undirected_edge(&mut self, edge: Edge, cost: f64) {
        self.adjacency
            .entry(edge.head())
            .or_default()
            .insert(edge.tail(), cost);
        self.adjacency
            .entry(edge.tail())
            .or_default()
            .insert(edge.head(), cost);
    }

    fn next_node_id(&self) -> NodeId {
        self.adjacency
            .keys()
            .next_back()
            .map_or(NodeId::new(0), |last| NodeId::new(last.index() + 1))
    }
}

impl Crunch for UndirectedGraph {
    fn crunch(&mut self) -> Vec<NodeId> {
        let original: Vec<NodeId> = self.adjacency.keys().copied().collect();
        if original.iter().enumerate().all(|(idx, node)| node.index() == idx) {
            return original;
        }

        let relabel: BTreeMap<NodeId, NodeId> = original
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, NodeId::new(idx)))
            .collect();

        self.adjacency = std::mem::take(&mut self.adjacency)
            .into_iter()
            .map(|(node, adjacent)| {
                let adjacent = adjacent
                    .into_iter()
                    .map(|(other, cost)| (relabel[&other], cost))
                    .collect();
                (relabel[&node], adjacent)
            })
            .collect();
        original
    }
}
