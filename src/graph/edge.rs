//! Edge values exchanged between graphs and algorithms.
//!
//! An [`Edge`] is nothing more than an ordered pair of node identities. Whether
//! the pair is interpreted as directed or symmetric is decided by the graph that
//! hands it out (`edge_to` vs. `edge_between`), never by the edge itself.

use std::fmt;

use crate::graph::NodeId;

/// An ordered `(head, tail)` pair of nodes.
///
/// `head` is the node the edge leaves and `tail` the node it reaches. For
/// symmetric graphs the order reflects the query that produced the edge; cost
/// functions for such graphs must return the same value for both orders.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{Edge, NodeId};
///
/// let edge = Edge::new(NodeId::new(0), NodeId::new(1));
/// assert_eq!(edge.head(), NodeId::new(0));
/// assert_eq!(edge.tail(), NodeId::new(1));
/// assert_eq!(edge.reversed(), Edge::new(NodeId::new(1), NodeId::new(0)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    head: NodeId,
    tail: NodeId,
}

impl Edge {
    /// Creates an edge leaving `head` and reaching `tail`.
    #[must_use]
    #[inline]
    pub const fn new(head: NodeId, tail: NodeId) -> Self {
        Edge { head, tail }
    }

    /// Returns the node this edge leaves.
    #[must_use]
    #[inline]
    pub const fn head(self) -> NodeId {
        self.head
    }

    /// Returns the node this edge reaches.
    #[must_use]
    #[inline]
    pub const fn tail(self) -> NodeId {
        self.tail
    }

    /// Returns the same pair with head and tail swapped.
    #[must_use]
    #[inline]
    pub const fn reversed(self) -> Self {
        Edge {
            head: self.tail,
            tail: self.head,
        }
    }

    /// Returns `true` if `node` is one of the two endpoints.
    #[must_use]
    #[inline]
    pub fn touches(self, node: NodeId) -> bool {
        self.head == node || self.tail == node
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -> {})", self.head.index(), self.tail.index())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.head, self.tail)
    }
}

impl From<(NodeId, NodeId)> for Edge {
    #[inline]
    fn from((head, tail): (NodeId, NodeId)) -> Self {
        Edge::new(head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_endpoints() {
        let edge = Edge::new(NodeId::new(3), NodeId::new(7));
        assert_eq!(edge.head(), NodeId::new(3));
        assert_eq!(edge.tail(), NodeId::new(7));
        assert!(edge.touches(NodeId::new(3)));
        assert!(edge.touches(NodeId::new(7)));
        assert!(!edge.touches(NodeId::new(5)));
    }

    #[test]
    fn test_edge_order_matters() {
        let forward = Edge::new(NodeId::new(0), NodeId::new(1));
        assert_ne!(forward, forward.reversed());
        assert_eq!(forward, forward.reversed().reversed());
    }

    #[test]
    fn test_edge_from_tuple() {
        let edge: Edge = (NodeId::new(1), NodeId::new(2)).into();
        assert_eq!(edge, Edge::new(NodeId::new(1), NodeId::new(2)));
    }

    #[test]
    fn test_edge_formatting() {
        let edge = Edge::new(NodeId::new(1), NodeId::new(2));
        assert_eq!(format!("{edge:?}"), "Edge(1 -> 2)");
        assert_eq!(format!("{edge}"), "n1->n2");
    }
}
