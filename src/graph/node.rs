//! Node identity for graphs handled by the algorithms in this crate.
//!
//! Every node is reduced to a stable, non-negative integer identity. That
//! identity is the only thing the algorithms compare, hash or index by, so any
//! domain type can take part as long as it can be mapped onto a [`NodeId`].

use std::fmt;

/// A strongly-typed identifier for a node.
///
/// `NodeId` wraps a `usize`, keeping node identities from being mixed up with
/// costs, counters or matrix offsets. Equality and hashing use the raw value
/// only.
///
/// Algorithms that address dense matrices (Floyd-Warshall) use the raw value
/// directly as a row/column index; those require the graph's ids to form the
/// gapless range `0..node_count`.
///
/// # Examples
///
/// ```rust
/// use graphalgo::NodeId;
///
/// let a = NodeId::new(0);
/// let b = NodeId::from(1usize);
///
/// assert_ne!(a, b);
/// assert!(a < b);
/// assert_eq!(b.index(), 1);
/// assert_eq!(format!("{b}"), "n1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw identity value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw identity of the node
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw identity value of this node.
    ///
    /// For graphs with a dense id space this doubles as the node's offset into
    /// per-node vectors and matrices.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
