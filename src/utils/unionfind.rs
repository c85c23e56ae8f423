//! Disjoint-set forest keyed by node id.

use rustc_hash::FxHashMap;

use crate::graph::NodeId;

/// Tracks a partition of nodes into disjoint groups.
///
/// Uses union by rank and path compression, so `find` and `union` run in
/// near-constant amortized time. Nodes must be registered with
/// [`DisjointSet::make_set`] before they take part in a union; `find` on an
/// unknown node returns `None`.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{DisjointSet, NodeId};
///
/// let mut sets = DisjointSet::new();
/// for id in 0..4 {
///     sets.make_set(NodeId::new(id));
/// }
///
/// assert!(sets.union(NodeId::new(0), NodeId::new(1)));
/// assert!(!sets.union(NodeId::new(1), NodeId::new(0)));
/// assert!(sets.same_set(NodeId::new(0), NodeId::new(1)));
/// assert!(!sets.same_set(NodeId::new(0), NodeId::new(3)));
/// assert_eq!(sets.set_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: FxHashMap<NodeId, NodeId>,
    rank: FxHashMap<NodeId, u32>,
    sets: usize,
}

impl DisjointSet {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `node` as a singleton group. Already registered nodes are
    /// left where they are.
    pub fn make_set(&mut self, node: NodeId) {
        if self.parent.contains_key(&node) {
            return;
        }
        self.parent.insert(node, node);
        self.rank.insert(node, 0);
        self.sets += 1;
    }

    /// Returns the representative of the group holding `node`.
    pub fn find(&mut self, node: NodeId) -> Option<NodeId> {
        let mut root = *self.parent.get(&node)?;
        while let Some(&parent) = self.parent.get(&root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = node;
        while current != root {
            let next = self.parent.insert(current, root).unwrap_or(root);
            current = next;
        }
        Some(root)
    }

    /// Merges the groups of `a` and `b`.
    ///
    /// Returns `true` if two distinct groups were merged, `false` if `a` and
    /// `b` were already together or either node is unknown.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank.get(&root_a).copied().unwrap_or(0);
        let rank_b = self.rank.get(&root_b).copied().unwrap_or(0);
        let (child, root) = if rank_a < rank_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent.insert(child, root);
        if rank_a == rank_b {
            self.rank.insert(root, rank_a + 1);
        }
        self.sets -= 1;
        true
    }

    /// Returns `true` if both nodes are known and in the same group.
    pub fn same_set(&mut self, a: NodeId, b: NodeId) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }

    /// Returns the number of disjoint groups.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no node is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
