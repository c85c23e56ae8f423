//! Indexed binary min-heap for best-first search.
//!
//! A* and Dijkstra need to lower the score of a node that is already queued.
//! [`IndexedMinHeap`] keeps, next to the heap array, a map from node id to the
//! node's current slot, so a decrease-key ([`IndexedMinHeap::fix`]) starts
//! sifting from the right position instead of searching for it.
//!
//! Each node can be queued at most once. Pushing a node that is already
//! present replaces its entry.

use rustc_hash::FxHashMap;

use crate::graph::NodeId;

/// One queued node with its accumulated cost and its priority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapEntry {
    /// The queued node
    pub node: NodeId,
    /// Cost accumulated from the search origin
    pub g: f64,
    /// Priority: `g` plus the heuristic estimate
    pub f: f64,
}

impl HeapEntry {
    /// Creates a new heap entry.
    #[must_use]
    pub const fn new(node: NodeId, g: f64, f: f64) -> Self {
        HeapEntry { node, g, f }
    }
}

/// Binary min-heap ordered by [`HeapEntry::f`], addressable by node.
///
/// # Examples
///
/// ```rust
/// use graphalgo::utils::{HeapEntry, IndexedMinHeap};
/// use graphalgo::NodeId;
///
/// let mut heap = IndexedMinHeap::new();
/// heap.push(HeapEntry::new(NodeId::new(0), 5.0, 5.0));
/// heap.push(HeapEntry::new(NodeId::new(1), 3.0, 3.0));
/// heap.fix(NodeId::new(0), 1.0, 1.0);
///
/// assert_eq!(heap.pop().map(|e| e.node), Some(NodeId::new(0)));
/// assert_eq!(heap.pop().map(|e| e.node), Some(NodeId::new(1)));
/// assert!(heap.pop().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndexedMinHeap {
    entries: Vec<HeapEntry>,
    positions: FxHashMap<NodeId, usize>,
}

impl IndexedMinHeap {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of queued nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queues `entry` in O(log n).
    pub fn push(&mut self, entry: HeapEntry) {
        if self.positions.contains_key(&entry.node) {
            self.fix(entry.node, entry.g, entry.f);
            return;
        }
        let slot = self.entries.len();
        self.positions.insert(entry.node, slot);
        self.entries.push(entry);
        self.sift_up(slot);
    }

    /// Removes and returns the entry with the lowest `f` in O(log n).
    pub fn pop(&mut self) -> Option<HeapEntry> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap(0, last);
        let entry = self.entries.pop()?;
        self.positions.remove(&entry.node);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(entry)
    }

    /// Replaces the scores of a queued node and restores heap order in
    /// O(log n). Does nothing if `node` is not queued.
    pub fn fix(&mut self, node: NodeId, g: f64, f: f64) {
        let Some(&slot) = self.positions.get(&node) else {
            return;
        };
        self.entries[slot].g = g;
        self.entries[slot].f = f;
        let slot = self.sift_up(slot);
        self.sift_down(slot);
    }

    /// Returns the queued entry for `node`, if any, in O(1).
    #[must_use]
    pub fn find(&self, node: NodeId) -> Option<&HeapEntry> {
        self.positions.get(&node).map(|&slot| &self.entries[slot])
    }

    /// Returns `true` if `node` is queued.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.positions.contains_key(&node)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.entries[a].f < self.entries[b].f
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.positions.insert(self.entries[a].node, a);
        self.positions.insert(self.entries[b].node, b);
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}
