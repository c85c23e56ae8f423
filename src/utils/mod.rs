//! Data structures backing the algorithms.
//!
//! - [`IndexedMinHeap`] - decrease-key priority queue for A* and Dijkstra
//! - [`DisjointSet`] - union-find for Kruskal and component grouping
//! - [`BitSet`] - packed position sets for the dominator fixed point

mod bitset;
mod heap;
mod unionfind;

pub use bitset::BitSet;
pub use heap::{HeapEntry, IndexedMinHeap};
pub use unionfind::DisjointSet;
