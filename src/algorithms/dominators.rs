//! Dominator and post-dominator sets by iterative fixed point.
//!
//! A node `d` **dominates** a node `n` if every path from the root to `n`
//! passes through `d`. Dually, `d` **post-dominates** `n` if every path from
//! `n` to the exit passes through `d`.
//!
//! # Algorithm
//!
//! Every set starts full except the root's, which holds only the root. Each
//! pass recomputes, for every other node with at least one predecessor,
//!
//! ```text
//! dom(n) = {n} ∪ ⋂ { dom(p) | p ∈ pred(n) }
//! ```
//!
//! until a full pass changes nothing. Sets only ever shrink, so this
//! terminates. Post-dominators run the same iteration over successors from the
//! exit node.
//!
//! Nodes the root cannot reach never receive a constraint from the root and
//! keep the full node set. This is the defined result for disconnected input,
//! not an error.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use rustc_hash::FxHashMap;

use crate::{
    graph::{Graph, GraphAdapter, NodeId},
    utils::BitSet,
    Error, Result,
};

/// Dominator set of every node, relative to one root.
///
/// Produced by [`dominators`] and [`post_dominators`]. For post-dominators
/// the root is the exit node and "dominates" reads "post-dominates".
///
/// # Examples
///
/// ```rust
/// use graphalgo::{dominators, DirectedGraph, NodeId};
///
/// // Diamond: 0 -> {1, 2} -> 3
/// let graph = DirectedGraph::from_weighted_edges([
///     (0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0),
/// ]);
/// let doms = dominators(NodeId::new(0), &graph)?;
///
/// assert!(doms.dominates(NodeId::new(0), NodeId::new(3)));
/// assert!(!doms.dominates(NodeId::new(1), NodeId::new(3)));
/// assert_eq!(doms.immediate_dominator(NodeId::new(3)), Some(NodeId::new(0)));
/// # Ok::<(), graphalgo::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DominatorSets {
    root: NodeId,
    nodes: Vec<NodeId>,
    position: FxHashMap<NodeId, usize>,
    sets: Vec<BitSet>,
    reachable: BitSet,
}

impl DominatorSets {
    /// Returns the node the analysis is rooted at.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns `true` if `a` dominates `b`. Every node dominates itself.
    #[must_use]
    pub fn dominates(&self, a: NodeId, b: NodeId) -> bool {
        match (self.position.get(&a), self.position.get(&b)) {
            (Some(&a), Some(&b)) => self.sets[b].contains(a),
            _ => false,
        }
    }

    /// Returns `true` if `a` dominates `b` and `a != b`.
    #[must_use]
    pub fn strictly_dominates(&self, a: NodeId, b: NodeId) -> bool {
        a != b && self.dominates(a, b)
    }

    /// Returns the dominators of `node` in ascending id order, or `None` if
    /// `node` is not in the graph.
    #[must_use]
    pub fn dominators_of(&self, node: NodeId) -> Option<Vec<NodeId>> {
        let &pos = self.position.get(&node)?;
        let mut members: Vec<NodeId> = self.sets[pos].iter().map(|idx| self.nodes[idx]).collect();
        members.sort_unstable();
        Some(members)
    }

    /// Returns the closest strict dominator of `node`.
    ///
    /// That is the strict dominator whose own set is exactly one smaller.
    /// `None` for the root, for unknown nodes and for nodes the root does not
    /// reach.
    #[must_use]
    pub fn immediate_dominator(&self, node: NodeId) -> Option<NodeId> {
        let &pos = self.position.get(&node)?;
        if node == self.root || !self.reachable.contains(pos) {
            return None;
        }
        let set = &self.sets[pos];
        let target = set.len().checked_sub(1)?;
        set.iter()
            .filter(|&idx| idx != pos)
            .find(|&idx| self.sets[idx].len() == target)
            .map(|idx| self.nodes[idx])
    }

    /// Returns every dominator set as an ordered map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<NodeId, BTreeSet<NodeId>> {
        self.nodes
            .iter()
            .zip(&self.sets)
            .map(|(&node, set)| (node, set.iter().map(|idx| self.nodes[idx]).collect()))
            .collect()
    }

    /// Returns the number of nodes covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node is covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Computes the dominator set of every node with respect to `root`.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `root` is not in the graph.
///
/// # Complexity
///
/// - Time: O(V · E · V / 64) in the worst case; a handful of passes in practice
/// - Space: O(V² / 64)
pub fn dominators<G>(root: NodeId, graph: &G) -> Result<DominatorSets>
where
    G: Graph + ?Sized,
{
    let adapter = GraphAdapter::new(graph, None, None);
    fixed_point(root, &adapter, |node| adapter.predecessors(node))
}

/// Computes the post-dominator set of every node with respect to `exit`.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `exit` is not in the graph.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{post_dominators, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges([
///     (0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0),
/// ]);
/// let pdoms = post_dominators(NodeId::new(3), &graph)?;
///
/// assert!(pdoms.dominates(NodeId::new(3), NodeId::new(0)));
/// assert_eq!(pdoms.dominators_of(NodeId::new(1)), Some(vec![NodeId::new(1), NodeId::new(3)]));
/// # Ok::<(), graphalgo::Error>(())
/// ```
pub fn post_dominators<G>(exit: NodeId, graph: &G) -> Result<DominatorSets>
where
    G: Graph + ?Sized,
{
    let adapter = GraphAdapter::new(graph, None, None);
    fixed_point(exit, &adapter, |node| adapter.successors(node))
}

fn fixed_point<F>(root: NodeId, adapter: &GraphAdapter<'_>, inbound: F) -> Result<DominatorSets>
where
    F: Fn(NodeId) -> Vec<NodeId>,
{
    let nodes = adapter.nodes().to_vec();
    let position: FxHashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(pos, &node)| (node, pos))
        .collect();
    let &root_pos = position.get(&root).ok_or(Error::NodeNotFound(root))?;
    let n = nodes.len();

    let inbound: Vec<Vec<usize>> = nodes
        .iter()
        .map(|&node| {
            inbound(node)
                .into_iter()
                .filter_map(|other| position.get(&other).copied())
                .collect()
        })
        .collect();

    let mut sets: Vec<BitSet> = (0..n).map(|_| BitSet::full(n)).collect();
    sets[root_pos] = BitSet::singleton(n, root_pos);

    let mut outbound: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (pos, preds) in inbound.iter().enumerate() {
        for &pred in preds {
            outbound[pred].push(pos);
        }
    }
    let mut reachable = BitSet::singleton(n, root_pos);
    let mut worklist = vec![root_pos];
    while let Some(pos) = worklist.pop() {
        for &next in &outbound[pos] {
            if reachable.insert(next) {
                worklist.push(next);
            }
        }
    }

    let mut passes = 0;
    loop {
        passes += 1;
        let mut changed = false;
        for (pos, preds) in inbound.iter().enumerate() {
            if pos == root_pos || preds.is_empty() {
                continue;
            }
            // Built apart from `sets`, so a self-loop reads the old value
            let mut next = BitSet::full(n);
            for &pred in preds {
                next.intersect_with(&sets[pred]);
            }
            next.insert(pos);
            if next != sets[pos] {
                sets[pos] = next;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    debug!(
        "dominators from {root}: fixed point over {n} nodes ({} reachable) after {passes} passes",
        reachable.len()
    );
    Ok(DominatorSets {
        root,
        nodes,
        position,
        sets,
        reachable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableDirectedGraph};

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    fn ids(nodes: &[usize]) -> Vec<NodeId> {
        nodes.iter().copied().map(NodeId::new).collect()
    }

    /// Creates a CFG with a loop: 0 -> 1 -> 2 -> 1, 2 -> 3
    fn create_loop_cfg() -> DirectedGraph {
        DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 1, 1.0), (2, 3, 1.0)])
    }

    #[test]
    fn test_root_dominates_only_itself() {
        let doms = dominators(n(0), &create_loop_cfg()).unwrap();
        assert_eq!(doms.dominators_of(n(0)), Some(ids(&[0])));
        assert_eq!(doms.root(), n(0));
    }

    #[test]
    fn test_loop_dominators() {
        let doms = dominators(n(0), &create_loop_cfg()).unwrap();

        assert_eq!(doms.dominators_of(n(1)), Some(ids(&[0, 1])));
        assert_eq!(doms.dominators_of(n(2)), Some(ids(&[0, 1, 2])));
        assert_eq!(doms.dominators_of(n(3)), Some(ids(&[0, 1, 2, 3])));
        assert_eq!(doms.immediate_dominator(n(3)), Some(n(2)));
        assert_eq!(doms.immediate_dominator(n(1)), Some(n(0)));
        assert_eq!(doms.immediate_dominator(n(0)), None);
        assert!(doms.strictly_dominates(n(1), n(2)));
        assert!(!doms.strictly_dominates(n(2), n(2)));
    }

    #[test]
    fn test_diamond() {
        let graph = DirectedGraph::from_weighted_edges([
            (0, 1, 1.0),
            (0, 2, 1.0),
            (1, 3, 1.0),
            (2, 3, 1.0),
        ]);
        let doms = dominators(n(0), &graph).unwrap();

        assert_eq!(doms.dominators_of(n(3)), Some(ids(&[0, 3])));
        assert!(!doms.dominates(n(1), n(3)));
        assert!(!doms.dominates(n(2), n(3)));
    }

    #[test]
    fn test_unreachable_node_keeps_full_set() {
        let mut graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (5, 1, 1.0)]);
        graph.add_node(n(9));
        let doms = dominators(n(0), &graph).unwrap();

        // 9 has no predecessors; 5 has none either
        assert_eq!(doms.dominators_of(n(9)), Some(ids(&[0, 1, 5, 9])));
        assert_eq!(doms.dominators_of(n(5)), Some(ids(&[0, 1, 5, 9])));
        // 1 is reached from 0 and from the unreachable 5
        assert_eq!(doms.dominators_of(n(1)), Some(ids(&[0, 1])));
        assert_eq!(doms.immediate_dominator(n(9)), None);
    }

    #[test]
    fn test_missing_root() {
        let graph = create_loop_cfg();
        assert!(matches!(
            dominators(n(42), &graph),
            Err(Error::NodeNotFound(node)) if node == n(42)
        ));
    }

    #[test]
    fn test_post_dominators() {
        // 0 -> 1 -> 3, 0 -> 2 -> 3, 3 -> 4
        let graph = DirectedGraph::from_weighted_edges([
            (0, 1, 1.0),
            (0, 2, 1.0),
            (1, 3, 1.0),
            (2, 3, 1.0),
            (3, 4, 1.0),
        ]);
        let pdoms = post_dominators(n(4), &graph).unwrap();

        assert_eq!(pdoms.dominators_of(n(4)), Some(ids(&[4])));
        assert_eq!(pdoms.dominators_of(n(0)), Some(ids(&[0, 3, 4])));
        assert_eq!(pdoms.dominators_of(n(1)), Some(ids(&[1, 3, 4])));
        assert_eq!(pdoms.immediate_dominator(n(0)), Some(n(3)));
    }

    #[test]
    fn test_chain_idom_with_full_sets() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0)]);
        let doms = dominators(n(0), &graph).unwrap();
        assert_eq!(doms.immediate_dominator(n(1)), Some(n(0)));
    }

    #[test]
    fn test_self_loop() {
        let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 1, 1.0)]);
        let doms = dominators(n(0), &graph).unwrap();
        assert_eq!(doms.dominators_of(n(1)), Some(ids(&[0, 1])));
    }

    #[test]
    fn test_to_map_and_sparse_ids() {
        let graph = DirectedGraph::from_weighted_edges([(10, 20, 1.0), (20, 30, 1.0)]);
        let map = dominators(n(10), &graph).unwrap().to_map();

        assert_eq!(map.len(), 3);
        assert_eq!(
            map[&n(30)],
            [n(10), n(20), n(30)].into_iter().collect::<BTreeSet<_>>()
        );
    }
}
