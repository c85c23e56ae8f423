//! Strongly connected components using Tarjan's algorithm.
//!
//! A strongly connected component is a maximal set of nodes in which every
//! node can reach every other. The components partition the node set; a node
//! on no cycle forms a component of its own.
//!
//! The depth-first search runs on an explicit frame stack, so graph depth is
//! bounded by heap memory rather than the call stack.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    graph::{Graph, GraphAdapter, NodeId},
    Error, Result,
};

/// Computes the strongly connected components of a graph.
///
/// # Returns
///
/// One vector per component. Components are emitted in **reverse
/// topological order**: if an edge leads from component A to component B,
/// B appears before A. Order within a component follows the search and is
/// otherwise unspecified; sort if a canonical form is needed.
///
/// Symmetric graphs are searched through their neighbors, which makes the
/// components coincide with the connected components.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graphalgo::{tarjan, DirectedGraph, NodeId};
///
/// // Cycle 0 -> 1 -> 2 -> 0, plus 2 -> 3
/// let graph = DirectedGraph::from_weighted_edges([
///     (0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (2, 3, 1.0),
/// ]);
/// let sccs = tarjan(&graph);
///
/// assert_eq!(sccs.len(), 2);
/// assert_eq!(sccs[0], vec![NodeId::new(3)]);
/// assert_eq!(sccs[1].len(), 3);
/// ```
pub fn tarjan<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: Graph + ?Sized,
{
    let adapter = GraphAdapter::new(graph, None, None);
    let mut state = TarjanState::new(adapter.nodes());

    for start in 0..state.nodes.len() {
        if state.index[start].is_none() {
            state.strongconnect(&adapter, start);
        }
    }

    debug!(
        "tarjan: {} components over {} nodes",
        state.sccs.len(),
        state.nodes.len()
    );
    state.sccs
}

/// One suspended `strongconnect` call.
struct Frame {
    node: usize,
    successors: Vec<NodeId>,
    next: usize,
}

/// Internal state for Tarjan's algorithm.
struct TarjanState {
    /// Nodes in enumeration order
    nodes: Vec<NodeId>,
    /// Position of each node in `nodes`
    position: FxHashMap<NodeId, usize>,
    /// Discovery index for each node (None if not yet visited)
    index: Vec<Option<usize>>,
    /// Lowlink value for each node
    lowlink: Vec<usize>,
    /// Whether a node is currently on the component stack
    on_stack: Vec<bool>,
    /// The component stack
    stack: Vec<usize>,
    /// Current index counter
    current_index: usize,
    /// Collected SCCs
    sccs: Vec<Vec<NodeId>>,
}

impl TarjanState {
    fn new(nodes: &[NodeId]) -> Self {
        let n = nodes.len();
        Self {
            nodes: nodes.to_vec(),
            position: nodes.iter().enumerate().map(|(pos, &node)| (node, pos)).collect(),
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            current_index: 0,
            sccs: Vec::new(),
        }
    }

    fn visit(&mut self, adapter: &GraphAdapter<'_>, v: usize) -> Frame {
        self.index[v] = Some(self.current_index);
        self.lowlink[v] = self.current_index;
        self.current_index += 1;
        self.stack.push(v);
        self.on_stack[v] = true;

        Frame {
            node: v,
            successors: adapter.successors(self.nodes[v]),
            next: 0,
        }
    }

    fn strongconnect(&mut self, adapter: &GraphAdapter<'_>, root: usize) {
        let mut frames = vec![self.visit(adapter, root)];

        while let Some(frame) = frames.last_mut() {
            let v = frame.node;

            if let Some(&w) = frame.successors.get(frame.next) {
                frame.next += 1;
                // Successors outside the node list do not take part
                let Some(&w) = self.position.get(&w) else {
                    continue;
                };
                match self.index[w] {
                    None => {
                        let child = self.visit(adapter, w);
                        frames.push(child);
                    }
                    Some(w_index) if self.on_stack[w] => {
                        self.lowlink[v] = self.lowlink[v].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All successors done: v may root a component
            frames.pop();
            if Some(self.lowlink[v]) == self.index[v] {
                let mut scc = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w] = false;
                    scc.push(self.nodes[w]);
                    if w == v {
                        break;
                    }
                }
                self.sccs.push(scc);
            }
            if let Some(parent) = frames.last() {
                let p = parent.node;
                self.lowlink[p] = self.lowlink[p].min(self.lowlink[v]);
            }
        }
    }
}

/// The component graph obtained by collapsing each SCC into one node.
///
/// The condensation of any directed graph is acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condensation {
    /// Component index of every node
    pub component_of: FxHashMap<NodeId, usize>,
    /// Distinct edges between different components, in discovery order
    pub edges: Vec<(usize, usize)>,
}

/// Collapses each strongly connected component into a single node.
///
/// # Arguments
///
/// * `graph` - The original graph
/// * `sccs` - The SCCs as returned by [`tarjan`]
///
/// # Errors
///
/// Returns [`Error::GraphError`] if some node of `graph` belongs to none of
/// the given components.
///
/// # Examples
///
/// ```rust
/// use graphalgo::{condensation, tarjan, DirectedGraph, NodeId};
///
/// // Cycle 0 <-> 1, plus 0 -> 2 -> 3
/// let graph = DirectedGraph::from_weighted_edges([
///     (0, 1, 1.0), (1, 0, 1.0), (0, 2, 1.0), (2, 3, 1.0),
/// ]);
/// let sccs = tarjan(&graph);
/// let dag = condensation(&graph, &sccs)?;
///
/// assert_eq!(dag.component_of[&NodeId::new(0)], dag.component_of[&NodeId::new(1)]);
/// assert_eq!(dag.edges.len(), 2);
/// # Ok::<(), graphalgo::Error>(())
/// ```
pub fn condensation<G>(graph: &G, sccs: &[Vec<NodeId>]) -> Result<Condensation>
where
    G: Graph + ?Sized,
{
    let adapter = GraphAdapter::new(graph, None, None);

    let mut component_of: FxHashMap<NodeId, usize> = FxHashMap::default();
    for (scc_idx, scc) in sccs.iter().enumerate() {
        for &node in scc {
            component_of.insert(node, scc_idx);
        }
    }

    let mut edges = Vec::new();
    let mut seen_edges: FxHashSet<(usize, usize)> = FxHashSet::default();

    for &from_node in adapter.nodes() {
        let from_scc = *component_of.get(&from_node).ok_or_else(|| {
            Error::GraphError(format!("node {from_node} is not in any component"))
        })?;

        for to_node in adapter.successors(from_node) {
            let Some(&to_scc) = component_of.get(&to_node) else {
                continue;
            };
            if from_scc != to_scc && seen_edges.insert((from_scc, to_scc)) {
                edges.push((from_scc, to_scc));
            }
        }
    }

    Ok(Condensation {
        component_of,
        edges,
    })
}
