use thiserror::Error;

use crate::graph::NodeId;

/// The error type for every fallible operation in this crate.
///
/// Most algorithms cannot fail: an unreachable goal or a disconnected graph is
/// an ordinary outcome and is reported through an empty result or the
/// [`INFINITE_COST`](crate::INFINITE_COST) sentinel. Only the cases below are
/// errors.
///
/// # Error Categories
///
/// ## Query Errors
/// - [`Error::NoPath`] - An all-pairs query named an unreachable pair
/// - [`Error::NodeNotFound`] - A query named a node the result does not cover
///
/// ## Input Errors
/// - [`Error::NegativeCycle`] - Shortest paths are unbounded below
/// - [`Error::SparseNodeIds`] - A dense-matrix algorithm received gapped ids
/// - [`Error::GraphError`] - Any other violation of the graph contract
///
/// # Examples
///
/// ```rust
/// use graphalgo::{bellman_ford, DirectedGraph, Error, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 0, -3.0)]);
/// match bellman_ford(NodeId::new(0), &graph, None) {
///     Err(Error::NegativeCycle) => {}
///     other => panic!("expected a negative cycle, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No path connects the two nodes.
    ///
    /// Accompanies the [`INFINITE_COST`](crate::INFINITE_COST) sentinel
    /// reported for the same pair by cost queries.
    #[error("no path from {from} to {to}")]
    NoPath {
        /// Origin of the query
        from: NodeId,
        /// Destination of the query
        to: NodeId,
    },

    /// A cycle with negative total cost is reachable, so shortest paths are
    /// undefined.
    ///
    /// Raised by Bellman-Ford and Johnson. No partial result is returned
    /// alongside it.
    #[error("negative cycle detected")]
    NegativeCycle,

    /// The queried node is not part of the computed result.
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    /// The graph's node ids do not form the dense range `0..node_count`.
    ///
    /// Dense-matrix algorithms index rows and columns by id. Use
    /// [`Crunch`](crate::Crunch) to compact the ids first.
    #[error("node ids are not dense: {node_count} nodes but largest id is {max_id}")]
    SparseNodeIds {
        /// Number of nodes in the graph
        node_count: usize,
        /// Largest node id found
        max_id: usize,
    },

    /// The graph violated its capability contract.
    #[error("{0}")]
    GraphError(String),
}
