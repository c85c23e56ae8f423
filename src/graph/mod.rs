//! Graph data model and capability contract.
//!
//! This module defines what the algorithms re-exported at the crate root
//! (such as [`dijkstra`](crate::dijkstra)) consume:
//! node and edge identities, the capability traits a graph may implement, and
//! the [`GraphAdapter`] that resolves those capabilities once per call. It also
//! ships two concrete, ordered graph stores used for working copies, spanning
//! tree destinations and tests.
//!
//! # Key Components
//!
//! - [`NodeId`] / [`Edge`] - Identity types
//! - [`Graph`], [`Directed`], [`Symmetric`], [`Coster`], [`HeuristicCoster`],
//!   [`EdgeListGraph`], [`MutableGraph`], [`MutableDirectedGraph`], [`Crunch`] -
//!   Capability traits
//! - [`GraphAdapter`] - One-shot capability resolution
//! - [`DirectedGraph`] / [`UndirectedGraph`] - Concrete weighted graphs
//! - [`copy_directed_graph`] / [`copy_directed_graph_with_cost`] /
//!   [`copy_undirected_graph`] - Structural copies

mod adapter;
mod copy;
mod directed;
mod edge;
mod node;
mod traits;
mod undirected;

pub use adapter::{null_heuristic, uniform_cost, GraphAdapter, INFINITE_COST};
pub use copy::{copy_directed_graph, copy_directed_graph_with_cost, copy_undirected_graph};
pub use directed::DirectedGraph;
pub use edge::Edge;
pub use node::NodeId;
pub use traits::{
    CostFn, Coster, Crunch, Directed, EdgeListGraph, Graph, HeuristicCoster, HeuristicFn,
    MutableDirectedGraph, MutableGraph, Symmetric,
};
pub use undirected::UndirectedGraph;
