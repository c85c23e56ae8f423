// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphalgo
//!
//! [![Crates.io](https://img.shields.io/crates/v/graphalgo.svg)](https://crates.io/crates/graphalgo)
//! [![Documentation](https://docs.rs/graphalgo/badge.svg)](https://docs.rs/graphalgo)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/graphalgo/blob/main/LICENSE-APACHE)
//!
//! Graph algorithms over a small capability-based graph contract: shortest
//! paths, connectivity, dominators and minimum spanning trees.
//!
//! ## Features
//!
//! - **Single-source search** - A*, breadth-first, Dijkstra, Bellman-Ford and depth-first search
//! - **All-pairs search** - Floyd-Warshall with equal-cost path enumeration, and Johnson
//! - **Structure** - Tarjan strongly connected components, condensation, weak components
//! - **Dominators** - Dominator and post-dominator sets by monotone fixed point
//! - **Spanning trees** - Prim and Kruskal, producing forests on disconnected input
//! - **Bring your own graph** - Algorithms only need the capability traits they use
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! graphalgo = "0.3"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use graphalgo::prelude::*;
//!
//! let graph = DirectedGraph::from_weighted_edges([(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0)]);
//! let result = astar(NodeId::new(0), NodeId::new(2), &graph, None, None);
//!
//! assert_eq!(result.cost(), 3.0);
//! ```
//!
//! ### Bringing Your Own Graph
//!
//! Any type implementing [`Graph`] can be searched. Further capabilities are
//! advertised through the `as_*` queries on [`Graph`], and each algorithm
//! resolves them once per call through a [`GraphAdapter`].
//!
//! ```rust
//! use graphalgo::{dijkstra, Directed, Edge, Graph, NodeId};
//!
//! /// A ring of `n` nodes, each pointing at the next.
//! struct Ring(usize);
//!
//! impl Graph for Ring {
//!     fn node_list(&self) -> Vec<NodeId> {
//!         (0..self.0).map(NodeId::new).collect()
//!     }
//!     fn has_node(&self, node: NodeId) -> bool {
//!         node.index() < self.0
//!     }
//!     fn as_directed(&self) -> Option<&dyn Directed> {
//!         Some(self)
//!     }
//! }
//!
//! impl Directed for Ring {
//!     fn successors(&self, node: NodeId) -> Vec<NodeId> {
//!         vec![NodeId::new((node.index() + 1) % self.0)]
//!     }
//!     fn predecessors(&self, node: NodeId) -> Vec<NodeId> {
//!         vec![NodeId::new((node.index() + self.0 - 1) % self.0)]
//!     }
//!     fn edge_to(&self, from: NodeId, to: NodeId) -> Option<Edge> {
//!         self.successors(from).contains(&to).then(|| Edge::new(from, to))
//!     }
//! }
//!
//! let paths = dijkstra(NodeId::new(0), &Ring(5), None);
//! assert_eq!(paths.cost_to(NodeId::new(4)), 4.0);
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Node and edge identities, capability traits, adapter and concrete graphs
//! - [`utils`] - Indexed heap, disjoint set and bit set
//! - [`prelude`] - Convenient re-exports of commonly used items
//! - [`Error`] and [`Result`] - Error handling
//!
//! Algorithms are re-exported at the crate root.
//!
//! ## Concurrency
//!
//! Every call allocates and owns its working state, so calls on independent
//! graphs, or read-only calls on the same graph, may run in parallel. Nothing
//! locks the graph: mutating it while a call is in flight is the caller's
//! responsibility to prevent.
//!
//! ## Logging
//!
//! The crate emits through the [`log`](https://docs.rs/log) facade and installs
//! no logger. Per-call summaries are logged at `debug`, individual relaxations
//! at `trace`, and negative cycles or disconnected spanning tree input at
//! `warn`.

pub(crate) mod algorithms;
pub(crate) mod config;
pub(crate) mod error;

/// Graph data model and capability contract.
///
/// # Key Components
///
/// - [`NodeId`] / [`Edge`] - Identity types
/// - [`Graph`] and its optional capabilities ([`Directed`], [`Symmetric`],
///   [`Coster`], [`HeuristicCoster`], [`EdgeListGraph`], [`MutableGraph`],
///   [`MutableDirectedGraph`], [`Crunch`])
/// - [`GraphAdapter`] - One-shot capability resolution
/// - [`DirectedGraph`] / [`UndirectedGraph`] - Ordered weighted graph stores
pub mod graph;

/// Data structures the algorithms are built on.
///
/// Exposed for callers that need the same building blocks, such as a
/// [`DisjointSet`] for incremental connectivity.
pub mod utils;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use graphalgo::prelude::*;
///
/// let graph = UndirectedGraph::from_weighted_edges([(0, 1, 2.0), (1, 2, 1.0)]);
/// let mut tree = UndirectedGraph::new();
/// assert_eq!(kruskal(&mut tree, &graph, None), 3.0);
/// ```
pub mod prelude;

/// `graphalgo` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is
/// always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graphalgo` Error type
///
/// The main error type for all operations in this crate. See [`Error`] for the
/// individual variants.
pub use error::Error;

pub use algorithms::{
    astar, bellman_ford, breadth_first_search, condensation, connected_components,
    depth_first_search, dijkstra, dominators, floyd_warshall, floyd_warshall_with_config,
    is_path, johnson, kruskal, path_cost, post_dominators, prim, tarjan, AStarResult,
    AllShortestPaths, Condensation, DominatorSets, JohnsonPaths, Path, ShortestPaths,
};
pub use config::{AllPairsConfig, Tolerance, DEFAULT_TIE_TOLERANCE};
pub use graph::{
    copy_directed_graph, copy_directed_graph_with_cost, copy_undirected_graph, null_heuristic,
    uniform_cost, CostFn, Coster, Crunch, Directed, DirectedGraph, Edge, EdgeListGraph, Graph,
    GraphAdapter, HeuristicCoster, HeuristicFn, MutableDirectedGraph, MutableGraph, NodeId,
    Symmetric, UndirectedGraph, INFINITE_COST,
};
pub use utils::DisjointSet;
