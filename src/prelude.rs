//! # graphalgo Prelude
//!
//! A curated glob import for the common case: building or adapting a graph
//! and running algorithms over it. Less frequently used items remain
//! available at the crate root.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

pub use crate::{Error, Result};

pub use crate::{Edge, NodeId, INFINITE_COST};

// ================================================================================================
// Graph Contract
// ================================================================================================

pub use crate::{
    CostFn, Coster, Directed, EdgeListGraph, Graph, HeuristicCoster, HeuristicFn,
    MutableDirectedGraph, MutableGraph, Symmetric,
};

pub use crate::{DirectedGraph, UndirectedGraph};

// ================================================================================================
// Algorithms
// ================================================================================================

pub use crate::{astar, bellman_ford, breadth_first_search, dijkstra, johnson};

pub use crate::{floyd_warshall, floyd_warshall_with_config};

pub use crate::{condensation, connected_components, dominators, post_dominators, tarjan};

pub use crate::{kruskal, prim};

// ================================================================================================
// Results and Configuration
// ================================================================================================

pub use crate::{AStarResult, AllShortestPaths, DominatorSets, JohnsonPaths, Path, ShortestPaths};

pub use crate::{AllPairsConfig, Tolerance};
