//! Floyd-Warshall all-pairs shortest paths with equal-cost path enumeration.
//!
//! Next to the usual `V × V` distance matrix the search records, per pair,
//! every *junction*: an intermediate node `k` such that routing through `k`
//! attains the best known cost. A strict improvement replaces the junction
//! list with `[k]`; a tie (under the configured [`Tolerance`](crate::Tolerance)) appends `k`.
//! Paths are rebuilt from those lists on demand:
//!
//! - [`AllShortestPaths::one_path`] expands only the first junction of each
//!   pair and yields a single route.
//! - [`AllShortestPaths::all_paths`] expands every junction, joins the
//!   sub-routes `i → k` and `k → j` through `k`, and adds the direct edge
//!   `i → j` when it ties the optimum on its own.
//!
//! Both reconstructions run on explicit work stacks. `all_paths` memoizes
//! each pair so overlapping sub-routes are built once per query.
//!
//! # Dense Ids
//!
//! Rows and columns are addressed by node id, so the graph's ids must be
//! exactly `0..node_count`. This is checked at entry; use
//! [`Crunch`](crate::Crunch) to compact a sparse graph first.

use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    algorithms::Path,
    config::AllPairsConfig,
    graph::{CostFn, Graph, GraphAdapter, NodeId, INFINITE_COST},
    utils::BitSet,
    Error, Result,
};

/// Result of [`floyd_warshall`]: costs and junction lists for every pair.
#[derive(Debug, Clone)]
pub struct AllShortestPaths {
    node_count: usize,
    /// Best known cost, row-major
    dist: Vec<f64>,
    /// Cost of the direct edge, `INFINITE_COST` if there is none
    direct: Vec<f64>,
    /// Intermediate nodes on optimal routes, per pair
    junctions: Vec<Vec<usize>>,
    config: AllPairsConfig,
}

/// Computes shortest paths between every pair of nodes with the default
/// [`AllPairsConfig`].
///
/// See [`floyd_warshall_with_config`].
///
/// # Errors
///
/// Same as [`floyd_warshall_with_config`].
///
/// # Examples
///
/// ```rust
/// use graphalgo::{floyd_warshall, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges([(0, 2, 2.0), (0, 1, 1.0), (1, 2, 1.0)]);
/// let paths = floyd_warshall(&graph, None)?;
///
/// assert_eq!(paths.cost(NodeId::new(0), NodeId::new(2)), 2.0);
/// assert_eq!(paths.all_paths(NodeId::new(0), NodeId::new(2))?.len(), 2);
/// # Ok::<(), graphalgo::Error>(())
/// ```
pub fn floyd_warshall<G>(graph: &G, cost: Option<CostFn<'_>>) -> Result<AllShortestPaths>
where
    G: Graph + ?Sized,
{
    floyd_warshall_with_config(graph, cost, AllPairsConfig::default())
}

/// Computes shortest paths between every pair of nodes.
///
/// Negative edge costs are allowed. Self-loops are ignored: the cost from a
/// node to itself is always `0` unless a negative cycle passes through it.
///
/// # Errors
///
/// - [`Error::SparseNodeIds`] if the node ids are not exactly `0..node_count`
/// - [`Error::GraphError`] if the graph lists a node twice
/// - [`Error::NegativeCycle`] if any node can reach itself at negative cost
///
/// # Complexity
///
/// - Time: O(V³) for the search, plus the reconstruction cost per query
/// - Space: O(V²) plus the junction lists
pub fn floyd_warshall_with_config<G>(
    graph: &G,
    cost: Option<CostFn<'_>>,
    config: AllPairsConfig,
) -> Result<AllShortestPaths>
where
    G: Graph + ?Sized,
{
    let adapter = GraphAdapter::new(graph, cost, None);
    let n = adapter.nodes().len();
    check_dense(adapter.nodes())?;

    let mut dist = vec![INFINITE_COST; n * n];
    let mut direct = vec![INFINITE_COST; n * n];
    let mut junctions: Vec<Vec<usize>> = vec![Vec::new(); n * n];

    for &node in adapter.nodes() {
        let i = node.index();
        dist[i * n + i] = 0.0;
        for succ in adapter.successors(node) {
            let j = succ.index();
            if i == j || j >= n {
                continue;
            }
            let edge_cost = adapter.edge_cost(node, succ);
            direct[i * n + j] = edge_cost;
            dist[i * n + j] = edge_cost;
        }
    }

    let tolerance = config.tolerance;
    for k in 0..n {
        for i in 0..n {
            let to_k = dist[i * n + k];
            if to_k == INFINITE_COST {
                continue;
            }
            for j in 0..n {
                let from_k = dist[k * n + j];
                if from_k == INFINITE_COST {
                    continue;
                }
                let through = to_k + from_k;
                let slot = i * n + j;
                if tolerance.improves(through, dist[slot]) {
                    dist[slot] = through;
                    junctions[slot].clear();
                    junctions[slot].push(k);
                } else if k != i
                    && k != j
                    && tolerance.ties(through, dist[slot])
                    && !junctions[slot].contains(&k)
                {
                    junctions[slot].push(k);
                }
            }
        }
    }

    if let Some(node) = (0..n).find(|&i| dist[i * n + i] < 0.0) {
        warn!("floyd-warshall: negative cycle through {}", NodeId::new(node));
        return Err(Error::NegativeCycle);
    }

    debug!(
        "floyd-warshall: {n}x{n} matrix, {} pairs with alternative junctions",
        junctions.iter().filter(|list| list.len() > 1).count()
    );

    Ok(AllShortestPaths {
        node_count: n,
        dist,
        direct,
        junctions,
        config,
    })
}

fn check_dense(nodes: &[NodeId]) -> Result<()> {
    let n = nodes.len();
    let mut seen = BitSet::new(n);
    for &node in nodes {
        if node.index() >= n {
            let max_id = nodes.iter().map(|node| node.index()).max().unwrap_or(0);
            return Err(Error::SparseNodeIds {
                node_count: n,
                max_id,
            });
        }
        if !seen.insert(node.index()) {
            return Err(Error::GraphError(format!("node {node} listed more than once")));
        }
    }
    Ok(())
}

impl AllShortestPaths {
    /// Returns the number of nodes the matrix covers.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the configuration the search ran with.
    #[must_use]
    pub fn config(&self) -> &AllPairsConfig {
        &self.config
    }

    /// Returns the cheapest cost from `from` to `to`, or [`INFINITE_COST`]
    /// if there is no path or either node is unknown.
    #[must_use]
    pub fn cost(&self, from: NodeId, to: NodeId) -> f64 {
        self.slot(from, to).map_or(INFINITE_COST, |slot| self.dist[slot])
    }

    /// Returns the junction nodes recorded for the pair.
    #[must_use]
    pub fn junctions(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        self.slot(from, to)
            .map(|slot| self.junctions[slot].iter().copied().map(NodeId::new).collect())
            .unwrap_or_default()
    }

    /// Returns one cheapest path from `from` to `to`.
    ///
    /// Only the first junction of each pair is expanded, so the result is
    /// deterministic for a given graph. If zero-cost cycles make that
    /// expansion loop, the first route of [`AllShortestPaths::all_paths`] is
    /// returned instead. Either way the path never repeats a node.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either node is outside the matrix
    /// - [`Error::NoPath`] if `to` is unreachable from `from`
    pub fn one_path(&self, from: NodeId, to: NodeId) -> Result<Path> {
        let (i, j) = self.reachable_pair(from, to)?;
        let cost = self.dist[i * self.node_count + j];
        if i == j {
            return Ok(Path::new(vec![from], 0.0));
        }

        if let Some(route) = self.expand_first(i, j) {
            return Ok(Path::new(without_loops(route), cost));
        }
        self.expand_all(i, j, 1)
            .into_iter()
            .next()
            .map(|route| Path::new(route.into_iter().map(NodeId::new).collect(), cost))
            .ok_or_else(|| {
                Error::GraphError(format!("no finite route between {from} and {to}"))
            })
    }

    /// Returns every distinct cheapest path from `from` to `to`.
    ///
    /// Each path carries the pair's optimal cost. The number of paths is
    /// capped by [`AllPairsConfig::max_paths`] when set. Only simple paths are
    /// returned: walks that go around a zero-cost cycle are left out.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either node is outside the matrix
    /// - [`Error::NoPath`] if `to` is unreachable from `from`
    pub fn all_paths(&self, from: NodeId, to: NodeId) -> Result<Vec<Path>> {
        let (i, j) = self.reachable_pair(from, to)?;
        let cost = self.dist[i * self.node_count + j];
        if i == j {
            return Ok(vec![Path::new(vec![from], 0.0)]);
        }

        let limit = self.config.max_paths.unwrap_or(usize::MAX);
        let routes = self.expand_all(i, j, limit);
        if routes.is_empty() {
            return Ok(vec![self.one_path(from, to)?]);
        }
        Ok(routes
            .into_iter()
            .map(|route| Path::new(route.into_iter().map(NodeId::new).collect(), cost))
            .collect())
    }

    // Follows the first junction of every pair. Gives up once more pairs were
    // expanded than a simple path can have, which only happens on zero-cost cycles.
    fn expand_first(&self, from: usize, to: usize) -> Option<Vec<NodeId>> {
        let n = self.node_count;
        let budget = 2 * n;
        let mut nodes = vec![NodeId::new(from)];
        let mut pending = vec![(from, to)];
        let mut steps = 0;

        while let Some((a, b)) = pending.pop() {
            steps += 1;
            if steps > budget {
                return None;
            }
            match self.junctions[a * n + b].first() {
                Some(&k) => {
                    pending.push((k, b));
                    pending.push((a, k));
                }
                None => nodes.push(NodeId::new(b)),
            }
        }
        Some(nodes)
    }

    fn expand_all(&self, from: usize, to: usize, limit: usize) -> Vec<Vec<usize>> {
        enum Visit {
            Enter(usize, usize),
            Exit(usize, usize),
        }

        let n = self.node_count;
        let mut memo: FxHashMap<(usize, usize), Vec<Vec<usize>>> = FxHashMap::default();
        let mut in_progress: FxHashSet<(usize, usize)> = FxHashSet::default();
        let mut stack = vec![Visit::Enter(from, to)];

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(i, j) => {
                    if memo.contains_key(&(i, j)) || !in_progress.insert((i, j)) {
                        continue;
                    }
                    stack.push(Visit::Exit(i, j));
                    for &k in &self.junctions[i * n + j] {
                        stack.push(Visit::Enter(k, j));
                        stack.push(Visit::Enter(i, k));
                    }
                }
                Visit::Exit(i, j) => {
                    let slot = i * n + j;
                    let mut seen: FxHashSet<Vec<usize>> = FxHashSet::default();
                    let mut routes: Vec<Vec<usize>> = Vec::new();

                    if self.config.tolerance.ties(self.direct[slot], self.dist[slot]) {
                        let route = vec![i, j];
                        seen.insert(route.clone());
                        routes.push(route);
                    }

                    'junctions: for &k in &self.junctions[slot] {
                        let (Some(left), Some(right)) = (memo.get(&(i, k)), memo.get(&(k, j)))
                        else {
                            continue;
                        };
                        for head in left {
                            for tail in right {
                                if routes.len() >= limit {
                                    break 'junctions;
                                }
                                if tail[1..].iter().any(|node| head.contains(node)) {
                                    continue;
                                }
                                let mut route = head.clone();
                                route.extend_from_slice(&tail[1..]);
                                if seen.insert(route.clone()) {
                                    routes.push(route);
                                }
                            }
                        }
                    }
                    routes.truncate(limit);

                    in_progress.remove(&(i, j));
                    memo.insert((i, j), routes);
                }
            }
        }

        memo.remove(&(from, to)).unwrap_or_default()
    }

    fn slot(&self, from: NodeId, to: NodeId) -> Option<usize> {
        let n = self.node_count;
        (from.index() < n && to.index() < n).then(|| from.index() * n + to.index())
    }

    fn reachable_pair(&self, from: NodeId, to: NodeId) -> Result<(usize, usize)> {
        for node in [from, to] {
            if node.index() >= self.node_count {
                return Err(Error::NodeNotFound(node));
            }
        }
        if self.dist[from.index() * self.node_count + to.index()] == INFINITE_COST {
            return Err(Error::NoPath { from, to });
        }
        Ok((from.index(), to.index()))
    }
}

// Cuts every revisit back to the first visit. Loops in an optimal walk cost
// nothing, so the cost is unchanged.
fn without_loops(walk: Vec<NodeId>) -> Vec<NodeId> {
    let mut route: Vec<NodeId> = Vec::with_capacity(walk.len());
    let mut position: FxHashMap<NodeId, usize> = FxHashMap::default();
    for node in walk {
        if let Some(&at) = position.get(&node) {
            for removed in route.drain(at + 1..) {
                position.remove(&removed);
            }
            continue;
        }
        position.insert(node, route.len());
        route.push(node);
    }
    route
}
