//! Minimum spanning forests.
//!
//! Both algorithms read the source through [`EdgeListGraph`] and write the
//! chosen edges into a caller-supplied [`MutableGraph`]. Edge direction is
//! ignored: a directed edge `a -> b` may join `a` and `b` either way round.
//! Self-loops and edges costing [`INFINITE_COST`] never enter a spanning tree.
//!
//! On disconnected input each algorithm produces one tree per connected
//! component and logs a warning. Every node of the source is added to the
//! destination, including isolated ones.

use log::{debug, warn};
use rustc_hash::FxHashSet;

use crate::{
    graph::{CostFn, Edge, EdgeListGraph, GraphAdapter, MutableGraph, NodeId, INFINITE_COST},
    utils::DisjointSet,
};

/// Builds a minimum spanning forest of `graph` into `dst` using Prim's
/// algorithm.
///
/// The tree is seeded with the lowest node id. Each step scans the whole edge
/// list for the cheapest edge with exactly one endpoint in the tree, so a step
/// costs O(E). When no such edge exists but nodes remain, the lowest remaining
/// node seeds the next tree.
///
/// Returns the summed cost of the edges added.
///
/// # Complexity
///
/// - Time: O(V · E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphalgo::{prim, EdgeListGraph, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_weighted_edges([
///     (0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0),
/// ]);
/// let mut tree = UndirectedGraph::new();
/// let total = prim(&mut tree, &graph, None);
///
/// assert_eq!(total, 3.0);
/// assert_eq!(tree.edge_list().len(), 2);
/// ```
pub fn prim<D, G>(dst: &mut D, graph: &G, cost: Option<CostFn<'_>>) -> f64
where
    D: MutableGraph + ?Sized,
    G: EdgeListGraph + ?Sized,
{
    let adapter = GraphAdapter::new(graph, cost, None);
    let mut nodes = adapter.nodes().to_vec();
    nodes.sort_unstable();
    for &node in &nodes {
        dst.add_node(node);
    }

    let edges: Vec<(Edge, f64)> = graph
        .edge_list()
        .into_iter()
        .filter(|edge| edge.head() != edge.tail())
        .map(|edge| (edge, adapter.cost(edge)))
        .filter(|&(_, weight)| weight < INFINITE_COST)
        .collect();

    let mut in_tree: FxHashSet<NodeId> = FxHashSet::default();
    let mut seeds = nodes.iter().copied();
    let mut trees = 0usize;
    let mut total = 0.0;

    while in_tree.len() < nodes.len() {
        let mut best: Option<(Edge, NodeId, f64)> = None;
        for &(edge, weight) in &edges {
            let entering = match (in_tree.contains(&edge.head()), in_tree.contains(&edge.tail())) {
                (true, false) => edge.tail(),
                (false, true) => edge.head(),
                _ => continue,
            };
            match best {
                Some((_, _, current)) if weight.total_cmp(&current).is_ge() => {}
                _ => best = Some((edge, entering, weight)),
            }
        }

        match best {
            Some((edge, entering, weight)) => {
                let anchor = if entering == edge.tail() { edge.head() } else { edge.tail() };
                dst.add_undirected_edge(Edge::new(anchor, entering), weight);
                in_tree.insert(entering);
                total += weight;
            }
            None => {
                // Current tree is closed off; start the next one
                let Some(seed) = seeds.find(|node| !in_tree.contains(node)) else {
                    break;
                };
                in_tree.insert(seed);
                trees += 1;
            }
        }
    }

    if trees > 1 {
        warn!("prim: input is disconnected, built a forest of {trees} trees");
    }
    debug!("prim: spanned {} nodes, total cost {total}", nodes.len());
    total
}

/// Builds a minimum spanning forest of `graph` into `dst` using Kruskal's
/// algorithm.
///
/// Edges are sorted by ascending cost (stable, so equal costs keep edge list
/// order) and accepted whenever they join two different components of a
/// [`DisjointSet`].
///
/// Returns the summed cost of the edges added.
///
/// # Complexity
///
/// - Time: O(E log E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphalgo::{kruskal, prim, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_weighted_edges([
///     (0, 1, 4.0), (0, 2, 1.0), (1, 2, 2.0), (2, 3, 5.0), (1, 3, 3.0),
/// ]);
/// let mut by_kruskal = UndirectedGraph::new();
/// let mut by_prim = UndirectedGraph::new();
///
/// assert_eq!(kruskal(&mut by_kruskal, &graph, None), 6.0);
/// assert_eq!(prim(&mut by_prim, &graph, None), 6.0);
/// ```
pub fn kruskal<D, G>(dst: &mut D, graph: &G, cost: Option<CostFn<'_>>) -> f64
where
    D: MutableGraph + ?Sized,
    G: EdgeListGraph + ?Sized,
{
    let adapter = GraphAdapter::new(graph, cost, None);
    let mut sets = DisjointSet::new();
    for &node in adapter.nodes() {
        dst.add_node(node);
        sets.make_set(node);
    }

    let mut edges: Vec<(Edge, f64)> = graph
        .edge_list()
        .into_iter()
        .map(|edge| (edge, adapter.cost(edge)))
        .filter(|&(_, weight)| weight < INFINITE_COST)
        .collect();
    edges.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut accepted = 0usize;
    let mut total = 0.0;
    for (edge, weight) in edges {
        if edge.head() == edge.tail() {
            continue;
        }
        sets.make_set(edge.head());
        sets.make_set(edge.tail());
        if sets.union(edge.head(), edge.tail()) {
            dst.add_undirected_edge(edge, weight);
            accepted += 1;
            total += weight;
        }
    }

    if sets.set_count() > 1 {
        warn!(
            "kruskal: input is disconnected, built a forest of {} trees",
            sets.set_count()
        );
    }
    debug!("kruskal: accepted {accepted} edges, total cost {total}");
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{uniform_cost, DirectedGraph, Graph, Symmetric, UndirectedGraph};

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    /// Nine-node textbook graph with a unique-cost minimum spanning tree of 37
    fn create_textbook_graph() -> UndirectedGraph {
        UndirectedGraph::from_weighted_edges([
            (0, 1, 4.0),
            (0, 7, 8.0),
            (1, 2, 8.0),
            (1, 7, 11.0),
            (2, 3, 7.0),
            (2, 5, 4.0),
            (2, 8, 2.0),
            (3, 4, 9.0),
            (3, 5, 14.0),
            (4, 5, 10.0),
            (5, 6, 2.0),
            (6, 7, 1.0),
            (6, 8, 6.0),
            (7, 8, 7.0),
        ])
    }

    fn tree_cost(tree: &UndirectedGraph) -> f64 {
        tree.edge_list()
            .into_iter()
            .filter_map(|edge| tree.edge_weight(edge))
            .sum()
    }

    #[test]
    fn test_prim_textbook() {
        let graph = create_textbook_graph();
        let mut tree = UndirectedGraph::new();
        let total = prim(&mut tree, &graph, None);

        assert_eq!(total, 37.0);
        assert_eq!(tree_cost(&tree), 37.0);
        assert_eq!(tree.edge_count(), 8);
        assert!(tree.edge_between(n(6), n(7)).is_some());
        assert!(tree.edge_between(n(1), n(7)).is_none());
    }

    #[test]
    fn test_kruskal_textbook() {
        let graph = create_textbook_graph();
        let mut tree = UndirectedGraph::new();
        let total = kruskal(&mut tree, &graph, None);

        assert_eq!(total, 37.0);
        assert_eq!(tree_cost(&tree), 37.0);
        assert_eq!(tree.edge_count(), 8);
        assert!(tree.edge_between(n(3), n(5)).is_none());
    }

    #[test]
    fn test_disconnected_input_gives_forest() {
        let mut graph = UndirectedGraph::from_weighted_edges([
            (0, 1, 1.0),
            (2, 3, 2.0),
            (3, 4, 1.0),
            (2, 4, 5.0),
        ]);
        MutableGraph::add_node(&mut graph, n(9));

        let mut by_prim = UndirectedGraph::new();
        let mut by_kruskal = UndirectedGraph::new();
        assert_eq!(prim(&mut by_prim, &graph, None), 4.0);
        assert_eq!(kruskal(&mut by_kruskal, &graph, None), 4.0);

        for tree in [&by_prim, &by_kruskal] {
            assert_eq!(tree.edge_count(), 3);
            assert_eq!(tree.node_list().len(), 6);
            assert_eq!(tree.degree(n(9)), 0);
        }
    }

    #[test]
    fn test_directed_input_ignores_direction() {
        let graph = DirectedGraph::from_weighted_edges([
            (1, 0, 1.0),
            (2, 1, 1.0),
            (0, 2, 10.0),
        ]);
        let mut tree = UndirectedGraph::new();

        assert_eq!(prim(&mut tree, &graph, None), 2.0);
        assert!(tree.edge_between(n(0), n(1)).is_some());
        assert!(tree.edge_between(n(1), n(2)).is_some());
    }

    #[test]
    fn test_self_loops_and_negative_costs() {
        let graph = UndirectedGraph::from_weighted_edges([
            (0, 0, -10.0),
            (0, 1, -1.0),
            (1, 2, 3.0),
            (0, 2, 2.0),
        ]);
        let mut by_prim = UndirectedGraph::new();
        let mut by_kruskal = UndirectedGraph::new();

        assert_eq!(prim(&mut by_prim, &graph, None), 1.0);
        assert_eq!(kruskal(&mut by_kruskal, &graph, None), 1.0);
        assert!(by_kruskal.edge_between(n(0), n(0)).is_none());
    }

    #[test]
    fn test_cost_override() {
        let graph = create_textbook_graph();
        let unit: CostFn<'_> = &uniform_cost;
        let mut tree = UndirectedGraph::new();

        assert_eq!(kruskal(&mut tree, &graph, Some(unit)), 8.0);
    }

    #[test]
    fn test_empty_graph() {
        let graph = UndirectedGraph::new();
        let mut tree = UndirectedGraph::new();

        assert_eq!(prim(&mut tree, &graph, None), 0.0);
        assert_eq!(kruskal(&mut tree, &graph, None), 0.0);
        assert!(tree.is_empty());
    }
}
