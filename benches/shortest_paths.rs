//! Benchmarks for shortest path and spanning tree construction.
//!
//! Graphs are grid-shaped so that sizes and path lengths are predictable:
//! - Single source: A* (with and without a heuristic), Dijkstra, Bellman-Ford
//! - All pairs: Floyd-Warshall, Johnson
//! - Structure: Tarjan, dominators
//! - Spanning trees: Prim, Kruskal

extern crate graphalgo;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphalgo::{
    astar, bellman_ford, dijkstra, dominators, floyd_warshall, johnson, kruskal, prim, tarjan,
    DirectedGraph, Edge, EdgeListGraph, HeuristicFn, MutableDirectedGraph, NodeId, UndirectedGraph,
};
use std::hint::black_box;

/// Builds a `side` x `side` grid with edges right and down, cost 1 and 2.
fn grid(side: usize) -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    for row in 0..side {
        for col in 0..side {
            let node = row * side + col;
            graph.add_node(NodeId::new(node));
            if col + 1 < side {
                graph.add_directed_edge(Edge::new(NodeId::new(node), NodeId::new(node + 1)), 1.0);
            }
            if row + 1 < side {
                graph.add_directed_edge(Edge::new(NodeId::new(node), NodeId::new(node + side)), 2.0);
            }
        }
    }
    graph
}

/// Same grid with every edge also pointing back, so it has cycles.
fn cyclic_grid(side: usize) -> DirectedGraph {
    let mut graph = grid(side);
    for edge in graph.edge_list() {
        let weight = graph.edge_weight(edge).unwrap_or(1.0);
        graph.add_directed_edge(edge.reversed(), weight);
    }
    graph
}

fn bench_single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");
    for side in [16usize, 32, 64] {
        let graph = grid(side);
        let goal = NodeId::new(side * side - 1);
        let manhattan = move |node: NodeId, goal: NodeId| {
            let (r1, c1) = (node.index() / side, node.index() % side);
            let (r2, c2) = (goal.index() / side, goal.index() % side);
            (r2.abs_diff(r1) * 2 + c2.abs_diff(c1)) as f64
        };
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("astar_blind", side), &graph, |b, graph| {
            b.iter(|| black_box(astar(NodeId::new(0), black_box(goal), graph, None, None)));
        });
        group.bench_with_input(BenchmarkId::new("astar_manhattan", side), &graph, |b, graph| {
            let heuristic: HeuristicFn<'_> = &manhattan;
            b.iter(|| {
                black_box(astar(NodeId::new(0), black_box(goal), graph, None, Some(heuristic)))
            });
        });
        group.bench_with_input(BenchmarkId::new("dijkstra", side), &graph, |b, graph| {
            b.iter(|| black_box(dijkstra(black_box(NodeId::new(0)), graph, None)));
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", side), &graph, |b, graph| {
            b.iter(|| black_box(bellman_ford(black_box(NodeId::new(0)), graph, None).unwrap()));
        });
    }
    group.finish();
}

fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    group.sample_size(20);
    for side in [6usize, 10, 14] {
        let graph = grid(side);
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("floyd_warshall", side), &graph, |b, graph| {
            b.iter(|| black_box(floyd_warshall(black_box(graph), None).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("johnson", side), &graph, |b, graph| {
            b.iter(|| black_box(johnson(black_box(graph), None).unwrap()));
        });
    }

    // Path enumeration on a grid explodes combinatorially; keep it small
    let graph = grid(8);
    let all = floyd_warshall(&graph, None).unwrap();
    group.bench_function("floyd_warshall_all_paths_8", |b| {
        b.iter(|| black_box(all.all_paths(NodeId::new(0), NodeId::new(63)).unwrap()));
    });
    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("structure");
    for side in [16usize, 32] {
        let graph = cyclic_grid(side);
        group.bench_with_input(BenchmarkId::new("tarjan", side), &graph, |b, graph| {
            b.iter(|| black_box(tarjan(black_box(graph))));
        });

        let dag = grid(side);
        group.bench_with_input(BenchmarkId::new("dominators", side), &dag, |b, graph| {
            b.iter(|| black_box(dominators(NodeId::new(0), black_box(graph)).unwrap()));
        });
    }
    group.finish();
}

fn bench_spanning_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_trees");
    for side in [8usize, 16] {
        let mut graph = UndirectedGraph::new();
        graphalgo::copy_undirected_graph(&mut graph, &grid(side));

        group.bench_with_input(BenchmarkId::new("prim", side), &graph, |b, graph| {
            b.iter(|| {
                let mut tree = UndirectedGraph::new();
                black_box(prim(&mut tree, black_box(graph), None))
            });
        });
        group.bench_with_input(BenchmarkId::new("kruskal", side), &graph, |b, graph| {
            b.iter(|| {
                let mut tree = UndirectedGraph::new();
                black_box(kruskal(&mut tree, black_box(graph), None))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_source,
    bench_all_pairs,
    bench_structure,
    bench_spanning_trees,
);
criterion_main!(benches);
