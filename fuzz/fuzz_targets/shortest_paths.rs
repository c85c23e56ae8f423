#![no_main]

use libfuzzer_sys::fuzz_target;
use graphalgo::{astar, dijkstra, floyd_warshall, DirectedGraph, Edge, MutableDirectedGraph, NodeId};

// Input is read as (from, to, weight) byte triples over at most 16 nodes.
fuzz_target!(|data: &[u8]| {
    let mut graph = DirectedGraph::new();
    for id in 0..16 {
        graph.add_node(NodeId::new(id));
    }
    for chunk in data.chunks_exact(3) {
        let from = NodeId::new(usize::from(chunk[0] % 16));
        let to = NodeId::new(usize::from(chunk[1] % 16));
        graph.add_directed_edge(Edge::new(from, to), f64::from(chunk[2]));
    }

    let tree = dijkstra(NodeId::new(0), &graph, None);
    let all = floyd_warshall(&graph, None).expect("non-negative weights");
    for target in 0..16 {
        let target = NodeId::new(target);
        let result = astar(NodeId::new(0), target, &graph, None, None);
        assert_eq!(result.found(), tree.reaches(target));
        if result.found() {
            assert_eq!(result.cost(), tree.cost_to(target));
        }
        assert_eq!(all.cost(NodeId::new(0), target), tree.cost_to(target));
    }
});
