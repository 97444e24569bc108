use crate::graph::WeightedGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Node identifier used by the generators: `n0`, `n1`, ...
pub fn node_name(index: usize) -> String {
    format!("n{index}")
}

/// Generates a random directed graph with `n` nodes and about `edges_per_node`
/// outgoing edges per node, with weights in `1..=max_weight`
///
/// The same seed always yields the same graph.
pub fn random_graph(
    n: usize,
    edges_per_node: usize,
    max_weight: u64,
    seed: u64,
) -> WeightedGraph<u64> {
    let mut graph = WeightedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);
    let max_weight = max_weight.max(1);

    for v in 0..n {
        graph.add_node(node_name(v));
    }

    if n < 2 {
        return graph;
    }

    for u in 0..n {
        for _ in 0..edges_per_node {
            let v = rng.gen_range(0..n);
            // Avoid self-loops
            if u == v {
                continue;
            }
            let weight = rng.gen_range(1..=max_weight);
            graph.insert_edge(node_name(u), node_name(v), weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid where each cell is connected to its
/// four neighbours in both directions, every edge with weight `weight`
///
/// Cell `(x, y)` is named `node_name(y * width + x)`.
pub fn grid_graph(width: usize, height: usize, weight: u64) -> WeightedGraph<u64> {
    let mut graph = WeightedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let current = node_name(y * width + x);
            graph.add_node(current.clone());

            if x + 1 < width {
                link(&mut graph, &current, node_name(y * width + x + 1), weight);
            }
            if y + 1 < height {
                link(&mut graph, &current, node_name((y + 1) * width + x), weight);
            }
        }
    }

    graph
}

fn link(graph: &mut WeightedGraph<u64>, a: &str, b: String, weight: u64) {
    graph.insert_edge(a.to_owned(), b.clone(), weight);
    graph.insert_edge(b, a.to_owned(), weight);
}
