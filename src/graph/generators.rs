use crate::graph::{AdjacencyGraph, MutableGraph};
use rand::prelude::*;

/// Generates a chain `0 -> 1 -> ... -> n-1` where every link has the same weight
pub fn chain(n: usize, weight: f64) -> AdjacencyGraph<usize, f64> {
    let mut graph = AdjacencyGraph::with_capacity(n);
    for v in 0..n {
        graph.add_node(v);
    }
    for v in 1..n {
        graph.add_edge(v - 1, v, weight);
    }
    graph
}

/// Generates a 4-connected grid of `width * height` nodes with unit weights in both directions.
///
/// Node `(x, y)` is identified by `y * width + x`.
pub fn grid(width: usize, height: usize) -> AdjacencyGraph<usize, f64> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            graph.add_node(index(x, y));
            if x > 0 {
                graph.add_undirected_edge(index(x - 1, y), index(x, y), 1.0);
            }
            if y > 0 {
                graph.add_undirected_edge(index(x, y - 1), index(x, y), 1.0);
            }
        }
    }

    graph
}

/// Generates a random directed graph with `n` nodes and up to `edges` edges.
///
/// Weights are drawn uniformly from `[0, max_weight)`; a `max_weight` that is
/// zero, negative or NaN gives zero-weight edges, and infinity is capped at
/// `f64::MAX`. The same seed always yields the same graph. Self-loops are
/// skipped and repeated pairs overwrite.
pub fn random_graph(n: usize, edges: usize, max_weight: f64, seed: u64) -> AdjacencyGraph<usize, f64> {
    let max_weight = if max_weight.is_nan() {
        0.0
    } else {
        max_weight.clamp(0.0, f64::MAX)
    };
    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = if max_weight > 0.0 {
                rng.gen_range(0.0..max_weight)
            } else {
                0.0
            };
            graph.add_edge(u, v, weight);
        }
    }

    graph
}
