use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;

/// Generates a random directed graph with roughly `edge_factor * n` edges.
///
/// Self-loops are skipped and weights are drawn from `1..max_weight`.
pub fn generate_random<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    max_weight: u64,
) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..max_weight.max(2));
            // endpoints are in range and the weight is positive
            let _ = graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with unit-weight edges to the four
/// orthogonal neighbours. Vertex `(x, y)` has id `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            let mut neighbours = Vec::with_capacity(2);
            if x + 1 < width {
                neighbours.push(vertex + 1);
            }
            if y + 1 < height {
                neighbours.push(vertex + width);
            }
            for neighbour in neighbours {
                let _ = graph.add_edge(vertex, neighbour, 1);
                let _ = graph.add_edge(neighbour, vertex, 1);
            }
        }
    }

    graph
}
