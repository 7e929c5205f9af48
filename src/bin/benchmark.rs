use std::time::{Duration, Instant};

use pathladder::graph::generators::{generate_grid, generate_random};
use pathladder::graph::{DirectedGraph, Graph};
use pathladder::{Dijkstra, ShortestPathAlgorithm};

fn benchmark_dijkstra(label: &str, graph: &DirectedGraph<u64>, source: usize) -> Duration {
    let dijkstra = Dijkstra::new();

    let start = Instant::now();
    let reachable = match dijkstra.compute_shortest_paths(graph, source) {
        Ok(result) => result.reachable_count(),
        Err(err) => {
            eprintln!("  - {} failed: {}", label, err);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    println!(
        "  - {}: {} vertices, {} edges, {} reachable in {:?}",
        label,
        graph.vertex_count(),
        graph.edge_count(),
        reachable,
        duration
    );
    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];
    let edge_factor = 2.0;
    let mut rng = rand::thread_rng();

    println!("=====================================================");
    println!("Benchmark: Dijkstra, edge factor {}", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &graph_sizes {
        let random = generate_random(&mut rng, size, edge_factor, 100);
        let side = (size as f64).sqrt().ceil() as usize;
        let grid = generate_grid(side, side);

        let random_time = benchmark_dijkstra("random", &random, 0);
        let grid_time = benchmark_dijkstra("grid", &grid, 0);
        results.push((size, random_time, grid_time));
    }

    println!("\n{:<10} | {:<12} | {:<12}", "Vertices", "Random (ms)", "Grid (ms)");
    println!("-----------------------------------------");
    for (size, random_time, grid_time) in &results {
        println!(
            "{:<10} | {:<12.2} | {:<12.2}",
            size,
            random_time.as_secs_f64() * 1000.0,
            grid_time.as_secs_f64() * 1000.0
        );
    }
}
