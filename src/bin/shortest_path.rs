use std::env;
use std::fs::File;
use std::io::BufReader;

use pathladder::graph::edge_list::read_edge_list;
use pathladder::graph::{DirectedGraph, Edge, Graph};
use pathladder::report::format_path;
use pathladder::{Dijkstra, ShortestPathAlgorithm};

/// The four-vertex example graph used when no edge list is given
fn demo_graph() -> pathladder::Result<DirectedGraph<u64>> {
    DirectedGraph::from_edges(
        4,
        [
            Edge::new(0, 1, 3),
            Edge::new(0, 2, 1),
            Edge::new(1, 3, 2),
            Edge::new(1, 2, 4),
            Edge::new(2, 3, 6),
        ],
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: shortest_path [EDGE_LIST] [SOURCE] [DESTINATION]
    let args: Vec<String> = env::args().collect();
    let graph = match args.get(1) {
        Some(path) => read_edge_list::<u64, _>(BufReader::new(File::open(path)?))?,
        None => demo_graph()?,
    };
    let source = args.get(2).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(0);
    let destination = args
        .get(3)
        .map(|s| s.parse::<usize>())
        .transpose()?
        .unwrap_or_else(|| graph.vertex_count().saturating_sub(1));

    println!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source)?;

    for v in 0..graph.vertex_count() {
        match result.distance(v) {
            Some(dist) => println!("  Distance to {}: {}", v, dist),
            None => println!("  No path to {}", v),
        }
    }

    let path = result.extract_path(destination);
    println!("{}", format_path(&path, result.distance(destination).unwrap_or(0)));

    Ok(())
}
