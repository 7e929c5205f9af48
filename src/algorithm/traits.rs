use crate::algorithm::path::extract_path;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex; `None` means unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree; `None` for the source
    /// and for unreachable vertices
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Minimum cost from the source to `vertex`, if it was reached
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Shortest path from the source to `destination`, empty if unreachable
    pub fn extract_path(&self, destination: usize) -> Vec<usize> {
        extract_path(&self.distances, &self.predecessors, destination)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices.
    /// An empty sequence means the target is unreachable.
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Vec<usize> {
        result.extract_path(target)
    }
}
