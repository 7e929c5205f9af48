use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A weighted directed edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub source: usize,
    pub destination: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(source: usize, destination: usize, weight: W) -> Self {
        Edge { source, destination, weight }
    }
}

/// A directed graph implementation using adjacency lists indexed by vertex id
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex, kept in insertion order
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph { adjacency: Vec::new() }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: (0..vertices).map(|_| Vec::new()).collect(),
        }
    }

    /// Builds a graph with `vertices` vertices from a list of edges
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge<W>>,
    {
        let mut graph = Self::with_capacity(vertices);
        for edge in edges {
            graph.add_edge(edge.source, edge.destination, edge.weight)?;
        }
        Ok(graph)
    }

    /// The outgoing edges of `vertex`, or an empty slice for unknown vertices
    pub fn edges(&self, vertex: usize) -> &[Edge<W>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over every edge in the graph, grouped by source vertex
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adjacency.iter().flatten()
    }

    /// Sums the weights along `path`, using the cheapest edge for each hop.
    ///
    /// Returns `None` if two consecutive vertices are not connected or the
    /// total overflows. An empty or single-vertex path costs zero.
    pub fn path_weight(&self, path: &[usize]) -> Option<W> {
        path.windows(2).try_fold(W::zero(), |total, hop| {
            self.get_edge_weight(hop[0], hop[1])
                .and_then(|w| total.checked_sum(w))
        })
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.edges(vertex).iter().map(|e| (e.destination, e.weight)))
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight { from, to });
        }

        self.adjacency[from].push(Edge::new(from, to, weight));
        Ok(())
    }
}
