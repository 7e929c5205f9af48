use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::FrontierQueue;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion of stale queue entries
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        distances[source] = Some(W::zero());

        let mut queue = FrontierQueue::with_capacity(n);
        queue.push(source, W::zero());

        let mut settled = 0usize;
        let mut relaxed = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: u was already settled with a smaller distance
            if matches!(distances[u], Some(best) if best < dist_u) {
                continue;
            }
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                // A sum past the weight type's range can never be shorter
                let Some(candidate) = dist_u.checked_sum(weight) else {
                    continue;
                };

                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    queue.push(v, candidate);
                    relaxed += 1;
                }
            }
        }

        log::debug!(
            "dijkstra from {}: settled {} of {} vertices, {} relaxations",
            source,
            settled,
            n,
            relaxed
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
