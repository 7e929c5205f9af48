use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(vertex, priority)` entries for label-setting searches.
///
/// There is no decrease-key: callers push a fresh entry whenever a priority
/// improves and discard stale entries when they are popped.
#[derive(Debug)]
pub struct FrontierQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> FrontierQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        FrontierQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority. Ties go to the smaller vertex.
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}
