use std::fmt::Debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::Result;

/// Edge weight usable by the shortest path algorithms.
///
/// Weights must be totally ordered and have an additive identity. Integer
/// types and `OrderedFloat` floats qualify.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// Adds two weights, or `None` if the sum is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Float sums saturate at infinity instead of overflowing
impl<F> Weight for OrderedFloat<F>
where
    F: Float + Debug,
{
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

/// Trait representing a weighted directed graph over dense vertex ids `0..n`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the cheapest edge between two vertices, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Appends a directed edge. Both endpoints must exist and the weight
    /// must not be negative.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
