pub mod traits;
pub mod directed;
pub mod edge_list;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use directed::{DirectedGraph, Edge};
