pub mod traits;
pub mod dijkstra;
pub mod path;

pub use path::extract_path;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
