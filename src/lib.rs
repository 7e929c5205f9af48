//! Pathladder - shortest paths and word ladders
//!
//! Two independent search problems live in this crate:
//!
//! * [`algorithm`] computes single-source shortest paths with Dijkstra's
//!   algorithm over a weighted directed [`graph`] and reconstructs explicit
//!   paths from the predecessor table.
//! * [`ladder`] finds the shortest transformation sequence between two
//!   dictionary words where consecutive words differ by a single edit.
//!
//! Both report "not found" as an empty sequence rather than an error.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod ladder;
pub mod report;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, extract_path, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use ladder::{generate_word_ladder, is_adjacent, Dictionary, WordLadder};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight on edge from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Start and end words must be different: {0}")]
    SameWord(String),

    #[error("End word must be in the dictionary: {0}")]
    EndWordNotInDictionary(String),

    #[error("No word ladder found from {begin} to {end}")]
    NoLadderFound { begin: String, end: String },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
