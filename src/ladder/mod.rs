//! Word ladders: shortest chains of dictionary words where each step is a
//! single-character substitution, insertion or deletion.

pub mod dictionary;
pub mod edit_distance;
pub mod search;

pub use dictionary::Dictionary;
pub use edit_distance::{edit_distance_within, is_adjacent, levenshtein};
pub use search::{generate_word_ladder, WordLadder};
