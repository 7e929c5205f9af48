//! Human-readable rendering of search results.

use std::fmt::Display;

/// Renders a vertex path and its total cost, or a "not found" line for an
/// empty path.
pub fn format_path<W: Display>(path: &[usize], total: W) -> String {
    if path.is_empty() {
        return "No path found.".to_string();
    }

    let hops: Vec<String> = path.iter().map(usize::to_string).collect();
    format!("Shortest path: {}\nTotal cost: {}", hops.join(" -> "), total)
}

/// Renders a word ladder, or a "not found" line for an empty ladder
pub fn format_ladder<S: AsRef<str>>(ladder: &[S]) -> String {
    if ladder.is_empty() {
        return "No word ladder found.".to_string();
    }

    let words: Vec<&str> = ladder.iter().map(AsRef::as_ref).collect();
    format!("Word ladder found: {}", words.join(" "))
}
