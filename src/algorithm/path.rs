/// Reconstructs the path ending at `destination` from a predecessor table.
///
/// Returns an empty vector when `destination` is out of range or was never
/// reached. Otherwise walks predecessors back to the vertex that has none
/// (the source) and returns the vertices in source-to-destination order.
///
/// `distances` and `predecessors` must come from the same computation. A
/// predecessor chain that loops is reported and yields an empty path.
pub fn extract_path<W: Copy>(
    distances: &[Option<W>],
    predecessors: &[Option<usize>],
    destination: usize,
) -> Vec<usize> {
    if !matches!(distances.get(destination), Some(Some(_))) {
        return Vec::new();
    }

    let mut path = vec![destination];
    let mut current = destination;
    while let Some(previous) = predecessors.get(current).copied().flatten() {
        if path.len() > predecessors.len() {
            log::warn!(
                "predecessor chain from {} is longer than the graph, likely a cycle",
                destination
            );
            return Vec::new();
        }
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}
