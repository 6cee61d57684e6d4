use super::engine::SearchState;


/// Construct the route from a terminal search state back to the root
/// Returns the vertex indices ordered source to destination
///
/// Handles always point at earlier arena entries, so the walk terminates
/// at the root sentinel without any cycle checking
pub(super) fn reconstruct(arena: &[SearchState], terminal: usize) -> Vec<usize> {

    let mut vertices = Vec::new();
    let mut current = terminal;

    // Trace back from the terminal state to the root
    while current != usize::MAX {
        let state = &arena[current];
        vertices.push(state.vertex);
        current = state.parent;
    }

    // The walk is destination first, so reverse it
    vertices.reverse();

    vertices
}
