use super::graph::Vertex;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for graph construction.
/// Raised before any solving starts; a graph is never returned half-built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    /// Error when an edge references a vertex outside `[0, n)`.
    #[error("Edge {edge} references vertex {vertex}, but the graph only has {vertex_count} vertices")]
    VertexOutOfRange {
        edge: usize,
        vertex: Vertex,
        vertex_count: usize,
    },
}
