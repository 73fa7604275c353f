use crate::graph::MalformedInputError;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for instance loading operations.
/// Line numbers are 1-based and refer to the original file, blank lines included.
#[derive(Error, Debug)]
pub enum InstanceLoaderError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the file ends before the header and endpoint lines.
    #[error("Instance is too short: expected a header line and a source/target line")]
    MissingHeader,

    /// Error when the header or the endpoint line cannot be parsed.
    #[error("Invalid header on line {line}: {reason}")]
    InvalidHeader { line: usize, reason: String },

    /// Error when a vertex line is not a single name.
    #[error("Invalid vertex line {line}: '{content}'")]
    InvalidVertexLine { line: usize, content: String },

    /// Error when the same vertex name is declared twice.
    #[error("Vertex '{name}' declared twice (line {line})")]
    DuplicateVertex { line: usize, name: String },

    /// Error when an endpoint or edge names an undeclared vertex.
    #[error("Unknown vertex '{name}' on line {line}")]
    UnknownVertex { line: usize, name: String },

    /// Error when an edge line is not `u -- v` with an optional `*`.
    #[error("Invalid edge line {line}: '{content}'")]
    InvalidEdge { line: usize, content: String },

    /// Error when an edge is directed; only undirected graphs are supported.
    #[error("Directed edge on line {line}: only undirected edges ('--') are supported")]
    DirectedEdge { line: usize },

    /// Error when fewer vertex lines than declared are present.
    #[error("Header declares {declared} vertices but only {found} vertex lines follow")]
    MissingVertices { declared: usize, found: usize },

    /// Error when fewer edge lines than declared are present.
    #[error("Header declares {declared} edges but only {found} edge lines follow")]
    MissingEdges { declared: usize, found: usize },

    /// Error when the edges do not form a valid graph.
    #[error("Malformed graph: {0}")]
    Graph(#[from] MalformedInputError),
}
