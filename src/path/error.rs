use crate::graph::Vertex;
use thiserror::Error;

// Error type for shortest-walk queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Error when the source or target is not a vertex of the graph.
    #[error("Endpoint {vertex} is not a vertex of a graph with {vertex_count} vertices")]
    EndpointOutOfRange { vertex: Vertex, vertex_count: usize },

    /// The time budget ran out before the search finished.
    /// `BoundedRunner` turns this into `PathResult::Inconclusive`.
    #[error("Time budget exhausted after expanding {expanded} states")]
    BudgetExhausted { expanded: u64 },
}
