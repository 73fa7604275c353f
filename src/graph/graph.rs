// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Undirected graph with two-colored edges. Vertices are dense indices in
// `[0, n)`; every edge carries a `Color`. The graph is built once from a
// vertex count and an edge list and is read-only afterwards, so any number of
// searches may share it across threads.
//
// Parallel edges are kept as distinct entries. Self-loops are stored in the
// edge list but left out of adjacency: none of the walk constraints can be
// satisfied sooner by standing still on a loop.
// ──────────────────────────────────────────────────────────────────────────────
use std::fmt;

use super::error::MalformedInputError;

/// Represents a vertex of the graph as a dense index.
pub type Vertex = usize;

/// The two edge labels every constraint is defined over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

/// An unordered, colored edge between two vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub u: Vertex,
    pub v: Vertex,
    pub color: Color,
}

impl Edge {
    pub fn new(u: Vertex, v: Vertex, color: Color) -> Self {
        Self { u, v, color }
    }

    pub fn red(u: Vertex, v: Vertex) -> Self {
        Self::new(u, v, Color::Red)
    }

    pub fn blue(u: Vertex, v: Vertex) -> Self {
        Self::new(u, v, Color::Blue)
    }

    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

/// Two-colored undirected graph with adjacency lists.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(Vertex, Color)>>,
}

impl Graph {
    /// Builds a graph over `vertex_count` vertices from an ordered edge list.
    ///
    /// # Errors
    /// Returns `MalformedInputError::VertexOutOfRange` for the first edge that
    /// references an index outside `[0, vertex_count)`. No graph is produced
    /// in that case.
    pub fn new<I>(vertex_count: usize, edges: I) -> Result<Self, MalformedInputError>
    where
        I: IntoIterator<Item = Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().collect();
        let mut adjacency = vec![Vec::new(); vertex_count];

        for (index, edge) in edges.iter().enumerate() {
            for endpoint in [edge.u, edge.v] {
                if endpoint >= vertex_count {
                    return Err(MalformedInputError::VertexOutOfRange {
                        edge: index,
                        vertex: endpoint,
                        vertex_count,
                    });
                }
            }
            if edge.is_self_loop() {
                continue;
            }
            adjacency[edge.u].push((edge.v, edge.color));
            adjacency[edge.v].push((edge.u, edge.color));
        }

        Ok(Self {
            vertex_count,
            edges,
            adjacency,
        })
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in construction order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns how many edges carry the given color.
    pub fn count_color(&self, color: Color) -> usize {
        self.edges.iter().filter(|e| e.color == color).count()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        vertex < self.vertex_count
    }

    /// Returns the neighbors of `vertex` together with the color of the
    /// connecting edge. Out-of-range vertices have no neighbors.
    pub fn neighbors(&self, vertex: Vertex) -> &[(Vertex, Color)] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
