use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::InstanceLoaderError;
use crate::graph::{Color, Edge, Graph, Vertex};

//─────────────────────────────────────────────────────────────────────────────

/// A parsed problem instance: the graph, the query endpoints and the names
/// the file used for its vertices.
#[derive(Clone, Debug)]
pub struct Instance {
    /// File name the instance was read from.
    pub name: String,
    pub graph: Graph,
    pub source: Vertex,
    pub target: Vertex,
    /// Vertex names in index order.
    pub vertex_names: Vec<String>,
    /// Non-fatal inconsistencies found while parsing.
    pub warnings: Vec<String>,
}

/// Loads an instance from a file. The instance is named after the file name.
pub fn load_instance_from_file(file_path: &Path) -> Result<Instance, InstanceLoaderError> {
    let display = file_path.display().to_string();
    let file_content = fs::read_to_string(file_path)
        .map_err(|e| InstanceLoaderError::ReadFile(display.clone(), e))?;

    let name = file_path
        .file_name()
        .and_then(|os_str| os_str.to_str())
        .map(|s| s.to_string())
        .unwrap_or(display);

    parse_instance(&name, &file_content)
}

/// Parses the text of an instance.
///
/// ```text
/// n m [r]
/// s t
/// <vertex name>          (n lines)
/// <u> -- <v> [*]         (m lines, '*' marks a red edge)
/// ```
///
/// Blank lines are skipped. Lines after the declared edges are ignored with a
/// warning, as is a declared red-edge count that does not match.
pub fn parse_instance(name: &str, content: &str) -> Result<Instance, InstanceLoaderError> {
    // Keep 1-based line numbers for error messages.
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_line, header) = lines.next().ok_or(InstanceLoaderError::MissingHeader)?;
    let (vertex_count, edge_count, declared_red) = parse_header(header_line, header)?;

    let (endpoint_line, endpoints) = lines.next().ok_or(InstanceLoaderError::MissingHeader)?;
    let mut endpoint_tokens = endpoints.split_whitespace();
    let (source_name, target_name) = match (
        endpoint_tokens.next(),
        endpoint_tokens.next(),
        endpoint_tokens.next(),
    ) {
        (Some(s), Some(t), None) => (s, t),
        _ => {
            return Err(InstanceLoaderError::InvalidHeader {
                line: endpoint_line,
                reason: format!("expected 's t', found '{}'", endpoints),
            })
        }
    };

    // Header counts are untrusted; never reserve more than the file can hold.
    let line_count = content.lines().count();

    // Vertex names, in declaration order.
    let mut vertex_names: Vec<String> = Vec::with_capacity(vertex_count.min(line_count));
    let mut index_of: HashMap<String, Vertex> =
        HashMap::with_capacity(vertex_count.min(line_count));
    for _ in 0..vertex_count {
        let (line, text) = lines.next().ok_or(InstanceLoaderError::MissingVertices {
            declared: vertex_count,
            found: vertex_names.len(),
        })?;
        let mut tokens = text.split_whitespace();
        let vertex_name = match (tokens.next(), tokens.next()) {
            (Some(v), None) => v,
            _ => {
                return Err(InstanceLoaderError::InvalidVertexLine {
                    line,
                    content: text.to_string(),
                })
            }
        };
        if index_of
            .insert(vertex_name.to_string(), vertex_names.len())
            .is_some()
        {
            return Err(InstanceLoaderError::DuplicateVertex {
                line,
                name: vertex_name.to_string(),
            });
        }
        vertex_names.push(vertex_name.to_string());
    }

    let lookup = |line: usize, vertex_name: &str| -> Result<Vertex, InstanceLoaderError> {
        index_of
            .get(vertex_name)
            .copied()
            .ok_or_else(|| InstanceLoaderError::UnknownVertex {
                line,
                name: vertex_name.to_string(),
            })
    };

    let source = lookup(endpoint_line, source_name)?;
    let target = lookup(endpoint_line, target_name)?;

    let mut edges: Vec<Edge> = Vec::with_capacity(edge_count.min(line_count));
    for _ in 0..edge_count {
        let (line, text) = lines.next().ok_or(InstanceLoaderError::MissingEdges {
            declared: edge_count,
            found: edges.len(),
        })?;
        let (u_name, v_name, color) = parse_edge(line, text)?;
        edges.push(Edge::new(lookup(line, u_name)?, lookup(line, v_name)?, color));
    }

    let mut warnings = Vec::new();
    let trailing = lines.count();
    if trailing > 0 {
        warnings.push(format!(
            "{} line(s) after the {} declared edges were ignored",
            trailing, edge_count
        ));
    }

    let graph = Graph::new(vertex_count, edges)?;

    if let Some(declared) = declared_red {
        let found = graph.count_color(Color::Red);
        if declared != found {
            warnings.push(format!(
                "header declares {} red edges but {} were found",
                declared, found
            ));
        }
    }

    Ok(Instance {
        name: name.to_string(),
        graph,
        source,
        target,
        vertex_names,
        warnings,
    })
}

/// Parses `n m [r]`.
fn parse_header(
    line: usize,
    header: &str,
) -> Result<(usize, usize, Option<usize>), InstanceLoaderError> {
    let invalid = |reason: String| InstanceLoaderError::InvalidHeader { line, reason };

    let numbers = header
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|e| invalid(format!("'{}' is not a count: {}", token, e)))
        })
        .collect::<Result<Vec<usize>, _>>()?;

    match numbers.as_slice() {
        [n, m] => Ok((*n, *m, None)),
        [n, m, r] => Ok((*n, *m, Some(*r))),
        _ => Err(invalid(format!("expected 'n m [r]', found '{}'", header))),
    }
}

/// Parses `u -- v` (blue) or `u -- v *` (red).
fn parse_edge(line: usize, text: &str) -> Result<(&str, &str, Color), InstanceLoaderError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [u, "--", v] => Ok((*u, *v, Color::Blue)),
        [u, "--", v, "*"] => Ok((*u, *v, Color::Red)),
        [_, "->", _] | [_, "->", _, "*"] => Err(InstanceLoaderError::DirectedEdge { line }),
        _ => Err(InstanceLoaderError::InvalidEdge {
            line,
            content: text.to_string(),
        }),
    }
}
