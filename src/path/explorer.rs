use std::collections::VecDeque;
use std::io::Write;

use super::budget::Budget;
use super::constraint::{Balance, Constraint, LastColor, RedFlag};
use super::error::SearchError;
use super::state::{self, Walk};
use crate::graph::{Color, Graph, Vertex};

/// `PathExplorer` finds the shortest walk satisfying a `Constraint`.
pub struct PathExplorer;

impl PathExplorer {
    /// Returns the shortest qualifying walk from `source` to `target`, or
    /// `None` once the search space is exhausted.
    ///
    /// `None` runs on the raw graph; the other constraints search the product
    /// space of their layering.
    ///
    /// # Errors
    /// Returns `SearchError::EndpointOutOfRange` if `source` or `target` is not
    /// a vertex of `graph`, and `SearchError::BudgetExhausted` when `budget`
    /// runs out.
    pub fn shortest_walk(
        graph: &Graph,
        constraint: Constraint,
        source: Vertex,
        target: Vertex,
        budget: &mut Budget,
    ) -> Result<Option<Walk>, SearchError> {
        for vertex in [source, target] {
            if !graph.contains(vertex) {
                return Err(SearchError::EndpointOutOfRange {
                    vertex,
                    vertex_count: graph.vertex_count(),
                });
            }
        }

        match constraint {
            Constraint::None => Self::blue_only(graph, source, target, budget),
            Constraint::Some => state::shortest_walk(graph, &RedFlag, source, target, budget),
            Constraint::Alternate => {
                state::shortest_walk(graph, &LastColor, source, target, budget)
            }
            Constraint::Many => {
                let balance = Balance::new(Color::Red, graph.vertex_count());
                state::shortest_walk(graph, &balance, source, target, budget)
            }
            Constraint::Few => {
                let balance = Balance::new(Color::Blue, graph.vertex_count());
                state::shortest_walk(graph, &balance, source, target, budget)
            }
        }
    }

    /// Plain breadth-first search restricted to blue edges.
    fn blue_only(
        graph: &Graph,
        source: Vertex,
        target: Vertex,
        budget: &mut Budget,
    ) -> Result<Option<Walk>, SearchError> {
        let mut parent: Vec<Option<Vertex>> = vec![None; graph.vertex_count()];
        let mut visited = vec![false; graph.vertex_count()];
        let mut queue: VecDeque<Vertex> = VecDeque::new();

        visited[source] = true;
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            budget.checkpoint()?;

            if current == target {
                let mut vertices = vec![current];
                let mut cursor = current;
                while let Some(previous) = parent[cursor] {
                    vertices.push(previous);
                    cursor = previous;
                }
                vertices.reverse();

                let mut walk = Walk::new(source);
                walk.steps = vertices
                    .into_iter()
                    .skip(1)
                    .map(|v| (Color::Blue, v))
                    .collect();
                return Ok(Some(walk));
            }

            for &(next, color) in graph.neighbors(current) {
                if color != Color::Blue || visited[next] {
                    continue;
                }
                visited[next] = true;
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }

        Ok(None)
    }

    /// Writes a found walk in a readable form, using `names` for vertices when
    /// given.
    pub fn print_walk_to_writer(
        walk: &Walk,
        names: Option<&[String]>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let label = |v: Vertex| -> String {
            names
                .and_then(|n| n.get(v))
                .cloned()
                .unwrap_or_else(|| v.to_string())
        };

        write!(writer, "{}", label(walk.start))?;
        for &(color, vertex) in &walk.steps {
            let link = match color {
                Color::Red => " =R= ",
                Color::Blue => " -B- ",
            };
            write!(writer, "{}{}", link, label(vertex))?;
        }
        writeln!(
            writer,
            "  ({} edges: {} red, {} blue)",
            walk.len(),
            walk.count(Color::Red),
            walk.count(Color::Blue)
        )
    }
}
