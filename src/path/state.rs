// state.rs
// ──────────────────────────────────────────────────────────────────────────────
// Product state space over `(vertex, auxiliary)` pairs, expanded lazily by a
// breadth-first search. The auxiliary tag carries whatever part of the walk's
// history the constraint needs (last color, red flag, running balance); the
// rules for it live in a `Layering`. States are plain values keyed into a
// query-local parent map, so the graph itself never holds search state.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use super::budget::Budget;
use super::error::SearchError;
use crate::graph::{Color, Graph, Vertex};

/// A node of the product state space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchState<A> {
    pub vertex: Vertex,
    pub aux: A,
}

impl<A> SearchState<A> {
    pub fn new(vertex: Vertex, aux: A) -> Self {
        Self { vertex, aux }
    }
}

/// Rules of the auxiliary tag for one constraint.
pub trait Layering {
    type Aux: Copy + Eq + Hash + Debug;

    /// Tag of the zero-length walk at the source.
    fn origin(&self) -> Self::Aux;

    /// Tag after taking an edge of `color`, or `None` when the edge may not be
    /// taken from a state tagged `aux`.
    fn advance(&self, aux: Self::Aux, color: Color) -> Option<Self::Aux>;

    /// Whether a walk ending at the target with tag `aux` qualifies.
    fn accepts(&self, aux: Self::Aux) -> bool;
}

/// A walk through the graph: a start vertex and the colored steps taken from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    pub start: Vertex,
    pub steps: Vec<(Color, Vertex)>,
}

impl Walk {
    pub fn new(start: Vertex) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Number of edges in the walk.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn end(&self) -> Vertex {
        self.steps.last().map_or(self.start, |&(_, v)| v)
    }

    /// Visited vertices in order, start included.
    pub fn vertices(&self) -> Vec<Vertex> {
        std::iter::once(self.start)
            .chain(self.steps.iter().map(|&(_, v)| v))
            .collect()
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.steps.iter().map(|&(c, _)| c)
    }

    pub fn count(&self, color: Color) -> usize {
        self.colors().filter(|&c| c == color).count()
    }
}

/// Runs a breadth-first search over the product space of `graph` and
/// `layering`, from `(source, origin)` to the first accepted state at `target`.
///
/// The budget is checked once per dequeued state, before it is expanded. On
/// exhaustion the queue and parent map are dropped with the stack frame.
///
/// # Errors
/// Returns `SearchError::BudgetExhausted` when the budget runs out.
pub fn shortest_walk<L: Layering>(
    graph: &Graph,
    layering: &L,
    source: Vertex,
    target: Vertex,
    budget: &mut Budget,
) -> Result<Option<Walk>, SearchError> {
    type Parent<A> = Option<(SearchState<A>, Color)>;

    let origin = SearchState::new(source, layering.origin());
    let mut parents: HashMap<SearchState<L::Aux>, Parent<L::Aux>> = HashMap::new();
    let mut queue: VecDeque<SearchState<L::Aux>> = VecDeque::new();

    parents.insert(origin, None);
    queue.push_back(origin);

    while let Some(state) = queue.pop_front() {
        budget.checkpoint()?;

        if state.vertex == target && layering.accepts(state.aux) {
            return Ok(Some(trace_back(&parents, state)));
        }

        for &(next, color) in graph.neighbors(state.vertex) {
            let Some(aux) = layering.advance(state.aux, color) else {
                continue;
            };
            let successor = SearchState::new(next, aux);
            if let Entry::Vacant(slot) = parents.entry(successor) {
                slot.insert(Some((state, color)));
                queue.push_back(successor);
            }
        }
    }

    Ok(None)
}

/// Rebuilds the walk ending in `last` by following parent links to the origin.
fn trace_back<A: Copy + Eq + Hash>(
    parents: &HashMap<SearchState<A>, Option<(SearchState<A>, Color)>>,
    last: SearchState<A>,
) -> Walk {
    let mut steps = Vec::new();
    let mut current = last;
    while let Some(&Some((previous, color))) = parents.get(&current) {
        steps.push((color, current.vertex));
        current = previous;
    }
    steps.reverse();
    Walk {
        start: current.vertex,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    /// Counts edges modulo 3 and accepts only multiples of 3.
    struct ModThree;

    impl Layering for ModThree {
        type Aux = u8;

        fn origin(&self) -> u8 {
            0
        }

        fn advance(&self, aux: u8, _color: Color) -> Option<u8> {
            Some((aux + 1) % 3)
        }

        fn accepts(&self, aux: u8) -> bool {
            aux == 0
        }
    }

    #[test]
    fn test_layering_changes_distance() {
        // 0 - 1 - 2 - 3, plus a chord 0 - 3
        let graph = Graph::new(
            4,
            [
                Edge::blue(0, 1),
                Edge::blue(1, 2),
                Edge::blue(2, 3),
                Edge::red(0, 3),
            ],
        )
        .expect("Graph should build in test");

        let walk = shortest_walk(&graph, &ModThree, 0, 3, &mut Budget::unlimited())
            .expect("Unlimited budget should not run out")
            .expect("Walk should exist in test");

        assert_eq!(walk.len(), 3);
        assert_eq!(walk.start, 0);
        assert_eq!(walk.end(), 3);
    }

    #[test]
    fn test_walk_may_revisit_vertices() {
        let graph = Graph::new(2, [Edge::blue(0, 1)]).expect("Graph should build in test");

        let walk = shortest_walk(&graph, &ModThree, 0, 1, &mut Budget::unlimited())
            .expect("Unlimited budget should not run out")
            .expect("Walk should exist in test");

        assert_eq!(walk.vertices(), vec![0, 1, 0, 1]);
        assert_eq!(walk.end(), 1);
    }

    #[test]
    fn test_exhausted_space_is_none() {
        let graph = Graph::new(3, [Edge::blue(0, 1)]).expect("Graph should build in test");

        let walk = shortest_walk(&graph, &ModThree, 0, 2, &mut Budget::unlimited())
            .expect("Unlimited budget should not run out");

        assert!(walk.is_none());
    }

    #[test]
    fn test_zero_budget_interrupts_before_first_expansion() {
        let graph = Graph::new(2, [Edge::blue(0, 1)]).expect("Graph should build in test");
        let mut budget = Budget::with_limit(std::time::Duration::ZERO);

        let err = shortest_walk(&graph, &ModThree, 0, 0, &mut budget)
            .expect_err("Zero budget should interrupt");

        assert_eq!(err, SearchError::BudgetExhausted { expanded: 0 });
    }
}
