//! Time-bounded execution of shortest-walk queries.
//!
//! Searches are never forcibly stopped. Each one owns a [`Budget`] and calls
//! [`Budget::checkpoint`] between state expansions; once the deadline has
//! passed the search unwinds with `SearchError::BudgetExhausted`, dropping its
//! queue and visited map. [`BoundedRunner`] is the only place that error is
//! handled: it becomes [`PathResult::Inconclusive`] and never reaches callers.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use strum::IntoEnumIterator;

use super::constraint::Constraint;
use super::error::SearchError;
use super::explorer::PathExplorer;
use super::result::{PathResult, QueryOutcome};
use crate::graph::{Graph, Vertex};

/// The clock is read on the first checkpoint and then once every this many.
pub const CHECK_INTERVAL: u64 = 256;

/// Deadline for a single search.
#[derive(Clone, Debug)]
pub struct Budget {
    deadline: Option<Instant>,
    expanded: u64,
}

impl Budget {
    pub fn unlimited() -> Self {
        Self {
            deadline: None,
            expanded: 0,
        }
    }

    /// Starts the clock now. A limit too large to represent is treated as no
    /// limit at all.
    pub fn with_limit(limit: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(limit),
            expanded: 0,
        }
    }

    /// Number of checkpoints passed so far.
    pub fn expanded(&self) -> u64 {
        self.expanded
    }

    /// Called once per dequeued state, before it is expanded.
    ///
    /// # Errors
    /// Returns `SearchError::BudgetExhausted` once the deadline has passed.
    pub fn checkpoint(&mut self) -> Result<(), SearchError> {
        if let Some(deadline) = self.deadline {
            if self.expanded % CHECK_INTERVAL == 0 && Instant::now() >= deadline {
                return Err(SearchError::BudgetExhausted {
                    expanded: self.expanded,
                });
            }
        }
        self.expanded += 1;
        Ok(())
    }
}

/// Runs queries under a per-query time limit.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundedRunner {
    limit: Option<Duration>,
}

impl BoundedRunner {
    /// `None` means every query runs to completion.
    pub fn new(limit: Option<Duration>) -> Self {
        Self { limit }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    pub fn limit(&self) -> Option<Duration> {
        self.limit
    }

    fn budget(&self) -> Budget {
        self.limit.map_or_else(Budget::unlimited, Budget::with_limit)
    }

    /// Solves one query and returns only its result.
    ///
    /// # Errors
    /// Returns `SearchError::EndpointOutOfRange` if `source` or `target` is not
    /// a vertex of `graph`. Budget exhaustion is reported as
    /// `PathResult::Inconclusive`, never as an error.
    pub fn solve(
        &self,
        graph: &Graph,
        constraint: Constraint,
        source: Vertex,
        target: Vertex,
    ) -> Result<PathResult, SearchError> {
        self.solve_with_walk(graph, constraint, source, target)
            .map(|outcome| outcome.result)
    }

    /// Solves one query and keeps the witness walk when one is found.
    ///
    /// # Errors
    /// Same as [`BoundedRunner::solve`].
    pub fn solve_with_walk(
        &self,
        graph: &Graph,
        constraint: Constraint,
        source: Vertex,
        target: Vertex,
    ) -> Result<QueryOutcome, SearchError> {
        let mut budget = self.budget();
        match PathExplorer::shortest_walk(graph, constraint, source, target, &mut budget) {
            Ok(Some(walk)) => Ok(QueryOutcome::found(walk)),
            Ok(None) => Ok(QueryOutcome::without_walk(PathResult::Unreachable)),
            Err(SearchError::BudgetExhausted { .. }) => {
                Ok(QueryOutcome::without_walk(PathResult::Inconclusive))
            }
            Err(e) => Err(e),
        }
    }

    /// Solves every constraint for the same endpoints, one rayon task per
    /// constraint, each with its own budget. Results follow `Constraint::iter()`
    /// order.
    ///
    /// # Errors
    /// Same as [`BoundedRunner::solve`].
    pub fn solve_all(
        &self,
        graph: &Graph,
        source: Vertex,
        target: Vertex,
    ) -> Result<Vec<(Constraint, QueryOutcome)>, SearchError> {
        let constraints: Vec<Constraint> = Constraint::iter().collect();
        constraints
            .into_par_iter()
            .map(|constraint| {
                self.solve_with_walk(graph, constraint, source, target)
                    .map(|outcome| (constraint, outcome))
            })
            .collect()
    }
}
