use std::fmt;

use super::state::Walk;

/// Outcome of one (graph, constraint, source, target) query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// Length in edges of the shortest qualifying walk.
    Distance(usize),
    /// The search space was exhausted without a qualifying walk.
    Unreachable,
    /// The time budget elapsed before the search could decide.
    Inconclusive,
}

impl PathResult {
    pub fn distance(&self) -> Option<usize> {
        match self {
            PathResult::Distance(k) => Some(*k),
            _ => None,
        }
    }

    pub fn is_conclusive(&self) -> bool {
        !matches!(self, PathResult::Inconclusive)
    }
}

/// Table cell form: the distance, `-1` when unreachable, `?` when inconclusive.
impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathResult::Distance(k) => write!(f, "{}", k),
            PathResult::Unreachable => write!(f, "-1"),
            PathResult::Inconclusive => write!(f, "?"),
        }
    }
}

/// A `PathResult` together with the walk that witnesses it, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOutcome {
    pub result: PathResult,
    pub walk: Option<Walk>,
}

impl QueryOutcome {
    pub(crate) fn found(walk: Walk) -> Self {
        Self {
            result: PathResult::Distance(walk.len()),
            walk: Some(walk),
        }
    }

    pub(crate) fn without_walk(result: PathResult) -> Self {
        Self { result, walk: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_table_cells() {
        assert_eq!(PathResult::Distance(4).to_string(), "4");
        assert_eq!(PathResult::Unreachable.to_string(), "-1");
        assert_eq!(PathResult::Inconclusive.to_string(), "?");
    }

    #[test]
    fn test_inconclusive_is_not_unreachable() {
        assert!(!PathResult::Inconclusive.is_conclusive());
        assert!(PathResult::Unreachable.is_conclusive());
        assert_eq!(PathResult::Inconclusive.distance(), None);
        assert_eq!(PathResult::Distance(0).distance(), Some(0));
    }
}
