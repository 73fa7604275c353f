// budget module
mod budget;
// error module
mod error;
// explorer module
mod explorer;
// result module
mod result;
// product state space
mod state;

// constraint module
pub mod constraint;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use budget::{BoundedRunner, Budget, CHECK_INTERVAL};
pub use constraint::Constraint;
pub use error::SearchError;
pub use explorer::PathExplorer;
pub use result::{PathResult, QueryOutcome};
pub use state::{shortest_walk, Layering, SearchState, Walk};
