//! Errors raised while configuring path searches.

use thiserror::Error;

/// Errors returned by [`crate::PathFinder`] construction and algorithm
/// parsing.
///
/// A missing route is never an error; searches return `None` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// The A* heuristic multiplier was negative or not finite.
    #[error("heuristic scale must be finite and non-negative, got {0}")]
    InvalidHeuristicScale(f64),
    /// An algorithm name did not match any known search.
    #[error("unknown algorithm `{0}`; expected one of bfs, dfs, dijkstra, astar")]
    UnknownAlgorithm(String),
}
