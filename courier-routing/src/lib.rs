//! Path searches over a Courier [`RoadGraph`](courier_core::RoadGraph).
//!
//! [`PathFinder`] borrows a graph and offers breadth-first (fewest roads),
//! depth-first (any route), Dijkstra and A* (fastest route) searches, plus
//! route timing and a [`ComparisonReport`] that runs all four side by side.
//!
//! ```
//! use courier_core::test_support::sample_graph;
//! use courier_routing::{Algorithm, PathFinder};
//!
//! let graph = sample_graph();
//! let finder = PathFinder::new(&graph);
//! let report = finder.compare_algorithms("A", "I");
//! let best = report.best().map(|run| run.route_time);
//! assert_eq!(best, Some(18.0));
//! assert!(finder.find(Algorithm::AStar, "A", "I").is_some());
//! ```
//!
//! Searches are synchronous and allocate per-call tables only, so one
//! finder may be shared freely across threads.

#![forbid(unsafe_code)]

mod algorithm;
mod compare;
mod error;
mod finder;

pub use algorithm::Algorithm;
pub use compare::{AlgorithmRun, ComparisonReport};
pub use error::RoutingError;
pub use finder::{DEFAULT_HEURISTIC_SCALE, PathFinder, PathFinderConfig};
