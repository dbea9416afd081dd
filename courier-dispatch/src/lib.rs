//! Driver assignment and dispatch sessions for the Courier engine.
//!
//! - [`AssignmentScorer`] ranks drivers for a pickup using distance,
//!   workload, rating and efficiency.
//! - [`DispatchBoard`] holds the drivers and deliveries of one session and
//!   keeps assignments consistent as work progresses.
//!
//! Both borrow an immutable [`RoadGraph`](courier_core::RoadGraph); rebuild
//! them after editing the map.

#![forbid(unsafe_code)]

mod board;
mod scorer;

pub use board::{BoardSummary, DispatchBoard, DispatchError, PlannedRoute};
pub use scorer::{AssignmentError, AssignmentScorer, ScoreWeights, ScoringLimits};
