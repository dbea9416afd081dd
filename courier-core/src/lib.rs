//! Core domain types for the Courier engine.
//!
//! - [`RoadGraph`]: intersections joined by roads weighted with travel time.
//! - [`Driver`] and [`Delivery`]: the small state machines that dispatch and
//!   tracking mutate.
//! - [`DriverScorer`]: the seam between entities and assignment policy.
//! - [`MapData`]: the decoded map exchange structure (`serde` feature).
//!
//! Nothing here performs I/O, spawns threads or keeps global state.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod delivery;
pub mod driver;
pub mod graph;
pub mod layout;
#[cfg(feature = "serde")]
pub mod map;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use delivery::{COMPLETE_PROGRESS, Delivery, DeliveryError, DeliveryStatus};
pub use driver::{Driver, DriverError, DriverStatus, LocationChange, MAX_EFFICIENCY, MAX_RATING};
pub use graph::{GraphError, GraphSummary, NodeIndex, RoadGraph};
pub use layout::{ChainLayout, GridLayout, add_chain, add_grid};
#[cfg(feature = "serde")]
pub use map::{Intersection, MapData, Road};
pub use scorer::{DriverScorer, INELIGIBLE_SCORE};
