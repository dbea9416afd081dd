//! Facade crate for the Courier routing and dispatch engine.
//!
//! This crate re-exports the road graph and delivery entities, and exposes
//! path finding, driver dispatch and map file storage behind feature flags.
//!
//! ```
//! use courier_engine::{PathFinder, RoadGraph};
//!
//! let mut graph = RoadGraph::new();
//! graph.add_edge("Depot", "Market", 4.0)?;
//! graph.add_edge("Market", "Harbour", 3.0)?;
//! graph.add_edge("Depot", "Harbour", 9.0)?;
//!
//! let finder = PathFinder::new(&graph);
//! let route = finder.shortest_path_weighted("Depot", "Harbour");
//! assert_eq!(route.as_deref().map(|path| finder.route_time(path)), Some(7.0));
//! # Ok::<(), courier_engine::GraphError>(())
//! ```

#![forbid(unsafe_code)]

pub use courier_core::{
    ChainLayout, Delivery, DeliveryError, DeliveryStatus, Driver, DriverError, DriverScorer,
    DriverStatus, GraphError, GraphSummary, GridLayout, LocationChange, RoadGraph, add_chain,
    add_grid,
};

#[cfg(feature = "serde")]
pub use courier_core::{Intersection, MapData, Road};

#[cfg(feature = "routing")]
pub use courier_routing::{
    Algorithm, AlgorithmRun, ComparisonReport, PathFinder, PathFinderConfig, RoutingError,
};

#[cfg(feature = "dispatch")]
pub use courier_dispatch::{
    AssignmentError, AssignmentScorer, BoardSummary, DispatchBoard, DispatchError, PlannedRoute,
    ScoreWeights, ScoringLimits,
};

#[cfg(feature = "map-files")]
pub use courier_data::{MapFileError, load_graph, load_map, save_graph, save_map};
