//! Path searches over a borrowed [`RoadGraph`].
//!
//! Every search resolves identifiers to [`NodeIndex`] handles once, works on
//! dense per-node tables sized by [`RoadGraph::node_bound`] and converts the
//! result back to identifiers at the end. A search that cannot connect the
//! endpoints, or is given an unknown endpoint, returns `None`.

mod depth;
mod hops;
mod weighted;

use courier_core::{NodeIndex, RoadGraph};

use crate::{Algorithm, RoutingError};

/// Multiplier applied to the straight-line A* heuristic by default.
pub const DEFAULT_HEURISTIC_SCALE: f64 = 1.0;

/// Tuning for a [`PathFinder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathFinderConfig {
    /// Factor converting coordinate distance into minutes for A*.
    ///
    /// A* stays optimal while `scale * distance(a, b)` never exceeds the
    /// fastest travel time between `a` and `b`. Zero turns A* into Dijkstra.
    pub heuristic_scale: f64,
}

impl Default for PathFinderConfig {
    fn default() -> Self {
        Self {
            heuristic_scale: DEFAULT_HEURISTIC_SCALE,
        }
    }
}

impl PathFinderConfig {
    /// Check that the heuristic scale is usable.
    ///
    /// # Errors
    /// Returns [`RoutingError::InvalidHeuristicScale`] for negative or
    /// non-finite scales.
    pub fn validate(&self) -> Result<(), RoutingError> {
        if self.heuristic_scale.is_finite() && self.heuristic_scale >= 0.0 {
            Ok(())
        } else {
            Err(RoutingError::InvalidHeuristicScale(self.heuristic_scale))
        }
    }
}

/// Runs path searches against one road graph.
///
/// # Examples
///
/// ```
/// use courier_core::RoadGraph;
/// use courier_routing::PathFinder;
///
/// let mut graph = RoadGraph::new();
/// graph.add_edge("A", "B", 5.0)?;
/// graph.add_edge("B", "C", 2.0)?;
/// graph.add_edge("A", "C", 9.0)?;
///
/// let finder = PathFinder::new(&graph);
/// let fastest = finder.shortest_path_weighted("A", "C").unwrap_or_default();
/// assert_eq!(fastest, ["A", "B", "C"]);
/// assert_eq!(finder.route_time(&fastest), 7.0);
///
/// let fewest = finder.shortest_path_by_hops("A", "C").unwrap_or_default();
/// assert_eq!(fewest, ["A", "C"]);
/// # Ok::<(), courier_core::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g RoadGraph,
    config: PathFinderConfig,
}

impl<'g> PathFinder<'g> {
    /// Create a finder with the default configuration.
    #[must_use]
    pub const fn new(graph: &'g RoadGraph) -> Self {
        Self {
            graph,
            config: PathFinderConfig {
                heuristic_scale: DEFAULT_HEURISTIC_SCALE,
            },
        }
    }

    /// Create a finder with a validated configuration.
    ///
    /// # Errors
    /// Returns [`RoutingError::InvalidHeuristicScale`] when `config` fails
    /// [`PathFinderConfig::validate`].
    pub fn with_config(graph: &'g RoadGraph, config: PathFinderConfig) -> Result<Self, RoutingError> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    /// The graph being searched.
    #[must_use]
    pub const fn graph(&self) -> &'g RoadGraph {
        self.graph
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> PathFinderConfig {
        self.config
    }

    /// Run the search named by `algorithm`.
    ///
    /// Depth-first requests use [`Self::depth_first_path`].
    #[must_use]
    pub fn find(&self, algorithm: Algorithm, start: &str, end: &str) -> Option<Vec<String>> {
        match algorithm {
            Algorithm::BreadthFirst => self.shortest_path_by_hops(start, end),
            Algorithm::DepthFirst => self.depth_first_path(start, end),
            Algorithm::Dijkstra => self.shortest_path_weighted(start, end),
            Algorithm::AStar => self.a_star_search(start, end),
        }
    }

    /// Total travel time along `path` in minutes.
    ///
    /// Empty and single-node paths take no time. A pair of consecutive
    /// identifiers that no road joins makes the route impassable
    /// (`f64::INFINITY`).
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "route time is the sum of road weights"
    )]
    pub fn route_time<S: AsRef<str>>(&self, path: &[S]) -> f64 {
        path.windows(2)
            .map(|pair| match pair {
                [from, to] => self
                    .graph
                    .edge_weight(from.as_ref(), to.as_ref())
                    .unwrap_or(f64::INFINITY),
                _ => 0.0,
            })
            .sum()
    }

    fn endpoints(&self, start: &str, end: &str) -> Option<(NodeIndex, NodeIndex)> {
        Some((self.graph.index_of(start)?, self.graph.index_of(end)?))
    }

    fn to_ids(&self, nodes: &[NodeIndex]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(|&node| self.graph.node_id(node))
            .map(str::to_owned)
            .collect()
    }
}

/// Walk parent links back from `end`, returning the path in travel order.
fn trace(parents: &[Option<NodeIndex>], end: NodeIndex) -> Vec<NodeIndex> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&Some(parent)) = parents.get(current.index()) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
