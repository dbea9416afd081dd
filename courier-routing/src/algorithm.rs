//! Names for the available search strategies.

use std::fmt;
use std::str::FromStr;

use crate::RoutingError;

/// A path search strategy offered by [`crate::PathFinder`].
///
/// # Examples
///
/// ```
/// use courier_routing::Algorithm;
///
/// let parsed: Algorithm = "A*".parse()?;
/// assert_eq!(parsed, Algorithm::AStar);
/// assert_eq!(parsed.to_string(), "astar");
/// # Ok::<(), courier_routing::RoutingError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Fewest roads, ignoring travel time.
    BreadthFirst,
    /// First path found in depth order.
    DepthFirst,
    /// Minimum total travel time.
    Dijkstra,
    /// Minimum total travel time guided by straight-line distance.
    AStar,
}

impl Algorithm {
    /// Every algorithm in the order comparisons run them.
    pub const ALL: [Self; 4] = [Self::BreadthFirst, Self::DepthFirst, Self::Dijkstra, Self::AStar];

    /// Short lowercase name used on the command line and in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }

    /// Whether the search minimises total travel time.
    #[must_use]
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Dijkstra | Self::AStar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(RoutingError::UnknownAlgorithm(s.to_owned())),
        }
    }
}
