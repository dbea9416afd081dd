//! Decoded map exchange format.
//!
//! Map editors hand the engine `{ intersections, roads }` documents. This
//! module only converts between that structure and a [`RoadGraph`]; reading
//! and writing files lives in `courier-data`.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::{GraphError, RoadGraph};

/// An intersection entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// Node identifier.
    pub id: String,
    /// Planar position; omitted for nodes that were only ever road endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coord<f64>>,
}

/// A road entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// First endpoint.
    pub start: String,
    /// Second endpoint.
    pub end: String,
    /// Travel time in minutes.
    pub travel_time: f64,
}

/// A whole map as decoded from its exchange document.
///
/// # Examples
///
/// ```
/// use courier_core::{MapData, RoadGraph};
///
/// let map: MapData = serde_json::from_str(
///     r#"{
///         "intersections": [{ "id": "A", "location": { "x": 0.0, "y": 0.0 } }],
///         "roads": [{ "start": "A", "end": "B", "travel_time": 4.0 }]
///     }"#,
/// )?;
/// let graph = RoadGraph::from_map_data(&map)?;
/// assert_eq!(graph.edge_weight("B", "A"), Some(4.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    /// Intersections in insertion order.
    #[serde(default)]
    pub intersections: Vec<Intersection>,
    /// Roads in insertion order.
    #[serde(default)]
    pub roads: Vec<Road>,
}

impl RoadGraph {
    /// Build a graph by adding every intersection, then every road.
    ///
    /// # Errors
    /// Propagates [`GraphError`] for empty identifiers or invalid travel
    /// times.
    pub fn from_map_data(map: &MapData) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for intersection in &map.intersections {
            graph.add_node(&intersection.id, intersection.location)?;
        }
        for road in &map.roads {
            graph.add_edge(&road.start, &road.end, road.travel_time)?;
        }
        Ok(graph)
    }

    /// Export the graph in exchange form.
    #[must_use]
    pub fn to_map_data(&self) -> MapData {
        let intersections = self
            .node_ids()
            .map(|id| Intersection {
                id: id.to_owned(),
                location: self.coord(id),
            })
            .collect();
        let roads = self
            .edges()
            .map(|(start, end, travel_time)| Road {
                start: start.to_owned(),
                end: end.to_owned(),
                travel_time,
            })
            .collect();
        MapData {
            intersections,
            roads,
        }
    }
}
