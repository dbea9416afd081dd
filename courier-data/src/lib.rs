//! Map file storage for the Courier engine.
//!
//! Responsibilities:
//! - Read and write `{ intersections, roads }` JSON documents.
//! - Turn a map file straight into a [`RoadGraph`] and back.
//!
//! Boundaries:
//! - The document schema and graph conversion live in `courier-core`.
//! - Path handling goes through `courier-fs`.

#![forbid(unsafe_code)]

mod error;

pub use error::MapFileError;

use camino::Utf8Path;
use courier_core::{MapData, RoadGraph};
use log::{debug, info};

/// Decode a map document from `path`.
///
/// # Errors
/// [`MapFileError::Read`] when the file cannot be read and
/// [`MapFileError::Parse`] when it is not a valid map document.
pub fn load_map(path: &Utf8Path) -> Result<MapData, MapFileError> {
    let text = courier_fs::read_to_string(path).map_err(|source| MapFileError::Read {
        path: path.to_owned(),
        source,
    })?;
    let map: MapData = serde_json::from_str(&text).map_err(|source| MapFileError::Parse {
        path: path.to_owned(),
        source,
    })?;
    debug!(
        "decoded {} intersections and {} roads from {path}",
        map.intersections.len(),
        map.roads.len()
    );
    Ok(map)
}

/// Write `map` to `path` as pretty-printed JSON, replacing any existing
/// file and creating missing directories.
///
/// # Errors
/// [`MapFileError::Serialise`] or [`MapFileError::Write`].
pub fn save_map(path: &Utf8Path, map: &MapData) -> Result<(), MapFileError> {
    let mut bytes =
        serde_json::to_vec_pretty(map).map_err(|source| MapFileError::Serialise {
            path: path.to_owned(),
            source,
        })?;
    bytes.push(b'\n');
    courier_fs::write_atomic(path, &bytes).map_err(|source| MapFileError::Write {
        path: path.to_owned(),
        source,
    })?;
    info!(
        "saved {} intersections and {} roads to {path}",
        map.intersections.len(),
        map.roads.len()
    );
    Ok(())
}

/// Load a map file and build its road graph.
///
/// # Errors
/// Anything [`load_map`] reports, plus [`MapFileError::Graph`] when the
/// document holds an empty identifier or an invalid travel time.
pub fn load_graph(path: &Utf8Path) -> Result<RoadGraph, MapFileError> {
    let map = load_map(path)?;
    let graph = RoadGraph::from_map_data(&map).map_err(|source| MapFileError::Graph {
        path: path.to_owned(),
        source,
    })?;
    info!(
        "loaded map {path}: {} intersections, {} roads",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Export `graph` and write it to `path`.
///
/// # Errors
/// As [`save_map`].
pub fn save_graph(path: &Utf8Path, graph: &RoadGraph) -> Result<(), MapFileError> {
    save_map(path, &graph.to_map_data())
}

/// Report whether `path` holds a regular file.
///
/// # Errors
/// [`MapFileError::Read`] when the file system cannot be queried.
pub fn map_exists(path: &Utf8Path) -> Result<bool, MapFileError> {
    courier_fs::is_file(path).map_err(|source| MapFileError::Read {
        path: path.to_owned(),
        source,
    })
}
