//! Errors produced while reading or writing map files.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use courier_core::GraphError;
use thiserror::Error;

/// Failure to move a map between disk and memory.
///
/// Every variant carries the path it concerns.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapFileError {
    /// The file could not be opened, read or inspected.
    #[error("failed to read map file {path}: {source}")]
    Read {
        /// Map file location.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not a valid map document.
    #[error("failed to parse map file {path}: {source}")]
    Parse {
        /// Map file location.
        path: Utf8PathBuf,
        /// Decoder error, with line and column.
        source: serde_json::Error,
    },
    /// The map could not be encoded.
    #[error("failed to encode map for {path}: {source}")]
    Serialise {
        /// Map file location.
        path: Utf8PathBuf,
        /// Encoder error.
        source: serde_json::Error,
    },
    /// The file could not be written.
    #[error("failed to write map file {path}: {source}")]
    Write {
        /// Map file location.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The document decoded but does not describe a valid road graph.
    #[error("invalid road network in {path}: {source}")]
    Graph {
        /// Map file location.
        path: Utf8PathBuf,
        /// Graph validation error.
        source: GraphError,
    },
}

impl MapFileError {
    /// The map file this error concerns.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Serialise { path, .. }
            | Self::Write { path, .. }
            | Self::Graph { path, .. } => path,
        }
    }
}
