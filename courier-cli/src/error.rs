//! Error types emitted by the Courier CLI.
//!
//! Every command helper returns `Result<_, CliError>`, so keep the variants
//! small enough for `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use courier_data::MapFileError;
use courier_routing::RoutingError;
use thiserror::Error;

/// Errors emitted by the Courier CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist or is not a file.
    #[error("{field} path {path} does not exist or is not a file")]
    MissingSourceFile {
        /// Flag name without dashes.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path}: {source}")]
    InspectSourcePath {
        /// Flag name without dashes.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The map file could not be loaded.
    #[error(transparent)]
    LoadMap(#[from] MapFileError),
    /// The algorithm name was not recognised.
    #[error(transparent)]
    Routing(#[from] RoutingError),
    /// A route endpoint is not an intersection on the loaded map.
    #[error("{field} intersection `{id}` is not on the map")]
    UnknownIntersection {
        /// Flag name without dashes.
        field: &'static str,
        /// Identifier as given.
        id: String,
    },
    /// Encoding the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
