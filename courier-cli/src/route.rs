//! `route` command: one search between two intersections.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use courier_routing::{Algorithm, PathFinder};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ALGORITHM, ARG_FROM, ARG_MAP, ARG_TO, CliError, ENV_ROUTE_FROM, ENV_ROUTE_MAP,
    ENV_ROUTE_TO, load_trip_graph, write_json,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "route",
    long_about = "Load a map file and search for a route between two \
                 intersections. Dijkstra is used unless another algorithm \
                 (bfs, dfs, dijkstra, astar) is named.",
    about = "Find a route between two intersections"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct RouteArgs {
    /// Path to the JSON map file.
    #[arg(long = ARG_MAP, value_name = "path")]
    #[serde(default)]
    pub(crate) map: Option<Utf8PathBuf>,
    /// Starting intersection.
    #[arg(long = ARG_FROM, value_name = "id")]
    #[serde(default)]
    pub(crate) from: Option<String>,
    /// Destination intersection.
    #[arg(long = ARG_TO, value_name = "id")]
    #[serde(default)]
    pub(crate) to: Option<String>,
    /// Search strategy.
    #[arg(long = ARG_ALGORITHM, value_name = "name")]
    #[serde(default)]
    pub(crate) algorithm: Option<String>,
}

impl RouteArgs {
    fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    pub(crate) map: Utf8PathBuf,
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) algorithm: Algorithm,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let map = args.map.ok_or(CliError::MissingArgument {
            field: ARG_MAP,
            env: ENV_ROUTE_MAP,
        })?;
        let from = args.from.ok_or(CliError::MissingArgument {
            field: ARG_FROM,
            env: ENV_ROUTE_FROM,
        })?;
        let to = args.to.ok_or(CliError::MissingArgument {
            field: ARG_TO,
            env: ENV_ROUTE_TO,
        })?;
        let algorithm = args
            .algorithm
            .as_deref()
            .map_or(Ok(Algorithm::Dijkstra), str::parse)?;
        Ok(Self {
            map,
            from,
            to,
            algorithm,
        })
    }
}

/// JSON document printed by `route`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RouteReport {
    pub(crate) algorithm: String,
    pub(crate) from: String,
    pub(crate) to: String,
    /// `None` when the destination is unreachable.
    pub(crate) path: Option<Vec<String>>,
    pub(crate) minutes: Option<f64>,
    pub(crate) roads: Option<usize>,
}

pub(crate) fn run_route_with(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = plan_route(&config)?;
    write_json(writer, &report)
}

pub(crate) fn plan_route(config: &RouteConfig) -> Result<RouteReport, CliError> {
    let graph = load_trip_graph(&config.map, &config.from, &config.to)?;
    let finder = PathFinder::new(&graph);
    let path = finder.find(config.algorithm, &config.from, &config.to);
    let minutes = path.as_deref().map(|route| finder.route_time(route));
    let roads = path.as_ref().map(|route| route.len().saturating_sub(1));
    Ok(RouteReport {
        algorithm: config.algorithm.name().to_owned(),
        from: config.from.clone(),
        to: config.to.clone(),
        path,
        minutes,
        roads,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
