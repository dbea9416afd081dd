//! `compare` command: every search strategy side by side.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use courier_routing::{AlgorithmRun, ComparisonReport, PathFinder};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_FROM, ARG_MAP, ARG_TO, CliError, ENV_COMPARE_FROM, ENV_COMPARE_MAP, ENV_COMPARE_TO,
    load_trip_graph, write_json,
};

/// CLI arguments for the `compare` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "compare",
    long_about = "Load a map file and run breadth-first, depth-first, \
                 Dijkstra and A* searches between two intersections, \
                 reporting each route, its travel time and how long the \
                 search took.",
    about = "Compare search strategies between two intersections"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct CompareArgs {
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
}

impl CompareArgs {
    fn into_config(self) -> Result<CompareConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CompareConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompareConfig {
    pub(crate) map: Utf8PathBuf,
    pub(crate) from: String,
    pub(crate) to: String,
}

impl TryFrom<CompareArgs> for CompareConfig {
    type Error = CliError;

    fn try_from(args: CompareArgs) -> Result<Self, Self::Error> {
        let map = args.map.ok_or(CliError::MissingArgument {
            field: ARG_MAP,
            env: ENV_COMPARE_MAP,
        })?;
        let from = args.from.ok_or(CliError::MissingArgument {
            field: ARG_FROM,
            env: ENV_COMPARE_FROM,
        })?;
        let to = args.to.ok_or(CliError::MissingArgument {
            field: ARG_TO,
            env: ENV_COMPARE_TO,
        })?;
        Ok(Self { map, from, to })
    }
}

/// One algorithm's line in the `compare` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RunSummary {
    pub(crate) algorithm: String,
    pub(crate) path: Option<Vec<String>>,
    pub(crate) minutes: Option<f64>,
    pub(crate) elapsed_us: u64,
}

impl From<&AlgorithmRun> for RunSummary {
    fn from(run: &AlgorithmRun) -> Self {
        Self {
            algorithm: run.algorithm.name().to_owned(),
            path: run.path.clone(),
            minutes: run.found().then_some(run.route_time),
            elapsed_us: u64::try_from(run.elapsed.as_micros()).unwrap_or(u64::MAX),
        }
    }
}

/// JSON document printed by `compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CompareReport {
    pub(crate) from: String,
    pub(crate) to: String,
    /// Algorithm with the fastest route, if any found one.
    pub(crate) best: Option<String>,
    pub(crate) runs: Vec<RunSummary>,
}

impl From<&ComparisonReport> for CompareReport {
    fn from(report: &ComparisonReport) -> Self {
        Self {
            from: report.start.clone(),
            to: report.end.clone(),
            best: report.best().map(|run| run.algorithm.name().to_owned()),
            runs: report.runs.iter().map(RunSummary::from).collect(),
        }
    }
}

pub(crate) fn run_compare_with(args: CompareArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = compare_routes(&config)?;
    write_json(writer, &report)
}

pub(crate) fn compare_routes(config: &CompareConfig) -> Result<CompareReport, CliError> {
    let graph = load_trip_graph(&config.map, &config.from, &config.to)?;
    let report = PathFinder::new(&graph).compare_algorithms(&config.from, &config.to);
    Ok(CompareReport::from(&report))
}
