//! Command-line interface over Courier map files.
//!
//! `courier route`, `courier compare` and `courier inspect` each load a JSON
//! map, run one engine operation and print the result as JSON on stdout.
//! Arguments can come from flags, configuration files or `COURIER_*`
//! environment variables.
#![forbid(unsafe_code)]

mod compare;
mod error;
mod inspect;
mod route;

pub use error::CliError;

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use courier_core::RoadGraph;
use serde::Serialize;

use compare::CompareArgs;
use inspect::InspectArgs;
use route::RouteArgs;

const ARG_MAP: &str = "map";
const ARG_FROM: &str = "from";
const ARG_TO: &str = "to";
const ARG_ALGORITHM: &str = "algorithm";
const ENV_ROUTE_MAP: &str = "COURIER_CMDS_ROUTE_MAP";
const ENV_ROUTE_FROM: &str = "COURIER_CMDS_ROUTE_FROM";
const ENV_ROUTE_TO: &str = "COURIER_CMDS_ROUTE_TO";
const ENV_COMPARE_MAP: &str = "COURIER_CMDS_COMPARE_MAP";
const ENV_COMPARE_FROM: &str = "COURIER_CMDS_COMPARE_FROM";
const ENV_COMPARE_TO: &str = "COURIER_CMDS_COMPARE_TO";
const ENV_INSPECT_MAP: &str = "COURIER_CMDS_INSPECT_MAP";

/// Run the Courier CLI with the current process arguments and environment,
/// printing results on stdout.
///
/// # Errors
/// Any [`CliError`]: bad arguments, unreadable maps, unknown intersections
/// or output failures.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Route(args) => route::run_route_with(args, writer),
        Command::Compare(args) => compare::run_compare_with(args, writer),
        Command::Inspect(args) => inspect::run_inspect_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Route planning over delivery road maps",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find a route between two intersections.
    Route(RouteArgs),
    /// Run every search strategy between two intersections.
    Compare(CompareArgs),
    /// Summarise a map file.
    Inspect(InspectArgs),
}

/// Fail unless `path` names an existing regular file.
fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match courier_fs::is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the map and check the route endpoints against it.
fn load_trip_graph(map: &Utf8Path, from: &str, to: &str) -> Result<RoadGraph, CliError> {
    require_existing(map, ARG_MAP)?;
    let graph = courier_data::load_graph(map)?;
    for (field, id) in [(ARG_FROM, from), (ARG_TO, to)] {
        if !graph.contains_node(id) {
            return Err(CliError::UnknownIntersection {
                field,
                id: id.to_owned(),
            });
        }
    }
    Ok(graph)
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)
}

#[cfg(test)]
mod tests;
