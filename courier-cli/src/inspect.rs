//! `inspect` command: size and connectivity of a map file.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use courier_core::GraphSummary;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_MAP, CliError, ENV_INSPECT_MAP, require_existing, write_json};

/// CLI arguments for the `inspect` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "inspect", about = "Summarise a map file")]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct InspectArgs {
    /// Path to the JSON map file.
    #[arg(long = ARG_MAP, value_name = "path")]
    #[serde(default)]
    pub(crate) map: Option<Utf8PathBuf>,
}

/// JSON document printed by `inspect`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct InspectReport {
    pub(crate) map: Utf8PathBuf,
    #[serde(flatten)]
    pub(crate) summary: GraphSummary,
}

pub(crate) fn run_inspect_with(args: InspectArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let map = merged.map.ok_or(CliError::MissingArgument {
        field: ARG_MAP,
        env: ENV_INSPECT_MAP,
    })?;
    let report = inspect_map(map)?;
    write_json(writer, &report)
}

pub(crate) fn inspect_map(map: Utf8PathBuf) -> Result<InspectReport, CliError> {
    require_existing(&map, ARG_MAP)?;
    let summary = courier_data::load_graph(&map)?.summary();
    Ok(InspectReport { map, summary })
}
