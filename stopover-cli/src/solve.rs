//! Solve command implementation for the stopover CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use stopover_solver_exact::{ExhaustiveSolver, ExhaustiveSolverConfig};

use crate::fs::{create_utf8_file, file_is_file, open_utf8_file};
use crate::input::{DocumentFormat, GraphDocument, TripDocument};
use crate::report::SolveReport;
use crate::{ARG_GRAPH, ARG_OUTPUT, ARG_TRIP, CliError, ENV_GRAPH, ENV_TRIP};

/// Flag for the optional candidate limit.
pub(crate) const ARG_MAX_CANDIDATES: &str = "max-candidates";

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "solve",
    long_about = "Find the cheapest route from the trip's start to its end \
                 that visits every required stop. Distances and durations \
                 come from the graph file; the trip file names the \
                 endpoints, stops and cost weights. Files ending in .yaml \
                 or .yml are read as YAML, anything else as JSON.",
    about = "Solve a trip with required stops exactly"
)]
#[ortho_config(prefix = "STOPOVER")]
pub(crate) struct SolveArgs {
    /// Path to the graph file with pairwise distances and durations.
    #[arg(long = ARG_GRAPH, value_name = "path")]
    #[serde(default)]
    pub(crate) graph: Option<Utf8PathBuf>,
    /// Path to the trip file with endpoints, stops and weights.
    #[arg(long = ARG_TRIP, value_name = "path")]
    #[serde(default)]
    pub(crate) trip: Option<Utf8PathBuf>,
    /// Write the report here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Refuse trips with more candidate routes than this.
    #[arg(long = ARG_MAX_CANDIDATES, value_name = "count")]
    #[serde(default)]
    pub(crate) max_candidates: Option<u64>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Graph file path.
    pub(crate) graph: Utf8PathBuf,
    /// Trip file path.
    pub(crate) trip: Utf8PathBuf,
    /// Report path; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Candidate limit handed to the solver.
    pub(crate) max_candidates: Option<u64>,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.graph, ARG_GRAPH)?;
        Self::require_existing(&self.trip, ARG_TRIP)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let graph = args.graph.ok_or(CliError::MissingArgument {
            field: ARG_GRAPH,
            env: ENV_GRAPH,
        })?;
        let trip = args.trip.ok_or(CliError::MissingArgument {
            field: ARG_TRIP,
            env: ENV_TRIP,
        })?;
        Ok(Self {
            graph,
            trip,
            output: args.output,
            max_candidates: args.max_candidates,
        })
    }
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &mut stdout)
}

/// Resolve configuration, solve, and write the report to the configured
/// output or to `stdout`.
pub(crate) fn run_solve_with(args: SolveArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let report = execute_solve(&config)?;
    match &config.output {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_report(&mut file, DocumentFormat::from_path(path), &report)?;
            log::info!(
                "wrote route {} (cost {:?}) to {path}",
                report.shortest_path.join(" -> "),
                report.total_cost
            );
            Ok(())
        }
        None => write_report(stdout, DocumentFormat::Json, &report),
    }
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_solve(config: &SolveConfig) -> Result<SolveReport, CliError> {
    let graph_document: GraphDocument = load_document(&config.graph, ARG_GRAPH)?;
    let trip: TripDocument = load_document(&config.trip, ARG_TRIP)?;
    verify_locations(&graph_document, &trip)?;

    let graph = graph_document.to_graph();
    let request = trip.into_request();
    let solver = ExhaustiveSolver::with_config(ExhaustiveSolverConfig {
        max_candidates: config.max_candidates,
    });
    let response = solver
        .solve_with(&graph, &request)
        .map_err(|source| CliError::Solve { source })?;
    Ok(SolveReport::from(response))
}

/// Every trip location must be listed as a source in the graph file.
pub(crate) fn verify_locations(graph: &GraphDocument, trip: &TripDocument) -> Result<(), CliError> {
    match trip.locations().find(|(_, location)| !graph.lists(location)) {
        Some((role, location)) => Err(CliError::UnknownLocation {
            role,
            location: location.to_owned(),
        }),
        None => Ok(()),
    }
}

/// Load a JSON or YAML document from disk.
pub(crate) fn load_document<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    DocumentFormat::from_path(path)
        .decode(BufReader::new(file))
        .map_err(|source| CliError::ParseInput {
            field,
            path: path.to_path_buf(),
            source,
        })
}

fn write_report(
    writer: &mut dyn Write,
    format: DocumentFormat,
    report: &SolveReport,
) -> Result<(), CliError> {
    let mut payload = format.encode(report).map_err(CliError::SerializeReport)?;
    if !payload.ends_with('\n') {
        payload.push('\n');
    }
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
