//! Command-line interface for solving trips with required stops.
#![forbid(unsafe_code)]

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod fs;
mod input;
mod report;
mod solve;

pub use error::CliError;
pub use input::{
    DocumentFormat, EdgeEntry, FormatError, GraphDocument, TripDocument, WeightsDocument,
};
pub use report::SolveReport;

use solve::{SolveArgs, run_solve};

const ARG_GRAPH: &str = "graph";
const ARG_TRIP: &str = "trip";
const ARG_OUTPUT: &str = "output";
const ENV_GRAPH: &str = "STOPOVER_CMDS_SOLVE_GRAPH";
const ENV_TRIP: &str = "STOPOVER_CMDS_SOLVE_TRIP";

/// Run the stopover CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] for invalid arguments, unreadable inputs, solver
/// failures and output errors.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    match cli.command {
        Command::Solve(args) => run_solve(args),
    }
}

/// Route `log` records to standard error, filtered by verbosity.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Parser)]
#[command(
    name = "stopover",
    about = "Exact cheapest-route search through required stops",
    version
)]
struct Cli {
    /// Increase log detail (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the cheapest route through every required stop.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
