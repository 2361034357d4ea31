//! Error types emitted by the stopover CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use stopover_core::SolveError;
use thiserror::Error;

use crate::input::FormatError;

/// Errors emitted by the stopover CLI.
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
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was inspected.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input document failed.
    #[error("failed to open {field} file at {path:?}: {source}")]
    OpenInput {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// An input document could not be decoded.
    #[error("failed to parse {field} file at {path:?}: {source}")]
    ParseInput {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was decoded.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: FormatError,
    },
    /// The trip names a location the graph file does not list.
    #[error("{role} location `{location}` does not appear in the graph")]
    UnknownLocation {
        /// Where the location appeared in the trip.
        role: &'static str,
        /// The unknown identifier.
        location: String,
    },
    /// The solver rejected the request.
    #[error("solver failed: {source}")]
    Solve {
        /// The solver's error.
        source: SolveError,
    },
    /// Serializing the report failed.
    #[error("failed to serialize solve report: {0}")]
    SerializeReport(#[source] FormatError),
    /// Creating the output file failed.
    #[error("failed to create output file at {path:?}: {source}")]
    CreateOutput {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the report failed.
    #[error("failed to write solve report: {0}")]
    WriteReport(#[source] std::io::Error),
}
