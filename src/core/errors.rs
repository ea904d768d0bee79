/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Command line and configuration errors, detected before any file I/O
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid invocation: {0}")]
    #[diagnostic(
        code(config::usage),
        help("Usage: sched <input-path> <output-path> (NPP|RR) [quantum] [limit]")
    )]
    Usage(String),

    #[error("Simulating RR requires a positive integer quantum (the length of the time slice)")]
    #[diagnostic(
        code(config::missing_quantum),
        help("Perhaps try the following invocation: sched in.txt out.txt RR 4")
    )]
    MissingQuantum,

    #[error("Invalid quantum '{0}'")]
    #[diagnostic(
        code(config::invalid_quantum),
        help("The quantum must be a positive integer number of milliseconds.")
    )]
    InvalidQuantum(String),

    #[error("Invalid limit '{0}'")]
    #[diagnostic(
        code(config::invalid_limit),
        help("The limit must be a non-negative integer; 0 imports every record.")
    )]
    InvalidLimit(String),

    #[error("Unknown algorithm '{0}'")]
    #[diagnostic(
        code(config::unknown_algorithm),
        help("Use NPP (non-preemptive priority) or RR (round robin).")
    )]
    UnknownAlgorithm(String),

    #[error("Unexpected argument '{0}'")]
    #[diagnostic(
        code(config::unexpected_argument),
        help("NPP accepts only an optional [limit] after the algorithm name.")
    )]
    UnexpectedArgument(String),
}

/// Record stream errors
#[derive(Error, Debug, Diagnostic)]
pub enum WorkloadError {
    #[error("No such input file at {}", path.display())]
    #[diagnostic(
        code(workload::open_input),
        help("Check that the input path exists and is readable.")
    )]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input file {}", path.display())]
    #[diagnostic(code(workload::read_input))]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("The output file {} could not be created", path.display())]
    #[diagnostic(
        code(workload::create_output),
        help("Check that the parent directory exists and is writable.")
    )]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output file {}", path.display())]
    #[diagnostic(
        code(workload::write_output),
        help("Filesystem operation failed. Check file permissions and disk space.")
    )]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Workload(#[from] WorkloadError),
}
