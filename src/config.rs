/*!
 * Simulation Configuration
 * Command line surface and the validated configuration handed to the core
 */

use crate::core::errors::ConfigError;
use crate::scheduler::{Algorithm, AlgorithmKind};
use clap::Parser;
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Raw command line
///
/// `sched <input-path> <output-path> (NPP|RR) [quantum] [limit]`
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sched",
    version,
    about = "Simulate non-preemptive priority or round robin CPU scheduling"
)]
pub struct Cli {
    /// File of whitespace-separated `pid arrival burst priority` records
    pub input: PathBuf,

    /// File to write `pid arrival finish waiting` lines to
    pub output: PathBuf,

    /// Scheduling algorithm: NPP or RR
    pub algorithm: String,

    /// RR: the time quantum in ms; NPP: the record limit
    #[arg(value_name = "QUANTUM|LIMIT")]
    pub first_extra: Option<String>,

    /// RR only: maximum records to import (0 imports every record)
    #[arg(value_name = "LIMIT")]
    pub second_extra: Option<String>,
}

/// Validated run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub algorithm: Algorithm,
    /// Maximum records to import; `None` imports the whole stream
    pub limit: Option<NonZeroUsize>,
}

impl SimulationConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, algorithm: Algorithm) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            algorithm,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = NonZeroUsize::new(limit);
        self
    }

    /// Parse and validate a full argument list (program name first)
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|err| usage_error(&err))?;
        Self::try_from(cli)
    }
}

impl TryFrom<Cli> for SimulationConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let kind: AlgorithmKind = cli.algorithm.parse()?;

        let (algorithm, limit) = match (kind, cli.first_extra, cli.second_extra) {
            (AlgorithmKind::Npp, None, _) => (Algorithm::Npp, None),
            (AlgorithmKind::Npp, Some(_), Some(unexpected)) => {
                return Err(ConfigError::UnexpectedArgument(unexpected))
            }
            (AlgorithmKind::Npp, Some(limit), None) => (Algorithm::Npp, parse_limit(&limit)?),
            (AlgorithmKind::RoundRobin, None, _) => return Err(ConfigError::MissingQuantum),
            (AlgorithmKind::RoundRobin, Some(quantum), limit) => (
                parse_quantum(&quantum)?,
                limit.as_deref().map(parse_limit).transpose()?.flatten(),
            ),
        };

        Ok(Self {
            input: cli.input,
            output: cli.output,
            algorithm,
            limit,
        })
    }
}

/// First line of a clap error without its `error: ` prefix
pub fn usage_error(err: &clap::Error) -> ConfigError {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    let line = line.strip_prefix("error: ").unwrap_or(line);
    ConfigError::Usage(line.trim().to_string())
}

fn parse_quantum(value: &str) -> Result<Algorithm, ConfigError> {
    value
        .parse::<u64>()
        .ok()
        .and_then(Algorithm::round_robin)
        .ok_or_else(|| ConfigError::InvalidQuantum(value.to_string()))
}

fn parse_limit(value: &str) -> Result<Option<NonZeroUsize>, ConfigError> {
    value
        .parse::<usize>()
        .map(NonZeroUsize::new)
        .map_err(|_| ConfigError::InvalidLimit(value.to_string()))
}
