/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * sched <input-path> <output-path> (NPP|RR) [quantum] [limit]
 */

use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;

use cpu_sched_sim::config::usage_error;
use cpu_sched_sim::{execute, init_tracing, Cli, SimError, SimulationConfig};

fn main() -> miette::Result<()> {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => return Err(SimError::from(usage_error(&err)).into()),
    };

    let config = SimulationConfig::try_from(cli).map_err(SimError::from)?;
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        algorithm = %config.algorithm,
        limit = ?config.limit,
        "Starting simulation"
    );

    let report = execute(&config)?;

    match report.summary {
        Some(summary) => println!("{summary}"),
        None => println!("No processes were imported; nothing to schedule."),
    }

    Ok(())
}
