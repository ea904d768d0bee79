/*!
 * Simulation Runner
 * Import, schedule, export: the end-to-end pipeline behind the CLI
 */

use crate::config::SimulationConfig;
use crate::core::types::SimResult;
use crate::scheduler::{ScheduleOutcome, Scheduler};
use crate::workload::{self, Summary, Truncation};
use tracing::{info, instrument};

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: ScheduleOutcome,
    /// `None` when no records were imported
    pub summary: Option<Summary>,
    /// Set when malformed input cut the import short
    pub truncated: Option<Truncation>,
}

/// Run the simulation described by `config`
///
/// The output file is only created once import succeeded.
#[instrument(skip_all, fields(algorithm = %config.algorithm))]
pub fn execute(config: &SimulationConfig) -> SimResult<RunReport> {
    let import = workload::read_file(&config.input, config.limit)?;
    let imported = import.records.len();

    let outcome = Scheduler::new(config.algorithm).run(import.records);
    debug_assert_eq!(outcome.completed.len(), imported, "Records lost in simulation");

    workload::write_file(&config.output, &outcome.completed)?;

    let summary = Summary::from_records(&outcome.completed);
    info!(imported, summary = ?summary, "Run finished");

    Ok(RunReport {
        outcome,
        summary,
        truncated: import.truncated,
    })
}
