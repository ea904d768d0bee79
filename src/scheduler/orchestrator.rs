/*!
 * Scheduler Orchestrator
 * Seeds a run from the imported pool and drives the selected discipline
 */

use super::npp::NonPreemptivePriority;
use super::round_robin::RoundRobin;
use super::state::SimState;
use super::stats::{SchedulerStats, StatsCollector};
use super::traits::Discipline;
use super::types::{Algorithm, Slice};
use crate::process::{ProcessQueue, ProcessRecord};
use tracing::{info, instrument};

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// Completed processes in chronological finish order
    pub completed: ProcessQueue,
    pub stats: SchedulerStats,
    /// Every CPU slice in dispatch order; empty unless requested with
    /// `Scheduler::with_timeline`
    pub timeline: Vec<Slice>,
}

/// CPU scheduler simulator
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    algorithm: Algorithm,
    timeline: bool,
}

impl Scheduler {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            timeline: false,
        }
    }

    /// Also record the dispatch timeline of each run
    pub fn with_timeline(mut self) -> Self {
        self.timeline = true;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Run every record in `pool` to completion
    #[instrument(skip_all, fields(algorithm = %self.algorithm, processes = pool.len()))]
    pub fn run(&self, pool: Vec<ProcessRecord>) -> ScheduleOutcome {
        match self.algorithm {
            Algorithm::Npp => drive(&NonPreemptivePriority, pool, self.timeline),
            Algorithm::RoundRobin { quantum } => {
                drive(&RoundRobin::new(quantum), pool, self.timeline)
            }
        }
    }
}

/// Run `pool` under `algorithm`
pub fn run(pool: Vec<ProcessRecord>, algorithm: Algorithm) -> ScheduleOutcome {
    Scheduler::new(algorithm).run(pool)
}

/// Run `pool` under an arbitrary discipline
///
/// The earliest-arriving record (first in input order among equal
/// arrivals) becomes the first running process and the clock starts at its
/// arrival. Records arriving at that same instant join the ready queue
/// before it runs; everything else waits in the pending pool.
pub fn simulate<D: Discipline>(discipline: &D, pool: Vec<ProcessRecord>) -> ScheduleOutcome {
    drive(discipline, pool, false)
}

fn drive<D: Discipline>(
    discipline: &D,
    mut pool: Vec<ProcessRecord>,
    timeline: bool,
) -> ScheduleOutcome {
    let algorithm = discipline.algorithm();

    let first_index = pool
        .iter()
        .enumerate()
        .min_by_key(|(_, record)| record.arrival)
        .map(|(index, _)| index);

    let Some(first_index) = first_index else {
        info!("Empty process pool, nothing to schedule");
        return ScheduleOutcome {
            completed: ProcessQueue::new(),
            stats: StatsCollector::new(algorithm.kind(), algorithm.quantum()).snapshot(),
            timeline: Vec::new(),
        };
    };

    let first = pool.remove(first_index);
    let mut state = SimState::new(
        algorithm,
        discipline.ready_order(),
        ProcessQueue::from(pool),
        first.arrival,
    );
    if timeline {
        state.record_timeline();
    }
    state.check_arrivals();

    let first = state.dispatch(first);
    discipline.run(&mut state, first);

    let (completed, stats, timeline) = state.finish();
    info!(
        completed = stats.completed,
        makespan = stats.makespan,
        dispatches = stats.dispatches,
        context_switches = stats.context_switches,
        preemptions = stats.preemptions,
        idle_ticks = stats.idle_ticks,
        "Simulation complete"
    );

    ScheduleOutcome {
        completed,
        stats,
        timeline,
    }
}
