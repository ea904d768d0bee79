/*!
 * Scheduler Statistics
 * Counters collected over one simulation run
 */

use super::types::AlgorithmKind;
use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// Run statistics snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    pub algorithm: AlgorithmKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,
    /// Times a process was handed the CPU
    pub dispatches: u64,
    /// Dispatches of a different process than the previous one
    pub context_switches: u64,
    /// Quantum expiries with work left
    pub preemptions: u64,
    pub idle_ticks: Ticks,
    /// Clock value when the last process completed
    pub makespan: Ticks,
    pub completed: usize,
}

/// Mutable counters owned by the simulation state
#[derive(Debug)]
pub(crate) struct StatsCollector {
    stats: SchedulerStats,
    last_dispatched: Option<Pid>,
}

impl StatsCollector {
    pub fn new(algorithm: AlgorithmKind, quantum: Option<Ticks>) -> Self {
        Self {
            stats: SchedulerStats {
                algorithm,
                quantum,
                dispatches: 0,
                context_switches: 0,
                preemptions: 0,
                idle_ticks: 0,
                makespan: 0,
                completed: 0,
            },
            last_dispatched: None,
        }
    }

    #[inline]
    pub fn inc_dispatch(&mut self, pid: Pid) {
        self.stats.dispatches += 1;
        if self.last_dispatched.is_some_and(|last| last != pid) {
            self.stats.context_switches += 1;
        }
        self.last_dispatched = Some(pid);
    }

    #[inline]
    pub fn inc_preemptions(&mut self) {
        self.stats.preemptions += 1;
    }

    #[inline]
    pub fn add_idle(&mut self, ticks: Ticks) {
        self.stats.idle_ticks += ticks;
    }

    #[inline]
    pub fn record_completion(&mut self, clock: Ticks) {
        self.stats.completed += 1;
        self.stats.makespan = clock;
    }

    pub fn snapshot(&self) -> SchedulerStats {
        self.stats.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_switch_only_on_pid_change() {
        let mut collector = StatsCollector::new(AlgorithmKind::RoundRobin, Some(2));
        collector.inc_dispatch(1);
        collector.inc_dispatch(1);
        collector.inc_dispatch(2);
        collector.inc_dispatch(1);

        let stats = collector.snapshot();
        assert_eq!(stats.dispatches, 4);
        assert_eq!(stats.context_switches, 2);
    }

    #[test]
    fn test_completion_tracks_makespan() {
        let mut collector = StatsCollector::new(AlgorithmKind::Npp, None);
        collector.record_completion(5);
        collector.record_completion(12);

        let stats = collector.snapshot();
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.makespan, 12);
        assert_eq!(stats.quantum, None);
    }
}
