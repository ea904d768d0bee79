/*!
 * Simulation State
 * Logical clock and the three queues a run moves records between
 */

use super::stats::{SchedulerStats, StatsCollector};
use super::types::{Algorithm, Slice};
use super::arrival;
use crate::core::types::Ticks;
use crate::process::{ProcessQueue, ProcessRecord};
use tracing::debug;

/// How the ready queue is maintained after arrivals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyOrder {
    /// Arrival order only
    Fifo,
    /// Stable re-sort by priority after every arrival check
    Priority,
}

/// State of one simulation run
///
/// Every input record is owned by exactly one of `pending`, `ready`,
/// `completed` or the running slot held by the discipline's loop.
#[derive(Debug)]
pub struct SimState {
    clock: Ticks,
    order: ReadyOrder,
    pending: ProcessQueue,
    ready: ProcessQueue,
    completed: ProcessQueue,
    stats: StatsCollector,
    /// Dispatch history, kept only when requested
    timeline: Option<Vec<Slice>>,
}

impl SimState {
    /// Start the clock at `start` with everything else in `pending`
    pub(crate) fn new(
        algorithm: Algorithm,
        order: ReadyOrder,
        pending: ProcessQueue,
        start: Ticks,
    ) -> Self {
        let capacity = pending.len() + 1;
        Self {
            clock: start,
            order,
            pending,
            ready: ProcessQueue::new(),
            completed: ProcessQueue::with_capacity(capacity),
            stats: StatsCollector::new(algorithm.kind(), algorithm.quantum()),
            timeline: None,
        }
    }

    /// Keep a `Slice` for every dispatch from here on
    pub(crate) fn record_timeline(&mut self) {
        self.timeline.get_or_insert_with(Vec::new);
    }

    #[inline]
    pub fn clock(&self) -> Ticks {
        self.clock
    }

    pub fn ready(&self) -> &ProcessQueue {
        &self.ready
    }

    pub fn pending(&self) -> &ProcessQueue {
        &self.pending
    }

    pub fn completed(&self) -> &ProcessQueue {
        &self.completed
    }

    /// Advance the logical clock by one millisecond
    #[inline]
    pub fn tick(&mut self) {
        self.clock += 1;
    }

    /// Admit arrivals at the current clock, then restore the ready order
    pub fn check_arrivals(&mut self) {
        arrival::check(&mut self.ready, &mut self.pending, self.clock);
        if self.order == ReadyOrder::Priority && !self.ready.is_empty() {
            self.ready.sort_by_priority();
        }
    }

    /// Put a preempted process back at the tail of the ready queue
    pub fn requeue(&mut self, record: ProcessRecord) {
        debug!(
            pid = record.pid,
            remaining = record.remaining,
            clock = self.clock,
            "Quantum expired, requeued"
        );
        self.close_slice();
        self.stats.inc_preemptions();
        self.ready.enqueue(record);
    }

    /// Stamp `record` finished at the current clock and append it to
    /// the completed queue
    pub fn complete(&mut self, mut record: ProcessRecord) {
        record.complete(self.clock);
        debug!(
            pid = record.pid,
            finish = self.clock,
            waiting = ?record.waiting,
            "Process completed"
        );
        self.close_slice();
        self.stats.record_completion(self.clock);
        self.completed.enqueue(record);
    }

    /// Hand the CPU to `record`
    pub(crate) fn dispatch(&mut self, record: ProcessRecord) -> ProcessRecord {
        debug!(
            pid = record.pid,
            clock = self.clock,
            remaining = record.remaining,
            "Dispatched"
        );
        self.stats.inc_dispatch(record.pid);
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.push(Slice {
                pid: record.pid,
                start: self.clock,
                ran: 0,
            });
        }
        record
    }

    fn close_slice(&mut self) {
        let clock = self.clock;
        if let Some(slice) = self.timeline.as_mut().and_then(|timeline| timeline.last_mut()) {
            slice.ran = clock - slice.start;
        }
    }

    /// Select the next process to run
    ///
    /// Takes the head of the ready queue. If the ready queue is empty but
    /// records are still pending, the CPU idles: the clock jumps to the
    /// earliest pending arrival and the skipped ticks count as idle.
    /// Returns `None` once nothing is left to run.
    pub fn next(&mut self) -> Option<ProcessRecord> {
        loop {
            if let Some(record) = self.ready.dequeue() {
                return Some(self.dispatch(record));
            }

            let next_arrival = self.pending.iter().map(|record| record.arrival).min()?;
            debug_assert!(next_arrival > self.clock, "Pending record missed its arrival");
            let resume = next_arrival.max(self.clock + 1);

            debug!(from = self.clock, to = resume, "CPU idle");
            self.stats.add_idle(resume - self.clock);
            self.clock = resume;
            self.check_arrivals();
        }
    }

    /// Finish the run, yielding the completion-ordered queue and the
    /// timeline (empty unless recorded)
    pub(crate) fn finish(self) -> (ProcessQueue, SchedulerStats, Vec<Slice>) {
        debug_assert!(self.pending.is_empty(), "Run ended with pending records");
        debug_assert!(self.ready.is_empty(), "Run ended with ready records");
        (
            self.completed,
            self.stats.snapshot(),
            self.timeline.unwrap_or_default(),
        )
    }
}
