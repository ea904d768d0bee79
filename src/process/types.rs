/*!
 * Process Types
 * The unit of work moved between scheduler queues
 */

use crate::core::types::{Pid, Priority, Ticks};
use serde::{Deserialize, Serialize};

/// Process record
///
/// Created once at import and moved by value between the pending,
/// dispatchable and completed queues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    /// CPU time still owed; only consumed by round robin
    pub remaining: Ticks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish: Option<Ticks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting: Option<Ticks>,
}

impl ProcessRecord {
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks, priority: Priority) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority,
            remaining: burst,
            finish: None,
            waiting: None,
        }
    }

    /// Stamp completion at `clock`
    ///
    /// Waiting time is `finish - arrival - burst`. A process cannot finish
    /// before it has arrived and received its whole burst.
    pub fn complete(&mut self, clock: Ticks) {
        debug_assert!(
            clock >= self.arrival + self.burst,
            "Process {} finished at {} before arrival {} + burst {}",
            self.pid,
            clock,
            self.arrival,
            self.burst
        );
        self.remaining = 0;
        self.finish = Some(clock);
        self.waiting = Some(clock - self.arrival - self.burst);
    }

    pub fn is_complete(&self) -> bool {
        self.finish.is_some()
    }

    /// Turnaround time (`finish - arrival`), once complete
    pub fn turnaround(&self) -> Option<Ticks> {
        self.finish.map(|finish| finish - self.arrival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_owes_full_burst() {
        let record = ProcessRecord::new(7, 3, 9, -2);
        assert_eq!(record.remaining, 9);
        assert!(!record.is_complete());
        assert_eq!(record.turnaround(), None);
    }

    #[test]
    fn test_complete_derives_waiting() {
        let mut record = ProcessRecord::new(2, 1, 3, 1);
        record.complete(8);
        assert_eq!(record.finish, Some(8));
        assert_eq!(record.waiting, Some(4));
        assert_eq!(record.turnaround(), Some(7));
        assert_eq!(record.remaining, 0);
    }
}
