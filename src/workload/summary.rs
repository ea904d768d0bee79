/*!
 * Run Summary
 * Average waiting and turnaround times over the completed processes
 */

use crate::core::types::Ticks;
use crate::process::ProcessRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer-truncated averages over a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    pub processes: usize,
    pub average_waiting: Ticks,
    pub average_turnaround: Ticks,
}

impl Summary {
    /// Summarize completed records; `None` when there are none
    pub fn from_records<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a ProcessRecord>,
    {
        let mut processes = 0usize;
        let mut total_waiting: u128 = 0;
        let mut total_turnaround: u128 = 0;

        for record in records {
            let (Some(waiting), Some(turnaround)) = (record.waiting, record.turnaround()) else {
                continue;
            };
            processes += 1;
            total_waiting += u128::from(waiting);
            total_turnaround += u128::from(turnaround);
        }

        if processes == 0 {
            return None;
        }

        let count = processes as u128;
        Some(Self {
            processes,
            average_waiting: (total_waiting / count) as Ticks,
            average_turnaround: (total_turnaround / count) as Ticks,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average waiting time: {} ms, average turnaround time: {} ms",
            self.average_waiting, self.average_turnaround
        )
    }
}
