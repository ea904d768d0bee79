/*!
 * Arrival Dispatcher
 * Moves processes from the pending pool into the ready queue as the clock
 * reaches their arrival time
 */

use crate::core::types::Ticks;
use crate::process::ProcessQueue;
use tracing::trace;

/// Move every pending record with `arrival == clock` to the tail of `ready`
///
/// Acts as a stable partition: arrivals keep their relative order as they
/// join `ready`, and records left in `pending` keep theirs. Returns the
/// number of records moved.
pub fn check(ready: &mut ProcessQueue, pending: &mut ProcessQueue, clock: Ticks) -> usize {
    let mut arrived = 0;

    for _ in 0..pending.len() {
        let Some(record) = pending.dequeue() else {
            break;
        };

        if record.arrival == clock {
            trace!(pid = record.pid, clock, "Process arrived");
            ready.enqueue(record);
            arrived += 1;
        } else {
            pending.enqueue(record);
        }
    }

    arrived
}
