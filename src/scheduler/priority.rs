/*!
 * Priority Ordering
 * Stable ascending sort of the ready queue by priority value
 */

use crate::process::ProcessQueue;

/// Reorder `queue` so lower priority values come first
///
/// The sort is stable: records with equal priority keep their queue order,
/// which is what gives FCFS tie-breaking among equal priorities.
pub fn sort(queue: &mut ProcessQueue) {
    if queue.len() < 2 {
        return;
    }
    queue.as_mut_slice().sort_by_key(|record| record.priority);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessRecord;
    use pretty_assertions::assert_eq;

    fn queue(records: &[(u32, i32)]) -> ProcessQueue {
        records
            .iter()
            .map(|&(pid, priority)| ProcessRecord::new(pid, 0, 1, priority))
            .collect()
    }

    #[test]
    fn test_ascending_by_priority() {
        let mut ready = queue(&[(1, 3), (2, 1), (3, 2)]);
        sort(&mut ready);
        assert_eq!(ready.pids(), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_queue_order() {
        let mut ready = queue(&[(1, 2), (2, 1), (3, 2), (4, 1), (5, 2)]);
        sort(&mut ready);
        assert_eq!(ready.pids(), vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_negative_priorities_first() {
        let mut ready = queue(&[(1, 0), (2, -5), (3, 10)]);
        sort(&mut ready);
        assert_eq!(ready.pids(), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_after_wraparound() {
        // Head removals and tail pushes leave the deque split in memory
        let mut ready = queue(&[(1, 5), (2, 5), (3, 5)]);
        ready.dequeue();
        ready.dequeue();
        ready.enqueue(ProcessRecord::new(4, 0, 1, 1));
        ready.enqueue(ProcessRecord::new(5, 0, 1, 5));
        ready.enqueue(ProcessRecord::new(6, 0, 1, 0));

        sort(&mut ready);
        assert_eq!(ready.pids(), vec![6, 4, 3, 5]);
    }
}
