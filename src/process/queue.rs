/*!
 * Process Queue
 * FIFO container of process records backing the pending, ready and
 * completed pools
 */

use super::types::ProcessRecord;
use crate::core::types::Pid;
use std::collections::VecDeque;

/// Ordered process queue
///
/// Insertion order is meaningful: it encodes FCFS tie-breaking for the
/// ready queue and completion chronology for the completed queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessQueue {
    records: VecDeque<ProcessRecord>,
}

impl ProcessQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
        }
    }

    /// Append at the tail
    #[inline]
    pub fn enqueue(&mut self, record: ProcessRecord) {
        self.records.push_back(record);
    }

    /// Remove and return the head (None if empty)
    #[inline]
    pub fn dequeue(&mut self) -> Option<ProcessRecord> {
        self.records.pop_front()
    }

    pub fn front(&self) -> Option<&ProcessRecord> {
        self.records.front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.records.iter()
    }

    /// Pids in queue order
    pub fn pids(&self) -> Vec<Pid> {
        self.records.iter().map(|r| r.pid).collect()
    }

    /// Contiguous view for in-place reordering
    pub(crate) fn as_mut_slice(&mut self) -> &mut [ProcessRecord] {
        self.records.make_contiguous()
    }

    /// Stable ascending sort by priority value
    pub fn sort_by_priority(&mut self) {
        crate::scheduler::priority::sort(self);
    }

    pub fn into_vec(self) -> Vec<ProcessRecord> {
        self.records.into()
    }
}

impl FromIterator<ProcessRecord> for ProcessQueue {
    fn from_iter<I: IntoIterator<Item = ProcessRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<ProcessRecord>> for ProcessQueue {
    fn from(records: Vec<ProcessRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }
}

impl IntoIterator for ProcessQueue {
    type Item = ProcessRecord;
    type IntoIter = std::collections::vec_deque::IntoIter<ProcessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProcessQueue {
    type Item = &'a ProcessRecord;
    type IntoIter = std::collections::vec_deque::Iter<'a, ProcessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pid: Pid) -> ProcessRecord {
        ProcessRecord::new(pid, 0, 1, 0)
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = ProcessQueue::new();
        queue.enqueue(record(1));
        queue.enqueue(record(2));
        queue.enqueue(record(3));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue().map(|r| r.pid), Some(1));
        assert_eq!(queue.dequeue().map(|r| r.pid), Some(2));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_empty_dequeue() {
        let mut queue = ProcessQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_requeue_goes_to_tail() {
        let mut queue: ProcessQueue = (1..=3).map(record).collect();
        let head = queue.dequeue().unwrap();
        queue.enqueue(head);
        assert_eq!(queue.pids(), vec![2, 3, 1]);
    }
}
