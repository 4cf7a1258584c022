//! Priority-indexed propagation queues.

use std::collections::VecDeque;

use latch_core::{Priority, PropagatorId};

/// A fixed array of FIFO queues, one per priority level `0..=Priority::MAX`.
///
/// `pool_next` names the highest priority level known to be nonempty, so
/// [`PropagationQueues::get`] never has to scan past it.
pub struct PropagationQueues {
    queues: Vec<VecDeque<PropagatorId>>,
    pool_next: Option<usize>,
}

impl PropagationQueues {
    /// An empty queue bank.
    pub fn new() -> Self {
        Self {
            queues: (0..=Priority::MAX as usize).map(|_| VecDeque::new()).collect(),
            pool_next: None,
        }
    }

    /// Enqueue `id` at `priority`, raising `pool_next` if this priority
    /// exceeds the current one.
    pub fn put(&mut self, priority: Priority, id: PropagatorId) {
        let level = priority.level();
        self.queues[level].push_back(id);
        let exceeds = match self.pool_next {
            Some(current) => level > current,
            None => true,
        };
        if exceeds {
            self.pool_next = Some(level);
        }
    }

    /// Pop the next propagator from the highest nonempty queue at or
    /// below `pool_next`, scanning downward past empty ones.
    ///
    /// Returns `None` once every queue is empty.
    pub fn get(&mut self) -> Option<PropagatorId> {
        let mut level = self.pool_next?;
        loop {
            if let Some(id) = self.queues[level].pop_front() {
                self.pool_next = Some(level);
                return Some(id);
            }
            if level == 0 {
                self.pool_next = None;
                return None;
            }
            level -= 1;
        }
    }

    /// `true` iff every priority queue is empty.
    pub fn is_stable(&self) -> bool {
        self.queues.iter().all(VecDeque::is_empty)
    }

    /// Drop every queued entry and reset `pool_next`, used when
    /// re-initializing a clone's queues.
    pub fn clear(&mut self) {
        for q in &mut self.queues {
            q.clear();
        }
        self.pool_next = None;
    }
}

impl Default for PropagationQueues {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_when_empty() {
        let mut q = PropagationQueues::new();
        assert_eq!(q.get(), None);
    }

    #[test]
    fn higher_priority_is_served_first() {
        let mut q = PropagationQueues::new();
        q.put(Priority::new(1), PropagatorId(1));
        q.put(Priority::new(5), PropagatorId(2));
        assert_eq!(q.get(), Some(PropagatorId(2)));
        assert_eq!(q.get(), Some(PropagatorId(1)));
        assert_eq!(q.get(), None);
    }

    #[test]
    fn fifo_within_a_priority() {
        let mut q = PropagationQueues::new();
        q.put(Priority::new(3), PropagatorId(1));
        q.put(Priority::new(3), PropagatorId(2));
        assert_eq!(q.get(), Some(PropagatorId(1)));
        assert_eq!(q.get(), Some(PropagatorId(2)));
    }

    #[test]
    fn is_stable_reflects_queue_contents() {
        let mut q = PropagationQueues::new();
        assert!(q.is_stable());
        q.put(Priority::new(0), PropagatorId(1));
        assert!(!q.is_stable());
        q.get();
        assert!(q.is_stable());
    }

    #[test]
    fn scans_downward_past_empty_priorities() {
        let mut q = PropagationQueues::new();
        q.put(Priority::new(0), PropagatorId(1));
        q.put(Priority::new(6), PropagatorId(2));
        // drain priority 6 first
        assert_eq!(q.get(), Some(PropagatorId(2)));
        // pool_next is now 6 with nothing left there; get() must scan
        // down to priority 0 rather than returning None early.
        assert_eq!(q.get(), Some(PropagatorId(1)));
    }
}
