//! Repeating task scheduler
//!
//! Time is always passed in by the caller, so tests can drive it with a
//! hand-made `Instant` instead of sleeping.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Cancellable handle to a scheduled repeating task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Task {
    period: Duration,
    next: Instant,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: BTreeMap<TaskHandle, Task>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task that first fires one `period` after `now`.
    /// A zero period is bumped to one millisecond.
    pub fn schedule_repeating(&mut self, period: Duration, now: Instant) -> TaskHandle {
        let period = period.max(Duration::from_millis(1));
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.insert(
            handle,
            Task {
                period,
                next: now + period,
            },
        );
        handle
    }

    /// Returns false if the handle was not scheduled
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.tasks.remove(&handle).is_some()
    }

    #[cfg(test)]
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(&handle)
    }

    /// Tasks whose deadline has passed. Each fires at most once per call;
    /// missed periods are skipped rather than replayed.
    pub fn due(&mut self, now: Instant) -> Vec<TaskHandle> {
        let mut fired = Vec::new();
        for (handle, task) in self.tasks.iter_mut() {
            if task.next > now {
                continue;
            }
            fired.push(*handle);
            while task.next <= now {
                task.next += task.period;
            }
        }
        fired
    }

    /// Earliest pending deadline, used to bound the event poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.values().map(|t| t.next).min()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
