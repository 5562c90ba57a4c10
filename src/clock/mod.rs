//! Virtual clock with a cancelable pending-task queue.
//!
//! The engine has exactly two timed effects — the per-second countdown
//! and the post-selection resolution delay — and both run on this queue
//! instead of a wall clock. Time advances only when the embedding calls
//! the engine's `tick()`, so every timed behavior is deterministic and
//! testable without real waits.
//!
//! ## Behavior
//!
//! - `schedule()`: register a task to come due after a delay
//! - `cancel()`: remove a pending task by its id
//! - `advance()`: move the clock one tick and drain the tasks that have
//!   come due, in the order they were scheduled

use serde::{Deserialize, Serialize};

use crate::core::Ticks;

/// Identifier for a scheduled task, usable to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(u64);

impl TimerId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A task waiting for its due tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PendingTask<T> {
    id: TimerId,
    due: u64,
    task: T,
}

/// A queue of tasks scheduled against a virtual clock.
///
/// Tasks due on the same tick drain in scheduling order. The queue never
/// fires anything spontaneously — only `advance()` releases tasks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimerQueue<T> {
    /// Current tick. Starts at zero.
    now: u64,
    /// Next task id to allocate.
    next_id: u64,
    /// Pending tasks, in scheduling order.
    pending: Vec<PendingTask<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue at tick zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// The current tick.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of tasks waiting to come due.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Schedule a task to come due `delay` ticks from now.
    ///
    /// A zero delay means the task fires on the next `advance()`.
    pub fn schedule(&mut self, delay: Ticks, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTask {
            id,
            due: self.now + u64::from(delay.raw()),
            task,
        });
        id
    }

    /// Cancel a pending task. Returns false if it already fired or was
    /// never scheduled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    /// Advance the clock one tick and drain every task now due, in
    /// scheduling order.
    pub fn advance(&mut self) -> Vec<T> {
        self.now += 1;
        let now = self.now;

        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.pending.len());
        for pending in self.pending.drain(..) {
            if pending.due <= now {
                due.push(pending.task);
            } else {
                remaining.push(pending);
            }
        }
        self.pending = remaining;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queue() {
        let mut queue: TimerQueue<&str> = TimerQueue::new();
        assert_eq!(queue.now(), 0);
        assert_eq!(queue.pending_count(), 0);
        assert!(queue.advance().is_empty());
        assert_eq!(queue.now(), 1);
    }

    #[test]
    fn test_task_fires_at_due_tick() {
        let mut queue = TimerQueue::new();
        queue.schedule(Ticks::new(2), "resolve");

        assert!(queue.advance().is_empty());
        assert_eq!(queue.advance(), vec!["resolve"]);
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_same_tick_tasks_fire_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(Ticks::new(1), "first");
        queue.schedule(Ticks::new(1), "second");
        queue.schedule(Ticks::new(2), "later");

        assert_eq!(queue.advance(), vec!["first", "second"]);
        assert_eq!(queue.advance(), vec!["later"]);
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(Ticks::new(1), "keep");
        let drop = queue.schedule(Ticks::new(1), "drop");

        assert!(queue.cancel(drop));
        assert!(!queue.cancel(drop));
        assert_eq!(queue.advance(), vec!["keep"]);
        assert!(!queue.cancel(keep));
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut queue = TimerQueue::new();
        queue.schedule(Ticks::new(0), "now-ish");
        assert_eq!(queue.advance(), vec!["now-ish"]);
    }

    #[test]
    fn test_clock_only_moves_on_advance() {
        let mut queue = TimerQueue::new();
        queue.schedule(Ticks::new(1), "frozen");

        // No matter how long we hold the queue, nothing fires until
        // advance() is called.
        assert_eq!(queue.pending_count(), 1);
        assert_eq!(queue.now(), 0);

        assert_eq!(queue.advance(), vec!["frozen"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = TimerQueue::new();
        let a = queue.schedule(Ticks::new(1), 1);
        let b = queue.schedule(Ticks::new(1), 2);
        assert_ne!(a, b);
        assert_ne!(a.raw(), b.raw());
    }
}
