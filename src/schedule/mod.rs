//! Discrete-tick task scheduling
//!
//! Single-threaded cooperative model: scheduling only defers a payload to a
//! later tick, it never blocks. The owner drives the clock by calling
//! [`TickScheduler::advance_to`] and applies the drained payloads itself, so
//! every "callback" runs on the owner's thread in deterministic order.

pub mod debounce;

pub use debounce::DebounceMap;

use crate::core::types::Tick;
use ahash::AHashMap;
use std::collections::BTreeMap;

/// Handle to a scheduled task
///
/// Handles are monotonically increasing and never reused, so a stale handle
/// can always be told apart from a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Delayed-task queue on a discrete tick clock
///
/// Payloads fire in (fire tick, arm order). A zero delay still defers to the
/// next tick: a task armed during tick T is never drained by a later
/// `advance_to(T)` in the same tick, which is what the same-tick guard flag
/// relies on.
#[derive(Debug)]
pub struct TickScheduler<T> {
    now: Tick,
    next_id: u64,
    /// Queued payloads ordered by (fire tick, handle); handles are monotonic,
    /// so ties fire in arm order
    queue: BTreeMap<(Tick, TaskId), T>,
    /// Live handles and their fire ticks, for `is_queued` and stale-safe cancel
    live: AHashMap<TaskId, Tick>,
}

impl<T> TickScheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            queue: BTreeMap::new(),
            live: AHashMap::new(),
        }
    }

    /// Current scheduler clock
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Number of queued tasks
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Arm `payload` to fire after `delay` ticks
    ///
    /// A delay of 0 is treated as 1: firing is always deferred past the
    /// current tick.
    pub fn schedule(&mut self, delay: Tick, payload: T) -> TaskId {
        let fire_at = self.now.saturating_add(delay.max(1));
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.queue.insert((fire_at, id), payload);
        self.live.insert(id, fire_at);
        id
    }

    /// Whether a handle still refers to a queued task
    pub fn is_queued(&self, id: TaskId) -> bool {
        self.live.contains_key(&id)
    }

    /// Cancel a queued task; returns whether anything was cancelled
    ///
    /// Safe on stale handles: a task that already fired or was already
    /// cancelled is a no-op.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.live.remove(&id) {
            Some(fire_at) => self.queue.remove(&(fire_at, id)).is_some(),
            None => false,
        }
    }

    /// Advance the clock to `now` and drain every payload due at or before it
    ///
    /// Payloads come back in (fire tick, arm order). The clock never rewinds;
    /// an older `now` drains nothing new.
    pub fn advance_to(&mut self, now: Tick) -> Vec<T> {
        if now > self.now {
            self.now = now;
        }

        let mut due = Vec::new();
        while let Some((&(fire_at, _), _)) = self.queue.first_key_value() {
            if fire_at > self.now {
                break;
            }
            if let Some(((_, id), payload)) = self.queue.pop_first() {
                self.live.remove(&id);
                due.push(payload);
            }
        }
        due
    }
}

impl<T> Default for TickScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_at_exact_delay() {
        let mut sched = TickScheduler::new();
        sched.schedule(50, "decay");

        assert!(sched.advance_to(49).is_empty());
        assert_eq!(sched.advance_to(50), vec!["decay"]);
        assert!(sched.is_empty());
    }

    #[test]
    fn test_zero_delay_defers_to_next_tick() {
        let mut sched = TickScheduler::new();
        sched.advance_to(5);
        let id = sched.schedule(0, "guard-clear");

        // Still queued for the remainder of tick 5
        assert!(sched.advance_to(5).is_empty());
        assert!(sched.is_queued(id));

        assert_eq!(sched.advance_to(6), vec!["guard-clear"]);
        assert!(!sched.is_queued(id));
    }

    #[test]
    fn test_drain_order_is_fire_tick_then_arm_order() {
        let mut sched = TickScheduler::new();
        sched.schedule(3, "c");
        sched.schedule(1, "a");
        sched.schedule(1, "b");

        assert_eq!(sched.advance_to(10), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut sched = TickScheduler::new();
        let id = sched.schedule(5, "decay");

        assert!(sched.cancel(id));
        assert!(sched.advance_to(100).is_empty());
    }

    #[test]
    fn test_cancel_is_safe_on_stale_handles() {
        let mut sched = TickScheduler::new();
        let id = sched.schedule(1, "decay");

        sched.advance_to(1);
        // Already fired
        assert!(!sched.cancel(id));
        // Already cancelled
        assert!(!sched.cancel(id));
    }

    #[test]
    fn test_clock_never_rewinds() {
        let mut sched = TickScheduler::new();
        sched.advance_to(10);
        sched.schedule(2, "x");

        assert!(sched.advance_to(3).is_empty());
        assert_eq!(sched.now(), 10);
        assert_eq!(sched.advance_to(12), vec!["x"]);
    }

    #[test]
    fn test_handles_are_never_reused() {
        let mut sched = TickScheduler::new();
        let a = sched.schedule(1, "a");
        sched.advance_to(1);
        let b = sched.schedule(1, "b");
        assert_ne!(a, b);
    }
}
