//! One live timer per key
//!
//! Re-armable timer handles keyed by owner. Arming a key cancels its prior
//! task before scheduling the replacement (cancel-then-arm), so no two tasks
//! for the same key are ever simultaneously queued and an old task can never
//! fire after a newer arm superseded it.

use super::{TaskId, TickScheduler};
use crate::core::types::Tick;
use ahash::AHashMap;
use std::hash::Hash;

/// Map from key to the key's single live task handle
#[derive(Debug)]
pub struct DebounceMap<K> {
    handles: AHashMap<K, TaskId>,
}

impl<K: Eq + Hash + Copy> DebounceMap<K> {
    pub fn new() -> Self {
        Self { handles: AHashMap::new() }
    }

    /// Whether the key currently has a live task
    pub fn is_armed(&self, key: K) -> bool {
        self.handles.contains_key(&key)
    }

    /// Number of keys with a live task
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Arm `payload` for `key`, replacing any prior task
    ///
    /// The prior task is cancelled before the replacement is scheduled.
    pub fn arm<T>(
        &mut self,
        scheduler: &mut TickScheduler<T>,
        key: K,
        delay: Tick,
        payload: T,
    ) -> TaskId {
        if let Some(prev) = self.handles.remove(&key) {
            scheduler.cancel(prev);
        }
        let id = scheduler.schedule(delay, payload);
        self.handles.insert(key, id);
        id
    }

    /// Disarm the key's live task, if any
    pub fn cancel<T>(&mut self, scheduler: &mut TickScheduler<T>, key: K) -> bool {
        match self.handles.remove(&key) {
            Some(id) => scheduler.cancel(id),
            None => false,
        }
    }

    /// Drop the handle for a task that has already fired
    ///
    /// Called from the owner's drain loop; the scheduler no longer knows the
    /// handle at that point.
    pub fn forget(&mut self, key: K) {
        self.handles.remove(&key);
    }
}

impl<K: Eq + Hash + Copy> Default for DebounceMap<K> {
    fn default() -> Self {
        Self::new()
    }
}
