//! Per-actor craft bonus state machine
//!
//! Owns every per-actor table. An actor is either idle (no accumulator
//! entry) or accumulating (entry present, one decay task armed). Each
//! accumulation episode ends exactly once: by consume, by decay, or by
//! terminate.
//!
//! All mutation happens on the host's tick loop thread; operations take the
//! current tick and first drain due expiries, so scheduled work observes host
//! tick order.

use crate::bonus::amount::decide;
use crate::core::config::BonusConfig;
use crate::core::types::{ActorId, ItemCategory, Tick};
use crate::schedule::{DebounceMap, TickScheduler};
use ahash::AHashMap;

/// Scheduled expiry payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expiry {
    /// The actor's pending bonus decayed before consumption
    Decay(ActorId),
    /// The actor's same-tick guard window ended
    ClearGuard(ActorId),
}

/// Tracks pending craft bonuses per actor
///
/// Invariants:
/// - an accumulator entry exists iff its pending bonus is > 0
/// - at most one decay task is live per actor; every counted trigger cancels
///   the prior task before arming the next (cancel-then-arm)
/// - terminate leaves the actor with no entry, no guard flag, and no queued
///   task, from any prior state
pub struct BonusTracker {
    config: BonusConfig,
    /// Accumulated bonus units per actor
    pending: AHashMap<ActorId, u32>,
    /// One live decay task per accumulating actor
    decay: DebounceMap<ActorId>,
    /// Same-tick suppression flag; presence of a live clear task is the flag
    guard: DebounceMap<ActorId>,
    scheduler: TickScheduler<Expiry>,
}

impl BonusTracker {
    pub fn new(config: BonusConfig) -> Self {
        Self {
            config,
            pending: AHashMap::new(),
            decay: DebounceMap::new(),
            guard: DebounceMap::new(),
            scheduler: TickScheduler::new(),
        }
    }

    pub fn config(&self) -> &BonusConfig {
        &self.config
    }

    /// Accumulated bonus for an actor; 0 when idle
    pub fn pending_bonus(&self, actor: ActorId) -> u32 {
        self.pending.get(&actor).copied().unwrap_or(0)
    }

    /// Whether the actor's same-tick guard flag is currently set
    pub fn is_guarded(&self, actor: ActorId) -> bool {
        self.guard.is_armed(actor)
    }

    /// Whether the actor has a live decay task
    pub fn has_decay_armed(&self, actor: ActorId) -> bool {
        self.decay.is_armed(actor)
    }

    /// Total queued expiry tasks (decay + guard clears), for observability
    pub fn queued_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Advance the clock to `now`, firing every due expiry
    ///
    /// Called by every event operation; public so the host can also express
    /// pure time passage.
    pub fn advance_to(&mut self, now: Tick) {
        for expiry in self.scheduler.advance_to(now) {
            match expiry {
                Expiry::Decay(actor) => {
                    self.decay.forget(actor);
                    if let Some(lost) = self.pending.remove(&actor) {
                        tracing::debug!(?actor, lost, "pending bonus decayed");
                    }
                }
                Expiry::ClearGuard(actor) => self.guard.forget(actor),
            }
        }
    }

    /// Ordinary interaction happened: suppress triggers for this tick
    ///
    /// The flag holds for the remainder of the current tick and removes
    /// itself on the next.
    pub fn on_guard_start(&mut self, actor: ActorId, now: Tick) {
        self.advance_to(now);
        self.arm_guard(actor);
    }

    /// Automated craft shortcut fired
    ///
    /// Counted triggers accumulate `trigger_step` units and restart the decay
    /// window. A counted trigger also re-sets the guard flag, because the
    /// host's event model can deliver the same shortcut several times within
    /// one tick. Returns whether the trigger was counted.
    pub fn on_trigger(&mut self, actor: ActorId, now: Tick) -> bool {
        self.advance_to(now);

        if self.guard.is_armed(actor) {
            tracing::trace!(?actor, "trigger suppressed by guard flag");
            return false;
        }

        let pending = self.pending.entry(actor).or_insert(0);
        *pending = pending.saturating_add(self.config.trigger_step);
        let pending = *pending;

        self.decay.arm(
            &mut self.scheduler,
            actor,
            self.config.decay_ticks,
            Expiry::Decay(actor),
        );
        self.arm_guard(actor);

        tracing::debug!(?actor, pending, "trigger counted");
        true
    }

    /// The actor acquired a matching item; returns the granted quantity
    ///
    /// One-shot: the entry is deleted and its decay task cancelled, even when
    /// the decided quantity is 0 (disabled category). An idle actor gets 0
    /// and nothing else happens. The caller performs the actual grant.
    pub fn on_consume(&mut self, actor: ActorId, category: ItemCategory, now: Tick) -> u32 {
        self.advance_to(now);

        let Some(pending) = self.pending.remove(&actor) else {
            return 0;
        };
        self.decay.cancel(&mut self.scheduler, actor);

        let quantity = decide(category, pending, &self.config);
        tracing::debug!(?actor, ?category, pending, quantity, "bonus consumed");
        quantity
    }

    /// Menu close, disconnect, or forcible removal: drop everything
    ///
    /// Cancels the decay task and the guard clear so nothing queued outlives
    /// the actor. Idempotent; safe on an idle actor.
    pub fn on_terminate(&mut self, actor: ActorId, now: Tick) {
        self.advance_to(now);

        if self.pending.remove(&actor).is_some() {
            tracing::debug!(?actor, "pending bonus dropped on terminate");
        }
        self.decay.cancel(&mut self.scheduler, actor);
        self.guard.cancel(&mut self.scheduler, actor);
    }

    fn arm_guard(&mut self, actor: ActorId) {
        self.guard.arm(
            &mut self.scheduler,
            actor,
            self.config.guard_ticks,
            Expiry::ClearGuard(actor),
        );
    }
}
