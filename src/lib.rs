//! Autocraft Bonus - debounced per-actor craft bonus accumulation
//!
//! An actor who repeatedly triggers a craft action through an automated
//! shortcut accumulates a pending bonus, delivered exactly once on their next
//! matching item acquisition. The core pieces:
//!
//! - [`bonus::BonusTracker`]: the per-actor state machine (guard / trigger /
//!   consume / terminate)
//! - [`schedule::TickScheduler`]: re-armable delayed tasks on a discrete tick
//!   clock
//! - [`bonus::decide`]: the pure amount decision engine
//!
//! The crate is a library with no runtime of its own; the host delivers
//! events tagged with the current tick and performs the actual item grant.

pub mod bonus;
pub mod core;
pub mod schedule;
