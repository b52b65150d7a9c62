//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Natural stack size of a fully stackable item
pub const FULL_STACK: u32 = 64;

/// Opaque unique identifier for an actor
///
/// Host-supplied identity; the core only uses it as a map key and never
/// inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Discrete tick counter (host time unit)
pub type Tick = u64;

/// Bonus category of an item, as classified by the host
///
/// The special categories carry their own configured ceilings; everything
/// else is classified by natural stack size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Fully stackable item; no category ceiling applies
    Standard,
    /// Non-full-stack item with no special class; generic ceiling applies
    Unstackable,
    /// Fragile unstackable item
    Fragile,
    /// High-value single-use item
    HighValue,
    /// Container-type item
    Container,
}

impl ItemCategory {
    /// Classify a plain item (no special class) by its natural stack size
    pub fn from_stack_size(natural: u32) -> Self {
        if natural >= FULL_STACK {
            ItemCategory::Standard
        } else {
            ItemCategory::Unstackable
        }
    }
}
