//! Bonus mechanic configuration with documented constants
//!
//! All tuning knobs are collected here with explanations of their purpose
//! and how they interact with each other.

use crate::core::error::{BonusError, Result};
use crate::core::types::Tick;
use serde::Deserialize;

/// Gate and ceiling for one item category
///
/// A negative ceiling inherits the generic unstackable ceiling, so operators
/// can raise the generic limit in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CategoryRule {
    /// Whether items of this category participate in the bonus at all
    pub enabled: bool,
    /// Per-grant ceiling for this category; negative inherits the generic
    /// unstackable ceiling
    pub ceiling: i32,
}

impl Default for CategoryRule {
    fn default() -> Self {
        Self { enabled: true, ceiling: -1 }
    }
}

impl CategoryRule {
    /// Resolve the effective ceiling, inheriting `generic` when negative
    pub fn resolve(&self, generic: u32) -> u32 {
        if self.ceiling < 0 {
            generic
        } else {
            self.ceiling as u32
        }
    }
}

/// Configuration for the bonus mechanic
///
/// Defaults reproduce the tuned live values. Absent keys in a TOML document
/// fall back to these defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BonusConfig {
    // === QUANTITY ===
    /// Flat quantity mode
    ///
    /// When enabled, every consume grants `min(hard_cap,
    /// max_items_per_consume)` outright, bypassing per-trigger scaling and
    /// category ceilings.
    pub flat_mode: bool,

    /// Absolute per-grant cap, independent of operator settings
    ///
    /// Nothing a single consume grants ever exceeds this. 64 matches a full
    /// stack in the host game.
    pub hard_cap: u32,

    /// Operator-facing per-grant cap
    ///
    /// Tightens `hard_cap` without touching it; the effective base is the
    /// smaller of the two.
    pub max_items_per_consume: u32,

    /// Scale the grant with the accumulated trigger count
    ///
    /// When enabled, the grant is additionally capped at
    /// `pending_bonus * multiplier`. Note that `pending_bonus` is already a
    /// running count, so the grant compounds with repeated triggers.
    pub scale_per_trigger: bool,

    /// Units granted per accumulated bonus unit when scaling is enabled
    pub multiplier: u32,

    // === CATEGORY CEILINGS ===
    /// Generic unstackable-item gate and ceiling
    ///
    /// Applies to non-full-stack items with no special class, and serves as
    /// the inheritance base for the special categories below. Its own
    /// ceiling must be non-negative (there is nothing left to inherit from).
    pub unstackable: CategoryRule,

    /// Fragile unstackable items
    pub fragile: CategoryRule,

    /// High-value single-use items
    pub high_value: CategoryRule,

    /// Container-type items
    pub container: CategoryRule,

    // === TIMING ===
    /// Accumulator increment per counted trigger
    ///
    /// At the default (2), N triggers inside the decay window leave a
    /// pending bonus of 2N.
    pub trigger_step: u32,

    /// Ticks of inactivity before a pending bonus expires
    ///
    /// Every counted trigger restarts this window (debounce). At the default
    /// (50), an actor has 50 ticks after their last trigger to acquire the
    /// matching item.
    pub decay_ticks: Tick,

    /// Ticks the same-tick guard flag stays armed
    ///
    /// The guard suppresses triggers caused by ordinary interaction and
    /// duplicate triggers the host delivers within one tick. Scheduling
    /// always defers at least one tick, so 0 and 1 behave identically; the
    /// knob exists for hosts with coarser event batching.
    pub guard_ticks: Tick,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            // Quantity
            flat_mode: false,
            hard_cap: 64,
            max_items_per_consume: 64,
            scale_per_trigger: true,
            multiplier: 1,

            // Category ceilings (special categories inherit from unstackable)
            unstackable: CategoryRule { enabled: true, ceiling: 2 },
            fragile: CategoryRule { enabled: true, ceiling: -1 },
            high_value: CategoryRule { enabled: true, ceiling: -1 },
            container: CategoryRule { enabled: true, ceiling: -1 },

            // Timing
            trigger_step: 2,
            decay_ticks: 50,
            guard_ticks: 1,
        }
    }
}

impl BonusConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.hard_cap == 0 {
            return Err(BonusError::InvalidConfig(
                "hard_cap must be positive".into(),
            ));
        }

        if self.trigger_step == 0 {
            return Err(BonusError::InvalidConfig(
                "trigger_step must be positive (a counted trigger must accumulate)".into(),
            ));
        }

        if self.decay_ticks == 0 {
            return Err(BonusError::InvalidConfig(
                "decay_ticks must be positive".into(),
            ));
        }

        if self.scale_per_trigger && self.multiplier == 0 {
            return Err(BonusError::InvalidConfig(
                "multiplier must be positive when scale_per_trigger is enabled".into(),
            ));
        }

        // The generic ceiling is the inheritance base; it cannot itself inherit.
        if self.unstackable.ceiling < 0 {
            return Err(BonusError::InvalidConfig(format!(
                "unstackable.ceiling ({}) must be non-negative",
                self.unstackable.ceiling
            )));
        }

        Ok(())
    }

    /// Parse a config from a TOML string
    ///
    /// Absent keys keep their default values; the result is validated.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
