//! Amount decision engine
//!
//! Pure capping logic: given an item category, an actor's accumulated bonus
//! count, and a config snapshot, decide how many units the consume grants.
//! No hidden state; identical inputs always produce identical output.

use crate::core::config::BonusConfig;
use crate::core::types::ItemCategory;

/// Decide the granted quantity for a consume
///
/// - Base quantity: `min(hard_cap, max_items_per_consume)`.
/// - Flat mode returns the base outright, bypassing scaling and category
///   ceilings.
/// - Per-trigger scaling tightens the base to `pending_bonus * multiplier`.
/// - Special categories apply their configured ceiling (negative inherits
///   the generic unstackable ceiling); a disabled category grants 0.
/// - Standard items take the base unmodified.
pub fn decide(category: ItemCategory, pending_bonus: u32, config: &BonusConfig) -> u32 {
    let mut base = config.hard_cap.min(config.max_items_per_consume);

    if config.flat_mode {
        return base;
    }

    if config.scale_per_trigger {
        base = base.min(pending_bonus.saturating_mul(config.multiplier));
    }

    let rule = match category {
        ItemCategory::Standard => return base,
        ItemCategory::Unstackable => &config.unstackable,
        ItemCategory::Fragile => &config.fragile,
        ItemCategory::HighValue => &config.high_value,
        ItemCategory::Container => &config.container,
    };

    if !rule.enabled {
        return 0;
    }

    // Tolerate an unvalidated negative generic ceiling; decide() stays total
    let generic = config.unstackable.ceiling.max(0) as u32;
    base.min(rule.resolve(generic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CategoryRule;

    #[test]
    fn test_standard_items_take_the_base() {
        let config = BonusConfig::default();
        // pending 6, multiplier 1 -> min(64, 64, 6) = 6
        assert_eq!(decide(ItemCategory::Standard, 6, &config), 6);
    }

    #[test]
    fn test_scaling_compounds_with_pending_count() {
        let config = BonusConfig { multiplier: 3, ..BonusConfig::default() };
        assert_eq!(decide(ItemCategory::Standard, 4, &config), 12);

        // The base still caps the scaled value
        assert_eq!(decide(ItemCategory::Standard, 40, &config), 64);
    }

    #[test]
    fn test_scaling_disabled_grants_the_base() {
        let config = BonusConfig {
            scale_per_trigger: false,
            max_items_per_consume: 10,
            ..BonusConfig::default()
        };
        assert_eq!(decide(ItemCategory::Standard, 2, &config), 10);
    }

    #[test]
    fn test_flat_mode_ignores_everything_else() {
        let config = BonusConfig {
            flat_mode: true,
            max_items_per_consume: 32,
            high_value: CategoryRule { enabled: false, ceiling: -1 },
            ..BonusConfig::default()
        };

        // min(hard_cap, max_items) regardless of pending count or category
        assert_eq!(decide(ItemCategory::Standard, 0, &config), 32);
        assert_eq!(decide(ItemCategory::HighValue, 100, &config), 32);
    }

    #[test]
    fn test_disabled_category_grants_zero() {
        let config = BonusConfig {
            container: CategoryRule { enabled: false, ceiling: 10 },
            ..BonusConfig::default()
        };
        assert_eq!(decide(ItemCategory::Container, 100, &config), 0);
    }

    #[test]
    fn test_negative_ceiling_inherits_generic() {
        let config = BonusConfig {
            unstackable: CategoryRule { enabled: true, ceiling: 3 },
            fragile: CategoryRule { enabled: true, ceiling: -1 },
            ..BonusConfig::default()
        };
        // pending 10 -> scaled 10, capped by inherited ceiling 3
        assert_eq!(decide(ItemCategory::Fragile, 10, &config), 3);
    }

    #[test]
    fn test_explicit_ceiling_overrides_generic() {
        let config = BonusConfig {
            unstackable: CategoryRule { enabled: true, ceiling: 2 },
            high_value: CategoryRule { enabled: true, ceiling: 7 },
            ..BonusConfig::default()
        };
        assert_eq!(decide(ItemCategory::HighValue, 10, &config), 7);
        assert_eq!(decide(ItemCategory::Unstackable, 10, &config), 2);
    }

    #[test]
    fn test_determinism() {
        let config = BonusConfig::default();
        let first = decide(ItemCategory::Fragile, 8, &config);
        for _ in 0..10 {
            assert_eq!(decide(ItemCategory::Fragile, 8, &config), first);
        }
    }
}
