//! Damage resolution: armor mitigation, shield absorption, flat damage, heals.

use judgment_core::components::CombatStats;

/// Result of one `apply_damage` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target was immune; nothing changed.
    Immune,
    /// The shield took the whole hit.
    Shield { absorbed: i32 },
    /// Health took the hit. `lethal` is set when health reached zero.
    Health { dealt: i32, lethal: bool },
}

impl DamageOutcome {
    pub fn is_lethal(&self) -> bool {
        matches!(self, DamageOutcome::Health { lethal: true, .. })
    }
}

/// Damage left after armor, net of the attacker's penetration.
/// Armor can reduce a hit to zero but never turns it into healing.
pub fn effective_damage(damage: i32, armor: i32, penetration: i32) -> i32 {
    (damage - (armor - penetration).max(0)).max(0)
}

/// Apply a projectile hit to `stats`.
///
/// While the shield is up it absorbs the entire hit, even when the hit is
/// bigger than what is left of the shield; the excess is not carried over
/// to health.
pub fn apply_damage(stats: &mut CombatStats, damage: i32, penetration: i32) -> DamageOutcome {
    if stats.immunity {
        return DamageOutcome::Immune;
    }

    let effective = effective_damage(damage, stats.armor, penetration);
    if stats.shield > 0 {
        stats.shield = (stats.shield - effective).max(0);
        return DamageOutcome::Shield {
            absorbed: effective,
        };
    }

    stats.health = (stats.health - effective).max(0);
    DamageOutcome::Health {
        dealt: effective,
        lethal: stats.is_dead(),
    }
}

/// Flat health loss that ignores shield, armor and immunity (mine contact).
/// Returns true when it was lethal.
pub fn apply_flat_damage(stats: &mut CombatStats, amount: i32) -> bool {
    stats.health = (stats.health - amount.max(0)).max(0);
    stats.is_dead()
}

/// Restore health, clamped to `max_health`.
pub fn heal(stats: &mut CombatStats, amount: i32) {
    stats.health = (stats.health + amount.max(0)).min(stats.max_health);
}
