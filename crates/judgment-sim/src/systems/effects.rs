//! Power-up effects and timed status effects.
//!
//! Timed effects live in the target's `StatusEffects` list as
//! `{kind, expires_at_ms, restore}` entries. Picking up the same effect again
//! resets its expiry instead of stacking. The expiry sweep runs once per
//! frame and reverts whatever the effect changed.

use hecs::{Entity, World};
use tracing::debug;

use judgment_core::components::{ActiveEffect, CombatStats, Dead, StatusEffects};
use judgment_core::config::EffectSpec;
use judgment_core::enums::{EffectKind, PowerUpKind};
use judgment_core::events::CombatEvent;

use crate::context::FrameContext;
use crate::systems::combat;

/// Cosmetic on-screen indicator. Has no bearing on when effects expire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub kind: PowerUpKind,
    pub expires_at_ms: u64,
    /// Pickup banner rather than an effect countdown.
    pub banner: bool,
}

/// Apply a power-up to `stats`. Returns the timed effect it started or
/// refreshed, if any.
pub fn apply_effect(
    stats: &mut CombatStats,
    effects: &mut StatusEffects,
    spec: &EffectSpec,
    max_armor: i32,
    now_ms: u64,
) -> Option<EffectKind> {
    let expires_at_ms = now_ms + spec.duration_ms;
    match spec.kind {
        PowerUpKind::HealSoft | PowerUpKind::HealFull => {
            combat::heal(stats, spec.amount);
            None
        }
        PowerUpKind::ShieldBoost => {
            stats.shield = stats.max_shield;
            None
        }
        PowerUpKind::DoubleShot => {
            stats.double_shot = true;
            schedule(effects, EffectKind::DoubleShot, expires_at_ms, None);
            Some(EffectKind::DoubleShot)
        }
        PowerUpKind::Immunity => {
            stats.immunity = true;
            schedule(effects, EffectKind::Immunity, expires_at_ms, None);
            Some(EffectKind::Immunity)
        }
        PowerUpKind::RapidFire => {
            // A refresh keeps the pre-boost rate so the cut is never compounded.
            let base = effects
                .get(EffectKind::RapidFire)
                .and_then(|e| e.restore)
                .unwrap_or(stats.fire_rate);
            let percent = u64::from(spec.amount.clamp(1, 100) as u32);
            stats.fire_rate = ((u64::from(base) * percent) / 100).max(1) as u32;
            stats.rapid_fire = true;
            schedule(effects, EffectKind::RapidFire, expires_at_ms, Some(base));
            Some(EffectKind::RapidFire)
        }
        PowerUpKind::ArmorBoost => {
            if stats.armor < max_armor {
                stats.armor = (stats.armor + spec.amount).min(max_armor);
            }
            None
        }
        PowerUpKind::DamageBoost => {
            stats.attack += spec.amount;
            None
        }
    }
}

fn schedule(
    effects: &mut StatusEffects,
    kind: EffectKind,
    expires_at_ms: u64,
    restore: Option<u32>,
) {
    if let Some(existing) = effects.active.iter_mut().find(|e| e.kind == kind) {
        existing.expires_at_ms = expires_at_ms;
        existing.restore = existing.restore.or(restore);
        return;
    }
    effects.active.push(ActiveEffect {
        kind,
        expires_at_ms,
        restore,
    });
}

/// Revert every effect that has expired at `now_ms`.
pub fn expire(
    stats: &mut CombatStats,
    effects: &mut StatusEffects,
    now_ms: u64,
) -> Vec<EffectKind> {
    let mut expired = Vec::new();
    effects.active.retain(|effect| {
        if now_ms < effect.expires_at_ms {
            return true;
        }
        match effect.kind {
            EffectKind::DoubleShot => stats.double_shot = false,
            EffectKind::Immunity => stats.immunity = false,
            EffectKind::RapidFire => {
                stats.rapid_fire = false;
                if let Some(rate) = effect.restore {
                    stats.fire_rate = rate;
                }
            }
        }
        expired.push(effect.kind);
        false
    });
    expired
}

/// Apply a collected power-up to `target` and queue its indicators.
pub fn apply_powerup(
    world: &mut World,
    ctx: &mut FrameContext,
    target: Entity,
    kind: PowerUpKind,
) {
    let Ok((stats, effects)) =
        world.query_one_mut::<(&mut CombatStats, &mut StatusEffects)>(target)
    else {
        return;
    };

    let spec = *ctx.effects.get(kind);
    let started = apply_effect(stats, effects, &spec, ctx.config.max_armor, ctx.now_ms);
    debug!(?kind, health = stats.health, armor = stats.armor, "power-up applied");

    ctx.indicators.push(Indicator {
        kind,
        expires_at_ms: ctx.now_ms + ctx.config.pickup_banner_ms,
        banner: true,
    });
    if started.is_some() {
        let expires_at_ms = ctx.now_ms + spec.duration_ms;
        // One countdown per kind; a refresh replaces the old one.
        ctx.indicators.retain(|i| i.banner || i.kind != kind);
        ctx.indicators.push(Indicator {
            kind,
            expires_at_ms,
            banner: false,
        });
    }
}

/// Expiry sweep over every live entity, plus indicator expiry.
pub fn run(world: &mut World, ctx: &mut FrameContext) {
    for (_entity, (stats, effects, dead)) in
        world.query_mut::<(&mut CombatStats, &mut StatusEffects, Option<&Dead>)>()
    {
        if dead.is_some() || effects.active.is_empty() {
            continue;
        }
        for kind in expire(stats, effects, ctx.now_ms) {
            debug!(?kind, "status effect expired");
            ctx.events.push(CombatEvent::EffectExpired { kind });
        }
    }

    let now_ms = ctx.now_ms;
    ctx.indicators.retain(|i| i.expires_at_ms > now_ms);
}
