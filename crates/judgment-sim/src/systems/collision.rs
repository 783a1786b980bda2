//! Per-frame collision resolution.
//!
//! Four passes, in order:
//!   1. hostiles (ships and mines) vs player projectiles
//!   2. player vs hostile projectiles
//!   3. player vs mines (flat damage, mine detonates)
//!   4. player vs power-ups (first contact consumes the item)
//!
//! Each pass first finds contacts with a rectangle pre-filter confirmed by a
//! mask test, then applies them in ascending id order. Contacts whose target
//! or projectile died earlier in the frame are skipped, so every hit lands
//! exactly once.

use hecs::{Entity, World};
use tracing::debug;

use judgment_core::components::*;
use judgment_core::enums::Faction;
use judgment_core::events::CombatEvent;
use judgment_core::types::{Position, Rect};

use crate::context::FrameContext;
use crate::systems::{combat, destruction, effects};

pub fn run(world: &mut World, ctx: &mut FrameContext) {
    resolve_projectile_hits(world, ctx, Faction::Hostile);
    resolve_projectile_hits(world, ctx, Faction::Player);
    resolve_mine_contacts(world, ctx);
    resolve_power_up_pickups(world, ctx);
}

/// Rectangle pre-filter, then pixel-mask confirmation.
pub fn bodies_collide(a_rect: &Rect, a: &Hitbox, b_rect: &Rect, b: &Hitbox) -> bool {
    if !a_rect.overlaps(b_rect) {
        return false;
    }
    let offset = (
        (b_rect.left - a_rect.left).round() as i32,
        (b_rect.top - a_rect.top).round() as i32,
    );
    a.mask.overlaps(&b.mask, offset)
}

/// All (target, other) pairs in contact, targets outermost, both sides in
/// the order given.
pub fn contacts(world: &World, targets: &[Entity], others: &[Entity]) -> Vec<(Entity, Entity)> {
    let others: Vec<_> = others
        .iter()
        .filter_map(|&e| body(world, e).map(|(rect, hitbox)| (e, rect, hitbox)))
        .collect();

    let mut pairs = Vec::new();
    for &target in targets {
        let Some((t_rect, t_hitbox)) = body(world, target) else {
            continue;
        };
        for (other, o_rect, o_hitbox) in &others {
            if bodies_collide(&t_rect, &t_hitbox, o_rect, o_hitbox) {
                pairs.push((target, *other));
            }
        }
    }
    pairs
}

fn body(world: &World, entity: Entity) -> Option<(Rect, hecs::Ref<'_, Hitbox>)> {
    let pos = *world.get::<&Position>(entity).ok()?;
    let hitbox = world.get::<&Hitbox>(entity).ok()?;
    Some((hitbox.rect_at(pos), hitbox))
}

/// Live combatants of `faction`, in id order. Includes mines.
pub fn combatants(world: &World, faction: Faction) -> Vec<Entity> {
    let mut query = world.query::<(&EntityId, &CombatStats, Option<&Dead>)>();
    let mut found: Vec<(EntityId, Entity)> = query
        .iter()
        .filter(|(_, (_, stats, dead))| stats.faction == faction && dead.is_none())
        .map(|(entity, (id, _, _))| (*id, entity))
        .collect();
    found.sort_by_key(|(id, _)| *id);
    found.into_iter().map(|(_, e)| e).collect()
}

/// Live projectiles fired by `faction`, in id order.
pub fn projectiles(world: &World, faction: Faction) -> Vec<Entity> {
    let mut query = world.query::<(&EntityId, &Projectile, Option<&Dead>)>();
    let mut found: Vec<(EntityId, Entity)> = query
        .iter()
        .filter(|(_, (_, p, dead))| p.faction == faction && dead.is_none())
        .map(|(entity, (id, _, _))| (*id, entity))
        .collect();
    found.sort_by_key(|(id, _)| *id);
    found.into_iter().map(|(_, e)| e).collect()
}

fn live_with<T: hecs::Component>(world: &World) -> Vec<Entity> {
    let mut query = world.query::<(&EntityId, &T, Option<&Dead>)>();
    let mut found: Vec<(EntityId, Entity)> = query
        .iter()
        .filter(|(_, (_, _, dead))| dead.is_none())
        .map(|(entity, (id, _, _))| (*id, entity))
        .collect();
    found.sort_by_key(|(id, _)| *id);
    found.into_iter().map(|(_, e)| e).collect()
}

/// Projectiles of the opposing faction against every live `target_faction`
/// combatant.
fn resolve_projectile_hits(world: &mut World, ctx: &mut FrameContext, target_faction: Faction) {
    let targets = combatants(world, target_faction);
    let shots = projectiles(world, target_faction.opposing());
    let pairs = contacts(world, &targets, &shots);

    for (target, shot) in pairs {
        if destruction::is_gone(world, target) || destruction::is_gone(world, shot) {
            continue;
        }

        let Ok((damage, penetration, owner)) = world
            .get::<&Projectile>(shot)
            .map(|p| (p.damage, p.penetration, p.owner))
        else {
            continue;
        };
        let (Ok(target_id), Ok(shot_id)) = (
            world.get::<&EntityId>(target).map(|id| *id),
            world.get::<&EntityId>(shot).map(|id| *id),
        ) else {
            continue;
        };

        let outcome = match world.get::<&mut CombatStats>(target) {
            Ok(mut stats) => combat::apply_damage(&mut stats, damage, penetration),
            Err(_) => continue,
        };
        destruction::remove(world, ctx.despawn, shot);

        match outcome {
            combat::DamageOutcome::Immune => {
                ctx.events.push(CombatEvent::Deflected { target: target_id });
            }
            combat::DamageOutcome::Shield { absorbed } => {
                ctx.events.push(CombatEvent::Hit {
                    target: target_id,
                    projectile: shot_id,
                    damage: absorbed,
                    shielded: true,
                });
            }
            combat::DamageOutcome::Health { dealt, .. } => {
                ctx.events.push(CombatEvent::Hit {
                    target: target_id,
                    projectile: shot_id,
                    damage: dealt,
                    shielded: false,
                });
            }
        }

        if outcome.is_lethal() {
            let killer = destruction::resolve_owner(world, owner);
            destruction::destroy(world, ctx, target, killer);
        }
    }
}

fn resolve_mine_contacts(world: &mut World, ctx: &mut FrameContext) {
    let players = live_with::<Player>(world);
    let mines = live_with::<Mine>(world);
    let pairs = contacts(world, &players, &mines);

    for (player, mine) in pairs {
        if destruction::is_gone(world, player) || destruction::is_gone(world, mine) {
            continue;
        }
        let Ok(mine_id) = world.get::<&EntityId>(mine).map(|id| *id) else {
            continue;
        };

        let damage = ctx.config.mine_contact_damage;
        let lethal = match world.get::<&mut CombatStats>(player) {
            Ok(mut stats) => combat::apply_flat_damage(&mut stats, damage),
            Err(_) => continue,
        };
        destruction::remove(world, ctx.despawn, mine);
        debug!(mine = mine_id.0, damage, "mine detonated");
        ctx.events.push(CombatEvent::MineDetonated {
            mine: mine_id,
            damage,
        });

        if lethal {
            destruction::destroy(world, ctx, player, None);
        }
    }
}

fn resolve_power_up_pickups(world: &mut World, ctx: &mut FrameContext) {
    let players = live_with::<Player>(world);
    let items = live_with::<PowerUp>(world);
    let pairs = contacts(world, &players, &items);

    for (player, item) in pairs {
        if destruction::is_gone(world, player) || destruction::is_gone(world, item) {
            continue;
        }
        let Ok(kind) = world.get::<&PowerUp>(item).map(|p| p.kind) else {
            continue;
        };

        destruction::remove(world, ctx.despawn, item);
        effects::apply_powerup(world, ctx, player, kind);
        ctx.score.power_ups_collected += 1;
        ctx.events.push(CombatEvent::PowerUpCollected { kind });
    }
}
