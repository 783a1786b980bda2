//! Shooting: fire-rate gating, double shot, and hostile gunners.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::trace;

use judgment_core::components::*;
use judgment_core::constants::DOUBLE_SHOT_SPREAD;
use judgment_core::enums::BlasterSkin;
use judgment_core::events::CombatEvent;
use judgment_core::types::{Position, Velocity};

use crate::context::FrameContext;
use crate::systems::destruction;
use crate::world_setup::{self, Muzzle};

/// Point on the hitbox edge in the direction of `angle`. For angle 0 this
/// is the middle of the right edge.
pub fn leading_edge(pos: Position, hitbox: &Hitbox, angle: f32) -> Position {
    let dir = Vec2::from_angle(angle) * Vec2::new(1.0, -1.0);
    let half = Vec2::new(hitbox.width(), hitbox.height()) / 2.0;
    Position::from_vec2(pos.to_vec2() + dir * half)
}

/// Whether a shooter may fire at `now_ms`. The full cooldown has to be
/// exceeded, not just reached. A shooter that never fired may fire.
pub fn cooldown_elapsed(shooter: &Shooter, fire_rate: u32, now_ms: u64) -> bool {
    match shooter.last_shot_ms {
        Some(last) => now_ms.saturating_sub(last) > u64::from(fire_rate),
        None => true,
    }
}

/// Try to fire from `shooter` toward `angle`. Spawns one projectile, or two
/// stacked vertically around the spawn point with double shot. Returns the
/// number of projectiles spawned (0 while cooling down).
pub fn attempt_shot(
    world: &mut World,
    ctx: &mut FrameContext,
    shooter: Entity,
    angle: f32,
    spawn_point: Option<Position>,
) -> u32 {
    if destruction::is_gone(world, shooter) {
        return 0;
    }

    let Ok((id, stats, pos, velocity, hitbox, cooldown)) = world.query_one_mut::<(
        &EntityId,
        &CombatStats,
        &Position,
        Option<&Velocity>,
        &Hitbox,
        &mut Shooter,
    )>(shooter) else {
        return 0;
    };

    if !cooldown_elapsed(cooldown, stats.fire_rate, ctx.now_ms) {
        return 0;
    }
    cooldown.last_shot_ms = Some(ctx.now_ms);

    let origin = spawn_point.unwrap_or_else(|| leading_edge(*pos, hitbox, angle));
    let muzzle = Muzzle {
        owner: *id,
        damage: stats.attack,
        penetration: stats.penetration,
        faction: stats.faction,
        class: stats.class,
        skin: if stats.double_shot {
            BlasterSkin::Purple
        } else {
            stats.class.projectile_skin()
        },
        inherited: velocity.copied().unwrap_or_default(),
    };
    let half_spread = DOUBLE_SHOT_SPREAD / 2.0;
    let offsets = if stats.double_shot {
        vec![-half_spread, half_spread]
    } else {
        vec![0.0]
    };

    for &dy in &offsets {
        let at = Position::new(origin.x, origin.y + dy);
        world_setup::spawn_projectile(world, ctx.ids, muzzle, at, angle);
    }

    let count = offsets.len() as u32;
    trace!(shooter = muzzle.owner.0, count, "shot fired");
    ctx.events.push(CombatEvent::ShotFired {
        shooter: muzzle.owner,
        faction: muzzle.faction,
        count,
    });
    count
}

/// Every live gunner tries to fire along its fixed angle.
pub fn run_gunners(world: &mut World, ctx: &mut FrameContext) {
    let mut gunners: Vec<(EntityId, Entity, f32)> = {
        let mut query = world.query::<(&EntityId, &Gunner, Option<&Dead>)>();
        query
            .iter()
            .filter(|(_, (_, _, dead))| dead.is_none())
            .map(|(entity, (id, gunner, _))| (*id, entity, gunner.angle))
            .collect()
    };
    gunners.sort_by_key(|(id, _, _)| *id);

    for (_, entity, angle) in gunners {
        attempt_shot(world, ctx, entity, angle, None);
    }
}
