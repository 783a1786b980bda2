//! Entity death and removal.
//!
//! Removal is mark-and-sweep: an entity gets a `Dead` marker, every system
//! skips marked entities, and cleanup despawns them at the end of the frame.
//! The marker also makes `destroy` idempotent: the first call wins.

use hecs::{Entity, World};
use tracing::debug;

use judgment_core::components::{CombatStats, Dead, EntityId, Player};
use judgment_core::events::CombatEvent;

use crate::context::FrameContext;
use crate::world_setup;

/// True if the entity is gone or already marked for removal.
pub fn is_gone(world: &World, entity: Entity) -> bool {
    !world.contains(entity) || world.get::<&Dead>(entity).is_ok()
}

/// Mark an entity for removal without any combat side effects.
/// Returns false if it was already gone; that is not an error.
pub fn remove(world: &mut World, despawn: &mut Vec<Entity>, entity: Entity) -> bool {
    if is_gone(world, entity) {
        return false;
    }
    if world.insert_one(entity, Dead).is_err() {
        return false;
    }
    despawn.push(entity);
    true
}

/// Kill a combatant: award its points, roll for a drop, and remove it.
///
/// Safe to call more than once for the same death; only the first call has
/// any effect. Returns whether this call did the work.
pub fn destroy(
    world: &mut World,
    ctx: &mut FrameContext,
    entity: Entity,
    killer: Option<EntityId>,
) -> bool {
    if is_gone(world, entity) {
        return false;
    }

    let Ok(id) = world.get::<&EntityId>(entity).map(|id| *id) else {
        return false;
    };
    let Ok((points, class)) = world
        .get::<&CombatStats>(entity)
        .map(|stats| (stats.points, stats.class))
    else {
        return false;
    };
    let is_player = world.get::<&Player>(entity).is_ok();

    if !remove(world, ctx.despawn, entity) {
        return false;
    }

    if !is_player {
        ctx.score.award(points);
    }
    debug!(entity = id.0, points, score = ctx.score.score, "entity destroyed");
    ctx.events.push(CombatEvent::Destroyed {
        entity: id,
        class,
        points,
        killer,
    });

    // A dead player ends the run; nothing drops for it.
    if !is_player {
        if let Some(kind) = ctx.drops.roll(ctx.difficulty, ctx.rng) {
            let position = world_setup::random_drop_position(ctx.rng, ctx.config);
            world_setup::spawn_power_up(world, ctx.ids, kind, position);
            debug!(?kind, x = position.x, y = position.y, "power-up dropped");
            ctx.events.push(CombatEvent::PowerUpDropped { kind, position });
        }
    }
    true
}

/// Resolve a projectile owner to a live entity id, if it still exists.
pub fn resolve_owner(world: &World, owner: EntityId) -> Option<EntityId> {
    let mut query = world.query::<(&EntityId, Option<&Dead>)>();
    query
        .iter()
        .find(|(_, (id, dead))| **id == owner && dead.is_none())
        .map(|(_, (id, _))| *id)
}
