//! Cleanup system: culls stray hostiles and despawns everything marked dead.

use hecs::{Entity, World};
use tracing::trace;

use judgment_core::components::{Dead, Hostile};
use judgment_core::constants::{HEIGHT, OFFSCREEN_MARGIN, WIDTH};
use judgment_core::types::Position;

use crate::systems::destruction;

/// True once a position is more than `OFFSCREEN_MARGIN` past any edge.
pub fn beyond_margin(pos: &Position) -> bool {
    pos.x < -OFFSCREEN_MARGIN
        || pos.x > WIDTH + OFFSCREEN_MARGIN
        || pos.y < -OFFSCREEN_MARGIN
        || pos.y > HEIGHT + OFFSCREEN_MARGIN
}

/// Remove hostiles that drifted off the playfield (no score, no drop), then
/// despawn every entity in the buffer.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    let strays: Vec<Entity> = world
        .query_mut::<(&Position, &Hostile, Option<&Dead>)>()
        .into_iter()
        .filter(|(_, (pos, _, dead))| dead.is_none() && beyond_margin(pos))
        .map(|(entity, _)| entity)
        .collect();

    for entity in strays {
        trace!(?entity, "hostile left the playfield");
        destruction::remove(world, despawn_buffer, entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
