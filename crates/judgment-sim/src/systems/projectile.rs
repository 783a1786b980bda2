//! Projectile kinematics and playfield culling.
//!
//! Each frame a projectile's velocity is rebuilt from its heading at a fixed
//! speed, plus whatever velocity it inherited from the shooter. Only the
//! inherited part decays.

use glam::Vec2;
use hecs::{Entity, World};

use judgment_core::components::{Dead, Projectile};
use judgment_core::constants::*;
use judgment_core::types::{Position, Velocity};

use crate::systems::destruction;

/// Velocity for a projectile heading `angle` with `inherited` carry-over.
/// Angle 0 points right; positive angles turn counter-clockwise on screen.
pub fn velocity_for(angle: f32, inherited: Velocity) -> Velocity {
    let heading = Vec2::from_angle(angle) * Vec2::new(1.0, -1.0) * PROJECTILE_SPEED;
    let v = (heading + inherited.to_vec2()).clamp_length_max(PROJECTILE_MAX_SPEED);
    Velocity::from_vec2(v)
}

/// True once any edge of the playfield has been crossed.
pub fn out_of_bounds(pos: &Position) -> bool {
    pos.y > HEIGHT || pos.y < 0.0 || pos.x > WIDTH || pos.x < 0.0
}

/// Advance every live projectile and cull the ones that left the playfield.
pub fn run(world: &mut World, despawn: &mut Vec<Entity>) {
    let mut culled = Vec::new();

    for (entity, (projectile, pos, vel, dead)) in
        world.query_mut::<(&mut Projectile, &mut Position, &mut Velocity, Option<&Dead>)>()
    {
        if dead.is_some() {
            continue;
        }

        *vel = velocity_for(projectile.angle, projectile.inherited);
        pos.x += vel.x;
        pos.y += vel.y;
        projectile.inherited = Velocity::from_vec2(
            projectile.inherited.to_vec2() * (1.0 - PROJECTILE_FRICTION),
        );

        if out_of_bounds(pos) {
            culled.push(entity);
        }
    }

    for entity in culled {
        destruction::remove(world, despawn, entity);
    }
}
