//! Kinematic integration for ships, mines and power-ups.
//!
//! Velocities are in pixels per frame: position += velocity. Projectiles
//! have their own kinematics and are skipped here.

use hecs::World;

use judgment_core::components::{Dead, Hitbox, Player, Projectile};
use judgment_core::constants::{HEIGHT, WIDTH};
use judgment_core::types::{Position, Velocity};

pub fn run(world: &mut World) {
    for (_entity, (pos, vel, projectile, dead)) in world.query_mut::<(
        &mut Position,
        &Velocity,
        Option<&Projectile>,
        Option<&Dead>,
    )>() {
        if projectile.is_some() || dead.is_some() {
            continue;
        }
        pos.x += vel.x;
        pos.y += vel.y;
    }

    // The player may not leave the playfield.
    for (_entity, (_player, pos, hitbox)) in world.query_mut::<(&Player, &mut Position, &Hitbox)>()
    {
        let half_w = hitbox.width() / 2.0;
        let half_h = hitbox.height() / 2.0;
        pos.x = pos.x.clamp(half_w, WIDTH - half_w);
        pos.y = pos.y.clamp(half_h, HEIGHT - half_h);
    }
}
