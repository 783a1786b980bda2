//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, hostiles, mines, power-ups and projectiles with
//! their component bundles. Art assets are external, so masks are built from
//! simple shapes sized like the sprites they stand in for.

use hecs::{Entity, EntityBuilder, World};
use rand::Rng;

use judgment_core::components::*;
use judgment_core::config::CombatConfig;
use judgment_core::constants::*;
use judgment_core::enums::*;
use judgment_core::mask::CollisionMask;
use judgment_core::types::{Position, Velocity};

use crate::systems::projectile;

/// Hands out stable entity ids. Ids are never reused within a run.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

/// Set up the opening layout: the player plus one of each hostile kind.
/// Returns the player entity.
pub fn setup_game(world: &mut World, ids: &mut IdAllocator) -> Entity {
    let player = spawn_player(
        world,
        ids,
        Position::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
    );
    spawn_structure(
        world,
        ids,
        Position::new(WIDTH - 100.0, 500.0),
        Velocity::new(-0.2, 0.0),
    );
    spawn_fighter(
        world,
        ids,
        Position::new(WIDTH - 60.0, 250.0),
        Velocity::new(-1.0, 0.0),
    );
    spawn_mine(
        world,
        ids,
        Position::new(WIDTH - 20.0, 200.0),
        Velocity::new(-0.5, 0.5),
    );
    player
}

/// Spawn the player's ship with default stats.
pub fn spawn_player(world: &mut World, ids: &mut IdAllocator, position: Position) -> Entity {
    let stats = CombatStats::new(PLAYER_HEALTH, Faction::Player, ShipClass::MainCharacter)
        .with_attack(PLAYER_ATTACK)
        .with_fire_rate(PLAYER_FIRE_RATE_MS);
    spawn_player_with(world, ids, position, stats)
}

pub fn spawn_player_with(
    world: &mut World,
    ids: &mut IdAllocator,
    position: Position,
    stats: CombatStats,
) -> Entity {
    world.spawn((
        Player,
        ids.next_id(),
        position,
        Velocity::default(),
        Hitbox::solid(PLAYER_SIZE.0, PLAYER_SIZE.1),
        stats,
        Shooter::default(),
        StatusEffects::default(),
    ))
}

/// Spawn a hostile ship. Ships with a `gunner` fire on their own.
pub fn spawn_hostile(
    world: &mut World,
    ids: &mut IdAllocator,
    position: Position,
    velocity: Velocity,
    stats: CombatStats,
    size: (u32, u32),
    gunner: Option<Gunner>,
) -> Entity {
    let mut builder = EntityBuilder::new();
    builder.add_bundle((
        Hostile,
        ids.next_id(),
        position,
        velocity,
        Hitbox::solid(size.0, size.1),
        stats,
        Shooter::default(),
        StatusEffects::default(),
    ));
    if let Some(gunner) = gunner {
        builder.add(gunner);
    }
    world.spawn(builder.build())
}

pub fn spawn_fighter(
    world: &mut World,
    ids: &mut IdAllocator,
    position: Position,
    velocity: Velocity,
) -> Entity {
    let stats = CombatStats::new(FIGHTER_HEALTH, Faction::Hostile, ShipClass::Fighter)
        .with_attack(FIGHTER_ATTACK)
        .with_fire_rate(FIGHTER_FIRE_RATE_MS)
        .with_points(FIGHTER_POINTS);
    spawn_hostile(
        world,
        ids,
        position,
        velocity,
        stats,
        FIGHTER_SIZE,
        Some(Gunner {
            angle: std::f32::consts::PI,
        }),
    )
}

pub fn spawn_structure(
    world: &mut World,
    ids: &mut IdAllocator,
    position: Position,
    velocity: Velocity,
) -> Entity {
    let stats = CombatStats::new(STRUCTURE_HEALTH, Faction::Hostile, ShipClass::Structure)
        .with_armor(STRUCTURE_ARMOR)
        .with_attack(STRUCTURE_ATTACK)
        .with_fire_rate(STRUCTURE_FIRE_RATE_MS)
        .with_points(STRUCTURE_POINTS);
    spawn_hostile(
        world,
        ids,
        position,
        velocity,
        stats,
        STRUCTURE_SIZE,
        Some(Gunner {
            angle: std::f32::consts::PI,
        }),
    )
}

/// Spawn a drifting mine. Mines are round, hostile, and can be shot down.
pub fn spawn_mine(
    world: &mut World,
    ids: &mut IdAllocator,
    position: Position,
    velocity: Velocity,
) -> Entity {
    let stats = CombatStats::new(MINE_HEALTH, Faction::Hostile, ShipClass::Mine)
        .with_points(MINE_POINTS);
    world.spawn((
        Mine,
        Hostile,
        ids.next_id(),
        position,
        velocity,
        Hitbox::new(CollisionMask::ellipse(MINE_SIZE.0, MINE_SIZE.1)),
        stats,
        StatusEffects::default(),
    ))
}

pub fn spawn_power_up(
    world: &mut World,
    ids: &mut IdAllocator,
    kind: PowerUpKind,
    position: Position,
) -> Entity {
    world.spawn((
        PowerUp { kind },
        ids.next_id(),
        position,
        Velocity::default(),
        Hitbox::new(CollisionMask::ellipse(POWERUP_SIZE.0, POWERUP_SIZE.1)),
    ))
}

/// Random whole-pixel position inside the power-up safe region.
pub fn random_drop_position<R: Rng>(rng: &mut R, config: &CombatConfig) -> Position {
    let range = config.powerup_spawn_min..=config.powerup_spawn_max;
    let x: f32 = rng.gen_range(range.clone());
    let y: f32 = rng.gen_range(range);
    Position::new(x.round(), y.round())
}

/// Everything a projectile copies from its shooter at spawn time.
#[derive(Debug, Clone, Copy)]
pub struct Muzzle {
    pub owner: EntityId,
    pub damage: i32,
    pub penetration: i32,
    pub faction: Faction,
    pub class: ShipClass,
    pub skin: BlasterSkin,
    pub inherited: Velocity,
}

pub fn spawn_projectile(
    world: &mut World,
    ids: &mut IdAllocator,
    muzzle: Muzzle,
    origin: Position,
    angle: f32,
) -> Entity {
    let scale = muzzle.class.projectile_scale();
    let mask = CollisionMask::rotated_rect(BLASTER_WIDTH * scale, BLASTER_HEIGHT * scale, angle);
    world.spawn((
        Projectile {
            owner: muzzle.owner,
            angle,
            damage: muzzle.damage,
            penetration: muzzle.penetration,
            faction: muzzle.faction,
            skin: muzzle.skin,
            inherited: muzzle.inherited,
        },
        ids.next_id(),
        origin,
        projectile::velocity_for(angle, muzzle.inherited),
        Hitbox::new(mask),
    ))
}
