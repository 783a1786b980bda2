//! ECS components for hecs entities.
//!
//! Components are plain data. The few methods here are accessors and
//! constructors; combat rules live in the simulation's systems.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::mask::CollisionMask;
use crate::types::{Position, Rect, Velocity};

/// Stable, opaque id assigned at spawn. Never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Bounding rectangle size plus pixel mask of the same dimensions.
/// The rectangle is centered on the entity's `Position`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hitbox {
    pub mask: CollisionMask,
}

impl Hitbox {
    pub fn new(mask: CollisionMask) -> Self {
        Self { mask }
    }

    pub fn solid(width: u32, height: u32) -> Self {
        Self::new(CollisionMask::solid(width, height))
    }

    pub fn width(&self) -> f32 {
        self.mask.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.mask.height() as f32
    }

    /// World-space bounding rectangle for an entity at `pos`.
    pub fn rect_at(&self, pos: Position) -> Rect {
        Rect::centered(pos, self.width(), self.height())
    }
}

/// Combat attributes of anything that can shoot or be shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub health: i32,
    pub max_health: i32,
    pub shield: i32,
    pub max_shield: i32,
    pub armor: i32,
    /// Reserved for future damage formulas; not read by the combat rules.
    pub defence: i32,
    pub attack: i32,
    /// Milliseconds between shots. Smaller is faster.
    pub fire_rate: u32,
    pub penetration: i32,
    /// Awarded to the score ledger when this entity is destroyed.
    pub points: u32,
    pub faction: Faction,
    pub class: ShipClass,
    pub double_shot: bool,
    pub immunity: bool,
    pub rapid_fire: bool,
}

impl CombatStats {
    /// Fresh stats at full health, empty shield, no armor.
    pub fn new(max_health: i32, faction: Faction, class: ShipClass) -> Self {
        let max_health = max_health.max(1);
        Self {
            health: max_health,
            max_health,
            shield: 0,
            max_shield: max_health / 2,
            armor: 0,
            defence: 0,
            attack: DEFAULT_ATTACK,
            fire_rate: DEFAULT_FIRE_RATE_MS,
            penetration: 0,
            points: 0,
            faction,
            class,
            double_shot: false,
            immunity: false,
            rapid_fire: false,
        }
    }

    pub fn with_attack(mut self, attack: i32) -> Self {
        self.attack = attack.max(0);
        self
    }

    pub fn with_armor(mut self, armor: i32) -> Self {
        self.armor = armor.max(0);
        self
    }

    pub fn with_shield(mut self, shield: i32) -> Self {
        self.shield = shield.clamp(0, self.max_shield);
        self
    }

    pub fn with_fire_rate(mut self, fire_rate: u32) -> Self {
        self.fire_rate = fire_rate;
        self
    }

    pub fn with_penetration(mut self, penetration: i32) -> Self {
        self.penetration = penetration.max(0);
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Fire-rate cooldown baseline.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Shooter {
    /// Clock reading of the last successful shot. `None` until the first.
    pub last_shot_ms: Option<u64>,
}

/// Hostile ships that fire on their own every frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Gunner {
    /// Firing direction in radians (0 = right, counter-clockwise on screen).
    pub angle: f32,
}

/// A shot in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Who fired it. Used for attribution only; the owner may be gone.
    pub owner: EntityId,
    /// Direction of travel in radians.
    pub angle: f32,
    pub damage: i32,
    pub penetration: i32,
    pub faction: Faction,
    pub skin: BlasterSkin,
    /// Shooter velocity carried at spawn, decays every frame.
    pub inherited: Velocity,
}

/// A collectible power-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

/// One running timed effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: EffectKind,
    pub expires_at_ms: u64,
    /// Stat value to put back on expiry (rapid fire stores the fire rate).
    pub restore: Option<u32>,
}

/// All timed effects on one entity. Dropped with the entity, so a pending
/// revert can never touch a despawned owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusEffects {
    pub active: Vec<ActiveEffect>,
}

impl StatusEffects {
    pub fn get(&self, kind: EffectKind) -> Option<&ActiveEffect> {
        self.active.iter().find(|e| e.kind == kind)
    }

    pub fn remaining_ms(&self, kind: EffectKind, now_ms: u64) -> Option<u64> {
        self.get(kind).map(|e| e.expires_at_ms.saturating_sub(now_ms))
    }
}

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a hostile combatant: fighters, structures and mines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Marks a drifting mine. Mines also carry `Hostile` and can be shot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mine;

/// Destroyed this frame; skipped by every system until cleanup despawns it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dead;
