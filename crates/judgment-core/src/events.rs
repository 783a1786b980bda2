//! Events emitted by the simulation for audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::components::EntityId;
use crate::enums::*;
use crate::types::Position;

/// Combat events, drained into each frame's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A shooter fired one or more projectiles.
    ShotFired {
        shooter: EntityId,
        faction: Faction,
        count: u32,
    },
    /// A projectile connected.
    Hit {
        target: EntityId,
        projectile: EntityId,
        /// Damage after armor mitigation.
        damage: i32,
        /// True when the shield took the hit.
        shielded: bool,
    },
    /// A hit on an immune target was ignored.
    Deflected { target: EntityId },
    /// The player touched a mine.
    MineDetonated { mine: EntityId, damage: i32 },
    /// An entity died.
    Destroyed {
        entity: EntityId,
        class: ShipClass,
        points: u32,
        /// Owner of the killing shot, if it is still alive.
        killer: Option<EntityId>,
    },
    PowerUpDropped {
        kind: PowerUpKind,
        position: Position,
    },
    PowerUpCollected { kind: PowerUpKind },
    EffectExpired { kind: EffectKind },
    GameOver { score: u64 },
}
