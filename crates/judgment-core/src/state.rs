//! Game state snapshot: everything the renderer and HUD need after a frame.

use serde::{Deserialize, Serialize};

use crate::components::EntityId;
use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::{Position, Rect, SimTime};

/// Complete visible state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub difficulty: f64,
    pub score: ScoreView,
    pub player: Option<CombatantView>,
    pub hostiles: Vec<CombatantView>,
    pub projectiles: Vec<ProjectileView>,
    pub power_ups: Vec<PowerUpView>,
    pub indicators: Vec<IndicatorView>,
    pub events: Vec<CombatEvent>,
}

/// A ship or mine, with the stats the HUD shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantView {
    pub id: EntityId,
    pub class: ShipClass,
    pub faction: Faction,
    pub bounds: Rect,
    pub health: i32,
    pub max_health: i32,
    pub shield: i32,
    pub max_shield: i32,
    pub armor: i32,
    pub attack: i32,
    pub fire_rate: u32,
    pub double_shot: bool,
    pub immunity: bool,
    pub rapid_fire: bool,
    pub effects: Vec<EffectView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub remaining_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: EntityId,
    pub position: Position,
    pub angle: f32,
    pub faction: Faction,
    pub skin: BlasterSkin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub id: EntityId,
    pub kind: PowerUpKind,
    pub position: Position,
    /// Source rectangle on the power-up sheet.
    pub sheet_rect: (u32, u32, u32, u32),
}

/// On-screen countdown or pickup banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorView {
    pub kind: PowerUpKind,
    pub remaining_ms: u64,
    /// Banners announce a pickup; countdowns track a timed effect.
    pub banner: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub kills: u32,
    pub power_ups_collected: u32,
}

impl IndicatorView {
    /// Countdown text in `m:ss`, rounded down to whole seconds.
    pub fn label(&self) -> String {
        let secs = self.remaining_ms / 1000;
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}
