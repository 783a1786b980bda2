//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only. Dead entities are already despawned by the time
//! it runs, but it skips the marker anyway so a mid-frame call stays honest.

use hecs::World;

use judgment_core::components::*;
use judgment_core::enums::*;
use judgment_core::events::CombatEvent;
use judgment_core::state::*;
use judgment_core::types::{Position, SimTime};

use crate::score::ScoreLedger;
use crate::systems::effects::Indicator;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    difficulty: f64,
    score: &ScoreLedger,
    indicators: &[Indicator],
    events: Vec<CombatEvent>,
) -> GameStateSnapshot {
    let now_ms = time.now_ms;
    let mut combatants = build_combatants(world, now_ms);
    let player = combatants
        .iter()
        .position(|c| c.faction == Faction::Player)
        .map(|i| combatants.remove(i));

    GameStateSnapshot {
        time: *time,
        phase,
        difficulty,
        score: score.view(),
        player,
        hostiles: combatants,
        projectiles: build_projectiles(world),
        power_ups: build_power_ups(world),
        indicators: indicators
            .iter()
            .map(|i| IndicatorView {
                kind: i.kind,
                remaining_ms: i.expires_at_ms.saturating_sub(now_ms),
                banner: i.banner,
            })
            .collect(),
        events,
    }
}

fn build_combatants(world: &World, now_ms: u64) -> Vec<CombatantView> {
    let mut query = world.query::<(
        &EntityId,
        &Position,
        &Hitbox,
        &CombatStats,
        Option<&StatusEffects>,
        Option<&Dead>,
    )>();
    let mut views: Vec<CombatantView> = query
        .iter()
        .filter(|(_, (.., dead))| dead.is_none())
        .map(|(_, (id, pos, hitbox, stats, effects, _))| CombatantView {
            id: *id,
            class: stats.class,
            faction: stats.faction,
            bounds: hitbox.rect_at(*pos),
            health: stats.health,
            max_health: stats.max_health,
            shield: stats.shield,
            max_shield: stats.max_shield,
            armor: stats.armor,
            attack: stats.attack,
            fire_rate: stats.fire_rate,
            double_shot: stats.double_shot,
            immunity: stats.immunity,
            rapid_fire: stats.rapid_fire,
            effects: effects
                .map(|e| {
                    e.active
                        .iter()
                        .map(|a| EffectView {
                            kind: a.kind,
                            remaining_ms: a.expires_at_ms.saturating_sub(now_ms),
                        })
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut query = world.query::<(&EntityId, &Position, &Projectile, Option<&Dead>)>();
    let mut views: Vec<ProjectileView> = query
        .iter()
        .filter(|(_, (.., dead))| dead.is_none())
        .map(|(_, (id, pos, projectile, _))| ProjectileView {
            id: *id,
            position: *pos,
            angle: projectile.angle,
            faction: projectile.faction,
            skin: projectile.skin,
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    let mut query = world.query::<(&EntityId, &Position, &PowerUp, Option<&Dead>)>();
    let mut views: Vec<PowerUpView> = query
        .iter()
        .filter(|(_, (.., dead))| dead.is_none())
        .map(|(_, (id, pos, item, _))| PowerUpView {
            id: *id,
            kind: item.kind,
            position: *pos,
            sheet_rect: item.kind.sheet_rect(),
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}
