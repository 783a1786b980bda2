//! Simulation engine: the combat core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all combat systems once per frame, and produces `GameStateSnapshot`s.
//! Completely headless (no renderer, no wall clock), enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use judgment_core::commands::PlayerCommand;
use judgment_core::config::{CombatConfig, EffectTable};
use judgment_core::constants::FRAME_MS;
use judgment_core::enums::GamePhase;
use judgment_core::error::ConfigError;
use judgment_core::events::CombatEvent;
use judgment_core::state::GameStateSnapshot;
use judgment_core::types::{SimTime, Velocity};

use crate::context::FrameContext;
use crate::drop_table::DropTable;
use crate::score::ScoreLedger;
use crate::systems;
use crate::systems::effects::Indicator;
use crate::world_setup::{self, IdAllocator};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Clock step used by `tick` (ms).
    pub frame_ms: u64,
    pub combat: CombatConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            frame_ms: FRAME_MS,
            combat: CombatConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    difficulty: f64,
    frame_ms: u64,
    config: CombatConfig,
    effect_table: EffectTable,
    drop_table: DropTable,
    rng: ChaCha8Rng,
    ids: IdAllocator,
    command_queue: VecDeque<PlayerCommand>,
    pending_fire: Option<f32>,
    despawn_buffer: Vec<Entity>,
    events: Vec<CombatEvent>,
    indicators: Vec<Indicator>,
    score: ScoreLedger,
    player: Option<Entity>,
}

impl SimulationEngine {
    /// Create a new simulation engine. Fails if the combat config is invalid.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.combat.validate()?;
        let effect_table = EffectTable::from_config(&config.combat)?;
        let drop_table = DropTable::new(&config.combat.drops)?;

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            difficulty: 1.0,
            frame_ms: config.frame_ms.max(1),
            config: config.combat,
            effect_table,
            drop_table,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ids: IdAllocator::default(),
            command_queue: VecDeque::new(),
            pending_fire: None,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            indicators: Vec::new(),
            score: ScoreLedger::default(),
            player: None,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the built-in clock by one frame step and run a frame.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.time.advance(self.frame_ms);
            self.run_systems();
        }

        self.snapshot()
    }

    /// Run a frame at a driver-supplied clock reading (ms). The clock never
    /// runs backwards; an earlier reading is treated as "no time passed".
    /// Time keeps flowing while paused, so effects can expire during a pause.
    pub fn tick_at(&mut self, now_ms: u64) -> GameStateSnapshot {
        self.process_commands();

        self.time.advance_to(now_ms);
        if self.phase == GamePhase::Active {
            self.run_systems();
        }

        self.snapshot()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Difficulty is driven by an external wave controller. Values below 1
    /// are allowed; the drop probability clamps at zero.
    pub fn set_difficulty(&mut self, level: f64) {
        if level.is_finite() {
            self.difficulty = level;
        }
    }

    pub fn score(&self) -> &ScoreLedger {
        &self.score
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// The player entity, while it is alive.
    pub fn player(&self) -> Option<Entity> {
        self.player.filter(|&p| self.world.contains(p))
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage their own encounters.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn extra entities into a running game (for tests).
    #[cfg(test)]
    pub fn stage<R>(&mut self, f: impl FnOnce(&mut World, &mut IdAllocator) -> R) -> R {
        f(&mut self.world, &mut self.ids)
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Ready | GamePhase::GameOver) {
                    self.reset_run();
                    self.player = Some(world_setup::setup_game(&mut self.world, &mut self.ids));
                    self.phase = GamePhase::Active;
                    info!(difficulty = self.difficulty, "game started");
                }
            }
            PlayerCommand::Fire { angle } => {
                if self.phase == GamePhase::Active {
                    self.pending_fire = Some(angle);
                }
            }
            PlayerCommand::SetThrust { x, y } => {
                if let Some(player) = self.player() {
                    if let Ok(mut vel) = self.world.get::<&mut Velocity>(player) {
                        *vel = Velocity::new(x, y);
                    }
                }
            }
            PlayerCommand::SetDifficulty { level } => {
                self.set_difficulty(level);
                debug!(difficulty = self.difficulty, "difficulty changed");
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Clear everything a previous run left behind. The clock and RNG keep
    /// going so a restart never replays the same rolls.
    fn reset_run(&mut self) {
        self.world.clear();
        self.ids = IdAllocator::default();
        self.score = ScoreLedger::default();
        self.indicators.clear();
        self.despawn_buffer.clear();
        self.pending_fire = None;
        self.player = None;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let mut ctx = FrameContext {
            now_ms: self.time.now_ms,
            difficulty: self.difficulty,
            config: &self.config,
            effects: &self.effect_table,
            drops: &self.drop_table,
            rng: &mut self.rng,
            ids: &mut self.ids,
            score: &mut self.score,
            events: &mut self.events,
            despawn: &mut self.despawn_buffer,
            indicators: &mut self.indicators,
        };

        // 1. Status effect expiry + indicators
        systems::effects::run(&mut self.world, &mut ctx);
        // 2. Player fire
        if let (Some(angle), Some(player)) = (self.pending_fire.take(), self.player) {
            systems::shooting::attempt_shot(&mut self.world, &mut ctx, player, angle, None);
        }
        // 3. Hostile gunners
        systems::shooting::run_gunners(&mut self.world, &mut ctx);
        // 4. Movement integration
        systems::movement::run(&mut self.world);
        // 5. Projectile kinematics + culling
        systems::projectile::run(&mut self.world, ctx.despawn);
        // 6. Collision passes (damage, destruction, drops, pickups)
        systems::collision::run(&mut self.world, &mut ctx);
        // 7. Cleanup (strays, dead)
        systems::cleanup::run(&mut self.world, ctx.despawn);

        if let Some(player) = self.player {
            if !self.world.contains(player) {
                self.phase = GamePhase::GameOver;
                self.player = None;
                info!(score = self.score.score, "game over");
                self.events.push(CombatEvent::GameOver {
                    score: self.score.score,
                });
            }
        }
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.difficulty,
            &self.score,
            &self.indicators,
            events,
        )
    }
}
