//! Simulation constants and tuning defaults.
//!
//! Values that designers tune per build live in `CombatConfig`; these are
//! its defaults plus the structural constants that never change at runtime.

/// Default frame step for the built-in clock (ms), about 60 frames a second.
pub const FRAME_MS: u64 = 16;

// --- Playfield ---

/// Playfield width in pixels.
pub const WIDTH: f32 = 1200.0;

/// Playfield height in pixels.
pub const HEIGHT: f32 = 800.0;

/// Hostiles further than this past any edge are culled without score.
pub const OFFSCREEN_MARGIN: f32 = 200.0;

// --- Projectiles ---

/// Projectile speed along its heading (pixels per frame).
pub const PROJECTILE_SPEED: f32 = 10.0;

/// Per-frame decay applied to velocity inherited from the shooter.
pub const PROJECTILE_FRICTION: f32 = 0.012;

/// Hard cap on projectile speed (pixels per frame).
pub const PROJECTILE_MAX_SPEED: f32 = 20.0;

/// Base blaster sprite size before the shooter's projectile scale.
pub const BLASTER_WIDTH: f32 = 90.0;
pub const BLASTER_HEIGHT: f32 = 40.0;

/// Vertical distance between the two barrels of a double shot.
pub const DOUBLE_SHOT_SPREAD: f32 = 30.0;

// --- Combat stat defaults ---

pub const DEFAULT_FIRE_RATE_MS: u32 = 250;
pub const DEFAULT_ATTACK: i32 = 2;

/// Player ship.
pub const PLAYER_HEALTH: i32 = 100;
pub const PLAYER_ATTACK: i32 = 10;
pub const PLAYER_FIRE_RATE_MS: u32 = 250;
pub const PLAYER_SIZE: (u32, u32) = (80, 50);
pub const PLAYER_SPAWN: (f32, f32) = (150.0, HEIGHT / 2.0);

/// Hostile fighter.
pub const FIGHTER_HEALTH: i32 = 200;
pub const FIGHTER_ATTACK: i32 = 5;
pub const FIGHTER_FIRE_RATE_MS: u32 = 900;
pub const FIGHTER_POINTS: u32 = 100;
pub const FIGHTER_SIZE: (u32, u32) = (90, 60);

/// Hostile structure.
pub const STRUCTURE_HEALTH: i32 = 250;
pub const STRUCTURE_ARMOR: i32 = 2;
pub const STRUCTURE_ATTACK: i32 = 8;
pub const STRUCTURE_FIRE_RATE_MS: u32 = 1500;
pub const STRUCTURE_POINTS: u32 = 300;
pub const STRUCTURE_SIZE: (u32, u32) = (160, 220);

/// Drifting mine.
pub const MINE_HEALTH: i32 = 20;
pub const MINE_POINTS: u32 = 25;
pub const MINE_SIZE: (u32, u32) = (40, 40);

/// Flat damage a mine deals on contact.
pub const MINE_CONTACT_DAMAGE: i32 = 20;

// --- Power-ups ---

/// Power-up sprite size on screen.
pub const POWERUP_SIZE: (u32, u32) = (35, 35);

/// Safe spawn region for power-ups (inclusive, pixels), both axes.
pub const POWERUP_SPAWN_MIN: f32 = 200.0;
pub const POWERUP_SPAWN_MAX: f32 = 700.0;

/// Maximum armor reachable through armor-boost pickups.
pub const MAX_ARMOR: i32 = 4;

pub const HEAL_SOFT_AMOUNT: i32 = 20;
pub const HEAL_FULL_AMOUNT: i32 = 100;
pub const ARMOR_BOOST_STEP: i32 = 1;
pub const DAMAGE_BOOST_STEP: i32 = 1;

pub const DOUBLE_SHOT_DURATION_MS: u64 = 10_000;
pub const IMMUNITY_DURATION_MS: u64 = 5_000;
pub const RAPID_FIRE_DURATION_MS: u64 = 10_000;

/// Fire rate kept while rapid fire is active, as a percentage.
pub const RAPID_FIRE_PERCENT: i32 = 50;

/// How long the pickup banner stays on screen.
pub const PICKUP_BANNER_MS: u64 = 5_000;

// --- Drops ---

/// Drop chance at difficulty 1.
pub const DROP_BASE_RATE: f64 = 0.10;

/// Extra drop chance per difficulty step above 1.
pub const DROP_DIFFICULTY_SCALING: f64 = 0.05;

/// Default drop weights, in `PowerUpKind::ALL` order.
pub const DROP_WEIGHTS: [u32; 8] = [15, 5, 3, 7, 3, 3, 10, 10];
