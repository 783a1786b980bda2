//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side an entity fights for. Decides which projectile pool it is
/// tested against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    #[default]
    Player,
    Hostile,
}

impl Faction {
    pub fn opposing(self) -> Self {
        match self {
            Faction::Player => Faction::Hostile,
            Faction::Hostile => Faction::Player,
        }
    }
}

/// Visual/behavioral variant of a combat-capable entity. The discriminants
/// follow the sprite type codes used by the art assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipClass {
    /// The player's ship.
    #[default]
    MainCharacter = 0,
    /// Standard hostile fighter.
    Fighter = 1,
    /// Small, fast hostile.
    Small = 2,
    /// Drifting proximity mine.
    Mine = 3,
    /// Large stationary structure.
    Structure = 4,
    /// Elite fighter.
    Elite = 5,
    /// Heavy gunship.
    Heavy = 6,
}

impl ShipClass {
    /// Blaster sprite used for projectiles fired by this class.
    pub fn projectile_skin(self) -> BlasterSkin {
        match self {
            ShipClass::MainCharacter => BlasterSkin::Blue,
            ShipClass::Fighter => BlasterSkin::Green,
            ShipClass::Small => BlasterSkin::Yellow,
            ShipClass::Mine => BlasterSkin::BlueMarine,
            ShipClass::Structure => BlasterSkin::Red,
            ShipClass::Elite => BlasterSkin::Purple,
            ShipClass::Heavy => BlasterSkin::Orange,
        }
    }

    /// Multiplier applied to the base blaster size.
    pub fn projectile_scale(self) -> f32 {
        match self {
            ShipClass::MainCharacter => 0.5,
            ShipClass::Fighter => 0.6,
            ShipClass::Small => 0.4,
            ShipClass::Mine => 0.4,
            ShipClass::Structure => 1.0,
            ShipClass::Elite => 0.7,
            ShipClass::Heavy => 0.8,
        }
    }
}

/// Blaster sprite colors available on the projectile sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlasterSkin {
    Green,
    BlueMarine,
    Yellow,
    Orange,
    Red,
    /// Also used for double shots.
    Purple,
    Blue,
}

/// Closed set of power-up kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Red: restores a fixed amount of health.
    HealSoft,
    /// Pink: restores a large amount of health.
    HealFull,
    /// Purple: temporary double shot.
    DoubleShot,
    /// Blue: shield restored to max.
    ShieldBoost,
    /// Yellow: temporary immunity.
    Immunity,
    /// White: temporary faster fire rate.
    RapidFire,
    /// Green: +armor, capped.
    ArmorBoost,
    /// White-green: permanent extra damage.
    DamageBoost,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 8] = [
        PowerUpKind::HealSoft,
        PowerUpKind::HealFull,
        PowerUpKind::DoubleShot,
        PowerUpKind::ShieldBoost,
        PowerUpKind::Immunity,
        PowerUpKind::RapidFire,
        PowerUpKind::ArmorBoost,
        PowerUpKind::DamageBoost,
    ];

    /// Source rectangle `(x, y, w, h)` on the power-up sprite sheet.
    pub fn sheet_rect(self) -> (u32, u32, u32, u32) {
        match self {
            PowerUpKind::HealSoft => (0, 0, 130, 130),
            PowerUpKind::HealFull => (129, 0, 130, 130),
            PowerUpKind::DoubleShot => (255, 0, 130, 130),
            PowerUpKind::ShieldBoost => (385, 0, 130, 130),
            PowerUpKind::Immunity => (0, 130, 130, 130),
            PowerUpKind::RapidFire => (129, 130, 130, 130),
            PowerUpKind::ArmorBoost => (255, 130, 130, 130),
            PowerUpKind::DamageBoost => (385, 130, 130, 130),
        }
    }

    /// The timed effect this power-up grants, if any.
    pub fn timed_effect(self) -> Option<EffectKind> {
        match self {
            PowerUpKind::DoubleShot => Some(EffectKind::DoubleShot),
            PowerUpKind::Immunity => Some(EffectKind::Immunity),
            PowerUpKind::RapidFire => Some(EffectKind::RapidFire),
            PowerUpKind::HealSoft
            | PowerUpKind::HealFull
            | PowerUpKind::ShieldBoost
            | PowerUpKind::ArmorBoost
            | PowerUpKind::DamageBoost => None,
        }
    }
}

/// Time-boxed status effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    DoubleShot,
    Immunity,
    RapidFire,
}

/// Overall run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for `StartGame`.
    #[default]
    Ready,
    Active,
    Paused,
    /// The player was destroyed.
    GameOver,
}
