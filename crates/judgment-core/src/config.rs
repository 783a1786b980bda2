//! Tunable combat configuration.
//!
//! Drop rates, power-up magnitudes and durations are data, not structure.
//! The default table reproduces the shipped balance; a designer can load a
//! replacement from JSON. Every table is validated on load so a missing or
//! duplicated power-up entry fails immediately instead of mid-run.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::PowerUpKind;
use crate::error::ConfigError;

/// Magnitude and duration of one power-up.
///
/// `amount` means: health restored (heals), fire rate kept in percent
/// (rapid fire), stat step (armor/damage boosts). It is ignored by the
/// flag-only effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectSpec {
    pub kind: PowerUpKind,
    pub amount: i32,
    /// Zero for permanent or instant effects.
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropWeight {
    pub kind: PowerUpKind,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropConfig {
    pub base_rate: f64,
    pub difficulty_scaling: f64,
    /// Kinds left out of the list never drop.
    pub weights: Vec<DropWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConfig {
    pub drops: DropConfig,
    pub effects: Vec<EffectSpec>,
    pub max_armor: i32,
    pub mine_contact_damage: i32,
    pub pickup_banner_ms: u64,
    /// Inclusive bounds of the square power-up spawn region.
    pub powerup_spawn_min: f32,
    pub powerup_spawn_max: f32,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            base_rate: DROP_BASE_RATE,
            difficulty_scaling: DROP_DIFFICULTY_SCALING,
            weights: PowerUpKind::ALL
                .iter()
                .zip(DROP_WEIGHTS)
                .map(|(&kind, weight)| DropWeight { kind, weight })
                .collect(),
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        let effect = |kind, amount, duration_ms| EffectSpec {
            kind,
            amount,
            duration_ms,
        };
        Self {
            drops: DropConfig::default(),
            effects: vec![
                effect(PowerUpKind::HealSoft, HEAL_SOFT_AMOUNT, 0),
                effect(PowerUpKind::HealFull, HEAL_FULL_AMOUNT, 0),
                effect(PowerUpKind::DoubleShot, 0, DOUBLE_SHOT_DURATION_MS),
                effect(PowerUpKind::ShieldBoost, 0, 0),
                effect(PowerUpKind::Immunity, 0, IMMUNITY_DURATION_MS),
                effect(PowerUpKind::RapidFire, RAPID_FIRE_PERCENT, RAPID_FIRE_DURATION_MS),
                effect(PowerUpKind::ArmorBoost, ARMOR_BOOST_STEP, 0),
                effect(PowerUpKind::DamageBoost, DAMAGE_BOOST_STEP, 0),
            ],
            max_armor: MAX_ARMOR,
            mine_contact_damage: MINE_CONTACT_DAMAGE,
            pickup_banner_ms: PICKUP_BANNER_MS,
            powerup_spawn_min: POWERUP_SPAWN_MIN,
            powerup_spawn_max: POWERUP_SPAWN_MAX,
        }
    }
}

impl CombatConfig {
    /// Parse and validate a JSON table.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CombatConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up the effect entry for `kind`.
    pub fn effect(&self, kind: PowerUpKind) -> Result<&EffectSpec, ConfigError> {
        self.effects
            .iter()
            .find(|e| e.kind == kind)
            .ok_or(ConfigError::MissingEffect { kind })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in PowerUpKind::ALL {
            match self.effects.iter().filter(|e| e.kind == kind).count() {
                0 => return Err(ConfigError::MissingEffect { kind }),
                1 => {}
                _ => return Err(ConfigError::DuplicateEffect { kind }),
            }
        }

        let rates = [
            ("base_rate", self.drops.base_rate),
            ("difficulty_scaling", self.drops.difficulty_scaling),
        ];
        for (field, value) in rates {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidDropRate { field, value });
            }
        }

        for kind in PowerUpKind::ALL {
            if self.drops.weights.iter().filter(|w| w.kind == kind).count() > 1 {
                return Err(ConfigError::InvalidWeights {
                    reason: "kind listed more than once",
                });
            }
        }
        if self.drops.weights.iter().all(|w| w.weight == 0) {
            return Err(ConfigError::InvalidWeights {
                reason: "at least one weight must be positive",
            });
        }

        if self.max_armor < 0 {
            return Err(ConfigError::InvalidArmorCap {
                value: self.max_armor,
            });
        }

        let (min, max) = (self.powerup_spawn_min, self.powerup_spawn_max);
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ConfigError::InvalidSpawnRegion { min, max });
        }
        Ok(())
    }
}

/// Effect entries resolved once per kind, so lookups during a frame cannot
/// fail. Built from a validated `CombatConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectTable {
    specs: [EffectSpec; 8],
}

impl EffectTable {
    pub fn from_config(config: &CombatConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut specs = [EffectSpec {
            kind: PowerUpKind::HealSoft,
            amount: 0,
            duration_ms: 0,
        }; 8];
        for kind in PowerUpKind::ALL {
            specs[kind as usize] = *config.effect(kind)?;
        }
        Ok(Self { specs })
    }

    pub fn get(&self, kind: PowerUpKind) -> &EffectSpec {
        &self.specs[kind as usize]
    }
}
