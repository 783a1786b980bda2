//! Configuration errors.
//!
//! The simulation itself has no runtime error paths: bad states are
//! prevented by clamping. The only failures are a malformed tuning table,
//! which is a programming error and is rejected when the table is loaded.

use core::fmt;

use crate::enums::PowerUpKind;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// No effect entry for a power-up kind.
    MissingEffect { kind: PowerUpKind },
    /// Two effect entries for the same kind.
    DuplicateEffect { kind: PowerUpKind },
    /// A drop rate outside [0, 1] or not finite.
    InvalidDropRate { field: &'static str, value: f64 },
    /// Drop weights list a kind twice or are all zero.
    InvalidWeights { reason: &'static str },
    InvalidArmorCap { value: i32 },
    /// Power-up spawn bounds are reversed or not finite.
    InvalidSpawnRegion { min: f32, max: f32 },
    /// JSON could not be parsed into a config.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEffect { kind } => write!(f, "no effect configured for {kind:?}"),
            Self::DuplicateEffect { kind } => {
                write!(f, "effect for {kind:?} configured more than once")
            }
            Self::InvalidDropRate { field, value } => {
                write!(f, "drop rate {field} = {value} is outside [0, 1]")
            }
            Self::InvalidWeights { reason } => write!(f, "invalid drop weights: {reason}"),
            Self::InvalidArmorCap { value } => write!(f, "armor cap {value} must be >= 0"),
            Self::InvalidSpawnRegion { min, max } => {
                write!(f, "power-up spawn region [{min}, {max}] is empty")
            }
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
