//! Player commands sent from the front end to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Spawn the player and the opening wave.
    StartGame,
    /// Try to fire in direction `angle` (radians). Gated by fire rate.
    Fire { angle: f32 },
    /// Set the player ship's velocity (pixels per frame).
    SetThrust { x: f32, y: f32 },
    /// Set by the external wave controller. Raises drop chance.
    SetDifficulty { level: f64 },
    Pause,
    Resume,
}
