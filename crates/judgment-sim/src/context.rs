//! Per-frame state threaded through the combat systems.
//!
//! The engine owns everything here; a `FrameContext` only borrows it for the
//! duration of one tick so systems never reach for global state.

use hecs::Entity;
use rand_chacha::ChaCha8Rng;

use judgment_core::config::{CombatConfig, EffectTable};
use judgment_core::events::CombatEvent;

use crate::drop_table::DropTable;
use crate::score::ScoreLedger;
use crate::systems::effects::Indicator;
use crate::world_setup::IdAllocator;

pub struct FrameContext<'a> {
    /// Clock reading captured once at the start of the frame.
    pub now_ms: u64,
    pub difficulty: f64,
    pub config: &'a CombatConfig,
    pub effects: &'a EffectTable,
    pub drops: &'a DropTable,
    pub rng: &'a mut ChaCha8Rng,
    pub ids: &'a mut IdAllocator,
    pub score: &'a mut ScoreLedger,
    pub events: &'a mut Vec<CombatEvent>,
    /// Entities marked `Dead` this frame, despawned by cleanup.
    pub despawn: &'a mut Vec<Entity>,
    pub indicators: &'a mut Vec<Indicator>,
}
