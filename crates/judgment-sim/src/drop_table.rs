//! Power-up drop table: difficulty-scaled chance plus weighted kind choice.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use judgment_core::config::DropConfig;
use judgment_core::enums::PowerUpKind;
use judgment_core::error::ConfigError;

#[derive(Debug, Clone)]
pub struct DropTable {
    base_rate: f64,
    difficulty_scaling: f64,
    kinds: Vec<PowerUpKind>,
    index: WeightedIndex<u32>,
}

impl DropTable {
    pub fn new(config: &DropConfig) -> Result<Self, ConfigError> {
        let (kinds, weights): (Vec<_>, Vec<_>) = config
            .weights
            .iter()
            .map(|w| (w.kind, w.weight))
            .unzip();
        let index = WeightedIndex::new(&weights).map_err(|_| ConfigError::InvalidWeights {
            reason: "weights must be non-empty with a positive total",
        })?;
        Ok(Self {
            base_rate: config.base_rate,
            difficulty_scaling: config.difficulty_scaling,
            kinds,
            index,
        })
    }

    /// Chance that a destroyed entity drops something at `difficulty`.
    pub fn probability(&self, difficulty: f64) -> f64 {
        (self.base_rate + (difficulty - 1.0) * self.difficulty_scaling).clamp(0.0, 1.0)
    }

    /// Roll for a drop. Consumes one uniform draw, plus one more on success.
    pub fn roll<R: Rng>(&self, difficulty: f64, rng: &mut R) -> Option<PowerUpKind> {
        let draw: f64 = rng.gen();
        if self.probability(difficulty) > draw {
            Some(self.pick(rng))
        } else {
            None
        }
    }

    /// Weighted choice of a kind, ignoring the drop chance.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> PowerUpKind {
        self.kinds[self.index.sample(rng)]
    }
}
