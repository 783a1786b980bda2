//! Running score tracked by the engine.

use judgment_core::state::ScoreView;

#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    pub score: u64,
    pub kills: u32,
    pub power_ups_collected: u32,
}

impl ScoreLedger {
    /// Credit a kill worth `points`.
    pub fn award(&mut self, points: u32) {
        self.score += u64::from(points);
        self.kills += 1;
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            kills: self.kills,
            power_ups_collected: self.power_ups_collected,
        }
    }
}
