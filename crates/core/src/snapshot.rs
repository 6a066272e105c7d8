use arrayvec::ArrayVec;

use crate::types::{GridPos, Phase, HAZARD_CAPACITY};

/// A hazard as the renderer sees it: where it is and how opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardView {
    pub position: GridPos,
    pub alpha: f32,
}

/// Read-only view of one frame of game state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub cols: u8,
    pub rows: u8,
    pub start: GridPos,
    pub goal: GridPos,
    pub player: GridPos,
    pub phase: Phase,
    pub paused: bool,
    pub time_left: f64,
    pub total_time: f64,
    pub episode_id: u32,
    pub moves: u32,
    pub hazards: ArrayVec<HazardView, HAZARD_CAPACITY>,
}

impl GameSnapshot {
    /// Remaining time as a fraction of the budget, in `[0, 1]`.
    pub fn time_fraction(&self) -> f64 {
        if self.total_time <= 0.0 {
            return 0.0;
        }
        (self.time_left / self.total_time).clamp(0.0, 1.0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cols: 0,
            rows: 0,
            start: GridPos::default(),
            goal: GridPos::default(),
            player: GridPos::default(),
            phase: Phase::Playing,
            paused: false,
            time_left: 0.0,
            total_time: 0.0,
            episode_id: 0,
            moves: 0,
            hazards: ArrayVec::new(),
        }
    }
}
