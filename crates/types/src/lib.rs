//! Core types module - shared data structures and constants
//!
//! Everything in here is plain data: grid coordinates, the game phase, player
//! intents and the tuning constants. No I/O and no randomness, so the types
//! can be used by the core simulation, the input mapper and the renderer alike.
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9)
//! - **Rows**: 10 (indexed 0-9, row 0 is the top)
//! - **Start**: bottom-left `(0, 9)`
//! - **Goal**: top-right `(9, 0)`
//!
//! # Timing Constants
//!
//! Times are in seconds unless the name says otherwise:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `TOTAL_TIME_SECS` | 45.0 | Time budget to reach the goal |
//! | `SPAWN_INTERVAL_MIN_SECS` | 0.4 | Shortest gap between spawns |
//! | `SPAWN_INTERVAL_MAX_SECS` | 1.1 | Longest gap between spawns |
//! | `HAZARD_LIFETIME_MIN_SECS` | 1.0 | Shortest hazard lifetime |
//! | `HAZARD_LIFETIME_MAX_SECS` | 1.4 | Longest hazard lifetime |
//!
//! # Examples
//!
//! ```
//! use escape_qubits_types::{GridPos, Intent, GRID_COLS, GRID_ROWS};
//!
//! let start = GridPos::new(0, GRID_ROWS as i16 - 1);
//! let next = start.offset(1, 0);
//! assert_eq!(next, GridPos::new(1, 9));
//! assert!(next.in_bounds(GRID_COLS, GRID_ROWS));
//!
//! assert_eq!(Intent::MoveUp.delta(), Some((0, -1)));
//! assert_eq!(Intent::Restart.delta(), None);
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig};

/// Grid width in tiles
pub const GRID_COLS: u8 = 10;

/// Grid height in tiles
pub const GRID_ROWS: u8 = 10;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Seconds the player has to reach the goal
pub const TOTAL_TIME_SECS: f64 = 45.0;

/// Default cap on simultaneously active hazards
pub const MAX_ACTIVE_HAZARDS: usize = 6;

/// Hard upper bound for any configured hazard cap (storage is fixed-size).
pub const HAZARD_CAPACITY: usize = 32;

pub const SPAWN_INTERVAL_MIN_SECS: f64 = 0.4;

pub const SPAWN_INTERVAL_MAX_SECS: f64 = 1.1;

pub const HAZARD_LIFETIME_MIN_SECS: f64 = 1.0;

pub const HAZARD_LIFETIME_MAX_SECS: f64 = 1.4;

/// Random positions tried per spawn before giving up for this round
pub const SPAWN_ATTEMPTS: u32 = 50;

/// A tile coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub col: i16,
    pub row: i16,
}

impl GridPos {
    pub const fn new(col: i16, row: i16) -> Self {
        Self { col, row }
    }

    /// Position shifted by `(dx, dy)`. May land outside the grid.
    pub fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            col: self.col.saturating_add(dx),
            row: self.row.saturating_add(dy),
        }
    }

    pub fn in_bounds(self, cols: u8, rows: u8) -> bool {
        self.col >= 0 && self.row >= 0 && self.col < cols as i16 && self.row < rows as i16
    }
}

/// Coarse game phase.
///
/// Within one run the phase only ever moves `Playing -> Won` or
/// `Playing -> Lost`. A restart starts a fresh run in `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn is_over(self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

/// What the player asked for, independent of the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Restart,
    Pause,
    Quit,
}

impl Intent {
    /// Grid delta for movement intents.
    pub fn delta(self) -> Option<(i16, i16)> {
        match self {
            Intent::MoveUp => Some((0, -1)),
            Intent::MoveDown => Some((0, 1)),
            Intent::MoveLeft => Some((-1, 0)),
            Intent::MoveRight => Some((1, 0)),
            Intent::Restart | Intent::Pause | Intent::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_timing_defaults() {
        assert_eq!(TOTAL_TIME_SECS, 45.0);
        assert_eq!(MAX_ACTIVE_HAZARDS, 6);
        assert_eq!(SPAWN_INTERVAL_MIN_SECS, 0.4);
        assert_eq!(SPAWN_INTERVAL_MAX_SECS, 1.1);
        assert_eq!(SPAWN_ATTEMPTS, 50);
        assert!(MAX_ACTIVE_HAZARDS <= HAZARD_CAPACITY);
    }

    #[test]
    fn test_grid_pos_bounds() {
        assert!(GridPos::new(0, 0).in_bounds(10, 10));
        assert!(GridPos::new(9, 9).in_bounds(10, 10));
        assert!(!GridPos::new(-1, 0).in_bounds(10, 10));
        assert!(!GridPos::new(0, -1).in_bounds(10, 10));
        assert!(!GridPos::new(10, 0).in_bounds(10, 10));
        assert!(!GridPos::new(0, 10).in_bounds(10, 10));
    }

    #[test]
    fn test_grid_pos_offset_saturates() {
        let p = GridPos::new(i16::MAX, i16::MIN);
        assert_eq!(p.offset(1, -1), p);
        assert_eq!(GridPos::new(3, 4).offset(-1, 2), GridPos::new(2, 6));
    }

    #[test]
    fn test_intent_deltas() {
        assert_eq!(Intent::MoveDown.delta(), Some((0, 1)));
        assert_eq!(Intent::MoveLeft.delta(), Some((-1, 0)));
        assert_eq!(Intent::MoveRight.delta(), Some((1, 0)));
        assert_eq!(Intent::Pause.delta(), None);
        assert_eq!(Intent::Quit.delta(), None);
    }

    #[test]
    fn test_phase_is_over() {
        assert!(!Phase::Playing.is_over());
        assert!(Phase::Won.is_over());
        assert!(Phase::Lost.is_over());
        assert_eq!(Phase::default(), Phase::Playing);
    }
}
