//! Gameplay tuning.
//!
//! `GameConfig::default()` is the classic game. The `with_*` setters exist for
//! tests, benchmarks and headless runs; nothing is read from the environment.

use thiserror::Error;

use crate::{
    GridPos, GRID_COLS, GRID_ROWS, HAZARD_CAPACITY, HAZARD_LIFETIME_MAX_SECS,
    HAZARD_LIFETIME_MIN_SECS, MAX_ACTIVE_HAZARDS, SPAWN_ATTEMPTS, SPAWN_INTERVAL_MAX_SECS,
    SPAWN_INTERVAL_MIN_SECS, TOTAL_TIME_SECS,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid {cols}x{rows} needs at least two tiles")]
    GridTooSmall { cols: u8, rows: u8 },
    #[error("total time must be positive, got {0}")]
    NonPositiveTotalTime(f64),
    #[error("spawn interval window [{min}, {max}] is invalid")]
    SpawnInterval { min: f64, max: f64 },
    #[error("hazard lifetime window [{min}, {max}] is invalid")]
    HazardLifetime { min: f64, max: f64 },
    #[error("hazard cap {cap} exceeds capacity {capacity}")]
    HazardCap { cap: usize, capacity: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub cols: u8,
    pub rows: u8,
    pub total_time: f64,
    pub max_active_hazards: usize,
    pub spawn_interval_min: f64,
    pub spawn_interval_max: f64,
    pub hazard_lifetime_min: f64,
    pub hazard_lifetime_max: f64,
    pub spawn_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: GRID_COLS,
            rows: GRID_ROWS,
            total_time: TOTAL_TIME_SECS,
            max_active_hazards: MAX_ACTIVE_HAZARDS,
            spawn_interval_min: SPAWN_INTERVAL_MIN_SECS,
            spawn_interval_max: SPAWN_INTERVAL_MAX_SECS,
            hazard_lifetime_min: HAZARD_LIFETIME_MIN_SECS,
            hazard_lifetime_max: HAZARD_LIFETIME_MAX_SECS,
            spawn_attempts: SPAWN_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub fn with_grid(mut self, cols: u8, rows: u8) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_total_time(mut self, secs: f64) -> Self {
        self.total_time = secs;
        self
    }

    pub fn with_max_active_hazards(mut self, cap: usize) -> Self {
        self.max_active_hazards = cap;
        self
    }

    pub fn with_spawn_interval(mut self, min: f64, max: f64) -> Self {
        self.spawn_interval_min = min;
        self.spawn_interval_max = max;
        self
    }

    pub fn with_hazard_lifetime(mut self, min: f64, max: f64) -> Self {
        self.hazard_lifetime_min = min;
        self.hazard_lifetime_max = max;
        self
    }

    pub fn with_spawn_attempts(mut self, attempts: u32) -> Self {
        self.spawn_attempts = attempts;
        self
    }

    /// Bottom-left tile.
    pub fn start(&self) -> GridPos {
        GridPos::new(0, self.rows as i16 - 1)
    }

    /// Top-right tile.
    pub fn goal(&self) -> GridPos {
        GridPos::new(self.cols as i16 - 1, 0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 || (self.cols == 1 && self.rows == 1) {
            return Err(ConfigError::GridTooSmall {
                cols: self.cols,
                rows: self.rows,
            });
        }
        // Written as negated comparisons so NaN is rejected too.
        if !(self.total_time > 0.0) {
            return Err(ConfigError::NonPositiveTotalTime(self.total_time));
        }
        if !(self.spawn_interval_min > 0.0 && self.spawn_interval_min <= self.spawn_interval_max) {
            return Err(ConfigError::SpawnInterval {
                min: self.spawn_interval_min,
                max: self.spawn_interval_max,
            });
        }
        if !(self.hazard_lifetime_min > 0.0
            && self.hazard_lifetime_min <= self.hazard_lifetime_max)
        {
            return Err(ConfigError::HazardLifetime {
                min: self.hazard_lifetime_min,
                max: self.hazard_lifetime_max,
            });
        }
        if self.max_active_hazards > HAZARD_CAPACITY {
            return Err(ConfigError::HazardCap {
                cap: self.max_active_hazards,
                capacity: HAZARD_CAPACITY,
            });
        }
        Ok(())
    }
}
