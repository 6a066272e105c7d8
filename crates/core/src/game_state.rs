//! Game state module - owns every gameplay mutation
//!
//! Player position, the active hazard set, the countdown, the spawn schedule
//! and the phase all live here. Callers feed in intents and clock samples;
//! the renderer only ever sees a [`GameSnapshot`].

use arrayvec::ArrayVec;
use log::{debug, info, trace};
use rand::Rng;

use crate::hazard::HazardToken;
use crate::rng::{self, GameRng};
use crate::snapshot::{GameSnapshot, HazardView};
use crate::types::{ConfigError, GameConfig, GridPos, Intent, Phase, HAZARD_CAPACITY};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = GameRng> {
    config: GameConfig,
    player: GridPos,
    hazards: ArrayVec<HazardToken, HAZARD_CAPACITY>,
    start_time: f64,
    next_spawn_time: f64,
    phase: Phase,
    /// Moves are ignored while set. The clock keeps running.
    paused: bool,
    /// Clock sample at which the run was decided (freezes the HUD timer).
    ended_at: Option<f64>,
    /// Monotonic run id (increments on restart).
    episode_id: u32,
    moves: u32,
    rng: R,
}

impl GameState<GameRng> {
    /// Create a classic game with the given RNG seed, starting at `now`
    pub fn new(seed: u64, now: f64) -> Self {
        let config = GameConfig::default();
        let rng = rng::seeded(seed);
        Self::build(config, rng, now)
    }
}

impl<R: Rng> GameState<R> {
    /// Create a game with custom tuning and random source.
    pub fn with_config(config: GameConfig, rng: R, now: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng, now))
    }

    fn build(config: GameConfig, rng: R, now: f64) -> Self {
        let player = config.start();
        let mut state = Self {
            config,
            player,
            hazards: ArrayVec::new(),
            start_time: now,
            next_spawn_time: now,
            phase: Phase::Playing,
            paused: false,
            ended_at: None,
            episode_id: 0,
            moves: 0,
            rng,
        };
        state.begin_run(now);
        state
    }

    fn begin_run(&mut self, now: f64) {
        self.player = self.config.start();
        self.hazards.clear();
        self.start_time = now;
        self.next_spawn_time = now + self.spawn_interval();
        self.phase = Phase::Playing;
        self.paused = false;
        self.ended_at = None;
        self.moves = 0;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn player(&self) -> GridPos {
        self.player
    }

    pub fn start(&self) -> GridPos {
        self.config.start()
    }

    pub fn goal(&self) -> GridPos {
        self.config.goal()
    }

    pub fn hazards(&self) -> &[HazardToken] {
        &self.hazards
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn next_spawn_time(&self) -> f64 {
        self.next_spawn_time
    }

    /// Seconds left on the countdown, never negative.
    pub fn time_left(&self, now: f64) -> f64 {
        let clock = self.ended_at.unwrap_or(now);
        (self.config.total_time - (clock - self.start_time)).max(0.0)
    }

    /// Whether a live hazard sits on `pos`.
    pub fn hazard_at(&self, pos: GridPos, now: f64) -> bool {
        self.hazards.iter().any(|h| h.occupies(pos, now))
    }

    fn hazard_cap(&self) -> usize {
        self.config.max_active_hazards.min(HAZARD_CAPACITY)
    }

    fn spawn_interval(&mut self) -> f64 {
        rng::uniform(
            &mut self.rng,
            self.config.spawn_interval_min,
            self.config.spawn_interval_max,
        )
    }

    /// Move from `Playing` into a terminal phase. Later calls are no-ops.
    fn finish(&mut self, phase: Phase, now: f64, reason: &str) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.phase = phase;
        self.ended_at = Some(now);
        info!(
            "run {} ended {:?} ({}) after {} moves, {:.1}s left",
            self.episode_id,
            phase,
            reason,
            self.moves,
            self.time_left(now)
        );
        true
    }

    /// Spawn one hazard on a random free tile.
    ///
    /// The goal tile and tiles with a live hazard are rejected; the player's
    /// tile is not. Gives up quietly after `spawn_attempts` rejections.
    pub fn try_spawn_hazard(&mut self, now: f64) -> bool {
        if self.hazards.len() >= self.hazard_cap() {
            trace!("spawn skipped: {} hazards at cap", self.hazards.len());
            return false;
        }

        let goal = self.goal();
        for _ in 0..self.config.spawn_attempts {
            let pos = rng::random_tile(&mut self.rng, self.config.cols, self.config.rows);
            if pos == goal || self.hazard_at(pos, now) {
                continue;
            }
            let lifetime = rng::uniform(
                &mut self.rng,
                self.config.hazard_lifetime_min,
                self.config.hazard_lifetime_max,
            );
            self.hazards.push(HazardToken::new(pos, now, lifetime));
            debug!(
                "hazard spawned at ({}, {}) for {:.2}s",
                pos.col, pos.row, lifetime
            );
            return true;
        }

        debug!(
            "spawn gave up after {} attempts",
            self.config.spawn_attempts
        );
        false
    }

    /// Insert a prebuilt hazard, respecting the cap.
    ///
    /// Scenario tests and benchmarks use this to place hazards exactly.
    pub fn insert_hazard(&mut self, token: HazardToken) -> bool {
        if self.hazards.len() >= self.hazard_cap() {
            return false;
        }
        self.hazards.push(token);
        true
    }

    /// Advance time-driven logic to `now`.
    ///
    /// Order: spawn (if due), purge expired hazards, hazard-on-player check,
    /// timer check. Returns true if the phase changed during this call.
    /// Runs the same way whether or not the game is paused.
    pub fn advance(&mut self, now: f64) -> bool {
        if self.phase == Phase::Playing && now >= self.next_spawn_time {
            self.try_spawn_hazard(now);
            self.next_spawn_time = now + self.spawn_interval();
        }

        self.hazards.retain(|h| h.is_alive(now));

        if self.phase == Phase::Playing && self.hazard_at(self.player, now) {
            return self.finish(Phase::Lost, now, "hazard reached the player");
        }

        if self.phase == Phase::Playing && now - self.start_time >= self.config.total_time {
            return self.finish(Phase::Lost, now, "out of time");
        }

        false
    }

    /// Try to move the player by `(dx, dy)`.
    ///
    /// Rejected (returns false) unless playing and unpaused, or if the target
    /// is off the grid. A committed move is resolved immediately: a live hazard
    /// on the new tile loses the run, otherwise reaching the goal wins it.
    pub fn try_move(&mut self, dx: i16, dy: i16, now: f64) -> bool {
        if self.phase != Phase::Playing || self.paused() {
            return false;
        }

        let target = self.player.offset(dx, dy);
        if !target.in_bounds(self.config.cols, self.config.rows) {
            return false;
        }

        self.player = target;
        self.moves = self.moves.saturating_add(1);

        if self.hazard_at(target, now) {
            self.finish(Phase::Lost, now, "walked into a hazard");
        } else if target == self.goal() {
            self.finish(Phase::Won, now, "reached the goal");
        }
        true
    }

    /// Start a fresh run at `now`.
    pub fn reset(&mut self, now: f64) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.begin_run(now);
        info!("run {} started", self.episode_id);
    }

    /// Pause or resume player movement. Only allowed while playing.
    ///
    /// The countdown, spawning and hazard checks keep running while paused.
    pub fn toggle_pause(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
        true
    }

    /// Apply a player intent.
    ///
    /// Moves only act while playing, restart only once the run is decided.
    /// `Quit` is left to the caller and never changes state.
    pub fn apply_intent(&mut self, intent: Intent, now: f64) -> bool {
        match intent {
            Intent::Restart => {
                if !self.phase.is_over() {
                    return false;
                }
                self.reset(now);
                true
            }
            Intent::Pause => self.toggle_pause(),
            Intent::Quit => false,
            Intent::MoveUp | Intent::MoveDown | Intent::MoveLeft | Intent::MoveRight => intent
                .delta()
                .is_some_and(|(dx, dy)| self.try_move(dx, dy, now)),
        }
    }

    /// Fill `out` with the state as of `now`, reusing its storage.
    pub fn snapshot_into(&self, out: &mut GameSnapshot, now: f64) {
        out.cols = self.config.cols;
        out.rows = self.config.rows;
        out.start = self.start();
        out.goal = self.goal();
        out.player = self.player;
        out.phase = self.phase;
        out.paused = self.paused();
        out.time_left = self.time_left(now);
        out.total_time = self.config.total_time;
        out.episode_id = self.episode_id;
        out.moves = self.moves;

        out.hazards.clear();
        for h in self.hazards.iter().filter(|h| h.is_alive(now)) {
            out.hazards.push(HazardView {
                position: h.position(),
                alpha: h.fade_alpha(now),
            });
        }
    }

    pub fn snapshot(&self, now: f64) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out, now);
        out
    }
}
