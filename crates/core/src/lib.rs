//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole gameplay state machine for Escape the Qubits.
//! It has no dependency on a terminal, window or clock: every time-dependent
//! operation takes `now` (seconds, monotonic) from the caller, and randomness
//! comes from an injected, seedable RNG. That makes it:
//!
//! - **Deterministic**: same seed and same clock samples give the same run
//! - **Testable**: scenarios can force hazards and drive time by hand
//! - **Portable**: the terminal frontend is just one consumer
//!
//! # Module Structure
//!
//! - [`hazard`]: immutable hazard token with derived age, liveness and fade
//! - [`game_state`]: player, hazards, timer, spawn schedule and phase
//! - [`rng`]: seeded random source and draw helpers
//! - [`snapshot`]: read-only per-frame view consumed by the renderer
//!
//! # Game Rules
//!
//! - The player starts bottom-left and must reach the golden tile top-right
//! - Hazards pop up on random tiles (never the goal, possibly the player's)
//!   and fade out after a short lifetime
//! - Touching a live hazard, or running out of time, loses the run
//! - After a move the hazard check runs before the goal check
//!
//! # Example
//!
//! ```
//! use escape_qubits_core::GameState;
//! use escape_qubits_types::Intent;
//!
//! let mut game = GameState::new(12345, 0.0);
//! game.apply_intent(Intent::MoveRight, 0.1);
//! game.advance(0.1);
//!
//! assert_eq!(game.moves(), 1);
//! assert!(game.time_left(0.1) < 45.0);
//! ```

pub mod game_state;
pub mod hazard;
pub mod rng;
pub mod snapshot;

pub use escape_qubits_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use hazard::HazardToken;
pub use rng::{seeded, GameRng};
pub use snapshot::{GameSnapshot, HazardView};
