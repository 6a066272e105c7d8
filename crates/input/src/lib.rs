//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::Intent`]s. Whether an intent
//! actually does anything is decided by the game state, not here.

pub mod controller;
pub mod map;

pub use escape_qubits_types as types;

pub use controller::InputController;
pub use map::{map_key, should_quit};
