//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a snapshot into a
//! framebuffer of styled cells, and the terminal renderer flushes that buffer
//! to a crossterm backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so frames can be asserted on in tests
//! - Control the tile aspect ratio (2 columns per row by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use escape_qubits_core as core;
pub use escape_qubits_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, HUD_ROWS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
