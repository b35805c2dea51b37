//! Input module (engine-facing).
//!
//! This crate translates host input into the engine's discrete
//! [`crate::types::Command`] set. It holds no game state:
//!
//! - [`map`]: `crossterm` key events to commands, plus host keys (quit,
//!   pause, restart)
//! - [`gesture`]: drag / rotation gestures to commands using movement
//!   thresholds (used for terminal mouse input)

pub mod gesture;
pub mod map;

pub use kick_tetris_types as types;

pub use gesture::{GestureTracker, Point};
pub use map::{handle_key_event, should_pause, should_quit, should_restart};
