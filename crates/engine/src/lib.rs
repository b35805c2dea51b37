//! Game engine module - timing-driven rules on top of the core tables
//!
//! This crate turns the static rules in `kick-tetris-core` into a playable
//! state machine. It is synchronous and single-threaded: the host calls
//! [`Engine::tick`] at a fixed interval and forwards discrete commands, then
//! pulls a [`Snapshot`] to render.
//!
//! # Module Structure
//!
//! - [`config`]: board size, tick interval, kick policy, seed
//! - [`engine`]: spawn / fall / place / line-clear state machine
//! - [`driver`]: converts host wall time into ticks, halts on game over
//! - [`rng`]: uniform random (or scripted) spawn kinds
//! - [`snapshot`]: render-friendly copy of board, piece and shadow
//!
//! # Tick rules
//!
//! Each tick does exactly one thing, in priority order:
//!
//! 1. clear full rows (if any)
//! 2. spawn a piece (if none is active), or end the game if the spawn collides
//! 3. move the active piece down one row
//! 4. settle the piece on the board
//!
//! # Example
//!
//! ```
//! use kick_tetris_engine::{Engine, EngineConfig, TickOutcome};
//! use kick_tetris_engine::types::PieceKind;
//!
//! let mut engine = Engine::with_sequence(EngineConfig::default(), &[PieceKind::O]).unwrap();
//! assert_eq!(engine.tick(), TickOutcome::Spawned(PieceKind::O));
//!
//! engine.move_left();
//! engine.hard_drop();
//! assert_eq!(engine.tick(), TickOutcome::Placed);
//!
//! let snap = engine.snapshot();
//! assert!(!snap.game_over);
//! assert_eq!(snap.board.len(), 23);
//! ```

pub mod config;
pub mod driver;
pub mod engine;
pub mod rng;
pub mod snapshot;

pub use kick_tetris_core as core;
pub use kick_tetris_types as types;

pub use config::{ConfigError, EngineConfig, KickPolicy};
pub use driver::{TickDriver, MAX_CATCH_UP_TICKS};
pub use engine::{Engine, Phase, TickOutcome};
pub use rng::{PieceGenerator, SimpleRng};
pub use snapshot::{PieceView, Snapshot};
