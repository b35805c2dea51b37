//! Kick Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so hosts and
//! integration tests can write `kick_tetris::{core,engine,input,term,types}`.
//! The binary's argument parsing lives in [`cli`].

pub mod cli;

pub use kick_tetris_core as core;
pub use kick_tetris_engine as engine;
pub use kick_tetris_input as input;
pub use kick_tetris_term as term;
pub use kick_tetris_types as types;
