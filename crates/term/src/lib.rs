//! Terminal presentation module.
//!
//! A small, game-oriented rendering layer: snapshots are composed into one
//! square per board cell, drawn into a framebuffer, and flushed to the
//! terminal with crossterm. Nothing here changes game state.
//!
//! - [`squares`]: board + shadow + active piece layered into a grid
//! - [`game_view`]: grid to framebuffer (2 columns per cell, row 0 at the bottom)
//! - [`renderer`]: framebuffer diffing and terminal I/O

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod squares;

pub use kick_tetris_engine as engine;
pub use kick_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, shadow_color, BoardFrame, GameView, HostStatus, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use squares::{compose, compose_into, Square};
