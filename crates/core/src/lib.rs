//! Core rules module - pure geometry, pieces and board
//!
//! This crate holds the parts of the rules engine that have no notion of
//! time: static shape and kick tables, the immutable [`Piece`] value, and the
//! settled-cell [`Board`]. It has **zero dependencies** on UI, timing or I/O.
//!
//! # Module Structure
//!
//! - [`geometry`]: per-kind rotation states and wall kick tables
//! - [`piece`]: immutable falling piece (move, rotate, spawn)
//! - [`board`]: settled cells, collision queries, line clearing
//!
//! # Example
//!
//! ```
//! use kick_tetris_core::{Board, Piece};
//! use kick_tetris_core::types::PieceKind;
//!
//! let mut board = Board::new(23, 10);
//! let piece = Piece::spawn(board.rows(), board.cols(), PieceKind::O);
//!
//! // Drop it to the floor by hand and settle it.
//! let landed = piece.moved_by(-21, 0);
//! board.place(&landed);
//! assert_eq!(board.filled_count(), 4);
//! ```

pub mod board;
pub mod geometry;
pub mod piece;

pub use kick_tetris_types as types;

pub use board::Board;
pub use geometry::{kick_candidates, offsets, rotation_count, KickCandidates, Shape};
pub use piece::Piece;
