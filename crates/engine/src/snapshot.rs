//! Snapshot module - render-friendly copies of engine state
//!
//! A [`Snapshot`] owns its data, so hosts can keep or serialize it while the
//! engine moves on. [`crate::Engine::snapshot_into`] refills an existing one
//! without reallocating rows.

use serde::Serialize;

use crate::core::Piece;
use crate::types::{Cell, PieceKind, Position};

/// Kind and absolute cells of a piece, enough to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub cells: [Position; 4],
}

impl From<Piece> for PieceView {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            cells: value.cells(),
        }
    }
}

/// Point-in-time copy of everything a renderer needs.
///
/// `board` is indexed `[row][col]` with row 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Snapshot {
    pub rows: usize,
    pub cols: usize,
    pub board: Vec<Vec<Cell>>,
    pub active: Option<PieceView>,
    pub shadow: Option<PieceView>,
    pub game_over: bool,
}

impl Snapshot {
    /// Resize the board grid, keeping row allocations where possible.
    pub(crate) fn reshape(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.board.resize_with(rows, Vec::new);
        for row in &mut self.board {
            row.resize(cols, Cell::Empty);
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
