//! View composition: flatten a snapshot into one drawable square per cell.
//!
//! Layers are painted bottom to top: settled board cells, then the shadow,
//! then the active piece. The active piece therefore hides the shadow where
//! they overlap.

use crate::engine::{PieceView, Snapshot};
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Empty,
    Settled(PieceKind),
    Shadow(PieceKind),
    Active(PieceKind),
}

impl Square {
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Square::Empty => None,
            Square::Settled(k) | Square::Shadow(k) | Square::Active(k) => Some(*k),
        }
    }
}

/// Compose into a fresh `[row][col]` grid (row 0 at the bottom).
pub fn compose(snap: &Snapshot) -> Vec<Vec<Square>> {
    let mut out = Vec::new();
    compose_into(snap, &mut out);
    out
}

/// Compose into an existing grid, reusing its rows.
pub fn compose_into(snap: &Snapshot, out: &mut Vec<Vec<Square>>) {
    out.resize_with(snap.rows, Vec::new);
    for (dst, src) in out.iter_mut().zip(snap.board.iter()) {
        dst.clear();
        dst.extend(src.iter().map(|cell| match cell.kind() {
            Some(kind) => Square::Settled(kind),
            None => Square::Empty,
        }));
        dst.resize(snap.cols, Square::Empty);
    }

    if let Some(shadow) = snap.shadow {
        paint(out, &shadow, Square::Shadow(shadow.kind));
    }
    if let Some(active) = snap.active {
        paint(out, &active, Square::Active(active.kind));
    }
}

fn paint(grid: &mut [Vec<Square>], piece: &PieceView, square: Square) {
    for pos in piece.cells {
        if pos.row < 0 || pos.col < 0 {
            continue;
        }
        if let Some(slot) = grid
            .get_mut(pos.row as usize)
            .and_then(|row| row.get_mut(pos.col as usize))
        {
            *slot = square;
        }
    }
}
