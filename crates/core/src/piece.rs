//! Piece module - the active falling tetromino as an immutable value
//!
//! A [`Piece`] never changes in place: moving or rotating returns a new
//! value, and the caller decides whether to commit it after validation.

use crate::geometry::{self, KickCandidates, Shape};
use crate::types::{PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    origin: Position,
    kind: PieceKind,
    /// Always within `0..rotation_count(kind)`.
    orientation: i32,
}

impl Piece {
    pub fn new(kind: PieceKind, origin: Position, orientation: i32) -> Self {
        Self {
            origin,
            kind,
            orientation: geometry::wrap_orientation(kind, orientation) as i32,
        }
    }

    /// Spawn a piece at the top centre of a `rows x cols` board.
    ///
    /// Orientation 0, origin column `(cols - 1) / 2`, origin row chosen so the
    /// topmost cell sits on the last row.
    pub fn spawn(rows: usize, cols: usize, kind: PieceKind) -> Self {
        let col = (cols as i32 - 1).div_euclid(2);
        let row = rows as i32 - 1 - geometry::max_row_offset(kind, 0);
        Self::new(kind, Position::new(row, col), 0)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn orientation(&self) -> i32 {
        self.orientation
    }

    /// Offsets of the current rotation state.
    pub fn shape(&self) -> Shape {
        geometry::offsets(self.kind, self.orientation)
    }

    /// Absolute board cells covered by this piece.
    pub fn cells(&self) -> [Position; 4] {
        self.shape().map(|offset| self.origin.offset(offset))
    }

    pub fn moved_by(&self, row_delta: i32, col_delta: i32) -> Self {
        Self {
            origin: self.origin.offset(Position::new(row_delta, col_delta)),
            ..*self
        }
    }

    pub fn kicked(&self, kick: Position) -> Self {
        self.moved_by(kick.row, kick.col)
    }

    /// Same origin, next (or previous) rotation state. No kicks applied.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let step = if clockwise { 1 } else { -1 };
        Self::new(self.kind, self.origin, self.orientation + step)
    }

    /// Kicks to try when rotating out of the current orientation.
    pub fn kick_candidates(&self, clockwise: bool) -> KickCandidates {
        geometry::kick_candidates(self.kind, self.orientation, clockwise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cell_set(piece: &Piece) -> HashSet<Position> {
        piece.cells().into_iter().collect()
    }

    #[test]
    fn spawn_o_on_default_board() {
        let piece = Piece::spawn(23, 10, PieceKind::O);
        assert_eq!(piece.origin(), Position::new(21, 4));
        assert_eq!(piece.orientation(), 0);
        let top = piece.cells().iter().map(|c| c.row).max().unwrap();
        assert_eq!(top, 22);
    }

    #[test]
    fn spawn_i_sits_on_top_row() {
        let piece = Piece::spawn(23, 10, PieceKind::I);
        assert_eq!(piece.origin(), Position::new(22, 4));
        assert!(piece.cells().iter().all(|c| c.row == 22));
    }

    #[test]
    fn spawn_column_floors_even_widths() {
        assert_eq!(Piece::spawn(20, 9, PieceKind::T).origin().col, 4);
        assert_eq!(Piece::spawn(20, 10, PieceKind::T).origin().col, 4);
        assert_eq!(Piece::spawn(20, 11, PieceKind::T).origin().col, 5);
    }

    #[test]
    fn moved_by_translates_every_cell() {
        let piece = Piece::spawn(23, 10, PieceKind::S);
        let moved = piece.moved_by(-3, 2);
        for (a, b) in piece.cells().iter().zip(moved.cells().iter()) {
            assert_eq!(b.row, a.row - 3);
            assert_eq!(b.col, a.col + 2);
        }
        assert_eq!(moved.orientation(), piece.orientation());
    }

    #[test]
    fn rotating_full_cycle_restores_cells() {
        for kind in PieceKind::ALL {
            let start = Piece::new(kind, Position::new(10, 5), 0);
            let n = geometry::rotation_count(kind);

            let mut cw = start;
            let mut ccw = start;
            for _ in 0..n {
                cw = cw.rotated(true);
                ccw = ccw.rotated(false);
            }
            assert_eq!(cell_set(&cw), cell_set(&start), "{:?} cw", kind);
            assert_eq!(cell_set(&ccw), cell_set(&start), "{:?} ccw", kind);
        }
    }

    #[test]
    fn ccw_from_zero_lands_on_last_state() {
        let piece = Piece::new(PieceKind::J, Position::new(5, 5), 0).rotated(false);
        assert_eq!(piece.orientation(), 3);
        assert_eq!(piece.origin(), Position::new(5, 5));
    }

    #[test]
    fn o_piece_rotation_is_identity() {
        let piece = Piece::spawn(23, 10, PieceKind::O);
        assert_eq!(piece.rotated(true), piece);
        assert_eq!(piece.rotated(false), piece);
    }

    #[test]
    fn kick_candidates_follow_direction() {
        let piece = Piece::new(PieceKind::T, Position::new(5, 5), 1);
        assert_eq!(
            piece.kick_candidates(true),
            geometry::kick_candidates(PieceKind::T, 1, true)
        );
        assert_eq!(
            piece.kick_candidates(false),
            geometry::kick_candidates(PieceKind::T, 1, false)
        );
    }
}
