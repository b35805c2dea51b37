//! Geometry module - static shape and wall kick tables
//!
//! Every tetromino is described by the four cell offsets of each of its
//! rotation states, relative to the piece origin. Offsets are `(row, col)`
//! with rows growing upward.
//!
//! Kick tables list the offsets tried, in order, when a rotation out of a
//! given orientation collides. The first candidate is always `(0, 0)`.
//! Three families exist: O (trivial), I, and the J/L/S/T/Z family. Only
//! clockwise tables are stored; counter-clockwise kicks are derived from them.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Position};

/// Offsets of the four cells of one rotation state.
pub type Shape = [Position; 4];

/// Longest kick candidate list of any table.
pub const MAX_KICKS: usize = 5;

/// Ordered kick candidates for one rotation attempt.
pub type KickCandidates = ArrayVec<Position, MAX_KICKS>;

const fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

const I_SHAPES: [Shape; 4] = [
    [p(0, -1), p(0, 0), p(0, 1), p(0, 2)],
    [p(-1, 1), p(0, 1), p(1, 1), p(-2, 1)],
    [p(-1, -1), p(-1, 0), p(-1, 1), p(-1, 2)],
    [p(-1, 0), p(0, 0), p(1, 0), p(-2, 0)],
];

const O_SHAPES: [Shape; 1] = [[p(0, 0), p(0, 1), p(1, 1), p(1, 0)]];

const T_SHAPES: [Shape; 4] = [
    [p(0, -1), p(0, 0), p(0, 1), p(1, 0)],
    [p(-1, 0), p(0, 0), p(0, 1), p(1, 0)],
    [p(0, -1), p(0, 0), p(0, 1), p(-1, 0)],
    [p(0, -1), p(0, 0), p(1, 0), p(-1, 0)],
];

const J_SHAPES: [Shape; 4] = [
    [p(1, -1), p(0, -1), p(0, 0), p(0, 1)],
    [p(1, 0), p(0, 0), p(-1, 0), p(1, 1)],
    [p(-1, 1), p(0, -1), p(0, 0), p(0, 1)],
    [p(1, 0), p(0, 0), p(-1, 0), p(-1, -1)],
];

const L_SHAPES: [Shape; 4] = [
    [p(0, -1), p(0, 0), p(0, 1), p(1, 1)],
    [p(1, 0), p(0, 0), p(-1, 0), p(-1, 1)],
    [p(0, -1), p(0, 0), p(0, 1), p(-1, -1)],
    [p(1, 0), p(0, 0), p(-1, 0), p(1, -1)],
];

const S_SHAPES: [Shape; 4] = [
    [p(0, -1), p(0, 0), p(1, 0), p(1, 1)],
    [p(1, 0), p(0, 0), p(0, 1), p(-1, 1)],
    [p(0, 1), p(0, 0), p(-1, 0), p(-1, -1)],
    [p(1, -1), p(0, -1), p(0, 0), p(-1, 0)],
];

const Z_SHAPES: [Shape; 4] = [
    [p(1, -1), p(1, 0), p(0, 0), p(0, 1)],
    [p(1, 1), p(0, 1), p(0, 0), p(-1, 0)],
    [p(0, -1), p(0, 0), p(-1, 0), p(-1, 1)],
    [p(1, 0), p(0, 0), p(0, -1), p(-1, -1)],
];

/// O never needs a kick.
const O_KICKS: [&[Position]; 1] = [&[p(0, 0)]];

const I_KICKS: [&[Position]; 4] = [
    &[p(0, 0), p(0, -2), p(0, 1), p(-1, -2), p(2, -1)],
    &[p(0, 0), p(0, -1), p(0, 2), p(2, -1), p(-1, 2)],
    &[p(0, 0), p(0, 2), p(0, -1), p(1, 2), p(-2, -1)],
    &[p(0, 0), p(0, 1), p(0, -2), p(-2, 1), p(1, -2)],
];

/// Shared by J, L, S, T and Z.
const JLSTZ_KICKS: [&[Position]; 4] = [
    &[p(0, 0), p(0, -1), p(1, -1), p(0, -2), p(-2, -1)],
    &[p(0, 0), p(0, 1), p(-1, 1), p(2, 0), p(1, 2)],
    &[p(0, 0), p(0, 1), p(1, 1), p(-2, 0), p(-2, 1)],
    &[p(0, 0), p(0, -1), p(-1, -1), p(2, 0), p(2, -1)],
];

/// All rotation states of a piece kind, indexed by orientation.
pub fn shapes(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::Z => &Z_SHAPES,
    }
}

/// Number of distinct rotation states (1 for O, 4 otherwise).
#[inline]
pub fn rotation_count(kind: PieceKind) -> usize {
    shapes(kind).len()
}

/// Reduce any integer orientation into `0..rotation_count(kind)`.
///
/// Negative values wrap, so `-1` is the last state.
#[inline]
pub fn wrap_orientation(kind: PieceKind, orientation: i32) -> usize {
    orientation.rem_euclid(rotation_count(kind) as i32) as usize
}

/// Cell offsets for `(kind, orientation)`; the orientation is wrapped.
pub fn offsets(kind: PieceKind, orientation: i32) -> Shape {
    shapes(kind)[wrap_orientation(kind, orientation)]
}

/// Clockwise kick rows of a piece kind, indexed by source orientation.
pub fn kick_table(kind: PieceKind) -> &'static [&'static [Position]] {
    match kind {
        PieceKind::O => &O_KICKS,
        PieceKind::I => &I_KICKS,
        PieceKind::J | PieceKind::L | PieceKind::S | PieceKind::T | PieceKind::Z => &JLSTZ_KICKS,
    }
}

/// Ordered kick candidates for rotating out of `orientation`.
///
/// Clockwise uses the row of the source orientation. Counter-clockwise uses
/// the row of the destination orientation with both components negated, so
/// a ccw turn undoes the kick the matching cw turn would have applied.
pub fn kick_candidates(kind: PieceKind, orientation: i32, clockwise: bool) -> KickCandidates {
    let table = kick_table(kind);
    if clockwise {
        let row = table[wrap_orientation(kind, orientation)];
        row.iter().copied().collect()
    } else {
        // Destination is source - 1, taken after wrapping.
        let count = rotation_count(kind);
        let dest = (wrap_orientation(kind, orientation) + count - 1) % count;
        table[dest].iter().map(|kick| kick.negated()).collect()
    }
}

/// Highest row offset of a rotation state (its top edge above the origin).
pub fn max_row_offset(kind: PieceKind, orientation: i32) -> i32 {
    offsets(kind, orientation)
        .iter()
        .map(|o| o.row)
        .max()
        .unwrap_or(0)
}
