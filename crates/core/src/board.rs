//! Board module - manages the grid of settled cells
//!
//! The board is a `cols x rows` grid where each cell is empty or filled with
//! the kind of the piece that settled there. Storage is a flat row-major
//! vector with row 0 at the bottom: index = `row * cols + col`.
//!
//! The board only answers "is there a settled block here". Bounds checking
//! for piece validity is the engine's job.

use crate::piece::Piece;
use crate::types::{Cell, Position};

/// The settled-cell grid. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some((pos.row as usize) * self.cols + (pos.col as usize))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if `pos` lies in `[0, rows) x [0, cols)`.
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// Get cell at position, `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at position. Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True only for an in-bounds, filled cell.
    pub fn is_occupied(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Filled(_)))
    }

    /// Cells of one row, left to right. Empty slice when out of range.
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows && self.row(row).iter().all(Cell::is_filled)
    }

    /// Settle a piece: write its kind into each of its in-bounds cells.
    ///
    /// Out-of-bounds cells are skipped; callers validate before placing.
    pub fn place(&mut self, piece: &Piece) {
        let cell = Cell::Filled(piece.kind());
        for pos in piece.cells() {
            self.set(pos, cell);
        }
    }

    /// Remove every full row. Returns whether anything was cleared.
    pub fn clear_full_lines(&mut self) -> bool {
        self.clear_full_lines_counted() > 0
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rebuilds the grid from the surviving rows, bottom to top, so rows
    /// above a cleared row drop by the number of cleared rows beneath them.
    /// Fresh empty rows fill the top.
    pub fn clear_full_lines_counted(&mut self) -> usize {
        let full = (0..self.rows).filter(|&r| self.is_row_full(r)).count();
        if full == 0 {
            return 0;
        }

        let mut next = Vec::with_capacity(self.cells.len());
        for row in 0..self.rows {
            if !self.is_row_full(row) {
                next.extend_from_slice(self.row(row));
            }
        }
        next.resize(self.rows * self.cols, Cell::Empty);

        self.cells = next;
        full
    }

    /// Get a reference to the internal cells (row-major, bottom row first)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells on the board.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Fill a whole row with one kind.
    pub fn fill_row(&mut self, row: usize, cell: Cell) {
        if row >= self.rows {
            return;
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols].fill(cell);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLS)
    }
}
