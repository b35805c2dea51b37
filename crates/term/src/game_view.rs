//! GameView: maps an engine [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::Snapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::squares::{compose_into, Square};
use crate::types::PieceKind;

/// Opacity used for the landing shadow.
const SHADOW_OPACITY: f32 = 0.3;

const BOARD_BG: Rgb = Rgb::BLACK;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Host-side state shown next to the board (not part of the engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostStatus {
    pub paused: bool,
}

/// Piece colour.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 100, 250),
        PieceKind::J => Rgb::new(175, 175, 175),
        PieceKind::L => Rgb::new(25, 255, 40),
        PieceKind::O => Rgb::new(90, 100, 10),
        PieceKind::S => Rgb::new(175, 175, 32),
        PieceKind::T => Rgb::new(255, 26, 60),
        PieceKind::Z => Rgb::new(175, 10, 175),
    }
}

/// Shadow colour: the piece colour at reduced opacity over the board.
pub fn shadow_color(kind: PieceKind) -> Rgb {
    piece_color(kind).over(BOARD_BG, SHADOW_OPACITY)
}

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

/// Where the board frame landed inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Frame placement for a board of `rows x cols`, centred in the viewport.
    pub fn frame(&self, rows: usize, cols: usize, viewport: Viewport) -> BoardFrame {
        let width = (cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let height = (rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        BoardFrame {
            x: viewport.width.saturating_sub(width) / 2,
            y: viewport.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Map a terminal position inside the board to `(row, col)`.
    ///
    /// Used to turn mouse coordinates into board-relative gesture points.
    pub fn board_cell_at(
        &self,
        rows: usize,
        cols: usize,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<(usize, usize)> {
        let frame = self.frame(rows, cols, viewport);
        let inner_x = x.checked_sub(frame.x + 1)?;
        let inner_y = y.checked_sub(frame.y + 1)?;
        let col = (inner_x / self.cell_w) as usize;
        let from_top = (inner_y / self.cell_h) as usize;
        if col >= cols || from_top >= rows {
            return None;
        }
        Some((rows - 1 - from_top, col))
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(
        &self,
        snap: &Snapshot,
        status: HostStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let frame = self.frame(snap.rows, snap.cols, viewport);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::BLACK);
        self.draw_border(fb, frame, border);

        let mut grid = Vec::with_capacity(snap.rows);
        compose_into(snap, &mut grid);
        for (row, squares) in grid.iter().enumerate() {
            for (col, square) in squares.iter().enumerate() {
                self.draw_square(fb, frame, snap.rows, row, col, *square);
            }
        }

        self.draw_side_panel(fb, snap, status, viewport, frame);

        if !snap.playable() {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        } else if status.paused {
            self.draw_overlay_text(fb, frame, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, status: HostStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: BoardFrame, style: CellStyle) {
        let BoardFrame { x, y, width: w, height: h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_square(
        &self,
        fb: &mut FrameBuffer,
        frame: BoardFrame,
        rows: usize,
        row: usize,
        col: usize,
        square: Square,
    ) {
        let (ch, style) = match square {
            Square::Empty => (
                '·',
                CellStyle {
                    dim: true,
                    ..CellStyle::plain(Rgb::new(60, 60, 70), BOARD_BG)
                },
            ),
            Square::Settled(kind) | Square::Active(kind) => (
                '█',
                CellStyle {
                    bold: true,
                    ..CellStyle::plain(piece_color(kind), BOARD_BG)
                },
            ),
            Square::Shadow(kind) => ('▒', CellStyle::plain(shadow_color(kind), BOARD_BG)),
        };

        // Row 0 is the bottom of the board, the last line of the frame.
        let from_top = (rows - 1 - row) as u16;
        let px = frame.x + 1 + col as u16 * self.cell_w;
        let py = frame.y + 1 + from_top * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &Snapshot,
        status: HostStatus,
        viewport: Viewport,
        frame: BoardFrame,
    ) {
        let panel_x = frame.x.saturating_add(frame.width).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(220, 220, 220), Rgb::BLACK)
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::BLACK);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        let state = if !snap.playable() {
            "over"
        } else if status.paused {
            "paused"
        } else {
            "running"
        };
        fb.put_str(panel_x, y, state, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECE", label);
        y = y.saturating_add(1);
        let letter = snap.active.map(|a| a.kind.letter()).unwrap_or('-');
        fb.put_char(panel_x, y, letter, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        for help in [
            "←/→  move",
            "↓    soft drop",
            "spc  hard drop",
            "↑/x  rotate cw",
            "z    rotate ccw",
            "p    pause",
            "r    restart",
            "q    quit",
        ] {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, value);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: BoardFrame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.height / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.width.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), Rgb::BLACK)
        };
        fb.put_str(x, mid_y, text, style);
    }
}
