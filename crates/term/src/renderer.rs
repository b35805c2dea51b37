//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Each frame is compared against the previous one and only the changed
//! runs of each row are written. The first frame, and any frame after a
//! size change or [`TerminalRenderer::invalidate`], repaints everything.
//! Mouse capture is switched on while the renderer owns the terminal so
//! drag gestures reach the host.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(event::EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        reset_style_into(&mut self.buf)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(event::DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")
    }

    /// Repaint everything on the next draw (after a resize, for instance).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then hand the previous frame back through `fb`.
    ///
    /// Keeping two buffers alive and swapping them avoids cloning a frame
    /// per draw; the caller simply renders into whatever `fb` holds next.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let prev = self
            .last
            .take()
            .filter(|prev| (prev.width(), prev.height()) == (fb.width(), fb.height()));

        self.buf.clear();
        encode_frame_into(prev.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        let mut spare = prev.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut spare, fb);
        self.last = Some(spare);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf).context("write frame")?;
        self.stdout.flush().context("flush frame")
    }
}

/// Encode `next` into `out` as crossterm commands.
///
/// With no `prev` (or a differently sized one) the screen is cleared and
/// every row is written; otherwise only runs that differ from `prev`.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| (p.width(), p.height()) == (next.width(), next.height()));
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let runs = match prev {
            Some(prev) => dirty_runs(prev, next, y),
            None => vec![(0, next.width())],
        };
        for (x, len) in runs {
            out.queue(cursor::MoveTo(x, y))?;
            for cx in x..x + len {
                let cell = next.get(cx, y).unwrap_or_default();
                pen.select(out, cell.style)?;
                out.queue(Print(cell.ch))?;
            }
        }
    }

    reset_style_into(out)
}

/// Tracks the style last sent so repeated cells skip the escape codes.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn select(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(to_color(style.fg)))?;
        out.queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.current = Some(style);
        Ok(())
    }
}

fn reset_style_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(x, len)` spans of row `y` where `prev` and `next` differ.
fn dirty_runs(prev: &FrameBuffer, next: &FrameBuffer, y: u16) -> Vec<(u16, u16)> {
    let differs = |x: u16| prev.get(x, y) != next.get(x, y);
    let mut runs = Vec::new();
    let mut start: Option<u16> = None;
    for x in 0..next.width() {
        match (differs(x), start) {
            (true, None) => start = Some(x),
            (false, Some(s)) => {
                runs.push((s, x - s));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, next.width() - s));
    }
    runs
}
