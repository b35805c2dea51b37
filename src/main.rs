//! Terminal runner (default binary).
//!
//! Owns the clock and the terminal: keys and mouse gestures become engine
//! commands, a `TickDriver` turns wall time into ticks, and every loop
//! iteration redraws through the framebuffer renderer.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::{info, LevelFilter};

use kick_tetris::cli::{parse_args, CliOptions, USAGE};
use kick_tetris::engine::{Engine, Snapshot, TickDriver};
use kick_tetris::input::{
    handle_key_event, should_pause, should_quit, should_restart, GestureTracker, Point,
};
use kick_tetris::term::{FrameBuffer, GameView, HostStatus, TerminalRenderer, Viewport};
use kick_tetris::types::Command;

/// Degrees of rotation gesture per scroll notch.
const SCROLL_ANGLE_STEP: f32 = 15.0;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;
    if opts.help {
        println!("{}", USAGE);
        return Ok(());
    }
    init_logging(opts.log_file.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &opts);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The terminal owns stdout/stderr, so logs only go to a file.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}

struct Session {
    engine: Engine,
    driver: TickDriver,
    gestures: GestureTracker,
    scroll_angle: f32,
}

impl Session {
    fn start(opts: &CliOptions) -> Result<Self> {
        let engine = opts.build_engine()?;
        let driver = TickDriver::for_engine(&engine);
        info!(
            "new game: {}x{} board, tick {:?}, kicks {}",
            engine.rows(),
            engine.cols(),
            driver.interval(),
            engine.config().kick_policy.as_str()
        );
        Ok(Self {
            engine,
            driver,
            gestures: GestureTracker::for_terminal(),
            scroll_angle: 0.0,
        })
    }

    fn apply(&mut self, command: Command) {
        // Commands are ignored while paused; the engine itself has no pause.
        if self.driver.is_paused() {
            return;
        }
        self.engine.apply(command);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, view: &GameView, viewport: Viewport) {
        // Half-width x so one unit is one board column.
        let point = Point::new(mouse.column as f32 / 2.0, mouse.row as f32);
        let command = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let on_board = view
                    .board_cell_at(
                        self.engine.rows(),
                        self.engine.cols(),
                        viewport,
                        mouse.column,
                        mouse.row,
                    )
                    .is_some();
                if on_board {
                    self.gestures.drag_changed(point)
                } else {
                    None
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.gestures.is_dragging() => {
                self.gestures.drag_changed(point)
            }
            MouseEventKind::Up(MouseButton::Left) => self.gestures.drag_ended(),
            MouseEventKind::Down(MouseButton::Right) => Some(self.gestures.tap()),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                self.gestures.rotate_changed(self.scroll_angle);
                self.scroll_angle += if mouse.kind == MouseEventKind::ScrollDown {
                    SCROLL_ANGLE_STEP
                } else {
                    -SCROLL_ANGLE_STEP
                };
                self.gestures.rotate_changed(self.scroll_angle)
            }
            _ => None,
        };
        if let Some(command) = command {
            self.apply(command);
        }
    }
}

fn run(term: &mut TerminalRenderer, opts: &CliOptions) -> Result<()> {
    let mut session = Session::start(opts)?;

    let view = GameView::default();
    let mut snap = Snapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.engine.snapshot_into(&mut snap);
        let status = HostStatus {
            paused: session.driver.is_paused(),
        };
        view.render_into(&snap, status, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        if event::poll(session.driver.until_next_tick())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if should_restart(key) {
                        session = Session::start(opts)?;
                        last = Instant::now();
                        continue;
                    }
                    if should_pause(key) {
                        session.driver.toggle_pause();
                    } else if let Some(command) = handle_key_event(key) {
                        session.apply(command);
                    }
                }
                Event::Mouse(mouse) => session.handle_mouse(mouse, &view, viewport),
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        session.driver.advance(&mut session.engine, now - last);
        last = now;
    }
}
