//! Engine module - the gravity/spawn/placement state machine
//!
//! The engine is the sole owner of the [`Board`] and the active [`Piece`].
//! Every candidate position is validated before it is committed; rejected
//! moves and rotations leave the state untouched and report `false`.
//!
//! Time is not tracked here. The host calls [`Engine::tick`] at the configured
//! interval (see [`crate::driver::TickDriver`]) and stops once the engine
//! reports game over.

use log::{debug, info, trace};

use crate::config::{ConfigError, EngineConfig, KickPolicy};
use crate::core::{Board, Piece};
use crate::rng::PieceGenerator;
use crate::snapshot::{PieceView, Snapshot};
use crate::types::{Command, PieceKind};

/// Where the state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No active piece; the next tick spawns one.
    Spawning,
    /// A piece is falling.
    Falling,
    /// A spawned piece collided. Terminal.
    GameOver,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// Full rows were removed; nothing else happened this tick.
    LinesCleared(usize),
    /// A new piece entered the board.
    Spawned(PieceKind),
    /// The spawn collided with settled cells.
    GameOver,
    /// The active piece moved down one row.
    Fell,
    /// The active piece could not fall and was settled.
    Placed,
    /// The game is already over; nothing changed.
    Halted,
}

#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    board: Board,
    active: Option<Piece>,
    generator: PieceGenerator,
    game_over: bool,
}

impl Engine {
    /// Create an engine with an empty `rows x cols` board and default settings.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Self::with_config(EngineConfig::default().with_dimensions(rows, cols))
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        let generator = PieceGenerator::random(config.seed);
        Self::with_generator(config, generator)
    }

    pub fn with_generator(
        config: EngineConfig,
        generator: PieceGenerator,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.rows, config.cols),
            config,
            active: None,
            generator,
            game_over: false,
        })
    }

    /// Spawn kinds cycle through `kinds` instead of being random.
    pub fn with_sequence(config: EngineConfig, kinds: &[PieceKind]) -> Result<Self, ConfigError> {
        let generator = PieceGenerator::scripted(kinds).ok_or(ConfigError::EmptySequence)?;
        Self::with_generator(config, generator)
    }

    /// Start from a prepared board (puzzle setups, tests).
    ///
    /// The board dimensions override the ones in `config`.
    pub fn from_board(
        config: EngineConfig,
        generator: PieceGenerator,
        board: Board,
    ) -> Result<Self, ConfigError> {
        let config = config.with_dimensions(board.rows(), board.cols());
        let mut engine = Self::with_generator(config, generator)?;
        engine.board = board;
        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.active.is_some() {
            Phase::Falling
        } else {
            Phase::Spawning
        }
    }

    /// Every cell in bounds and not settled.
    pub fn is_valid(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .iter()
            .all(|&pos| self.board.in_bounds(pos) && !self.board.is_occupied(pos))
    }

    /// Advance the game by one gravity step.
    ///
    /// Exactly one of: clear lines, spawn, fall, or place.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            trace!("tick ignored: game over");
            return TickOutcome::Halted;
        }

        let cleared = self.board.clear_full_lines_counted();
        if cleared > 0 {
            debug!("cleared {} line(s)", cleared);
            return TickOutcome::LinesCleared(cleared);
        }

        let Some(active) = self.active else {
            return self.spawn();
        };

        if self.move_down() {
            debug!("{:?} fell to row {}", active.kind(), active.origin().row - 1);
            return TickOutcome::Fell;
        }

        self.board.place(&active);
        self.active = None;
        debug!(
            "placed {:?} at row {} col {}",
            active.kind(),
            active.origin().row,
            active.origin().col
        );
        TickOutcome::Placed
    }

    fn spawn(&mut self) -> TickOutcome {
        let kind = self.generator.draw();
        let piece = Piece::spawn(self.board.rows(), self.board.cols(), kind);

        if !self.is_valid(&piece) {
            self.game_over = true;
            info!("game over: {:?} spawn is blocked", kind);
            return TickOutcome::GameOver;
        }

        debug!("spawned {:?}", kind);
        self.active = Some(piece);
        TickOutcome::Spawned(kind)
    }

    fn try_move(&mut self, row_delta: i32, col_delta: i32) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.moved_by(row_delta, col_delta);
        if self.is_valid(&candidate) {
            self.active = Some(candidate);
            return true;
        }
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(0, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(0, 1)
    }

    pub fn move_down(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    /// Move down until blocked. Returns the number of rows dropped.
    ///
    /// The piece is not settled here; the next tick does that.
    pub fn hard_drop(&mut self) -> usize {
        let mut rows = 0;
        while self.move_down() {
            rows += 1;
        }
        rows
    }

    /// Rotate with wall kicks. Returns true if a rotation was committed.
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let base = active.rotated(clockwise);
        let mut chosen = None;
        for kick in active.kick_candidates(clockwise) {
            let candidate = base.kicked(kick);
            if !self.is_valid(&candidate) {
                continue;
            }
            chosen = Some(candidate);
            if self.config.kick_policy == KickPolicy::FirstValid {
                break;
            }
        }

        match chosen {
            Some(piece) => {
                self.active = Some(piece);
                true
            }
            None => {
                trace!(
                    "rotation of {:?} from orientation {} rejected",
                    active.kind(),
                    active.orientation()
                );
                false
            }
        }
    }

    /// Where the active piece would land. Read-only.
    pub fn shadow(&self) -> Option<Piece> {
        let mut landed = self.active?;
        loop {
            let next = landed.moved_by(-1, 0);
            if !self.is_valid(&next) {
                return Some(landed);
            }
            landed = next;
        }
    }

    /// Dispatch a discrete command.
    ///
    /// Hard drop reports whether the piece moved at all.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.move_down(),
            Command::HardDrop => self.hard_drop() > 0,
            Command::RotateCw => self.rotate(true),
            Command::RotateCcw => self.rotate(false),
        }
    }

    /// Write the current state into an existing snapshot, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.reshape(self.board.rows(), self.board.cols());
        for (r, row) in out.board.iter_mut().enumerate() {
            row.copy_from_slice(self.board.row(r));
        }
        out.active = self.active.map(PieceView::from);
        out.shadow = self.shadow().map(PieceView::from);
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            board: Board::default(),
            active: None,
            generator: PieceGenerator::default(),
            game_over: false,
        }
    }
}
