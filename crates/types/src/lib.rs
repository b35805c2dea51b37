//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (geometry tables, engine, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs:
//!
//! - **row**: 0 is the bottom row of the board and grows upward
//! - **col**: 0 is the leftmost column and grows rightward
//!
//! The same [`Position`] type is used for absolute cells, shape offsets and
//! kick offsets.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 23 | Board height |
//! | `DEFAULT_COLS` | 10 | Board width |
//! | `DEFAULT_TICK_MS` | 500 | Gravity tick interval |
//!
//! # Examples
//!
//! ```
//! use kick_tetris_types::{Cell, Command, PieceKind, Position};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let cell = Cell::Filled(kind);
//! assert_eq!(cell.kind(), Some(PieceKind::T));
//!
//! let p = Position::new(2, 3).offset(Position::new(-1, 1));
//! assert_eq!(p, Position::new(1, 4));
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! ```

use serde::Serialize;

/// Default board height in rows.
pub const DEFAULT_ROWS: usize = 23;

/// Default board width in columns.
pub const DEFAULT_COLS: usize = 10;

/// Default gravity interval in milliseconds (one row every half second).
pub const DEFAULT_TICK_MS: u64 = 500;

/// Largest accepted board dimension.
///
/// Keeps every in-bounds coordinate and every offset arithmetic result well
/// inside `i32`.
pub const MAX_DIMENSION: usize = 1024;

/// A board coordinate or a relative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate by another position used as an offset.
    #[inline]
    pub const fn offset(self, by: Position) -> Self {
        Self {
            row: self.row + by.row,
            col: self.col + by.col,
        }
    }

    /// Component-wise negation (used for counter-clockwise kicks).
    #[inline]
    pub const fn negated(self) -> Self {
        Self {
            row: -self.row,
            col: -self.col,
        }
    }
}

/// The seven tetromino piece kinds
///
/// The kind only affects shape, kick table and colour; settled cells keep
/// their kind purely for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in declaration order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use kick_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse a single letter (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'i' => Some(PieceKind::I),
            'j' => Some(PieceKind::J),
            'l' => Some(PieceKind::L),
            'o' => Some(PieceKind::O),
            's' => Some(PieceKind::S),
            't' => Some(PieceKind::T),
            'z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Uppercase letter used by the side panel and debug dumps.
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }
}

/// A cell on the game board
///
/// Settled cells remember the kind that produced them (for colour lookup
/// only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "kind")]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceKind),
}

impl Cell {
    #[inline]
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Filled(kind) => Some(*kind),
        }
    }
}

/// Discrete commands the presentation layer can issue to the engine
///
/// Gravity is not a command: it is driven by `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Move piece down until it can't move any further
    HardDrop,
    /// Rotate piece clockwise, trying wall kicks
    RotateCw,
    /// Rotate piece counter-clockwise, trying wall kicks
    RotateCcw,
}

impl Command {
    /// Parse command from string (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use kick_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotateccw"), Some(Command::RotateCcw));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
        }
    }
}
