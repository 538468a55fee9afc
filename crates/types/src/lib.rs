//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the game. All types
//! are pure data with no external dependencies, so they can be shared by the
//! simulation engine, the input mapping and the terminal view.
//!
//! # Board geometry
//!
//! The board is sized in pixels and divided into square cells:
//!
//! - **Width**: 260px, **Height**: 460px, **Cell size**: 20px
//! - That yields a 13 x 23 cell grid (`cols = width / cell`, `rows = height / cell`)
//!
//! # Timing
//!
//! The engine advances in discrete logical steps:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Minimum wall-clock time between two logical steps |
//! | `BASE_FALL_INTERVAL` | 10 | Steps per row of gravity at level 0 |
//! | `LOCK_DELAY_TICKS` | 2 | Blocked fall steps a piece rests before locking |
//!
//! # Examples
//!
//! ```
//! use blocks_types::{Cell, GameAction, PieceKind, ROW_POINTS};
//!
//! let kind = PieceKind::T;
//! assert_eq!(kind.color_id(), 7);
//! assert_eq!(kind.as_str(), "t");
//!
//! let cell = Cell::Block(kind);
//! assert!(!cell.is_empty());
//! assert_eq!(cell.kind(), Some(PieceKind::T));
//!
//! assert_ne!(GameAction::RotateCw, GameAction::RotateCcw);
//! assert_eq!(ROW_POINTS[4], 1200);
//! ```

/// Default board width in pixels.
pub const DEFAULT_BOARD_WIDTH: u32 = 260;

/// Default board height in pixels.
pub const DEFAULT_BOARD_HEIGHT: u32 = 460;

/// Default cell edge length in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Fixed cadence of logical steps in milliseconds (~60 steps per second).
pub const FRAME_MS: u64 = 16;

/// Steps per row of gravity at level 0. Each full level removes one step.
pub const BASE_FALL_INTERVAL: u32 = 10;

/// Blocked fall steps a grounded piece rests before it is merged.
pub const LOCK_DELAY_TICKS: u32 = 2;

/// Points for clearing 0, 1, 2, 3 or 4 rows at once (before the level multiplier).
pub const ROW_POINTS: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points per row for a manual soft drop.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row descended by a hard drop.
pub const HARD_DROP_POINTS: u32 = 2;

/// Cleared rows needed to gain one full level.
pub const LINES_PER_LEVEL: u32 = 10;

/// The seven piece kinds
///
/// Declaration order matches the color ids 1-7:
/// - **J**: 1
/// - **L**: 2
/// - **Z**: 3
/// - **S**: 4
/// - **I**: 5, the only 4x4 piece
/// - **O**: 6, the only 2x2 piece
/// - **T**: 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    J,
    L,
    Z,
    S,
    I,
    O,
    T,
}

impl PieceKind {
    /// Every piece kind in color-id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::J,
        PieceKind::L,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
    ];

    /// Color identifier (1-7) used by renderers to pick a palette entry.
    pub fn color_id(&self) -> u8 {
        match self {
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::Z => 3,
            PieceKind::S => 4,
            PieceKind::I => 5,
            PieceKind::O => 6,
            PieceKind::T => 7,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
        }
    }
}

/// A single board or shape cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Block(PieceKind),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Block(kind) => Some(*kind),
        }
    }
}

/// Direction of a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

/// Engine lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    HardDrop,
    RotateCw,
    RotateCcw,
    TogglePause,
    Reset,
}
