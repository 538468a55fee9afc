use crate::board::Board;
use crate::cursor::PieceCursor;
use crate::pieces::Shape;
use crate::types::{Cell, GameStatus, PieceKind};

/// Falling piece as seen by a renderer (committed position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl From<&PieceCursor> for ActiveSnapshot {
    fn from(value: &PieceCursor) -> Self {
        Self {
            shape: *value.shape(),
            x: value.x(),
            y: value.y(),
        }
    }
}

/// Owned copy of everything a renderer needs. Editing it never reaches the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<Shape>,
    pub score: u32,
    pub level: f64,
    pub lines: u32,
    pub status: GameStatus,
    pub game_time: u64,
}

impl GameSnapshot {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            board: Board::new(cols, rows),
            active: None,
            next: None,
            score: 0,
            level: 0.0,
            lines: 0,
            status: GameStatus::Playing,
            game_time: 0,
        }
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next.map(|shape| shape.kind())
    }

    /// Board cell with the active piece drawn on top.
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        if let Some(active) = self.active {
            let row = y - active.y;
            let col = x - active.x;
            if row >= 0 && col >= 0 && active.shape.is_filled(row as usize, col as usize) {
                return Cell::Block(active.shape.kind());
            }
        }
        self.board.get(x, y).unwrap_or(Cell::Empty)
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let board = Board::default();
        Self::new(board.width(), board.height())
    }
}
