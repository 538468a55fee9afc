//! Pieces module - the fixed piece catalog and quarter-turn rotation
//!
//! Every piece is a square occupancy matrix (2x2, 3x3 or 4x4) tagged with a
//! single [`PieceKind`], so a shape can never mix colors. Rotation builds a new
//! matrix; catalog entries are never mutated.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, RotateDirection};

/// Largest matrix edge in the catalog (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of a single filled cell relative to the shape's top-left corner, as (dx, dy).
pub type MinoOffset = (i8, i8);

type Matrix = [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

/// Immutable piece geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    size: u8,
    grid: Matrix,
}

impl Shape {
    /// Spawn orientation of a catalog piece.
    pub fn spawn(kind: PieceKind) -> Self {
        let (size, rows) = spawn_rows(kind);
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (row, line) in rows.iter().take(size).enumerate() {
            for (col, byte) in line.bytes().take(size).enumerate() {
                grid[row][col] = byte == b'#';
            }
        }
        Self {
            kind,
            size: size as u8,
            grid,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Matrix edge length (also the width used for spawn centering).
    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn width(&self) -> usize {
        self.size()
    }

    /// Whether shape-local `(row, col)` is filled. Out of range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.grid[row][col]
    }

    /// Filled cells as (dx, dy) offsets, row-major.
    pub fn minos(&self) -> ArrayVec<MinoOffset, 16> {
        let mut out = ArrayVec::new();
        for row in 0..self.size() {
            for col in 0..self.size() {
                if self.grid[row][col] {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Quarter turn.
    ///
    /// Clockwise maps local `(row, col)` to `(col, n - 1 - row)`; counter-clockwise
    /// maps it to `(n - 1 - col, row)`.
    pub fn rotated(&self, direction: RotateDirection) -> Self {
        let n = self.size();
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for row in 0..n {
            for col in 0..n {
                let (r, c) = match direction {
                    RotateDirection::Clockwise => (col, n - 1 - row),
                    RotateDirection::CounterClockwise => (n - 1 - col, row),
                };
                grid[r][c] = self.grid[row][col];
            }
        }
        Self { grid, ..*self }
    }
}

/// Spawn rows per kind, `#` = filled.
fn spawn_rows(kind: PieceKind) -> (usize, [&'static str; MAX_SHAPE_SIZE]) {
    match kind {
        PieceKind::J => (3, [".#.", ".#.", "##.", ""]),
        PieceKind::L => (3, [".#.", ".#.", ".##", ""]),
        PieceKind::Z => (3, ["##.", ".##", "...", ""]),
        PieceKind::S => (3, [".##", "##.", "...", ""]),
        PieceKind::I => (4, ["..#.", "..#.", "..#.", "..#."]),
        PieceKind::O => (2, ["##", "##", "", ""]),
        PieceKind::T => (3, [".#.", "###", "...", ""]),
    }
}

/// The stateless piece catalog: one spawn shape per kind, in color-id order.
pub fn catalog() -> [Shape; 7] {
    PieceKind::ALL.map(Shape::spawn)
}
