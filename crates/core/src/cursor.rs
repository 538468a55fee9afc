//! The falling piece and the queued next piece.
//!
//! Horizontal input is staged: `move_left`/`move_right` update `pending_x`, and
//! the engine copies it into `x` at the start of every logical step (and before
//! a hard drop). Vertical movement and rotation apply immediately.

use crate::pieces::Shape;
use crate::rng::Randomizer;
use crate::types::PieceKind;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceCursor {
    shape: Shape,
    x: i32,
    y: i32,
    pending_x: i32,
}

impl PieceCursor {
    /// Place `shape` centered horizontally on a board `cols` wide, at row `spawn_y`.
    pub fn spawn(shape: Shape, cols: u16, spawn_y: i32) -> Self {
        let x = (cols as i32 - shape.width() as i32).div_euclid(2);
        Self {
            shape,
            x,
            y: spawn_y,
            pending_x: x,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    /// Committed column of the shape's left edge.
    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Column staged by horizontal input, applied at the next commit.
    pub fn pending_x(&self) -> i32 {
        self.pending_x
    }

    pub(crate) fn set_pending_x(&mut self, x: i32) {
        self.pending_x = x;
    }

    pub(crate) fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    /// Apply the staged column.
    pub(crate) fn commit_x(&mut self) {
        self.x = self.pending_x;
    }
}

/// Single-slot queue holding the piece that spawns next.
#[derive(Debug, Clone, Default)]
pub struct NextPiece {
    slot: Option<PieceKind>,
}

impl NextPiece {
    pub fn new() -> Self {
        Self { slot: None }
    }

    pub fn peek(&self) -> Option<PieceKind> {
        self.slot
    }

    /// Queued kind, drawing one first if the slot is empty.
    pub fn ensure(&mut self, randomizer: &mut Randomizer) -> PieceKind {
        *self.slot.get_or_insert_with(|| randomizer.draw())
    }

    /// Hand out the queued kind and leave the slot empty.
    pub fn take(&mut self, randomizer: &mut Randomizer) -> PieceKind {
        let kind = self.ensure(randomizer);
        self.slot = None;
        kind
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_centered() {
        let o = PieceCursor::spawn(Shape::spawn(PieceKind::O), 13, 0);
        assert_eq!((o.x(), o.y(), o.pending_x()), (5, 0, 5));

        let i = PieceCursor::spawn(Shape::spawn(PieceKind::I), 13, 0);
        assert_eq!(i.x(), 4);

        let t = PieceCursor::spawn(Shape::spawn(PieceKind::T), 10, 2);
        assert_eq!((t.x(), t.y()), (3, 2));
    }

    #[test]
    fn pending_x_is_committed_explicitly() {
        let mut cursor = PieceCursor::spawn(Shape::spawn(PieceKind::S), 13, 0);
        cursor.set_pending_x(7);
        assert_eq!(cursor.x(), 5);
        cursor.commit_x();
        assert_eq!(cursor.x(), 7);
    }

    #[test]
    fn next_piece_is_drawn_once_and_held() {
        let mut randomizer = Randomizer::new(3);
        let mut next = NextPiece::new();
        assert_eq!(next.peek(), None);

        let first = next.ensure(&mut randomizer);
        assert_eq!(next.ensure(&mut randomizer), first);
        assert_eq!(next.peek(), Some(first));
    }

    #[test]
    fn take_empties_the_slot() {
        let mut randomizer = Randomizer::new(3);
        let mut reference = Randomizer::new(3);
        let mut next = NextPiece::new();

        assert_eq!(next.take(&mut randomizer), reference.draw());
        assert_eq!(next.peek(), None);
        assert_eq!(next.ensure(&mut randomizer), reference.draw());
    }
}
