//! Board tests through the public API

use blocks::core::{Board, Shape};
use blocks::types::{Cell, PieceKind, RotateDirection};

fn fill_row(board: &mut Board, y: i32, kind: PieceKind) {
    for x in 0..board.width() as i32 {
        board.set(x, y, Cell::Block(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(13, 23);
    assert_eq!(board.width(), 13);
    assert_eq!(board.height(), 23);

    for y in 0..23 {
        for x in 0..13 {
            assert_eq!(board.get(x, y), Some(Cell::Empty), "({x}, {y})");
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(13, 23);
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(13, 0), None);
    assert_eq!(board.get(0, 23), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(13, 23);
    assert!(board.set(5, 10, Cell::Block(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Cell::Block(PieceKind::T)));

    assert!(board.set(5, 10, Cell::Empty));
    assert_eq!(board.get(5, 10), Some(Cell::Empty));

    assert!(!board.set(-1, 0, Cell::Block(PieceKind::T)));
    assert!(!board.set(0, 23, Cell::Block(PieceKind::T)));
}

#[test]
fn test_valid_position_walls_and_floor() {
    let board = Board::new(13, 23);
    let o = Shape::spawn(PieceKind::O);

    assert!(board.is_valid_position(&o, 0, 0));
    assert!(board.is_valid_position(&o, 11, 21));
    assert!(!board.is_valid_position(&o, -1, 0));
    assert!(!board.is_valid_position(&o, 12, 0));
    assert!(!board.is_valid_position(&o, 0, 22));
}

#[test]
fn test_valid_position_above_the_top() {
    let board = Board::new(13, 23);
    let i = Shape::spawn(PieceKind::I);
    assert!(board.is_valid_position(&i, 4, -3));
    assert!(board.is_valid_position(&i, 4, -10));
}

#[test]
fn test_empty_shape_cells_do_not_collide() {
    let mut board = Board::new(13, 23);
    // Vertical I only fills local column 2.
    board.set(4, 5, Cell::Block(PieceKind::Z));
    board.set(5, 5, Cell::Block(PieceKind::Z));
    let i = Shape::spawn(PieceKind::I);
    assert!(board.is_valid_position(&i, 4, 2));
    board.set(6, 5, Cell::Block(PieceKind::Z));
    assert!(!board.is_valid_position(&i, 4, 2));
}

#[test]
fn test_merge_writes_piece_cells() {
    let mut board = Board::new(13, 23);
    let t = Shape::spawn(PieceKind::T).rotated(RotateDirection::Clockwise);
    board.merge(&t, 3, 20);

    assert_eq!(board.filled_count(), 4);
    for (x, y) in [(4, 20), (4, 21), (5, 21), (4, 22)] {
        assert_eq!(board.get(x, y), Some(Cell::Block(PieceKind::T)));
    }
}

#[test]
fn test_merge_drops_cells_above_the_top() {
    let mut board = Board::new(13, 23);
    let i = Shape::spawn(PieceKind::I);
    board.merge(&i, 0, -2);
    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.get(2, 0), Some(Cell::Block(PieceKind::I)));
    assert_eq!(board.get(2, 1), Some(Cell::Block(PieceKind::I)));
}

#[test]
fn test_clear_single_row() {
    let mut board = Board::new(13, 23);
    fill_row(&mut board, 22, PieceKind::L);
    board.set(0, 21, Cell::Block(PieceKind::S));

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(0, 22), Some(Cell::Block(PieceKind::S)));
    assert!(board.row(0).unwrap().iter().all(Cell::is_empty));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_non_adjacent_rows_keeps_order() {
    let mut board = Board::new(5, 8);
    fill_row(&mut board, 7, PieceKind::I);
    board.set(1, 6, Cell::Block(PieceKind::J));
    fill_row(&mut board, 5, PieceKind::I);
    board.set(2, 4, Cell::Block(PieceKind::L));

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.get(1, 7), Some(Cell::Block(PieceKind::J)));
    assert_eq!(board.get(2, 6), Some(Cell::Block(PieceKind::L)));
    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.height(), 8);
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut board = Board::new(13, 23);
    board.set(3, 22, Cell::Block(PieceKind::O));
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_cells_are_row_major() {
    let mut board = Board::new(4, 4);
    board.set(1, 0, Cell::Block(PieceKind::J));
    board.set(3, 3, Cell::Block(PieceKind::T));
    assert_eq!(board.cells()[1], Cell::Block(PieceKind::J));
    assert_eq!(board.cells()[15], Cell::Block(PieceKind::T));
    assert_eq!(board.row(3).unwrap()[3], Cell::Block(PieceKind::T));
}
