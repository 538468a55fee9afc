//! Board module - manages the game grid
//!
//! The board is a `cols x rows` grid where each cell is either empty or holds the
//! kind of a locked piece. Cells live in a flat row-major vector sized once at
//! construction; dimensions never change afterwards.
//!
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Collision checks have no upper wall: shape cells above row 0 are allowed so
//! pieces may sit partly off the top of the grid.

use crate::pieces::Shape;
use crate::types::Cell;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u16,
    rows: u16,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Empty; cols as usize * rows as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32 {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    /// Number of columns
    pub fn width(&self) -> u16 {
        self.cols
    }

    /// Number of rows
    pub fn height(&self) -> u16 {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `shape` fits with its top-left corner at (x, y).
    ///
    /// A filled shape cell rejects the position if it lands left of column 0,
    /// right of the last column, below the last row, or on an occupied cell.
    /// Cells above row 0 are never rejected.
    pub fn is_valid_position(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.minos().iter().all(|&(dx, dy)| {
            let px = x + dx as i32;
            let py = y + dy as i32;
            if px < 0 || px >= self.cols as i32 || py >= self.rows as i32 {
                return false;
            }
            py < 0 || self.get(px, py) == Some(Cell::Empty)
        })
    }

    /// Write every filled cell of `shape` into the board at (x, y).
    ///
    /// The position must have been validated with [`Board::is_valid_position`].
    /// Shape cells above row 0 have nowhere to go and are dropped.
    pub fn merge(&mut self, shape: &Shape, x: i32, y: i32) {
        debug_assert!(
            self.is_valid_position(shape, x, y),
            "merge at unvalidated position ({x}, {y})"
        );
        let cell = Cell::Block(shape.kind());
        for (dx, dy) in shape.minos() {
            self.set(x + dx as i32, y + dy as i32, cell);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// One row of cells, or None past the bottom.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows as usize {
            return None;
        }
        let start = y * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Remove every full row, shift the rest down and fill the top with empty rows.
    ///
    /// Uses a two-pointer compaction from the bottom so unaffected rows keep their
    /// relative order. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols as usize;
        let mut write_y = self.rows as usize;
        let mut cleared = 0;

        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(Cell::Empty);
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            (crate::types::DEFAULT_BOARD_WIDTH / crate::types::DEFAULT_CELL_SIZE) as u16,
            (crate::types::DEFAULT_BOARD_HEIGHT / crate::types::DEFAULT_CELL_SIZE) as u16,
        )
    }
}
