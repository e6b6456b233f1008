//! The falling piece: a shape, its colour, and where it sits on the grid.

use crate::shape::{CatalogEntry, Shape};
use crate::types::BlockColor;

/// Active or buffered piece.
///
/// `(row, col)` is the grid position of the shape matrix's top-left corner.
/// Signed so a candidate position left of column 0 can still be expressed
/// and rejected by the validity check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: BlockColor,
    pub row: i32,
    pub col: i32,
}

impl Piece {
    pub fn new(shape: Shape, color: BlockColor, row: i32, col: i32) -> Self {
        Self {
            shape,
            color,
            row,
            col,
        }
    }

    /// Place a catalog entry at the spawn position for a board `board_cols` wide.
    ///
    /// Row 0, column `board_cols / 2 - width / 2` (each halved with truncation).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_core::{Catalog, Piece};
    ///
    /// let catalog = Catalog::standard();
    /// let bar = Piece::spawn(&catalog.entries()[0], 10);
    /// assert_eq!((bar.row, bar.col), (0, 3));
    /// ```
    pub fn spawn(entry: &CatalogEntry, board_cols: usize) -> Self {
        Self {
            shape: entry.shape.clone(),
            color: entry.color,
            row: 0,
            col: spawn_col(board_cols, entry.shape.width()),
        }
    }

    /// Grid coordinates of every filled sub-cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(r, c)| (self.row + r as i32, self.col + c as i32))
    }

    /// A copy moved by `(d_row, d_col)`.
    pub fn translated(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..self.clone()
        }
    }

    /// A copy rotated 90° clockwise about the unchanged anchor.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..self.clone()
        }
    }
}

fn spawn_col(board_cols: usize, shape_width: usize) -> i32 {
    (board_cols / 2) as i32 - (shape_width / 2) as i32
}
