//! Movement validity, locking and line clearing.
//!
//! These are free functions over a [`Grid`] and a [`Piece`] so they can be
//! exercised without a running simulation.

use crate::grid::Grid;
use crate::piece::Piece;

/// Row/column offset tested against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub row: i32,
    pub col: i32,
}

impl Delta {
    pub const NONE: Delta = Delta::new(0, 0);
    pub const DOWN: Delta = Delta::new(1, 0);
    pub const LEFT: Delta = Delta::new(0, -1);
    pub const RIGHT: Delta = Delta::new(0, 1);

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// True iff every filled sub-cell, shifted by `delta`, is in bounds and empty.
///
/// `Delta::NONE` checks the piece where it stands (rotation candidates and
/// freshly promoted pieces).
pub fn is_valid_move(piece: &Piece, grid: &Grid, delta: Delta) -> bool {
    piece
        .cells()
        .all(|(row, col)| grid.is_free(row + delta.row, col + delta.col))
}

/// Write the piece's colour into the grid at each filled sub-cell.
///
/// Callers must have checked the placement with [`is_valid_move`] first.
pub fn lock(grid: &mut Grid, piece: &Piece) {
    debug_assert!(
        is_valid_move(piece, grid, Delta::NONE),
        "locking a piece that does not fit"
    );
    for (row, col) in piece.cells() {
        grid.set(row, col, Some(piece.color));
    }
}

/// Remove full rows; see [`Grid::clear_lines`].
pub fn clear_lines(grid: &mut Grid) -> usize {
    grid.clear_lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Catalog;
    use crate::types::BlockColor;

    fn bar_on(grid: &Grid) -> Piece {
        Piece::spawn(&Catalog::standard().entries()[0], grid.cols())
    }

    #[test]
    fn walls_and_floor_block_moves() {
        let grid = Grid::new(20, 10).unwrap();
        let mut bar = bar_on(&grid);

        assert!(is_valid_move(&bar, &grid, Delta::NONE));
        bar.col = 0;
        assert!(!is_valid_move(&bar, &grid, Delta::LEFT));
        bar.col = 6;
        assert!(!is_valid_move(&bar, &grid, Delta::RIGHT));
        bar.row = 19;
        assert!(!is_valid_move(&bar, &grid, Delta::DOWN));
    }

    #[test]
    fn occupied_cell_blocks_move() {
        let mut grid = Grid::new(20, 10).unwrap();
        let bar = bar_on(&grid);
        grid.set(1, 5, Some(BlockColor::Red));

        assert!(!is_valid_move(&bar, &grid, Delta::DOWN));
        assert!(is_valid_move(&bar, &grid, Delta::LEFT));
    }

    #[test]
    fn lock_writes_piece_colour() {
        let mut grid = Grid::new(4, 4).unwrap();
        let square = Piece::new(
            Catalog::standard().entries()[4].shape.clone(),
            BlockColor::Green,
            2,
            1,
        );
        lock(&mut grid, &square);

        assert_eq!(grid.occupied_count(), 4);
        for (row, col) in [(2, 1), (2, 2), (3, 1), (3, 2)] {
            assert_eq!(grid.get(row, col), Some(Some(BlockColor::Green)));
        }
    }
}
