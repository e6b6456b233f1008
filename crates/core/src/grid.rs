//! Grid module - the store of locked cells
//!
//! The grid is a `rows x cols` array where each cell is empty or holds the
//! colour of the block locked there. Dimensions are fixed at construction.
//! Storage is a flat row-major buffer (`row * cols + col`).
//! Coordinates: `(row, col)` with row 0 at the top and col 0 at the left.
//! Lookups take signed coordinates so callers can probe positions a piece
//! would occupy after a move without pre-checking for underflow.

use crate::error::ConfigError;
use crate::types::{BlockColor, Cell};

/// The locked-cell store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::ZeroDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Build a grid from explicit rows (top row first).
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(height, width)?;
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ConfigError::RaggedGrid { row: r });
            }
            let start = r * width;
            grid.cells[start..start + width].copy_from_slice(&row);
        }
        Ok(grid)
    }

    /// Copy the cells out as one `Vec` per row (top row first).
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.is_in_bounds(row, col) {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Get cell at `(row, col)`.
    ///
    /// Returns `None` if out of bounds, `Some(None)` for an empty cell.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`.
    ///
    /// Returns false (and writes nothing) if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// In bounds and filled.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows && self.row(row).iter().all(Option::is_some)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate `(row, col, color)` for every locked cell, top to bottom.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, usize, BlockColor)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.map(|color| (idx / cols, idx % cols, color)))
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Surviving rows keep their order and settle at the bottom; the rows freed
    /// at the top are empty. Full rows are detected on the pre-clear contents in
    /// a single bottom-up compaction pass, so several full rows (adjacent or
    /// not) are handled in one call.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.cols;
        let mut cleared = 0;
        let mut write_row = self.rows;

        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_row(cols: usize, color: BlockColor) -> Vec<Cell> {
        vec![Some(color); cols]
    }

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(20, 10).unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 9), Some(9));
        assert_eq!(grid.index(1, 0), Some(10));
        assert_eq!(grid.index(19, 9), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(0, 10), None);
        assert_eq!(grid.index(20, 0), None);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 10),
            Err(ConfigError::ZeroDimension { rows: 0, cols: 10 })
        );
        assert!(Grid::new(20, 0).is_err());
        assert!(Grid::from_rows(Vec::new()).is_err());
        assert_eq!(
            Grid::from_rows(vec![vec![None; 3], vec![None; 2]]),
            Err(ConfigError::RaggedGrid { row: 1 })
        );
    }

    #[test]
    fn from_rows_roundtrip() {
        let mut rows = vec![vec![None; 4]; 3];
        rows[1][2] = Some(BlockColor::Red);
        rows[2][0] = Some(BlockColor::Blue);

        let grid = Grid::from_rows(rows.clone()).unwrap();
        assert_eq!(grid.get(1, 2), Some(Some(BlockColor::Red)));
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn iter_occupied_reports_coordinates() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(2, 1, Some(BlockColor::Green));
        grid.set(0, 2, Some(BlockColor::Cyan));

        let cells: Vec<_> = grid.iter_occupied().collect();
        assert_eq!(
            cells,
            vec![(0, 2, BlockColor::Cyan), (2, 1, BlockColor::Green)]
        );
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn clear_lines_with_no_full_rows_is_a_noop() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(3, 0, Some(BlockColor::Red));
        let before = grid.clone();

        assert_eq!(grid.clear_lines(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn clear_lines_handles_non_adjacent_rows() {
        let x = Some(BlockColor::Red);
        let rows = vec![
            vec![x, None, None],
            filled_row(3, BlockColor::Blue),
            vec![None, x, None],
            filled_row(3, BlockColor::Blue),
            vec![None, None, x],
        ];
        let mut grid = Grid::from_rows(rows).unwrap();

        assert_eq!(grid.clear_lines(), 2);
        assert_eq!(
            grid.to_rows(),
            vec![
                vec![None, None, None],
                vec![None, None, None],
                vec![x, None, None],
                vec![None, x, None],
                vec![None, None, x],
            ]
        );
    }

    #[test]
    fn clear_lines_on_completely_full_grid() {
        let mut grid = Grid::from_rows(vec![filled_row(2, BlockColor::Cyan); 3]).unwrap();
        assert_eq!(grid.clear_lines(), 3);
        assert_eq!(grid.occupied_count(), 0);
    }
}
