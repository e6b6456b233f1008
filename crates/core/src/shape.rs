//! Shape geometry and the piece catalog
//!
//! A [`Shape`] is an immutable boolean matrix: `true` marks a filled sub-cell.
//! Orientation is not tracked as an enum; rotating produces a new matrix, so
//! any polyomino can be represented without per-rotation tables.
//!
//! The [`Catalog`] pairs each shape with a fixed colour. The standard catalog
//! holds seven tetrominoes:
//!
//! | # | Matrix | Colour |
//! |---|--------|--------|
//! | 1 | `1111` | cyan |
//! | 2 | `111` / `100` | yellow |
//! | 3 | `111` / `001` | orange |
//! | 4 | `111` / `010` | blue |
//! | 5 | `11` / `11` | green |
//! | 6 | `110` / `011` | purple |
//! | 7 | `011` / `110` | red |

use crate::error::ConfigError;
use crate::types::BlockColor;

/// Why a matrix could not become a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    Empty,
    Ragged,
}

impl ShapeError {
    /// Attach the catalog position of the offending entry.
    pub fn at(self, index: usize) -> ConfigError {
        match self {
            ShapeError::Empty => ConfigError::EmptyShape { index },
            ShapeError::Ragged => ConfigError::RaggedShape { index },
        }
    }
}

/// An immutable 2D occupancy matrix, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    height: usize,
    width: usize,
    filled: Vec<bool>,
}

impl Shape {
    /// Build a shape from rows of `0`/`1` values (any non-zero counts as filled).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_core::Shape;
    ///
    /// let t = Shape::from_bits(&[[1u8, 1, 1], [0, 1, 0]]).unwrap();
    /// assert_eq!((t.height(), t.width()), (2, 3));
    /// assert!(t.is_filled(1, 1));
    /// assert!(!t.is_filled(1, 0));
    /// ```
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }

        let mut filled = Vec::with_capacity(height * width);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(ShapeError::Ragged);
            }
            filled.extend(row.iter().map(|&bit| bit != 0));
        }

        if !filled.iter().any(|&f| f) {
            return Err(ShapeError::Empty);
        }

        Ok(Self {
            height,
            width,
            filled,
        })
    }

    /// Build from trusted static rows without validation.
    fn from_static(rows: &[&[u8]]) -> Self {
        let width = rows[0].len();
        debug_assert!(rows.iter().all(|row| row.len() == width));
        Self {
            height: rows.len(),
            width,
            filled: rows.iter().flat_map(|row| row.iter().map(|&bit| bit != 0)).collect(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Out-of-range positions read as empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.filled[row * self.width + col]
    }

    /// Iterate `(row, col)` offsets of filled sub-cells, row by row.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.filled
            .iter()
            .enumerate()
            .filter(|(_, &f)| f)
            .map(move |(idx, _)| (idx / width, idx % width))
    }

    pub fn filled_count(&self) -> usize {
        self.filled.iter().filter(|&&f| f).count()
    }

    /// Rotate 90° clockwise.
    ///
    /// `new[r][c] = old[height - 1 - c][r]`; the result is `width x height`.
    pub fn rotated_cw(&self) -> Self {
        let (new_h, new_w) = (self.width, self.height);
        let mut filled = Vec::with_capacity(self.filled.len());
        for r in 0..new_h {
            for c in 0..new_w {
                filled.push(self.filled[(self.height - 1 - c) * self.width + r]);
            }
        }
        Self {
            height: new_h,
            width: new_w,
            filled,
        }
    }

    /// Rows as `0`/`1` vectors, handy for assertions and debug output.
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.filled
            .chunks(self.width)
            .map(|row| row.iter().map(|&f| u8::from(f)).collect())
            .collect()
    }
}

/// A catalog shape and its fixed colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub shape: Shape,
    pub color: BlockColor,
}

/// A non-empty list of spawnable shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

const STANDARD_SHAPES: [(&[&[u8]], BlockColor); 7] = [
    (&[&[1, 1, 1, 1]], BlockColor::Cyan),
    (&[&[1, 1, 1], &[1, 0, 0]], BlockColor::Yellow),
    (&[&[1, 1, 1], &[0, 0, 1]], BlockColor::Orange),
    (&[&[1, 1, 1], &[0, 1, 0]], BlockColor::Blue),
    (&[&[1, 1], &[1, 1]], BlockColor::Green),
    (&[&[1, 1, 0], &[0, 1, 1]], BlockColor::Purple),
    (&[&[0, 1, 1], &[1, 1, 0]], BlockColor::Red),
];

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { entries })
    }

    /// Build a catalog from raw bit matrices.
    ///
    /// Errors carry the 0-based position of the first bad entry.
    pub fn from_bits(defs: &[(&[&[u8]], BlockColor)]) -> Result<Self, ConfigError> {
        let entries = defs
            .iter()
            .enumerate()
            .map(|(index, &(rows, color))| {
                Shape::from_bits(rows)
                    .map(|shape| CatalogEntry { shape, color })
                    .map_err(|err| err.at(index))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// The seven built-in tetrominoes.
    pub fn standard() -> Self {
        let entries = STANDARD_SHAPES
            .iter()
            .map(|&(rows, color)| CatalogEntry {
                shape: Shape::from_static(rows),
                color,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_ragged_matrices() {
        let none: [[u8; 0]; 0] = [];
        assert_eq!(Shape::from_bits(&none), Err(ShapeError::Empty));
        assert_eq!(Shape::from_bits(&[[0u8, 0], [0, 0]]), Err(ShapeError::Empty));

        let ragged: [&[u8]; 2] = [&[1, 1, 1], &[1]];
        assert_eq!(Shape::from_bits(&ragged), Err(ShapeError::Ragged));
    }

    #[test]
    fn rotation_transposes_dimensions() {
        let l = Shape::from_bits(&[[1u8, 1, 1], [1, 0, 0]]).unwrap();
        let r = l.rotated_cw();
        assert_eq!((r.height(), r.width()), (3, 2));
        assert_eq!(r.to_bits(), vec![vec![1, 1], vec![0, 1], vec![0, 1]]);
    }

    #[test]
    fn four_rotations_return_to_start() {
        for entry in Catalog::standard().entries() {
            let mut shape = entry.shape.clone();
            for _ in 0..4 {
                shape = shape.rotated_cw();
            }
            assert_eq!(shape, entry.shape);
        }
    }

    #[test]
    fn standard_catalog_is_seven_tetrominoes() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 7);
        for entry in catalog.entries() {
            assert_eq!(entry.shape.filled_count(), 4);
        }
        let colors: Vec<_> = catalog.entries().iter().map(|e| e.color).collect();
        assert_eq!(colors, BlockColor::ALL.to_vec());
    }

    #[test]
    fn from_bits_reports_entry_index() {
        let defs: [(&[&[u8]], BlockColor); 2] = [
            (&[&[1]], BlockColor::Red),
            (&[&[0]], BlockColor::Blue),
        ];
        assert_eq!(
            Catalog::from_bits(&defs),
            Err(ConfigError::EmptyShape { index: 1 })
        );
        assert_eq!(Catalog::from_bits(&[]), Err(ConfigError::EmptyCatalog));
    }
}
