//! Construction errors.
//!
//! Nothing that happens inside a tick can fail; the only errors in the core are
//! raised while building a board, a catalog or a simulation from bad inputs.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board with zero rows or zero columns.
    ZeroDimension { rows: usize, cols: usize },
    /// Spawner built for a board with no columns.
    ZeroColumns,
    /// Grid built from rows of unequal length.
    RaggedGrid { row: usize },
    /// Block size of zero pixels, so the window cannot be carved into cells.
    ZeroBlockSize,
    ZeroTickRate,
    EmptyCatalog,
    /// Catalog entry with no rows, no columns, or no filled sub-cell.
    EmptyShape { index: usize },
    /// Catalog entry whose rows differ in length.
    RaggedShape { index: usize },
}

impl std::error::Error for ConfigError {}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension { rows, cols } => write!(
                f,
                "board must have at least one row and one column (got {} x {})",
                rows, cols
            ),
            Self::ZeroColumns => write!(f, "pieces cannot spawn on a board with no columns"),
            Self::RaggedGrid { row } => {
                write!(f, "grid row {} differs in length from row 0", row)
            }
            Self::ZeroBlockSize => write!(f, "block size must be at least one pixel"),
            Self::ZeroTickRate => write!(f, "tick rate must be at least one tick per second"),
            Self::EmptyCatalog => write!(f, "shape catalog is empty"),
            Self::EmptyShape { index } => {
                write!(f, "catalog shape {} has no filled sub-cells", index)
            }
            Self::RaggedShape { index } => {
                write!(f, "catalog shape {} has rows of unequal length", index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = ConfigError::ZeroDimension { rows: 0, cols: 10 };
        assert!(err.to_string().contains("0 x 10"));

        let err = ConfigError::RaggedShape { index: 3 };
        assert!(err.to_string().contains('3'));

        let err = ConfigError::ZeroColumns;
        assert!(err.to_string().contains("no columns"));
    }
}
