//! Read-only view of a simulation for renderers.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{Cell, GameStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub active: Option<Piece>,
    pub next: Option<Piece>,
    pub status: GameStatus,
    pub lines_cleared: u64,
    pub pieces_locked: u64,
    pub ticks: u64,
}

impl GameSnapshot {
    /// A snapshot of `grid` with no pieces and zeroed counters.
    pub fn empty(grid: Grid) -> Self {
        Self {
            grid,
            active: None,
            next: None,
            status: GameStatus::Running,
            lines_cleared: 0,
            pieces_locked: 0,
            ticks: 0,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid.get(row as i32, col as i32).flatten()
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// The active piece, unless the game has ended.
    ///
    /// After a top-out the promoted piece overlaps the stack and is never
    /// placed, so renderers should not draw it.
    pub fn visible_active(&self) -> Option<&Piece> {
        if self.is_game_over() {
            return None;
        }
        self.active.as_ref()
    }
}
