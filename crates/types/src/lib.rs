//! Core types module - shared data structures and constants
//!
//! This module defines the plain data passed between the simulation, the input
//! layer and the terminal view. Nothing here has dependencies, so the types are
//! usable from any context (core logic, rendering, tests).
//!
//! # Board Dimensions
//!
//! The board geometry is derived the same way a pixel window would be carved
//! into blocks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WINDOW_WIDTH_PX` | 300 | Nominal playfield width |
//! | `WINDOW_HEIGHT_PX` | 600 | Nominal playfield height |
//! | `BLOCK_SIZE_PX` | 30 | Nominal block edge |
//! | `BOARD_COLS` | 10 | `WINDOW_WIDTH_PX / BLOCK_SIZE_PX` |
//! | `BOARD_ROWS` | 20 | `WINDOW_HEIGHT_PX / BLOCK_SIZE_PX` |
//!
//! # Timing
//!
//! The simulation advances one gravity step per tick. The shell drives ticks at
//! `TICKS_PER_SECOND` (5), i.e. every 200ms.
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{BlockColor, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(BlockColor::Cyan.as_str(), "cyan");
//!
//! assert_eq!(BOARD_COLS, 10);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

/// Nominal playfield width in pixels
pub const WINDOW_WIDTH_PX: u32 = 300;

/// Nominal playfield height in pixels
pub const WINDOW_HEIGHT_PX: u32 = 600;

/// Nominal block edge in pixels
pub const BLOCK_SIZE_PX: u32 = 30;

/// Board width in cells (10 columns)
pub const BOARD_COLS: usize = (WINDOW_WIDTH_PX / BLOCK_SIZE_PX) as usize;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: usize = (WINDOW_HEIGHT_PX / BLOCK_SIZE_PX) as usize;

/// Gravity ticks per second
pub const TICKS_PER_SECOND: u32 = 5;

/// Maximum number of intents buffered for a single tick
///
/// A 200ms tick sees at most a handful of auto-repeat events per held key, so
/// this is only reached by deliberate key mashing.
pub const MAX_ACTIONS_PER_TICK: usize = 32;

/// Colour tag carried by a piece and by every cell it locks into
///
/// The tag is semantic: the renderer decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Cyan,
    Yellow,
    Orange,
    Blue,
    Green,
    Purple,
    Red,
}

impl BlockColor {
    /// All colours, in catalog order
    pub const ALL: [BlockColor; 7] = [
        BlockColor::Cyan,
        BlockColor::Yellow,
        BlockColor::Orange,
        BlockColor::Blue,
        BlockColor::Green,
        BlockColor::Purple,
        BlockColor::Red,
    ];

    /// Lowercase name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Cyan => "cyan",
            BlockColor::Yellow => "yellow",
            BlockColor::Orange => "orange",
            BlockColor::Blue => "blue",
            BlockColor::Green => "green",
            BlockColor::Purple => "purple",
            BlockColor::Red => "red",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(BlockColor)`: Locked block of that colour
pub type Cell = Option<BlockColor>;

/// Player intents delivered to the simulation once per tick
///
/// Intents whose resulting move is illegal are ignored by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down
    SoftDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Request the game loop to stop after the current tick
    Quit,
}

/// Lifecycle of a simulation
///
/// `GameOver` is terminal; there is no transition back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

impl GameStatus {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameStatus::GameOver)
    }
}

/// Event emitted after a piece locks into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Whether the piece promoted after this lock could not be placed.
    pub topped_out: bool,
}
